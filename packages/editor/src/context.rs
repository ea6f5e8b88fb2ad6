use fairway_model::{Lang, Picture};
use fairway_validation::Translate;

use crate::outcome::IgnoreReason;

/// Per-call addressing and collaborators for a reduce call
///
/// `lang` selects the language of a localized write; `target` and
/// `outer_target` address collection elements. All three are optional
/// at the call boundary; actions that need one treat its absence as a
/// defensive no-op.
pub struct EditContext<'a> {
    pub lang: Option<Lang>,
    pub target: Option<usize>,
    pub outer_target: Option<usize>,
    /// Primary ids already in use, consulted by the primary-id rule only
    pub reserved_ids: &'a [String],
    pub translator: &'a dyn Translate,
    pub media_sorter: &'a dyn MediaSorter,
}

impl<'a> EditContext<'a> {
    pub fn new(translator: &'a dyn Translate, media_sorter: &'a dyn MediaSorter) -> Self {
        Self {
            lang: None,
            target: None,
            outer_target: None,
            reserved_ids: &[],
            translator,
            media_sorter,
        }
    }

    pub fn lang(mut self, lang: Lang) -> Self {
        self.lang = Some(lang);
        self
    }

    pub fn target(mut self, target: usize) -> Self {
        self.target = Some(target);
        self
    }

    pub fn outer_target(mut self, outer_target: usize) -> Self {
        self.outer_target = Some(outer_target);
        self
    }

    pub fn reserved_ids(mut self, reserved_ids: &'a [String]) -> Self {
        self.reserved_ids = reserved_ids;
        self
    }

    pub(crate) fn require_lang(&self) -> Result<Lang, IgnoreReason> {
        self.lang.ok_or(IgnoreReason::MissingLang)
    }

    pub(crate) fn require_target(&self) -> Result<usize, IgnoreReason> {
        self.target.ok_or(IgnoreReason::MissingTarget)
    }

    pub(crate) fn require_outer_target(&self) -> Result<usize, IgnoreReason> {
        self.outer_target.ok_or(IgnoreReason::MissingOuterTarget)
    }
}

impl std::fmt::Debug for EditContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditContext")
            .field("lang", &self.lang)
            .field("target", &self.target)
            .field("outer_target", &self.outer_target)
            .field("reserved_ids", &self.reserved_ids.len())
            .finish()
    }
}

/// Deterministic presentation order for the media attachment list
pub trait MediaSorter {
    fn sort(&self, pictures: Vec<Picture>) -> Vec<Picture>;
}

/// Standard ordering: group id, then sequence number within the group
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupSequenceSorter;

impl MediaSorter for GroupSequenceSorter {
    fn sort(&self, mut pictures: Vec<Picture>) -> Vec<Picture> {
        pictures.sort_by_key(|picture| (picture.group_id, picture.sequence_number));
        pictures
    }
}

use thiserror::Error;

/// Result of one reduce call
///
/// `state` is always a complete draft: the updated document when the
/// edit applied, a value equal to the input when it was ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct EditResult<T> {
    pub state: T,
    pub outcome: EditOutcome,
}

/// What the dispatcher did with the action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The edit was applied to the draft
    Applied,
    /// The call was malformed and absorbed as a no-op
    Ignored(IgnoreReason),
}

impl EditOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, EditOutcome::Applied)
    }
}

/// Why a malformed call was absorbed
///
/// These are structural misuses of the call shape, never user-visible
/// validation failures; the dispatcher reports them instead of
/// panicking because it runs inside UI event handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IgnoreReason {
    #[error("language tag required for localized field")]
    MissingLang,
    #[error("target index required for element operation")]
    MissingTarget,
    #[error("outer target index required for nested element operation")]
    MissingOuterTarget,
    #[error("target index out of bounds")]
    TargetOutOfBounds,
    #[error("value shape does not match field")]
    ValueShape,
}

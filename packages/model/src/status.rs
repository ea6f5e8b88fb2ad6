use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Publication status of a draft document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Draft,
    Public,
    Removed,
    Archived,
}

impl FromStr for Status {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "DRAFT" => Ok(Status::Draft),
            "PUBLIC" => Ok(Status::Public),
            "REMOVED" => Ok(Status::Removed),
            "ARCHIVED" => Ok(Status::Archived),
            _ => Err(()),
        }
    }
}

use crate::record::{RawRow, parse_int_prefix};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What happened at a timeline event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    ConstructionStart,
    ConstructionEnd,
    Destruction,
    #[default]
    Other,
}

impl EventKind {
    /// Map an `event_type` label from the event feed. Unknown labels are `Other`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "cons_start" => Self::ConstructionStart,
            "cons_end" => Self::ConstructionEnd,
            "destruction" => Self::Destruction,
            _ => Self::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ConstructionStart => "cons_start",
            Self::ConstructionEnd => "cons_end",
            Self::Destruction => "destruction",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A dated marker on the playback timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub year: i32,
    pub kind: EventKind,
}

impl TimelineEvent {
    pub fn new(year: i32, kind: EventKind) -> Self {
        Self { year, kind }
    }

    /// Parse an event-feed row (`year`, `event_type`). Rows without a usable
    /// year yield `None`.
    pub fn from_row(row: &RawRow) -> Option<Self> {
        let year = row.field("year").and_then(parse_int_prefix)?;
        let kind = row
            .field("event_type")
            .map(EventKind::from_label)
            .unwrap_or_default();
        Some(Self { year, kind })
    }
}

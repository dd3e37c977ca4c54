//! Waypoint selection mode.

use std::fmt;

/// Which waypoint slot the next map click fills.
///
/// Session-scoped; changes only on explicit user toggling.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum SelectionMode {
    #[default]
    Source,
    Destination,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::Source => f.write_str("source"),
            SelectionMode::Destination => f.write_str("destination"),
        }
    }
}

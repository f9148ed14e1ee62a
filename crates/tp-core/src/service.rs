//! Travel modes and service labels.

use std::fmt;

/// The travel mode of a graph edge.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    Bus,
    Train,
    Walk,
}

impl Mode {
    /// Human-readable label, as it appears in itinerary text.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Bus => "Bus",
            Mode::Train => "Train",
            Mode::Walk => "Walk",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one directed scheduled service, or walking.
///
/// Two labels are equal iff all three fields match.  Label equality — not
/// node identity — is what decides whether a transfer happened between two
/// consecutive legs of a path.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceLabel {
    /// Bus service number or train line name; empty for walking.
    pub service: String,
    /// Direction of travel on the service; 0 for walking.
    pub direction: u8,
    pub mode: Mode,
}

impl ServiceLabel {
    pub fn new(service: impl Into<String>, direction: u8, mode: Mode) -> Self {
        Self { service: service.into(), direction, mode }
    }

    /// The label shared by every walking edge.
    pub fn walk() -> Self {
        Self { service: String::new(), direction: 0, mode: Mode::Walk }
    }

    #[inline]
    pub fn is_walk(&self) -> bool {
        self.mode == Mode::Walk
    }
}

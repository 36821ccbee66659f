use super::{ClockMode, UtcOffset};

/// Clock configuration the device feeds into its NTP adjustment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimeSettings {
    pub mode: ClockMode,
    pub utc_offset: UtcOffset,
}

impl TimeSettings {
    pub fn new(mode: ClockMode, utc_offset: UtcOffset) -> Self {
        Self { mode, utc_offset }
    }

    /// Offset from UTC in minutes, with one hour added while on
    /// summer time.
    pub fn effective_offset_minutes(&self) -> i16 {
        match self.mode {
            ClockMode::Standard => self.utc_offset.total_minutes(),
            ClockMode::Summer => self.utc_offset.total_minutes() + 60,
        }
    }
}

use std::fmt;

/// Whether the device clock runs on standard or summer (DST) time.
///
/// The time form submits this as `sumTime=STD` or `sumTime=SUM`, and the
/// rendered page marks the active radio button with a `checked` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClockMode {
    #[default]
    Standard,
    Summer,
}

#[derive(Debug, thiserror::Error)]
pub enum ClockModeError {
    #[error("Expected 'STD' or 'SUM', got: {0}")]
    Unknown(String),
}

impl ClockMode {
    pub fn parse(value: &str) -> Result<Self, ClockModeError> {
        match value {
            "STD" => Ok(Self::Standard),
            "SUM" => Ok(Self::Summer),
            other => Err(ClockModeError::Unknown(other.to_string())),
        }
    }

    pub fn form_value(&self) -> &'static str {
        match self {
            Self::Standard => "STD",
            Self::Summer => "SUM",
        }
    }

    /// `checked` markers for the Standard and Summer radio buttons,
    /// in that order.
    pub fn radio_markers(&self) -> (&'static str, &'static str) {
        match self {
            Self::Standard => ("checked", ""),
            Self::Summer => ("", "checked"),
        }
    }
}

impl fmt::Display for ClockMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard time"),
            Self::Summer => write!(f, "summer time"),
        }
    }
}

impl serde::Serialize for ClockMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.form_value())
    }
}

impl<'de> serde::Deserialize<'de> for ClockMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ClockMode::parse(&s).map_err(serde::de::Error::custom)
    }
}

use std::fmt;

/// The UTC offsets the portal's time form offers, as they appear in the
/// form's `<option value>` attributes. Fractional offsets use a dotted
/// hour.minute notation (`5.30` is UTC+5:30, `-9.30` is UTC-9:30).
const ALLOWED: [(&str, i16); 42] = [
    ("14", 840),
    ("13", 780),
    ("12.45", 765),
    ("12", 720),
    ("11.30", 690),
    ("11", 660),
    ("10.30", 630),
    ("10", 600),
    ("9.30", 570),
    ("9", 540),
    ("8.45", 525),
    ("8.30", 510),
    ("8", 480),
    ("7", 420),
    ("6.30", 390),
    ("6", 360),
    ("5.45", 345),
    ("5.30", 330),
    ("5", 300),
    ("4.30", 270),
    ("4", 240),
    ("3.30", 210),
    ("3", 180),
    ("2", 120),
    ("1", 60),
    ("0", 0),
    ("-1", -60),
    ("-2", -120),
    ("-2.30", -150),
    ("-3", -180),
    ("-3.30", -210),
    ("-4", -240),
    ("-4.30", -270),
    ("-5", -300),
    ("-6", -360),
    ("-7", -420),
    ("-8", -480),
    ("-9", -540),
    ("-9.30", -570),
    ("-10", -600),
    ("-11", -660),
    ("-12", -720),
];

/// A UTC offset restricted to the zones the time form lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcOffset {
    minutes: i16,
}

#[derive(Debug, thiserror::Error)]
pub enum UtcOffsetError {
    #[error("Unknown UTC offset: {0}")]
    Unknown(String),
}

impl UtcOffset {
    /// Parse a form value such as `1`, `-8` or `5.30`.
    pub fn parse(value: &str) -> Result<Self, UtcOffsetError> {
        ALLOWED
            .iter()
            .find(|(form, _)| *form == value)
            .map(|&(_, minutes)| Self { minutes })
            .ok_or_else(|| UtcOffsetError::Unknown(value.to_string()))
    }

    pub fn total_minutes(&self) -> i16 {
        self.minutes
    }

    /// The value the form submits for this offset.
    pub fn form_value(&self) -> &'static str {
        ALLOWED
            .iter()
            .find(|&&(_, minutes)| minutes == self.minutes)
            .map(|&(form, _)| form)
            .unwrap_or("0")
    }
}

impl Default for UtcOffset {
    // The form pre-selects UTC+1.
    fn default() -> Self {
        Self { minutes: 60 }
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let abs = self.minutes.unsigned_abs();
        let (hours, minutes) = (abs / 60, abs % 60);
        if minutes == 0 {
            write!(f, "UTC{sign}{hours}")
        } else {
            write!(f, "UTC{sign}{hours}:{minutes:02}")
        }
    }
}

impl serde::Serialize for UtcOffset {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.form_value())
    }
}

impl<'de> serde::Deserialize<'de> for UtcOffset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        UtcOffset::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_hours() {
        assert_eq!(UtcOffset::parse("1").unwrap().total_minutes(), 60);
        assert_eq!(UtcOffset::parse("0").unwrap().total_minutes(), 0);
        assert_eq!(UtcOffset::parse("-12").unwrap().total_minutes(), -720);
        assert_eq!(UtcOffset::parse("14").unwrap().total_minutes(), 840);
    }

    #[test]
    fn test_parse_fractional_hours() {
        assert_eq!(UtcOffset::parse("5.30").unwrap().total_minutes(), 330);
        assert_eq!(UtcOffset::parse("12.45").unwrap().total_minutes(), 765);
        assert_eq!(UtcOffset::parse("-9.30").unwrap().total_minutes(), -570);
    }

    #[test]
    fn test_parse_rejects_unlisted_offsets() {
        assert!(UtcOffset::parse("15").is_err());
        assert!(UtcOffset::parse("1.15").is_err());
        assert!(UtcOffset::parse("-13").is_err());
        assert!(UtcOffset::parse("").is_err());
        assert!(UtcOffset::parse("+1").is_err());
    }

    #[test]
    fn test_form_value_round_trip() {
        for (form, _) in ALLOWED {
            assert_eq!(UtcOffset::parse(form).unwrap().form_value(), form);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(UtcOffset::default().to_string(), "UTC+1");
        assert_eq!(UtcOffset::parse("5.30").unwrap().to_string(), "UTC+5:30");
        assert_eq!(UtcOffset::parse("-9.30").unwrap().to_string(), "UTC-9:30");
        assert_eq!(UtcOffset::parse("0").unwrap().to_string(), "UTC+0");
    }
}

use std::fmt;

/// RGB value driven out to the button's status LEDs.
///
/// Each channel is the raw PWM duty (0-255) the sliders on the portal
/// page submit, so no further validation is needed here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LedColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl LedColor {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn is_off(&self) -> bool {
        self.red == 0 && self.green == 0 && self.blue == 0
    }
}

impl fmt::Display for LedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

pub mod gpio;
pub mod leds;
pub mod reset;
pub mod time;
pub mod upload;
pub mod wifi;

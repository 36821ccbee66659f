pub mod reset;
pub mod serve;
pub mod status;

pub mod championship;
pub mod common;
pub mod driver;
pub mod race;
pub mod race_result;
pub mod session;
pub mod standings;

pub mod admin;
pub mod championship;
pub mod driver;
pub mod race;
pub mod race_result;

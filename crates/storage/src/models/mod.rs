mod capability;
mod championship;
mod driver;
mod race;
mod race_result;

pub use capability::Capability;
pub use championship::Championship;
pub use driver::Driver;
pub use race::Race;
pub use race_result::{RaceResult, RoundResult, ScoreSheet};

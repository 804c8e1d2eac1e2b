pub mod championships;
pub mod drivers;
pub mod races;
pub mod results;
pub mod session;
pub mod standings;

pub mod chrono;
pub mod enums;

pub mod clock;
pub mod context;
pub mod types;

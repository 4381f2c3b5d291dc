pub mod flags;
pub mod token;

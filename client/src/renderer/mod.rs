pub mod sleeper;
pub mod stats;
pub mod text;

pub mod indicators;
pub mod mock;

pub mod catalog;
pub mod energy;
pub mod threat;

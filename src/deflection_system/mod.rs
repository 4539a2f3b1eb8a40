pub mod kinetic;

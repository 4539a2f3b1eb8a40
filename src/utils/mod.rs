pub mod bodies;
pub mod geodesic;
pub mod units;

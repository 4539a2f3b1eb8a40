pub mod consequences;
pub mod seismic;
pub mod tsunami;

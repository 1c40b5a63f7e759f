pub mod detection;
pub mod placement;

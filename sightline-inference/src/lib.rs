pub mod detector;
pub mod frame;
pub mod recognition;
pub mod speech;

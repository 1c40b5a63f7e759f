pub mod announce;
pub mod describe;
pub mod filter;
pub mod geometry;
pub mod property;

/// Square edge of the model input, in pixels. Detection boxes arrive in
/// this coordinate space and are remapped to the frame before any decision
/// runs.
pub const MODEL_INPUT_SIZE: u32 = 480;

/// Minimum confidence for a recognition to survive filtering (inclusive).
pub const MIN_DETECTION_CONFIDENCE: f32 = 0.5;

// --- Placement Constants ---
pub const SIDE_BAND_FRACTION: f32 = 0.10; // Width fraction the side bands extend past the half-way line
pub const DOMINANT_AREA_FRACTION: f32 = 0.5; // Above this share of the frame an object is simply "in front"

pub const DEFAULT_SENSOR_ORIENTATION: i32 = 90; // Degrees; portrait capture
pub const DEFAULT_MAINTAIN_ASPECT: bool = false;

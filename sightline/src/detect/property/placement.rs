use crate::detect::{DOMINANT_AREA_FRACTION, SIDE_BAND_FRACTION};
use sightline_inference::recognition::BoundingBox;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Placement {
    Ahead,
    Left,
    Right,
}

impl Display for Placement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Placement::Ahead => write!(f, "in front of you"),
            Placement::Left => write!(f, "on the left"),
            Placement::Right => write!(f, "on the right"),
        }
    }
}

impl Placement {
    /// Judges where a detected object sits relative to the user.
    ///
    /// An object covering more than half the frame is `Ahead` wherever it
    /// sits. Smaller objects are tested against two bands that overlap
    /// around the frame's half-way line by `SIDE_BAND_FRACTION` of the
    /// width; a box falling fully inside neither band is `Ahead` as well.
    ///
    /// Args:
    ///     bounds (&BoundingBox): Object bounds in frame coordinates.
    ///     frame_width (u32): Width of the frame in pixels.
    ///     frame_height (u32): Height of the frame in pixels.
    ///
    /// Returns:
    ///     Placement: The category voiced to the user.
    pub fn classify(bounds: &BoundingBox, frame_width: u32, frame_height: u32) -> Placement {
        let frame_area = frame_width as f32 * frame_height as f32;
        if bounds.area() > frame_area * DOMINANT_AREA_FRACTION {
            return Placement::Ahead;
        }

        let width = frame_width as f32;
        let half = width / 2.0;
        let margin = width * SIDE_BAND_FRACTION;

        // The box's vertical edges are measured against thresholds laid out
        // on the width axis, and the band nearer the origin is voiced as
        // the right. Comparisons are strict on every edge.
        if bounds.top > 0.0 && bounds.bottom < half + margin {
            Placement::Right
        } else if bounds.top > half - margin && bounds.bottom < width {
            Placement::Left
        } else {
            Placement::Ahead
        }
    }
}

use sightline_inference::recognition::BoundingBox;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// One object the engine reasons about: filtered, box always present and
/// in frame coordinates.
///
/// Equality is by value over all three fields so whole detection sets can
/// be compared and held in hashed collections. Float fields take part
/// through their bit patterns, keeping `Eq` and `Hash` in agreement.
#[derive(Debug, Clone)]
pub struct Detection {
    pub label: String,
    pub confidence: f32,
    pub bounds: BoundingBox,
}

impl Detection {
    pub fn new(label: impl Into<String>, confidence: f32, bounds: BoundingBox) -> Self {
        Detection {
            label: label.into(),
            confidence,
            bounds,
        }
    }

    fn bit_key(&self) -> (u32, u32, u32, u32, u32) {
        (
            self.confidence.to_bits(),
            self.bounds.left.to_bits(),
            self.bounds.top.to_bits(),
            self.bounds.right.to_bits(),
            self.bounds.bottom.to_bits(),
        )
    }
}

impl PartialEq for Detection {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label && self.bit_key() == other.bit_key()
    }
}

impl Eq for Detection {}

impl Hash for Detection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
        self.bit_key().hash(state);
    }
}

impl Display for Detection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.label, self.confidence)
    }
}

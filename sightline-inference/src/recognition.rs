/// Axis-aligned box in pixel coordinates. Whether the coordinates live in
/// model-crop space or display-frame space is up to the producer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl BoundingBox {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        BoundingBox {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }
}

/// One raw model output: a labelled, scored candidate with an optional
/// location. Detectors that fail to regress a box still emit the label,
/// so the location stays optional here and is dealt with downstream.
#[derive(Debug, Clone)]
pub struct Recognition {
    pub label: String,
    pub confidence: f32,
    pub location: Option<BoundingBox>,
}

impl Recognition {
    pub fn new(label: impl Into<String>, confidence: f32, location: Option<BoundingBox>) -> Self {
        Recognition {
            label: label.into(),
            confidence,
            location,
        }
    }
}

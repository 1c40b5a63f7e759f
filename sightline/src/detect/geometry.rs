use log::warn;
use sightline_inference::recognition::BoundingBox;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("frame or crop dimension is zero ({width}x{height})")]
    ZeroDimension { width: u32, height: u32 },
    #[error("transform is not invertible (determinant {determinant})")]
    NotInvertible { determinant: f32 },
}

/// How a processed image sits in space: its pixel size, the rotation the
/// sensor applied, and whether the model input letterboxes it.
#[derive(Debug, Clone, Copy)]
pub struct FrameGeometry {
    pub width: u32,
    pub height: u32,
    pub sensor_orientation: i32,
    pub maintain_aspect: bool,
}

impl FrameGeometry {
    pub fn new(
        width: u32,
        height: u32,
        sensor_orientation: i32,
        maintain_aspect: bool,
    ) -> Result<Self, GeometryError> {
        if width == 0 || height == 0 {
            return Err(GeometryError::ZeroDimension { width, height });
        }
        Ok(FrameGeometry {
            width,
            height,
            sensor_orientation,
            maintain_aspect,
        })
    }
}

/// Row-major 2x3 affine matrix:
///
/// ```text
/// | a  b  tx |
/// | c  d  ty |
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    tx: f32,
    ty: f32,
}

impl AffineTransform {
    pub const IDENTITY: AffineTransform = AffineTransform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Builds the frame-to-crop mapping for one image.
    ///
    /// The frame centre is moved to the origin, the frame is scaled onto
    /// the crop (per axis, or uniformly when `maintain_aspect` letterboxes
    /// it), rotated by the sensor orientation, and re-centred on the crop,
    /// so the rotation pivot is always the image centre.
    ///
    /// Args:
    ///     geometry (&FrameGeometry): Frame dimensions, rotation and aspect mode.
    ///     crop_width (u32): Width of the model input, in pixels.
    ///     crop_height (u32): Height of the model input, in pixels.
    ///
    /// Returns:
    ///     The forward transform, or `GeometryError` for a zero crop edge.
    pub fn frame_to_crop(
        geometry: &FrameGeometry,
        crop_width: u32,
        crop_height: u32,
    ) -> Result<AffineTransform, GeometryError> {
        if crop_width == 0 || crop_height == 0 {
            return Err(GeometryError::ZeroDimension {
                width: crop_width,
                height: crop_height,
            });
        }

        let (frame_w, frame_h) = (geometry.width as f32, geometry.height as f32);
        let (crop_w, crop_h) = (crop_width as f32, crop_height as f32);

        let (scale_x, scale_y) = if geometry.maintain_aspect {
            let uniform = (crop_w / frame_w).min(crop_h / frame_h);
            (uniform, uniform)
        } else {
            (crop_w / frame_w, crop_h / frame_h)
        };

        // Quarter turns stay exact; anything else goes through real trig.
        let (sin, cos) = match geometry.sensor_orientation.rem_euclid(360) {
            0 => (0.0, 1.0),
            90 => (1.0, 0.0),
            180 => (0.0, -1.0),
            270 => (-1.0, 0.0),
            other => {
                warn!("sensor orientation {} is not a quarter turn", other);
                (other as f32).to_radians().sin_cos()
            }
        };

        let a = cos * scale_x;
        let b = -sin * scale_y;
        let c = sin * scale_x;
        let d = cos * scale_y;

        let (src_cx, src_cy) = (frame_w / 2.0, frame_h / 2.0);
        let (dst_cx, dst_cy) = (crop_w / 2.0, crop_h / 2.0);

        Ok(AffineTransform {
            a,
            b,
            c,
            d,
            tx: dst_cx - (a * src_cx + b * src_cy),
            ty: dst_cy - (c * src_cx + d * src_cy),
        })
    }

    /// The exact inverse mapping.
    ///
    /// Returns:
    ///     `GeometryError` when the determinant is too small to divide by,
    ///     which only happens for degenerate scales.
    pub fn invert(&self) -> Result<AffineTransform, GeometryError> {
        let det = self.a * self.d - self.b * self.c;
        if !det.is_finite() || det.abs() < f32::MIN_POSITIVE {
            return Err(GeometryError::NotInvertible { determinant: det });
        }

        let a = self.d / det;
        let b = -self.b / det;
        let c = -self.c / det;
        let d = self.a / det;

        Ok(AffineTransform {
            a,
            b,
            c,
            d,
            tx: -(a * self.tx + b * self.ty),
            ty: -(c * self.tx + d * self.ty),
        })
    }

    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.a * x + self.b * y + self.tx,
            self.c * x + self.d * y + self.ty,
        )
    }

    /// Maps a box by transforming all four corners and taking their
    /// axis-aligned envelope. Quarter turns swap which corners are extreme,
    /// so two corners alone are not enough.
    pub fn map_box(&self, bounds: &BoundingBox) -> BoundingBox {
        let corners = [
            self.apply(bounds.left, bounds.top),
            self.apply(bounds.right, bounds.top),
            self.apply(bounds.left, bounds.bottom),
            self.apply(bounds.right, bounds.bottom),
        ];

        let mut mapped = BoundingBox::new(
            f32::INFINITY,
            f32::INFINITY,
            f32::NEG_INFINITY,
            f32::NEG_INFINITY,
        );
        for (x, y) in corners {
            mapped.left = mapped.left.min(x);
            mapped.top = mapped.top.min(y);
            mapped.right = mapped.right.max(x);
            mapped.bottom = mapped.bottom.max(y);
        }
        mapped
    }
}

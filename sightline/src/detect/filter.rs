use crate::detect::geometry::AffineTransform;
use crate::detect::property::detection::Detection;
use log::debug;
use sightline_inference::recognition::Recognition;

/// Applies the confidence gate and maps surviving boxes into frame space.
///
/// Recognitions without a regressed box are dropped no matter how
/// confident the model was; relative order of survivors is preserved and
/// the input is left untouched.
///
/// Args:
///     raw (&[Recognition]): Model output, boxes in crop coordinates.
///     threshold (f32): Minimum confidence, inclusive.
///     crop_to_frame (&AffineTransform): Mapping back into frame space.
///
/// Returns:
///     Vec<Detection>: Frame-space detections in model output order.
pub fn filter_detections(
    raw: &[Recognition],
    threshold: f32,
    crop_to_frame: &AffineTransform,
) -> Vec<Detection> {
    let mut kept = Vec::new();

    for recognition in raw {
        // `>=` on the keep side, so a NaN confidence never qualifies.
        if !(recognition.confidence >= threshold) {
            debug!(
                "dropped {} at confidence {}",
                recognition.label, recognition.confidence
            );
            continue;
        }
        let location = match recognition.location {
            Some(location) => location,
            None => {
                debug!("dropped {} with no bounding box", recognition.label);
                continue;
            }
        };

        kept.push(Detection::new(
            recognition.label.clone(),
            recognition.confidence,
            crop_to_frame.map_box(&location),
        ));
    }

    kept
}

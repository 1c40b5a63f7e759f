use crate::detect::property::detection::Detection;
use crate::detect::property::placement::Placement;

/// Phrase spoken for one detection: its label followed by where it sits.
///
/// Args:
///     detection (&Detection): Frame-space detection to describe.
///     frame_width (u32): Width of the frame in pixels.
///     frame_height (u32): Height of the frame in pixels.
///
/// Returns:
///     String: e.g. "person on the left".
pub fn describe_detection(detection: &Detection, frame_width: u32, frame_height: u32) -> String {
    let placement = Placement::classify(&detection.bounds, frame_width, frame_height);
    format!("{} {}", detection.label, placement)
}

/// Builds the single sentence spoken for an announced set.
///
/// Args:
///     detections (&[Detection]): The announced set, in detection order.
///     frame_width (u32): Width of the frame in pixels.
///     frame_height (u32): Height of the frame in pixels.
///
/// Returns:
///     Option<String>: `None` for an empty set, otherwise the per-object
///     phrases joined with " and " and closed with " detected.".
pub fn compose_announcement(
    detections: &[Detection],
    frame_width: u32,
    frame_height: u32,
) -> Option<String> {
    if detections.is_empty() {
        return None;
    }

    let phrases: Vec<String> = detections
        .iter()
        .map(|detection| describe_detection(detection, frame_width, frame_height))
        .collect();

    let mut sentence = phrases.join(" and ");
    sentence.push_str(" detected.");
    Some(sentence)
}

/// On-screen summary of a capture: one "label confidence" line per kept
/// detection.
pub fn summarize_detections(detections: &[Detection]) -> String {
    detections
        .iter()
        .map(|detection| format!("{}\n", detection))
        .collect()
}

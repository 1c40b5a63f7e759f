use sightline::detect::MODEL_INPUT_SIZE;
use sightline::session::{CaptureSession, SessionConfig};
use sightline_inference::detector::FixtureDetector;
use sightline_inference::frame::Frame;
use sightline_inference::recognition::{BoundingBox, Recognition};
use sightline_inference::speech::RecordingSpeech;
use std::sync::Arc;

#[tokio::test]
async fn test() -> anyhow::Result<()> {
    let speech = Arc::new(RecordingSpeech::new());
    let detector = Arc::new(FixtureDetector::single(vec![Recognition::new(
        "person",
        0.91,
        Some(BoundingBox::new(120.0, 40.0, 200.0, 260.0)),
    )]));
    let mut session = CaptureSession::new(detector, speech.clone(), SessionConfig::default());

    let outcome = session
        .process(Frame::solid(MODEL_INPUT_SIZE, MODEL_INPUT_SIZE))
        .await?;
    assert_eq!(
        outcome.announcement.as_deref(),
        Some("person on the left detected.")
    );
    assert_eq!(speech.utterances().len(), 1);

    session.finish();
    Ok(())
}

use crate::detect::announce::{SuppressReason, Verdict};
use crate::detect::geometry::GeometryError;
use crate::log_init;
use crate::session::{CaptureSession, SessionConfig};
use sightline_inference::detector::{FixtureDetector, ObjectDetector};
use sightline_inference::frame::Frame;
use sightline_inference::recognition::{BoundingBox, Recognition};
use sightline_inference::speech::{QueueMode, RecordingSpeech};
use std::sync::Arc;

/// Sensor left upright so crop and frame coordinates coincide and the
/// spoken phrases are easy to predict.
fn upright_config() -> SessionConfig {
    SessionConfig {
        sensor_orientation: 0,
        ..SessionConfig::default()
    }
}

fn person() -> Recognition {
    Recognition::new(
        "person",
        0.82,
        Some(BoundingBox::new(100.0, 10.0, 150.0, 280.0)),
    )
}

fn car() -> Recognition {
    Recognition::new(
        "car",
        0.67,
        Some(BoundingBox::new(100.0, 200.0, 150.0, 400.0)),
    )
}

fn bicycle() -> Recognition {
    Recognition::new(
        "bicycle",
        0.58,
        Some(BoundingBox::new(300.0, 20.0, 340.0, 100.0)),
    )
}

fn session_with_script(
    script: Vec<Vec<Recognition>>,
    config: SessionConfig,
) -> (CaptureSession, Arc<RecordingSpeech>) {
    let speech = Arc::new(RecordingSpeech::new());
    let detector = Arc::new(FixtureDetector::from_script(script).unwrap());
    (
        CaptureSession::new(detector, speech.clone(), config),
        speech,
    )
}

#[tokio::test]
async fn debug_capture_flow() -> anyhow::Result<()> {
    log_init();

    let low_conf_bird = Recognition::new(
        "bird",
        0.31,
        Some(BoundingBox::new(10.0, 10.0, 30.0, 30.0)),
    );
    let (mut session, speech) = session_with_script(
        vec![
            vec![person(), car(), low_conf_bird],
            vec![person(), car()],
            vec![person(), car(), bicycle()],
        ],
        upright_config(),
    );

    // First capture: the bird is filtered out, the rest is announced.
    let first = session.process(Frame::solid(480, 480)).await?;
    assert_eq!(first.verdict, Verdict::Announce);
    assert_eq!(first.report, "person 0.82\ncar 0.67\n");
    assert_eq!(
        first.announcement.as_deref(),
        Some("person on the right and car on the left detected.")
    );

    // Second capture repeats the same objects and stays silent.
    let second = session.process(Frame::solid(480, 480)).await?;
    assert_eq!(
        second.verdict,
        Verdict::Suppressed(SuppressReason::DuplicateSet)
    );
    assert_eq!(second.announcement, None);

    // Third capture adds one object, which makes the whole set news again.
    let third = session.process(Frame::solid(480, 480)).await?;
    assert_eq!(third.verdict, Verdict::Announce);
    assert_eq!(
        third.announcement.as_deref(),
        Some("person on the right and car on the left and bicycle on the right detected.")
    );

    let calls = speech.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|(_, mode)| *mode == QueueMode::Flush));

    session.finish();
    Ok(())
}

#[tokio::test]
async fn debug_busy_sink_clears_announced_context() -> anyhow::Result<()> {
    log_init();

    let (mut session, speech) = session_with_script(
        vec![
            vec![person()],
            vec![car()],
            vec![person()],
        ],
        upright_config(),
    );

    let first = session.process(Frame::solid(480, 480)).await?;
    assert_eq!(first.verdict, Verdict::Announce);

    // The sink is still voicing, so even a different set stays silent and
    // the announced context is dropped.
    speech.set_busy(true);
    let second = session.process(Frame::solid(480, 480)).await?;
    assert_eq!(
        second.verdict,
        Verdict::Suppressed(SuppressReason::SpeechInProgress)
    );

    // With speech over, the original objects count as news again.
    speech.set_busy(false);
    let third = session.process(Frame::solid(480, 480)).await?;
    assert_eq!(third.verdict, Verdict::Announce);
    assert_eq!(speech.utterances().len(), 2);
    Ok(())
}

#[tokio::test]
async fn debug_empty_capture_clears_announced_context() -> anyhow::Result<()> {
    log_init();

    let (mut session, _speech) = session_with_script(
        vec![vec![person()], Vec::new(), vec![person()]],
        upright_config(),
    );

    assert_eq!(
        session.process(Frame::solid(480, 480)).await?.verdict,
        Verdict::Announce
    );

    let empty = session.process(Frame::solid(480, 480)).await?;
    assert_eq!(
        empty.verdict,
        Verdict::Suppressed(SuppressReason::EmptyResult)
    );
    assert!(empty.detections.is_empty());
    assert_eq!(empty.report, "");

    assert_eq!(
        session.process(Frame::solid(480, 480)).await?.verdict,
        Verdict::Announce
    );
    Ok(())
}

#[tokio::test]
async fn debug_rotated_capture_remaps_boxes() -> anyhow::Result<()> {
    log_init();

    // Default config: sensor at 90 degrees, square crop and frame.
    let speech = Arc::new(RecordingSpeech::new());
    let detector = Arc::new(FixtureDetector::single(vec![person()]));
    let mut session = CaptureSession::new(detector, speech, SessionConfig::default());

    let outcome = session.process(Frame::solid(480, 480)).await?;
    assert_eq!(outcome.verdict, Verdict::Announce);

    let bounds = outcome.detections[0].bounds;
    assert!((bounds.left - 10.0).abs() < 1e-3);
    assert!((bounds.top - 330.0).abs() < 1e-3);
    assert!((bounds.right - 280.0).abs() < 1e-3);
    assert!((bounds.bottom - 380.0).abs() < 1e-3);
    Ok(())
}

#[tokio::test]
async fn debug_degenerate_frame_is_rejected() {
    log_init();

    let (mut session, speech) = session_with_script(vec![vec![person()]], upright_config());

    let err = session
        .process(Frame::new(0, 480, Vec::new()))
        .await
        .unwrap_err();
    assert!(err.downcast_ref::<GeometryError>().is_some());
    assert!(speech.utterances().is_empty());
}

#[tokio::test]
async fn debug_detector_failure_surfaces_once() {
    log_init();

    struct FailingDetector;

    impl ObjectDetector for FailingDetector {
        fn recognize_image(&self, _frame: &Frame) -> anyhow::Result<Vec<Recognition>> {
            anyhow::bail!("backend exploded")
        }
    }

    let speech = Arc::new(RecordingSpeech::new());
    let mut session = CaptureSession::new(
        Arc::new(FailingDetector),
        speech.clone(),
        upright_config(),
    );

    let err = session
        .process(Frame::solid(480, 480))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "object detection failed");
    assert!(format!("{:#}", err).contains("backend exploded"));
    assert!(speech.utterances().is_empty());
}

#[tokio::test]
async fn debug_lost_worker_surfaces_as_error() {
    log_init();

    struct PanickingDetector;

    impl ObjectDetector for PanickingDetector {
        fn recognize_image(&self, _frame: &Frame) -> anyhow::Result<Vec<Recognition>> {
            panic!("model backend tore down mid-call")
        }
    }

    let speech = Arc::new(RecordingSpeech::new());
    let mut session = CaptureSession::new(
        Arc::new(PanickingDetector),
        speech.clone(),
        upright_config(),
    );

    // The panic unwinds the worker before anything is posted, so the
    // session sees a closed channel instead of a result.
    let err = session
        .process(Frame::solid(480, 480))
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "inference worker ended without posting a result"
    );
    assert!(speech.utterances().is_empty());
}

#![cfg_attr(debug_assertions, allow(warnings))]

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use log::{info, warn};
use sightline::detect::MODEL_INPUT_SIZE;
use sightline::session::{CaptureSession, SessionConfig};
use sightline_inference::detector::FixtureDetector;
use sightline_inference::frame::{ImageSource, SolidFrameSource};
use sightline_inference::recognition::{BoundingBox, Recognition};
use sightline_inference::speech::{EspeakSpeech, RecordingSpeech, SpeechSink};
use std::sync::Arc;
use tracing_subscriber::filter::LevelFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::INFO)
        .init();

    let speech: Arc<dyn SpeechSink> = match EspeakSpeech::new() {
        Ok(sink) => Arc::new(sink),
        Err(error) => {
            warn!("no espeak-ng, recording utterances instead: {}", error);
            Arc::new(RecordingSpeech::new())
        }
    };

    let person = Recognition::new(
        "person",
        0.82,
        Some(BoundingBox::new(40.0, 60.0, 180.0, 420.0)),
    );
    let car = Recognition::new(
        "car",
        0.67,
        Some(BoundingBox::new(250.0, 300.0, 460.0, 470.0)),
    );
    let bird = Recognition::new(
        "bird",
        0.31,
        Some(BoundingBox::new(10.0, 10.0, 30.0, 30.0)),
    );
    let bicycle = Recognition::new(
        "bicycle",
        0.58,
        Some(BoundingBox::new(300.0, 20.0, 360.0, 120.0)),
    );

    let detector = Arc::new(FixtureDetector::from_script(vec![
        vec![person.clone(), car.clone(), bird],
        vec![person.clone(), car.clone()],
        vec![person, car, bicycle],
    ])?);

    let mut source = SolidFrameSource::new(MODEL_INPUT_SIZE, MODEL_INPUT_SIZE);
    let mut session = CaptureSession::new(detector, speech, SessionConfig::default());

    for capture in 1..=3 {
        let frame = source.acquire()?;
        let outcome = session.process(frame).await?;
        info!("capture {} kept {} detections", capture, outcome.detections.len());
        if !outcome.report.is_empty() {
            info!("report:\n{}", outcome.report.trim_end());
        }
        match &outcome.announcement {
            Some(sentence) => info!("spoke: {}", sentence),
            None => info!("stayed silent ({:?})", outcome.verdict),
        }
    }

    session.finish();
    Ok(())
}

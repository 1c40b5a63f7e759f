use crate::detect::announce::{AnnouncementGate, Verdict};
use crate::detect::describe::{compose_announcement, summarize_detections};
use crate::detect::filter::filter_detections;
use crate::detect::geometry::{AffineTransform, FrameGeometry};
use crate::detect::property::detection::Detection;
use crate::detect::{
    DEFAULT_MAINTAIN_ASPECT, DEFAULT_SENSOR_ORIENTATION, MIN_DETECTION_CONFIDENCE,
    MODEL_INPUT_SIZE,
};
use anyhow::{bail, Context, Result};
use log::{debug, error, info};
use sightline_inference::detector::ObjectDetector;
use sightline_inference::frame::Frame;
use sightline_inference::speech::{QueueMode, SpeechSink};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::spawn_blocking;

/// Tunables for one capture session.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Square edge of the model input.
    pub crop_size: u32,
    /// Minimum confidence for a recognition to be kept.
    pub confidence_threshold: f32,
    /// Rotation the sensor applies to captured frames, in degrees.
    pub sensor_orientation: i32,
    /// Letterbox the frame into the crop instead of stretching it.
    pub maintain_aspect: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            crop_size: MODEL_INPUT_SIZE,
            confidence_threshold: MIN_DETECTION_CONFIDENCE,
            sensor_orientation: DEFAULT_SENSOR_ORIENTATION,
            maintain_aspect: DEFAULT_MAINTAIN_ASPECT,
        }
    }
}

/// Everything one `process` call produced.
#[derive(Debug)]
pub struct CaptureOutcome {
    /// Frame-space detections that survived filtering, in model order.
    pub detections: Vec<Detection>,
    /// One "label confidence" line per kept detection.
    pub report: String,
    /// The spoken sentence, when the gate let one through.
    pub announcement: Option<String>,
    pub verdict: Verdict,
}

/// Drives one capture at a time through detection, filtering, the
/// announcement gate and the speech sink.
///
/// The session owns the gate state and `process` takes `&mut self`, so
/// captures are serialized by construction; a caller that wants to feed a
/// multi-request pipeline has to queue commands in front of one session.
pub struct CaptureSession {
    detector: Arc<dyn ObjectDetector>,
    speech: Arc<dyn SpeechSink>,
    gate: AnnouncementGate,
    config: SessionConfig,
}

impl CaptureSession {
    pub fn new(
        detector: Arc<dyn ObjectDetector>,
        speech: Arc<dyn SpeechSink>,
        config: SessionConfig,
    ) -> Self {
        CaptureSession {
            detector,
            speech,
            gate: AnnouncementGate::new(),
            config,
        }
    }

    /// Runs the full decision path over one frame.
    ///
    /// Inference runs on the blocking pool and posts its result onto a
    /// single-consumer channel drained here; the decision itself runs on
    /// the calling task. Geometry failures abort before inference starts.
    pub async fn process(&mut self, frame: Frame) -> Result<CaptureOutcome> {
        let geometry = FrameGeometry::new(
            frame.width,
            frame.height,
            self.config.sensor_orientation,
            self.config.maintain_aspect,
        )?;
        let frame_to_crop =
            AffineTransform::frame_to_crop(&geometry, self.config.crop_size, self.config.crop_size)?;
        let crop_to_frame = frame_to_crop.invert()?;

        let (frame_width, frame_height) = (frame.width, frame.height);

        let raw = {
            let (sender, mut results) = mpsc::channel(1);
            let detector = self.detector.clone();
            spawn_blocking(move || {
                let result = detector.recognize_image(&frame);
                // The receiver is gone when the session was dropped mid-flight.
                let _ = sender.blocking_send(result);
            });

            match results.recv().await {
                Some(result) => result.context("object detection failed")?,
                None => {
                    error!("inference worker ended without posting a result");
                    bail!("inference worker ended without posting a result");
                }
            }
        };
        debug!("model returned {} recognitions", raw.len());

        let detections = filter_detections(&raw, self.config.confidence_threshold, &crop_to_frame);
        let report = summarize_detections(&detections);

        let verdict = self
            .gate
            .evaluate(detections.clone(), self.speech.is_speaking());
        let announcement = match verdict {
            Verdict::Announce => {
                let sentence =
                    compose_announcement(self.gate.current_set(), frame_width, frame_height);
                if let Some(sentence) = &sentence {
                    info!("speaking: {}", sentence);
                    self.speech.speak(sentence, QueueMode::Flush)?;
                }
                sentence
            }
            Verdict::Suppressed(reason) => {
                debug!("capture stayed silent: {}", reason);
                None
            }
        };

        Ok(CaptureOutcome {
            detections,
            report,
            announcement,
            verdict,
        })
    }

    /// Stops speech output. The gate keeps its state, so a later `process`
    /// call picks up where the session left off.
    pub fn finish(&self) {
        self.speech.stop();
    }
}

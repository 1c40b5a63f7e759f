use crate::frame::Frame;
use crate::recognition::Recognition;
use anyhow::Result;
use log::debug;
use parking_lot::Mutex;
use thiserror::Error;

/// The inference backend could not be brought up. Fatal to the capture
/// flow; the caller reports it once and ends.
#[derive(Debug, Error)]
#[error("object detector unavailable: {reason}")]
pub struct ModelUnavailable {
    pub reason: String,
}

pub trait ObjectDetector: Send + Sync {
    /// Runs the detection model over one frame.
    ///
    /// May take non-trivial wall-clock time; callers are expected to invoke
    /// it off their scheduling thread.
    fn recognize_image(&self, frame: &Frame) -> Result<Vec<Recognition>>;
}

/// Detector that replays a scripted sequence of result batches, one batch
/// per call, repeating the final batch once the script runs out.
#[derive(Debug)]
pub struct FixtureDetector {
    script: Vec<Vec<Recognition>>,
    cursor: Mutex<usize>,
}

impl FixtureDetector {
    pub fn from_script(script: Vec<Vec<Recognition>>) -> Result<Self, ModelUnavailable> {
        if script.is_empty() {
            return Err(ModelUnavailable {
                reason: "fixture script holds no result batches".to_string(),
            });
        }
        Ok(FixtureDetector {
            script,
            cursor: Mutex::new(0),
        })
    }

    /// Single-batch fixture: every call reproduces the same results.
    pub fn single(batch: Vec<Recognition>) -> Self {
        FixtureDetector {
            script: vec![batch],
            cursor: Mutex::new(0),
        }
    }
}

impl ObjectDetector for FixtureDetector {
    fn recognize_image(&self, frame: &Frame) -> Result<Vec<Recognition>> {
        let mut cursor = self.cursor.lock();
        let batch = self.script[(*cursor).min(self.script.len() - 1)].clone();
        *cursor += 1;
        debug!(
            "fixture replayed {} recognitions for a {}x{} frame",
            batch.len(),
            frame.width,
            frame.height
        );
        Ok(batch)
    }
}

use crate::speech::{QueueMode, SpeechSink};
use anyhow::Result;
use log::debug;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// In-memory sink for tests and dry runs: utterances are recorded instead
/// of voiced, and the busy flag is scripted by the caller.
#[derive(Default)]
pub struct RecordingSpeech {
    spoken: Mutex<Vec<(String, QueueMode)>>,
    busy: AtomicBool,
}

impl RecordingSpeech {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts what `is_speaking` reports next.
    pub fn set_busy(&self, busy: bool) {
        self.busy.store(busy, Ordering::SeqCst);
    }

    pub fn utterances(&self) -> Vec<String> {
        self.spoken
            .lock()
            .iter()
            .map(|(text, _)| text.clone())
            .collect()
    }

    pub fn calls(&self) -> Vec<(String, QueueMode)> {
        self.spoken.lock().clone()
    }
}

impl SpeechSink for RecordingSpeech {
    fn speak(&self, utterance: &str, mode: QueueMode) -> Result<()> {
        debug!("recorded utterance: {:?}", utterance);
        self.spoken.lock().push((utterance.to_string(), mode));
        Ok(())
    }

    fn is_speaking(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }
}

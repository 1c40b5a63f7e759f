mod espeak;
mod recording;

pub use espeak::EspeakSpeech;
pub use recording::RecordingSpeech;

use anyhow::Result;

/// Queueing behaviour for a new utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueMode {
    /// Drop anything queued or currently playing, then speak.
    Flush,
    /// Speak after whatever is already playing has finished.
    Add,
}

pub trait SpeechSink: Send + Sync {
    /// Hands one utterance to the synthesizer.
    fn speak(&self, utterance: &str, mode: QueueMode) -> Result<()>;

    /// Whether the sink is still voicing an earlier utterance.
    ///
    /// Point-in-time answer: playback may end right after this returns, so
    /// callers must treat it as a hint rather than a lock.
    fn is_speaking(&self) -> bool;

    /// Stops playback and releases the synthesizer. Idempotent.
    fn stop(&self) {}
}

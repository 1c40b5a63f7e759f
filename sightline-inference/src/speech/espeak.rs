use crate::speech::{QueueMode, SpeechSink};
use anyhow::{Context, Result};
use log::{debug, info};
use parking_lot::Mutex;
use std::process::{Child, Command, Stdio};

/// Speech sink backed by the `espeak-ng` command line synthesizer.
///
/// One child process per utterance. `Flush` kills whatever is still
/// playing before the replacement starts; `Add` waits for it to end.
pub struct EspeakSpeech {
    current: Mutex<Option<Child>>,
}

impl EspeakSpeech {
    /// Probes for the binary, failing when it is not installed.
    pub fn new() -> Result<Self> {
        Command::new("espeak-ng")
            .arg("--version")
            .output()
            .context("espeak-ng is not available on this system")?;
        info!("espeak-ng speech sink ready");
        Ok(EspeakSpeech {
            current: Mutex::new(None),
        })
    }
}

impl SpeechSink for EspeakSpeech {
    fn speak(&self, utterance: &str, mode: QueueMode) -> Result<()> {
        let mut current = self.current.lock();
        match mode {
            QueueMode::Flush => {
                if let Some(mut child) = current.take() {
                    if matches!(child.try_wait(), Ok(None)) {
                        debug!("flushing active utterance");
                        let _ = child.kill();
                    }
                    let _ = child.wait();
                }
            }
            QueueMode::Add => {
                if let Some(mut child) = current.take() {
                    let _ = child.wait();
                }
            }
        }

        let child = Command::new("espeak-ng")
            .arg(utterance)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .context("failed to spawn espeak-ng")?;
        *current = Some(child);
        Ok(())
    }

    fn is_speaking(&self) -> bool {
        let mut current = self.current.lock();
        match current.as_mut() {
            Some(child) => match child.try_wait() {
                Ok(None) => true,
                _ => {
                    *current = None;
                    false
                }
            },
            None => false,
        }
    }

    fn stop(&self) {
        if let Some(mut child) = self.current.lock().take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl Drop for EspeakSpeech {
    fn drop(&mut self) {
        self.stop();
    }
}

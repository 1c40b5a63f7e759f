use crate::detect::property::detection::Detection;
use hashbrown::HashSet;
use log::{debug, info};
use std::fmt::{Display, Formatter};

/// Why an evaluation stayed silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressReason {
    EmptyResult,
    SpeechInProgress,
    DuplicateSet,
    NothingNew,
}

impl Display for SuppressReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SuppressReason::EmptyResult => write!(f, "nothing was detected"),
            SuppressReason::SpeechInProgress => write!(f, "speech is still in progress"),
            SuppressReason::DuplicateSet => write!(f, "same objects as last announcement"),
            SuppressReason::NothingNew => write!(f, "no objects beyond last announcement"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Announce,
    Suppressed(SuppressReason),
}

/// Decides whether a freshly filtered detection set deserves speech.
///
/// Owns the last announced set. Every evaluation either adopts the
/// incoming set, clears the state, or leaves it untouched; the decision
/// order matches the capture flow: empty results and busy speech clear the
/// state, a first-ever set is adopted, an ordered duplicate or a set whose
/// members were all announced already stays silent, anything else is
/// adopted and replaces the state.
#[derive(Debug, Default)]
pub struct AnnouncementGate {
    current: Option<Vec<Detection>>,
}

impl AnnouncementGate {
    pub fn new() -> Self {
        AnnouncementGate { current: None }
    }

    /// Runs the redundancy decision for one capture.
    ///
    /// Args:
    ///     incoming (Vec<Detection>): Frame-space detections of this capture.
    ///     speech_in_progress (bool): Whether the sink is still voicing.
    ///
    /// Returns:
    ///     Verdict: `Announce` when the set was adopted, otherwise the
    ///     suppression reason.
    pub fn evaluate(&mut self, incoming: Vec<Detection>, speech_in_progress: bool) -> Verdict {
        if incoming.is_empty() || speech_in_progress {
            let reason = if incoming.is_empty() {
                SuppressReason::EmptyResult
            } else {
                SuppressReason::SpeechInProgress
            };
            // The announced context is forgotten so the next capture
            // starts from a clean slate.
            self.current = Some(Vec::new());
            debug!("suppressed: {}", reason);
            return Verdict::Suppressed(reason);
        }

        if let Some(current) = &self.current {
            if *current == incoming {
                debug!("suppressed: {}", SuppressReason::DuplicateSet);
                return Verdict::Suppressed(SuppressReason::DuplicateSet);
            }

            let known: HashSet<&Detection> = current.iter().collect();
            if incoming.iter().all(|detection| known.contains(detection)) {
                debug!("suppressed: {}", SuppressReason::NothingNew);
                return Verdict::Suppressed(SuppressReason::NothingNew);
            }
        }

        info!("announcing {} detections", incoming.len());
        self.current = Some(incoming);
        Verdict::Announce
    }

    /// The last set that triggered an announcement, empty after a clear.
    pub fn current_set(&self) -> &[Detection] {
        self.current.as_deref().unwrap_or(&[])
    }
}

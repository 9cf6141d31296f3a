//! The seam to an external speech synthesizer.
//!
//! Synthesis itself happens elsewhere. The crate only hands over the text the
//! user typed, exactly as typed, and reports utterance progress through
//! [`UtteranceListener`].

use thiserror::Error;
use tracing::{error, info, warn};

use crate::engine::BreakdownEngine;
use crate::error::Result;

/// Locale every synthesizer is asked to speak in.
pub const FRENCH_LOCALE: &str = "fr-FR";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechError {
    #[error("synthesizer rejected utterance {utterance_id}")]
    Rejected { utterance_id: String },

    #[error("language {locale} is not available")]
    LanguageUnavailable { locale: String },
}

/// An external text-to-speech engine.
pub trait SpeechSynthesizer: Send + Sync {
    fn set_language(&self, _locale: &str) -> std::result::Result<(), SpeechError> {
        Ok(())
    }

    /// Queues `text` for speaking. Progress is reported to the listener the
    /// synthesizer was set up with, on a thread the synthesizer owns.
    fn speak(&self, text: &str, utterance_id: &str) -> std::result::Result<(), SpeechError>;
}

/// Utterance progress callbacks.
pub trait UtteranceListener: Send + Sync {
    fn on_start(&self, utterance_id: &str);
    fn on_done(&self, utterance_id: &str);
    fn on_error(&self, utterance_id: &str);
}

/// Logs utterance progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingListener;

impl UtteranceListener for TracingListener {
    fn on_start(&self, utterance_id: &str) {
        info!(utterance_id, "utterance started");
    }

    fn on_done(&self, utterance_id: &str) {
        info!(utterance_id, "utterance done");
    }

    fn on_error(&self, utterance_id: &str) {
        error!(utterance_id, "utterance failed");
    }
}

/// Stable id for an utterance of `text` (64-bit FNV-1a, hex).
pub fn utterance_id(text: &str) -> String {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    let hash = text
        .bytes()
        .fold(OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME));
    format!("{hash:016x}")
}

/// Shows breakdowns and speaks words. The two never depend on each other:
/// the synthesizer always receives the raw text, never the breakdown.
pub struct Pronouncer<S: SpeechSynthesizer> {
    engine: BreakdownEngine,
    synthesizer: S,
}

impl<S: SpeechSynthesizer> Pronouncer<S> {
    pub fn new(engine: BreakdownEngine, synthesizer: S) -> Self {
        if let Err(err) = synthesizer.set_language(FRENCH_LOCALE) {
            warn!(%err, "speech language unavailable");
        }
        Self {
            engine,
            synthesizer,
        }
    }

    pub fn engine(&self) -> &BreakdownEngine {
        &self.engine
    }

    pub fn synthesizer(&self) -> &S {
        &self.synthesizer
    }

    /// Display form of `text`.
    pub fn show(&self, text: &str) -> Result<String> {
        self.engine.breakdown_word(text)
    }

    /// Sends `text` unmodified to the synthesizer and returns the utterance
    /// id.
    pub fn speak(&self, text: &str) -> std::result::Result<String, SpeechError> {
        let id = utterance_id(text);
        info!(text, utterance_id = %id, "speaking");
        if let Err(err) = self.synthesizer.speak(text, &id) {
            error!(%err, "speech request failed");
            return Err(err);
        }
        Ok(id)
    }
}

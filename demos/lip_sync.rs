use std::sync::Arc;

use tamara_rs::speech::{SpeechError, SpeechSynthesizer, TracingListener, UtteranceListener};
use tamara_rs::{BreakdownEngine, Pronouncer};

/// Stands in for a real speech engine: reports progress right away.
struct ConsoleSynthesizer {
    listener: Arc<dyn UtteranceListener>,
}

impl SpeechSynthesizer for ConsoleSynthesizer {
    fn speak(&self, text: &str, utterance_id: &str) -> Result<(), SpeechError> {
        self.listener.on_start(utterance_id);
        println!("(speaking) {text}");
        self.listener.on_done(utterance_id);
        Ok(())
    }
}

fn main() -> tamara_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let synthesizer = ConsoleSynthesizer {
        listener: Arc::new(TracingListener),
    };
    let pronouncer = Pronouncer::new(BreakdownEngine::new()?, synthesizer);

    for text in ["Bonjour", "le soleil", "grand-père"] {
        println!("{text}: {}", pronouncer.show(text)?);

        let visemes = pronouncer.engine().visemes(text)?;
        let shapes: Vec<&str> = visemes.iter().map(|v| v.as_str()).collect();
        println!("  mouth: {}", shapes.join(" "));

        if let Err(err) = pronouncer.speak(text) {
            println!("  speech failed: {err}");
        }
    }
    Ok(())
}

pub mod alphabet;
pub mod assembler;
pub mod data;
pub mod engine;
pub mod error;
pub mod languages;
pub mod lexicon;
pub mod options;
pub mod phoneme;
pub mod rules;
pub mod segmenter;
pub mod speech;
pub mod token;

pub use assembler::{BreakdownResult, Segment};
pub use engine::{BreakdownEngine, breakdown, breakdown_word, collapse_repeats, shared};
pub use error::{BreakdownError, Result};
pub use lexicon::Lexicon;
pub use options::BreakdownOptions;
pub use phoneme::{Phoneme, Symbol, Viseme};
pub use speech::{Pronouncer, SpeechError, SpeechSynthesizer, TracingListener, UtteranceListener};
pub use token::{GraphemeUnit, Word};

pub mod dataset;
pub mod detector;

pub use crate::dataset::lexicon::Lexicon;
pub use crate::dataset::store::{DatasetError, DatasetStore};
pub use crate::detector::detector::LanguageDetector;
pub use crate::detector::prediction::Prediction;

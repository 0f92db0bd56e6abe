pub mod detector;
pub mod normalizer;
pub mod prediction;
pub mod scorer;

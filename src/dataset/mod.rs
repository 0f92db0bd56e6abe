pub mod lexicon;
pub mod store;

//! Random text port
//!
//! Supplies the filler content written into READMEs and commit messages.

/// Word count bounds for generated sentences (inclusive)
pub const SENTENCE_WORDS: std::ops::RangeInclusive<usize> = 5..=14;

/// Source of generated text
pub trait TextGenerator {
    /// A sentence of [`SENTENCE_WORDS`] words, length chosen by the generator
    fn sentence(&mut self) -> String;

    /// A short technical-sounding phrase, used as a commit message
    fn phrase(&mut self) -> String;
}

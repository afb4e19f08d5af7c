//! Random text adapter
//!
//! Implements `TextGenerator` from fixed word lists. The random source is
//! injected so tests can run with a seeded or fixed-sequence generator.

mod words;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::ports::{SENTENCE_WORDS, TextGenerator};

/// Word-list text generator
#[derive(Debug, Clone)]
pub struct Faker<R> {
    rng: R,
}

impl<R: Rng> Faker<R> {
    /// Create a generator drawing from `rng`
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    fn pick(&mut self, list: &'static [&'static str]) -> &'static str {
        list.choose(&mut self.rng).copied().unwrap_or_default()
    }

    fn fill(&mut self, template: &str) -> String {
        let mut out = String::with_capacity(template.len() * 2);
        let mut rest = template;

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            let word = match &rest[start + 1..start + len] {
                "abbr" => self.pick(words::ABBREVIATIONS),
                "adj" => self.pick(words::ADJECTIVES),
                "noun" => self.pick(words::NOUNS),
                "verb" => self.pick(words::VERBS),
                "ing" => self.pick(words::ING_VERBS),
                other => other,
            };
            out.push_str(word);
            rest = &rest[start + len + 1..];
        }
        out.push_str(rest);

        capitalize(&out)
    }
}

impl<R: Rng> TextGenerator for Faker<R> {
    fn sentence(&mut self) -> String {
        let count = self.rng.gen_range(SENTENCE_WORDS);
        let words: Vec<&str> = (0..count).map(|_| self.pick(words::WORDS)).collect();
        format!("{}.", capitalize(&words.join(" ")))
    }

    fn phrase(&mut self) -> String {
        let template = self.pick(words::PHRASES);
        self.fill(template)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

//! RandomValueProvider - primitive randomness behind every generator
//!
//! Pure functions of a seedable random source; no hidden state beyond the
//! source itself. Seeding the provider makes a whole fill pass
//! reproducible, which the test suite leans on heavily.

pub mod data;
pub mod dates;
pub mod pattern;
pub mod regex_gen;

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use regex::Regex;

use formfill_core::errors::GenerateError;

/// Strips the trailing partial word and terminal punctuation of a phrase.
static TRAILING_FRAGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[?.!,;]? ?[^ ]*$").expect("valid pattern"));

/// Non-word characters removed from free-form phrases.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]|_").expect("valid pattern"));

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid pattern"));

/// Source of all primitive randomness used by the engine.
pub struct RandomValueProvider {
    rng: StdRng,
}

impl RandomValueProvider {
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// A provider with a fixed seed; same seed, same value sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Uniform pick over a range the caller guarantees to be non-empty.
    pub(crate) fn uniform(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    pub(crate) fn chance(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// Uniform integer in `[min, max]`, inclusive.
    pub fn int(&mut self, min: i64, max: i64) -> Result<i64, GenerateError> {
        if min > max {
            return Err(GenerateError::InvalidRange { min: min as f64, max: max as f64 });
        }
        Ok(self.uniform(min, max))
    }

    /// Uniform float in `[min, max]`, rounded to `fraction_digits` places.
    pub fn float(
        &mut self,
        min: f64,
        max: f64,
        fraction_digits: u32,
    ) -> Result<f64, GenerateError> {
        if min > max {
            return Err(GenerateError::InvalidRange { min, max });
        }
        let raw = if min == max { min } else { self.rng.gen_range(min..=max) };
        let scale = 10f64.powi(fraction_digits as i32);
        Ok((raw * scale).round() / scale)
    }

    /// A numeric value rendered with exactly `fraction_digits` decimals
    /// (none when zero).
    pub fn number_string(
        &mut self,
        min: f64,
        max: f64,
        fraction_digits: u32,
    ) -> Result<String, GenerateError> {
        if fraction_digits > 0 {
            let value = self.float(min, max, fraction_digits)?;
            Ok(format!("{:.*}", fraction_digits as usize, value))
        } else {
            if min > max {
                return Err(GenerateError::InvalidRange { min, max });
            }
            Ok(self.uniform(min.round() as i64, max.round() as i64).to_string())
        }
    }

    /// Uniform pick from a slice; `None` on empty input.
    pub fn element<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    /// A pronounceable token built by alternating consonant and vowel picks
    /// until a target length chosen in `[min_len, max_len]` is reached.
    pub fn word(&mut self, min_len: u32, max_len: u32) -> String {
        let (lo, hi) = (min_len.min(max_len), min_len.max(max_len));
        let target = self.uniform(lo as i64, hi as i64) as usize;
        let mut word = String::with_capacity(target);
        let mut odd = true;

        while word.len() < target {
            let table = if odd { data::CONSONANTS } else { data::VOWELS };
            if let Some(c) = self.element(table) {
                word.push(*c);
            }
            odd = !odd;
        }

        word
    }

    /// Dictionary words joined by spaces. The first word and any word
    /// following `.` or `?` are capitalized. Keeps appending past
    /// `word_count` until `min_len` is reached; truncates to `max_len`
    /// when it is non-zero.
    pub fn words(&mut self, word_count: u32, min_len: u32, max_len: u32) -> String {
        let mut phrase = String::new();
        let mut i = 0u32;

        while i < word_count || (phrase.len() as u32) < min_len {
            let picked = self.element(data::WORD_BANK).copied().unwrap_or("lorem");
            let capitalize =
                phrase.is_empty() || phrase.ends_with('.') || phrase.ends_with('?');

            if !phrase.is_empty() {
                phrase.push(' ');
            }

            if capitalize {
                let mut chars = picked.chars();
                if let Some(first) = chars.next() {
                    phrase.extend(first.to_uppercase());
                    phrase.push_str(chars.as_str());
                }
            } else {
                phrase.push_str(picked);
            }

            i += 1;
        }

        if max_len > 0 {
            phrase.truncate(max_len as usize);
        }

        phrase
    }

    /// A sentence-shaped paragraph: random word count in
    /// `[min_words, max_words]`, trailing partial word and punctuation
    /// replaced with `!`, padded with `!` up to `min_len`.
    pub fn paragraph(
        &mut self,
        min_words: u32,
        max_words: u32,
        min_len: u32,
        max_len: u32,
    ) -> Result<String, GenerateError> {
        let word_count = self.int(min_words as i64, max_words as i64)? as u32;
        let mut phrase = self.words(word_count, min_len, max_len);

        phrase = TRAILING_FRAGMENT.replace(&phrase, "!").into_owned();

        while (phrase.len() as u32) < min_len {
            phrase.push('!');
        }

        Ok(phrase)
    }

    /// A plain word phrase with punctuation stripped, padded with a
    /// scrambled word to reach `min_len` exactly when short.
    pub fn phrase(&mut self, min_len: u32, max_len: u32) -> String {
        let length = self.uniform(5, 20) as u32;
        let mut phrase = self.words(length, min_len, max_len);

        phrase = NON_WORD.replace_all(&phrase, "").into_owned();
        phrase = WHITESPACE_RUN.replace_all(&phrase, " ").into_owned();

        if (phrase.len() as u32) < min_len {
            let missing = min_len - phrase.len() as u32;
            phrase.push_str(&self.word(missing, missing));
        }

        phrase
    }

    pub fn first_name(&mut self) -> String {
        self.element(data::FIRST_NAMES).copied().unwrap_or("Alex").to_string()
    }

    pub fn last_name(&mut self) -> String {
        self.element(data::LAST_NAMES).copied().unwrap_or("Smith").to_string()
    }

    /// A username in the common `first.last` shape with a numeric tail.
    pub fn username(&mut self) -> String {
        let first = self.first_name().to_lowercase();
        let last = self.last_name().to_lowercase();
        let tail = self.uniform(0, 99);
        format!("{first}.{last}{tail}")
    }

    pub fn organization_name(&mut self) -> String {
        let stem = self.last_name();
        let suffix = self.element(data::COMPANY_SUFFIXES).copied().unwrap_or("Group");
        format!("{stem} {suffix}")
    }

    pub fn street_address(&mut self) -> String {
        let number = self.uniform(1, 999);
        let name = self.element(data::STREET_NAMES).copied().unwrap_or("High");
        let kind = self.element(data::STREET_TYPES).copied().unwrap_or("Street");
        format!("{number} {name} {kind}")
    }

    pub fn country(&mut self) -> String {
        self.element(data::COUNTRIES).copied().unwrap_or("Australia").to_string()
    }

    pub fn domain_name(&mut self) -> String {
        let stem = self.word(5, 9);
        let tld = self.element(data::TOP_LEVEL_DOMAINS).copied().unwrap_or("com");
        format!("{stem}.{tld}")
    }

    pub fn website(&mut self) -> String {
        format!("https://{}", self.domain_name())
    }

    /// A hex RGB color, `#rrggbb`.
    pub fn color(&mut self) -> String {
        format!("#{:06x}", self.uniform(0, 0xFF_FF_FF))
    }
}

impl Default for RandomValueProvider {
    fn default() -> Self {
        Self::new()
    }
}

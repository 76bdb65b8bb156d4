//! Character-class template expansion.
//!
//! Templates substitute per character: `L`/`l`/`D` upper/lower/either-case
//! letter, `C`/`c`/`E` consonant, `V`/`v`/`F` vowel, `X` digit 1-9, `x`
//! digit 0-9. A bracketed run `[...]` passes through literally (without the
//! brackets). Any other character passes through unchanged.

use super::{data, RandomValueProvider};

impl RandomValueProvider {
    pub fn pattern_expand(&mut self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut literal = false;

        for c in template.chars() {
            match c {
                '[' => {
                    literal = true;
                    continue;
                }
                ']' => {
                    literal = false;
                    continue;
                }
                _ => {}
            }

            if literal {
                out.push(c);
                continue;
            }

            match c {
                'L' => out.push(self.pick_upper(data::ALPHABET)),
                'l' => out.push(self.pick_lower(data::ALPHABET)),
                'D' => out.push(self.pick_either(data::ALPHABET)),
                'C' => out.push(self.pick_upper(data::CONSONANTS)),
                'c' => out.push(self.pick_lower(data::CONSONANTS)),
                'E' => out.push(self.pick_either(data::CONSONANTS)),
                'V' => out.push(self.pick_upper(data::VOWELS)),
                'v' => out.push(self.pick_lower(data::VOWELS)),
                'F' => out.push(self.pick_either(data::VOWELS)),
                'X' => out.push(self.digit(1)),
                'x' => out.push(self.digit(0)),
                other => out.push(other),
            }
        }

        out
    }

    pub(crate) fn digit(&mut self, min: u32) -> char {
        char::from_digit(self.uniform(min as i64, 9) as u32, 10).unwrap_or('0')
    }

    fn pick_lower(&mut self, table: &[char]) -> char {
        self.element(table).copied().unwrap_or('a')
    }

    fn pick_upper(&mut self, table: &[char]) -> char {
        self.pick_lower(table).to_ascii_uppercase()
    }

    fn pick_either(&mut self, table: &[char]) -> char {
        let c = self.pick_lower(table);
        if self.chance() {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

// src/core/ordinal.rs
use crate::core::converter::CardinalComposer;
use crate::core::lexicon::lexicon;
use crate::core::types::{OrdinalRequest, OrdinalSuffix};

/// Turns suffixed numerals such as "23ος" into ordinal words.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdinalComposer {
    cardinal: CardinalComposer,
}

impl OrdinalComposer {
    pub fn new() -> Self {
        Self {
            cardinal: CardinalComposer::new(),
        }
    }

    /// Converts every space separated word of `token` that looks like an
    /// ordinal. Everything else is left as written.
    pub fn convert(&self, token: &str) -> String {
        token
            .split(' ')
            .map(|word| self.convert_word(word).unwrap_or_else(|| word.to_string()))
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }

    fn convert_word(&self, word: &str) -> Option<String> {
        let request = OrdinalRequest::parse(word)?;
        self.compose(request)
    }

    /// `None` when the value has no ordinal form here (zero, 2000 and up).
    pub fn compose(&self, request: OrdinalRequest) -> Option<String> {
        let OrdinalRequest { value, suffix } = request;
        let lex = lexicon();
        match value {
            0 => None,
            1..=9 => Some(format!("{}{}", lex.ordinal_stem(value)?, suffix.as_str())),
            10..=12 => {
                let word = self.cardinal.compose(&value.to_string()).ok()?;
                Some(format!("{word}τ{}", suffix.as_str()))
            }
            13..=19 => Some(format!(
                "δέκατ{s} {}{s}",
                lex.ordinal_stem(value % 10)?,
                s = suffix.as_str()
            )),
            _ => {
                if let Some(stem) = lex.ordinal_stem(value) {
                    return Some(format!("{stem}{}", suffix.stressed()));
                }
                self.compose_compound(value, suffix)
            }
        }
    }

    // Leading digit scaled to its power of ten, then the remainder:
    // 401 -> "τετρακοσιοστός πρώτος".
    fn compose_compound(&self, value: u64, suffix: OrdinalSuffix) -> Option<String> {
        let magnitude = 10u64.pow(value.ilog10());
        let head = value - value % magnitude;
        let stem = lexicon().ordinal_stem(head)?;
        let mut out = format!("{stem}{}", suffix.stressed());

        let rest = value % magnitude;
        if rest > 0 {
            out.push(' ');
            out.push_str(&self.compose(OrdinalRequest {
                value: rest,
                suffix,
            })?);
        }
        Some(out)
    }
}

/// Best-effort ordinal conversion; unconvertible tokens come back unchanged.
pub fn convert_ordinal(token: &str) -> String {
    OrdinalComposer::new().convert(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn irregular_stems() {
        assert_eq!(convert_ordinal("1ος"), "πρώτος");
        assert_eq!(convert_ordinal("5η"), "πέμπτη");
        assert_eq!(convert_ordinal("8ο"), "όγδοο");
        assert_eq!(convert_ordinal("2οι"), "δεύτεροι");
    }

    #[test]
    fn round_values_take_a_stressed_suffix() {
        assert_eq!(convert_ordinal("20ος"), "εικοστός");
        assert_eq!(convert_ordinal("100η"), "εκατοστή");
        assert_eq!(convert_ordinal("1000οι"), "χιλιοστοί");
        assert_eq!(convert_ordinal("30ες"), "τριαντακοστές");
    }

    #[test]
    fn ten_to_twelve_use_the_cardinal_word() {
        assert_eq!(convert_ordinal("10ος"), "δέκατος");
        assert_eq!(convert_ordinal("11ος"), "έντεκατος");
        assert_eq!(convert_ordinal("12ος"), "δώδεκατος");
        assert_eq!(convert_ordinal("12η"), "δώδεκατη");
    }

    #[test]
    fn suffix_is_written_in_lowercase() {
        assert_eq!(convert_ordinal("4ΟΙ"), "τέταρτοι");
    }

    #[test]
    fn teens_are_two_words() {
        assert_eq!(convert_ordinal("13ος"), "δέκατος τρίτος");
        assert_eq!(convert_ordinal("17α"), "δέκατα έβδομα");
    }

    #[test]
    fn compound_values() {
        assert_eq!(convert_ordinal("23ος"), "εικοστός τρίτος");
        assert_eq!(convert_ordinal("21οι"), "εικοστοί πρώτοι");
        assert_eq!(convert_ordinal("103ος"), "εκατοστός τρίτος");
        assert_eq!(convert_ordinal("115ος"), "εκατοστός δέκατος πέμπτος");
        assert_eq!(convert_ordinal("401η"), "τετρακοσιοστή πρώτη");
        assert_eq!(convert_ordinal("1200ες"), "χιλιοστές διακοσιοστές");
    }

    #[test]
    fn unconvertible_tokens_pass_through() {
        assert_eq!(convert_ordinal("2000ος"), "2000ος");
        assert_eq!(convert_ordinal("0ος"), "0ος");
        assert_eq!(convert_ordinal("ος23"), "ος23");
        assert_eq!(convert_ordinal("10α10"), "10α10");
        assert_eq!(convert_ordinal("5ων"), "5ων");
        assert_eq!(convert_ordinal("γεια"), "γεια");
    }

    #[test]
    fn converts_each_word() {
        assert_eq!(convert_ordinal("ο 1ος και ο 2ος"), "ο πρώτος και ο δεύτερος");
    }
}

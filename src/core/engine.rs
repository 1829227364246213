use crate::core::converter::CardinalComposer;
use crate::core::ordinal::OrdinalComposer;
use crate::core::preprocess::{handle_commas, handle_hours};
use crate::core::types::{DigitGroup, OrdinalRequest};
use crate::error::ConversionResult;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

static LETTERS_THEN_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([a-zα-ωά-ώϊΐϋΰ]+)([0-9].*)$").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static SPACE_BEFORE_STOP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s([.?])").unwrap());

/// What to do with a numeral that cannot be converted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Leave the token as written and log a warning.
    #[default]
    Keep,
    /// Fail the whole sentence.
    Abort,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOptions {
    pub lowercase: bool,
    pub on_error: ErrorPolicy,
}

// The sentence engine is composed of the two numeral composers plus the
// token rewrites that feed them.
#[derive(Debug, Clone, Default)]
pub struct NumeralEngine {
    pub cardinal: CardinalComposer,
    pub ordinal: OrdinalComposer,
    options: EngineOptions,
}

impl NumeralEngine {
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    pub fn with_options(options: EngineOptions) -> Self {
        Self {
            cardinal: CardinalComposer::new(),
            ordinal: OrdinalComposer::new(),
            options,
        }
    }

    /// Spells out every numeral of a line of text.
    pub fn convert_sentence(&self, sentence: &str) -> ConversionResult<String> {
        if sentence.trim().is_empty() {
            return Ok(sentence.to_string());
        }
        let sentence = if self.options.lowercase {
            sentence.to_lowercase()
        } else {
            sentence.to_string()
        };

        let mut words = Vec::new();
        for complex in sentence.split_whitespace() {
            // 1. Decimal commas and clock times
            let rewritten = handle_hours(&handle_commas(complex));
            for word in rewritten.split_whitespace() {
                // 2. Words glued to a number ("είναι2") are split apart
                for piece in split_letters_digits(word) {
                    words.push(self.convert_token(piece)?);
                }
            }
        }

        // 3. Re-join, gluing full stops and question marks back on
        let joined = words.join(" ");
        let joined = WHITESPACE.replace_all(&joined, " ");
        let joined = SPACE_BEFORE_STOP.replace_all(&joined, "$1");
        Ok(joined.trim().to_string())
    }

    /// Converts a single whitespace-free token: cardinals first, then
    /// suffixed ordinals; anything else is returned as is.
    pub fn convert_token(&self, token: &str) -> ConversionResult<String> {
        if DigitGroup::parse(token).is_some() {
            return match self.cardinal.convert(token) {
                Ok(phrase) => Ok(phrase),
                Err(e) if self.options.on_error == ErrorPolicy::Keep => {
                    warn!(token, error = %e, "leaving numeral unconverted");
                    Ok(token.to_string())
                }
                Err(e) => Err(e),
            };
        }
        if OrdinalRequest::parse(token).is_some() {
            let converted = self.ordinal.convert(token);
            if converted == token {
                debug!(token, "no ordinal form, keeping token");
            }
            return Ok(converted);
        }
        Ok(token.to_string())
    }
}

fn split_letters_digits(word: &str) -> Vec<&str> {
    match LETTERS_THEN_DIGITS.captures(word) {
        Some(caps) => caps
            .iter()
            .skip(1)
            .flatten()
            .map(|m| m.as_str())
            .collect(),
        None => vec![word],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConversionError;

    #[test]
    fn converts_numbers_inside_text() {
        let engine = NumeralEngine::new();
        assert_eq!(
            engine.convert_sentence("Πλήρωσα 100 ευρώ.").unwrap(),
            "Πλήρωσα εκατό ευρώ."
        );
        assert_eq!(
            engine.convert_sentence("είχαν 9 . οι άλλοι είχαν 10 .").unwrap(),
            "είχαν εννιά. οι άλλοι είχαν δέκα."
        );
    }

    #[test]
    fn decimal_comma() {
        let engine = NumeralEngine::new();
        assert_eq!(
            engine.convert_sentence("2,98").unwrap(),
            "δύο κόμμα ενενήντα οχτώ"
        );
        assert_eq!(engine.convert_sentence("5,0000").unwrap(), "πέντε κόμμα");
    }

    #[test]
    fn clock_times() {
        let engine = NumeralEngine::new();
        assert_eq!(
            engine.convert_sentence("στις 10:45 ή στις 8:30").unwrap(),
            "στις δέκα και σαράντα πέντε ή στις οχτώ και μισή"
        );
    }

    #[test]
    fn ordinals_in_text() {
        let engine = NumeralEngine::new();
        assert_eq!(
            engine.convert_sentence("ήρθε 23ος στον αγώνα").unwrap(),
            "ήρθε εικοστός τρίτος στον αγώνα"
        );
    }

    #[test]
    fn glued_words_are_split() {
        let engine = NumeralEngine::new();
        assert_eq!(engine.convert_sentence("είναι2").unwrap(), "είναι δύο");
        assert_eq!(
            engine.convert_sentence("ήταν2ος").unwrap(),
            "ήταν δεύτερος"
        );
    }

    #[test]
    fn whitespace_is_collapsed_and_blank_lines_kept() {
        let engine = NumeralEngine::new();
        assert_eq!(engine.convert_sentence("  3   γάτες ").unwrap(), "τρία γάτες");
        assert_eq!(engine.convert_sentence("   ").unwrap(), "   ");
    }

    #[test]
    fn lowercase_option() {
        let engine = NumeralEngine::with_options(EngineOptions {
            lowercase: true,
            ..Default::default()
        });
        assert_eq!(engine.convert_sentence("ΕΧΩ 5").unwrap(), "εχω πέντε");
    }

    #[test]
    fn error_policy() {
        let too_long = "123456789012345";
        let keep = NumeralEngine::new();
        assert_eq!(
            keep.convert_sentence(&format!("αριθμός {too_long}")).unwrap(),
            format!("αριθμός {too_long}")
        );

        let abort = NumeralEngine::with_options(EngineOptions {
            on_error: ErrorPolicy::Abort,
            ..Default::default()
        });
        assert!(matches!(
            abort.convert_sentence(too_long),
            Err(ConversionError::Unsupported { .. })
        ));
    }
}

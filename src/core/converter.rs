// src/core/converter.rs
use crate::core::lexicon::{lexicon, to_plural, SCALES, THOUSANDS};
use crate::core::types::{DigitGroup, MAX_DIGITS};
use crate::error::{ConversionError, ConversionResult};

/// Spells out cardinal numbers of up to 13 digits in Greek.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardinalComposer;

impl CardinalComposer {
    pub fn new() -> Self {
        Self
    }

    /// Converts a whole token. Tokens that are not made of ASCII digits are
    /// handed back untouched (after trimming).
    pub fn convert(&self, token: &str) -> ConversionResult<String> {
        let token = token.trim();
        if DigitGroup::parse(token).is_none() {
            return Ok(token.to_string());
        }
        let group = DigitGroup::new(token)?;
        self.compose(group.as_str())
    }

    /// Recursive composition, dispatched on the width of `digits`.
    /// `digits` must hold ASCII digits only.
    pub fn compose(&self, digits: &str) -> ConversionResult<String> {
        let width = digits.len();
        if width == 0 {
            return Ok(String::new());
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(digits, width));
        }
        if width > MAX_DIGITS {
            return Err(ConversionError::Unsupported {
                digits: digits.to_string(),
                max: MAX_DIGITS,
            });
        }
        let lex = lexicon();

        if width == 1 {
            return lex
                .exact(1, digits)
                .map(str::to_string)
                .ok_or_else(|| invalid(digits, 1));
        }
        if let Some(word) = lex.exact(width, digits) {
            return Ok(word.to_string());
        }

        // Exactly one million/billion/trillion takes the singular noun.
        if width >= 7 && (width - 7) % 3 == 0 && digits.starts_with('1') {
            let (singular, _) = SCALES[(width - 7) / 3];
            let rest = self.compose(&digits[1..])?;
            return Ok(join(singular, &rest));
        }

        let stripped = digits.trim_start_matches('0');
        if stripped.len() < width {
            return self.compose(stripped);
        }

        let phrase = match width {
            2 => {
                let prefix = leading(2, digits)?;
                let ones = self.compose(&digits[1..])?;
                format!("{prefix}{ones}")
            }
            3 | 4 => {
                let prefix = leading(width, digits)?;
                let rest = self.compose(&digits[1..])?;
                join(prefix, &rest)
            }
            5 | 6 => {
                let (high, low) = digits.split_at(width - 3);
                if high.bytes().all(|b| b == b'0') {
                    return self.compose(low);
                }
                let high = to_plural(&self.compose(high)?);
                let low = self.compose(low)?;
                join(&format!("{high} {THOUSANDS}"), &low)
            }
            _ => {
                let scale = (width - 7) / 3;
                let (_, plural) = SCALES[scale];
                let (high, low) = digits.split_at(width - 6 - 3 * scale);
                let high = self.compose(high)?;
                let low = self.compose(low)?;
                join(&format!("{high} {plural}"), &low)
            }
        };
        Ok(phrase.trim().to_string())
    }
}

fn leading(width: usize, digits: &str) -> ConversionResult<&'static str> {
    let key = &digits[..1];
    lexicon()
        .exact(width, key)
        .ok_or_else(|| invalid(key, width))
}

fn invalid(key: &str, width: usize) -> ConversionError {
    ConversionError::InvalidDigit {
        key: key.to_string(),
        width,
    }
}

fn join(head: &str, tail: &str) -> String {
    if tail.is_empty() {
        head.trim().to_string()
    } else {
        format!("{} {}", head.trim(), tail)
    }
}

/// Converts `token` to its Greek cardinal phrase; non-numeric tokens pass
/// through unchanged.
pub fn convert_numeral(token: &str) -> ConversionResult<String> {
    CardinalComposer::new().convert(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cardinal(s: &str) -> String {
        convert_numeral(s).unwrap()
    }

    #[test]
    fn single_digits() {
        let words = [
            "μηδέν", "ένα", "δύο", "τρία", "τέσσερα", "πέντε", "έξι", "εφτά", "οχτώ", "εννιά",
        ];
        for (d, word) in words.iter().enumerate() {
            assert_eq!(cardinal(&d.to_string()), *word);
        }
    }

    #[test]
    fn two_digits() {
        assert_eq!(cardinal("10"), "δέκα");
        assert_eq!(cardinal("11"), "έντεκα");
        assert_eq!(cardinal("13"), "δεκατρία");
        assert_eq!(cardinal("19"), "δεκαεννιά");
        assert_eq!(cardinal("40"), "σαράντα");
        assert_eq!(cardinal("21"), "είκοσι ένα");
        assert_eq!(cardinal("98"), "ενενήντα οχτώ");
    }

    #[test]
    fn three_and_four_digits() {
        assert_eq!(cardinal("100"), "εκατό");
        assert_eq!(cardinal("101"), "εκατόν ένα");
        assert_eq!(cardinal("115"), "εκατόν δεκαπέντε");
        assert_eq!(cardinal("387"), "τριακόσια ογδόντα εφτά");
        assert_eq!(cardinal("1000"), "χίλια");
        assert_eq!(cardinal("1001"), "χίλια ένα");
        assert_eq!(cardinal("7000"), "εφτά χιλιάδες");
        assert_eq!(cardinal("2024"), "δυο χιλιάδες είκοσι τέσσερα");
        assert_eq!(cardinal("3450"), "τρεις χιλιάδες τετρακόσια πενήντα");
    }

    #[test]
    fn leading_zeros_are_stripped() {
        assert_eq!(cardinal("007"), cardinal("7"));
        assert_eq!(cardinal("0102"), cardinal("102"));
        assert_eq!(cardinal("000183"), "εκατόν ογδόντα τρία");
        assert_eq!(cardinal("00"), "");
    }

    #[test]
    fn all_zero_groups_are_empty() {
        for width in 2..=MAX_DIGITS {
            assert_eq!(cardinal(&"0".repeat(width)), "", "width {width}");
        }
        assert_eq!(cardinal("50000"), "πενήντα χιλιάδες");
    }

    #[test]
    fn thousands_plural_agreement() {
        assert_eq!(cardinal("13000"), "δεκατρείς χιλιάδες");
        assert_eq!(cardinal("14500"), "δεκατέσσερις χιλιάδες πεντακόσια");
        assert_eq!(cardinal("10000"), "δέκα χιλιάδες");
        assert_eq!(cardinal("24000"), "είκοσι τέσσερις χιλιάδες");
        assert_eq!(cardinal("200000"), "διακόσιες χιλιάδες");
        assert_eq!(
            cardinal("113789"),
            "εκατόν δεκατρείς χιλιάδες εφτακόσια ογδόντα εννιά"
        );
    }

    #[test]
    fn trailing_remainder_keeps_cardinal_form() {
        assert_eq!(cardinal("20003"), "είκοσι χιλιάδες τρία");
    }

    #[test]
    fn millions() {
        assert_eq!(cardinal("1000000"), "ένα εκατομμύριο");
        assert_eq!(cardinal("1000001"), "ένα εκατομμύριο ένα");
        assert_eq!(cardinal("2000000"), "δύο εκατομμύρια");
        assert!(cardinal("2500000").starts_with("δύο εκατομμύρια"));
        assert_eq!(cardinal("10000000"), "δέκα εκατομμύρια");
        assert_eq!(cardinal("300001000"), "τριακόσια εκατομμύρια χίλια");
    }

    #[test]
    fn billions_and_trillions() {
        assert_eq!(cardinal("1000000000"), "ένα δισεκατομμύριο");
        assert_eq!(cardinal("1001000000"), "ένα δισεκατομμύριο ένα εκατομμύριο");
        assert_eq!(cardinal("5000000000"), "πέντε δισεκατομμύρια");
        assert_eq!(cardinal("12000000003"), "δώδεκα δισεκατομμύρια τρία");
        assert_eq!(cardinal("1000000000000"), "ένα τρισεκατομμύριο");
        assert!(cardinal("9999999999999").starts_with("εννιά τρισεκατομμύρια"));
    }

    #[test]
    fn more_than_thirteen_digits_is_unsupported() {
        assert!(matches!(
            convert_numeral("12345678901234"),
            Err(ConversionError::Unsupported { .. })
        ));
    }

    #[test]
    fn compose_rejects_separators() {
        let composer = CardinalComposer::new();
        assert!(matches!(
            composer.compose("1.000"),
            Err(ConversionError::InvalidDigit { .. })
        ));
        assert_eq!(composer.compose("").unwrap(), "");
    }

    #[test]
    fn non_numeric_passes_through() {
        assert_eq!(cardinal("γεια"), "γεια");
        assert_eq!(cardinal("12ab"), "12ab");
        assert_eq!(cardinal("  42  "), "σαράντα δύο");
        assert_eq!(cardinal(""), "");
    }
}

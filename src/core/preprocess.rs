// src/core/preprocess.rs
//! Token rewrites that run before numeral conversion: decimal commas and
//! clock times.

const COMMA: char = ',';
const DECIMAL_WORD: &str = "κόμμα";

/// Rewrites the commas of a token.
///
/// A comma between two digits is spoken ("2,98" -> "2 κόμμα 98"), as is a
/// trailing comma after a digit, where the decimals presumably follow in the
/// next token. A leading comma or a trailing one after a non-digit is
/// dropped; any other comma becomes a space.
pub fn handle_commas(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    while let Some(mut idx) = chars.iter().position(|&c| c == COMMA) {
        if idx == 0 {
            chars.remove(0);
            continue;
        }
        if chars[idx - 1] == ' ' {
            chars.remove(idx - 1);
            idx -= 1;
        }
        if chars.get(idx + 1) == Some(&' ') {
            chars.remove(idx + 1);
        }

        let before = idx.checked_sub(1).map(|i| chars[i]);
        let after = chars.get(idx + 1).copied();
        let replacement = match (before, after) {
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {
                format!(" {DECIMAL_WORD} ")
            }
            (Some(b), None) if b.is_ascii_digit() => format!(" {DECIMAL_WORD}"),
            (None, _) | (_, None) => String::new(),
            _ => " ".to_string(),
        };
        chars.splice(idx..=idx, replacement.chars());
    }
    chars.into_iter().collect()
}

/// Rewrites an `H:MM` clock time into its spoken shape, "H και MM".
///
/// Quarter and half past are said as words ("τέταρτο", "μισή"), and the
/// hours 1, 3 and 4 take their feminine forms. Hours outside 1..=12 mean the
/// token is not a time and it is returned as is.
pub fn handle_hours(word: &str) -> String {
    let Some((hour, minutes)) = word.split_once(':') else {
        return word.to_string();
    };
    if hour.is_empty() || minutes.is_empty() || minutes.contains(':') {
        return word.to_string();
    }
    // A non-numeric hour side is still rewritten.
    if let Ok(h) = hour.parse::<i64>() {
        if !(1..=12).contains(&h) {
            return word.to_string();
        }
    }

    let mut out = word.replacen(':', " και ", 1);
    let spoken_hour = match hour {
        "1" => Some("μία"),
        "3" => Some("τρείς"),
        "4" => Some("τέσσερις"),
        _ => None,
    };
    if let Some(spoken) = spoken_hour {
        out.replace_range(..hour.len(), spoken);
    }
    match minutes {
        "15" => out.replace("15", "τέταρτο"),
        "30" => out.replace("30", "μισή"),
        _ => out,
    }
}

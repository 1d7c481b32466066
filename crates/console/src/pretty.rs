//! JSON pretty-printing.

use crate::colour::{ColourMode, ColourUtils, make_colour_utils};
use seclog_shared::Result;
use serde::Serialize;

/// Serialize `value` as JSON indented by two spaces.
pub fn pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// [`pretty_json`] with every token coloured.
///
/// Keys are magenta, strings yellow, numbers green, booleans cyan, `null`
/// and punctuation gray. Stripping the escape codes yields exactly the
/// [`pretty_json`] output.
pub fn colour_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let plain = pretty_json(value)?;
    Ok(colourise(&plain, make_colour_utils(ColourMode::WithColour)))
}

/// Alias of [`colour_pretty_json`].
pub fn color_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    colour_pretty_json(value)
}

fn colourise(json: &str, colours: ColourUtils) -> String {
    let mut output = String::with_capacity(json.len() * 2);
    let mut rest = json;

    while let Some(first) = rest.chars().next() {
        let (token, tail) = match first {
            '"' => {
                let end = string_end(rest);
                let (token, tail) = rest.split_at(end);
                let is_key = tail.trim_start().starts_with(':');
                let painted = if is_key {
                    colours.magenta(token)
                } else {
                    colours.yellow(token)
                };
                output.push_str(&painted);
                rest = tail;
                continue;
            },
            '{' | '}' | '[' | ']' | ',' | ':' => rest.split_at(first.len_utf8()),
            't' | 'f' | 'n' => {
                let end = rest
                    .find(|ch: char| !ch.is_ascii_alphabetic())
                    .unwrap_or(rest.len());
                let (word, tail) = rest.split_at(end);
                let painted = if word == "null" {
                    colours.gray(word)
                } else {
                    colours.cyan(word)
                };
                output.push_str(&painted);
                rest = tail;
                continue;
            },
            '-' | '0'..='9' => {
                let end = rest
                    .find(|ch: char| !matches!(ch, '-' | '+' | '.' | 'e' | 'E' | '0'..='9'))
                    .unwrap_or(rest.len());
                let (number, tail) = rest.split_at(end);
                output.push_str(&colours.green(number));
                rest = tail;
                continue;
            },
            _ => {
                let end = rest
                    .find(|ch: char| !ch.is_whitespace())
                    .unwrap_or(rest.len())
                    .max(first.len_utf8());
                let (space, tail) = rest.split_at(end);
                output.push_str(space);
                rest = tail;
                continue;
            },
        };
        output.push_str(&colours.gray(token));
        rest = tail;
    }

    output
}

// Byte offset just past the closing quote of the string literal at the start
// of `input`.
fn string_end(input: &str) -> usize {
    let mut escaped = false;
    for (index, ch) in input.char_indices().skip(1) {
        match ch {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => return index + 1,
            _ => {},
        }
    }
    input.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn strip(text: &str) -> String {
        String::from_utf8_lossy(&strip_ansi_escapes::strip(text.as_bytes())).into_owned()
    }

    #[test]
    fn pretty_json_uses_two_space_indent() {
        let output = pretty_json(&json!({ "a": 1 })).unwrap_or_default();
        assert_eq!(output, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn pretty_json_handles_scalars_and_empty_containers() {
        assert_eq!(pretty_json(&json!(null)).ok().as_deref(), Some("null"));
        assert_eq!(pretty_json("hi").ok().as_deref(), Some("\"hi\""));
        assert_eq!(pretty_json(&json!({})).ok().as_deref(), Some("{}"));
        assert_eq!(pretty_json(&json!([])).ok().as_deref(), Some("[]"));
    }

    #[test]
    fn coloured_output_strips_back_to_plain_output() {
        let value = json!({
            "name": "seclog",
            "tricky": "quote \" and colon: {inside}",
            "count": -12.5e3,
            "ok": true,
            "off": false,
            "missing": null,
            "nested": { "list": [1, "two", [], {}] },
            "unicode": "héllo"
        });

        let plain = pretty_json(&value).unwrap_or_default();
        let coloured = colour_pretty_json(&value).unwrap_or_default();

        assert_ne!(coloured, plain);
        assert_eq!(strip(&coloured), plain);
    }

    #[test]
    fn keys_and_string_values_get_different_colours() {
        let coloured = colour_pretty_json(&json!({ "k": "k" })).unwrap_or_default();
        let utils = make_colour_utils(ColourMode::WithColour);
        assert!(coloured.contains(&utils.magenta("\"k\"")));
        assert!(coloured.contains(&utils.yellow("\"k\"")));
    }

    #[test]
    fn numbers_are_green() {
        let coloured = colour_pretty_json(&json!({ "a": 1 })).unwrap_or_default();
        let utils = make_colour_utils(ColourMode::WithColour);
        assert!(coloured.contains(&utils.green("1")));
        assert_ne!(utils.green("1"), utils.yellow("1"));
    }

    #[test]
    fn alias_matches_colour_pretty_json() {
        let value = json!([1, 2, 3]);
        assert_eq!(
            color_pretty_json(&value).ok(),
            colour_pretty_json(&value).ok()
        );
    }

    #[test]
    fn struct_field_order_is_preserved() {
        #[derive(Serialize)]
        struct Sample {
            zeta: u8,
            alpha: u8,
        }

        let plain = pretty_json(&Sample { zeta: 1, alpha: 2 }).unwrap_or_default();
        assert_eq!(plain, "{\n  \"zeta\": 1,\n  \"alpha\": 2\n}");
        let coloured = colour_pretty_json(&Sample { zeta: 1, alpha: 2 }).unwrap_or_default();
        assert_eq!(strip(&coloured), plain);
    }
}

//! Axis word parsing

use pathpreview_core::{GcodeError, PartialPoint};
use regex::Regex;
use std::sync::OnceLock;

/// Remove comments from a G-Code line
///
/// `(...)` comments are dropped up to their closing parenthesis, or to the
/// end of the line when unclosed. A `;` drops the rest of the line.
pub fn remove_comments(line: &str) -> String {
    static COMMENT_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = COMMENT_REGEX
        .get_or_init(|| Regex::new(r"\([^)]*\)?|;.*").expect("invalid regex pattern"));
    regex.replace_all(line, " ").trim().to_string()
}

/// Parse the X, Y, Z, I and J words of a command line
///
/// Each word is the axis letter immediately followed by a signed decimal,
/// e.g. `X-12.5`. Words for other letters (`G`, `F`, `S`, ...) are skipped.
/// A recognised axis letter with a missing or non-numeric value is an error
/// naming the line and token. `line_number` is 1-based and only used for
/// reporting.
pub fn parse_axes(line: &str, line_number: usize) -> Result<PartialPoint, GcodeError> {
    let mut partial = PartialPoint::new();

    for token in line.split_whitespace() {
        let Some(first_char) = token.chars().next() else {
            continue;
        };
        let slot = match first_char.to_ascii_uppercase() {
            'X' => &mut partial.x,
            'Y' => &mut partial.y,
            'Z' => &mut partial.z,
            'I' => &mut partial.i,
            'J' => &mut partial.j,
            _ => continue,
        };
        *slot = Some(parse_value(token, line, line_number)?);
    }

    Ok(partial)
}

fn parse_value(token: &str, line: &str, line_number: usize) -> Result<f64, GcodeError> {
    let invalid = |reason: &str| GcodeError::InvalidParameter {
        line_number,
        param: token.to_string(),
        reason: reason.to_string(),
        line: line.to_string(),
    };

    let raw = &token[1..];
    if raw.is_empty() {
        return Err(invalid("missing value"));
    }

    let value = raw
        .parse::<f64>()
        .map_err(|_| invalid("not a decimal number"))?;
    if !value.is_finite() {
        return Err(invalid("value is not finite"));
    }
    Ok(value)
}

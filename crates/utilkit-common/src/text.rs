//! Small text transformations.

use std::fmt::{Display, Write as _};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

#[derive(thiserror::Error, Debug)]
pub enum TextError {
    #[error("'{0}' is not a CamelCase identifier")]
    NotCamelCase(String),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

const DIGITS: [&str; 11] = ["", "一", "二", "三", "四", "五", "六", "七", "八", "九", "十"];

/// Spell `num` in Chinese numerals. Only `0..=99` is supported; anything else is `""`.
pub fn chinese_num(num: i64) -> String {
    match num {
        0 => "零".to_string(),
        1..=10 => DIGITS[num as usize].to_string(),
        11..=19 => format!("{}{}", DIGITS[10], DIGITS[(num % 10) as usize]),
        20..=99 => format!(
            "{}{}{}",
            DIGITS[(num / 10) as usize],
            DIGITS[10],
            DIGITS[(num % 10) as usize]
        ),
        _ => String::new(),
    }
}

/// Remove ASCII control characters (`\x00`-`\x1f` and `\x7f`).
pub fn strip_control(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '\u{0}'..='\u{1f}' | '\u{7f}'))
        .collect()
}

/// Trimmed, non-blank lines of a textarea-like value.
pub fn rm_around_space(value: &str) -> Vec<String> {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Non-blank lines of a textarea-like value, each split on inner whitespace.
pub fn split_rows(value: &str) -> Vec<Vec<String>> {
    value
        .lines()
        .map(|line| line.split_whitespace().map(String::from).collect::<Vec<_>>())
        .filter(|row| !row.is_empty())
        .collect()
}

/// `UserGroup` -> `user_group`. The empty string maps to itself.
pub fn camel_to_snake(value: &str) -> Result<String, TextError> {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return Ok(String::new());
    };

    if !first.is_ascii_uppercase() || !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(TextError::NotCamelCase(value.to_string()));
    }

    let mut out = String::with_capacity(value.len() + 4);
    out.push(first.to_ascii_lowercase());
    for c in chars {
        if c.is_ascii_uppercase() {
            out.push('_');
        }
        out.push(c.to_ascii_lowercase());
    }
    Ok(out)
}

/// Serialize `data` as JSON indented by four spaces. With `show_unicode == false` every
/// non-ASCII character is written as a `\uXXXX` escape.
pub fn indent_data<T: Serialize + ?Sized>(data: &T, show_unicode: bool) -> Result<String, TextError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    data.serialize(&mut ser)?;

    let text = String::from_utf8_lossy(&buf);
    if show_unicode {
        return Ok(text.into_owned());
    }

    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii() {
            escaped.push(c);
        } else {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                let _ = write!(escaped, "\\u{unit:04x}");
            }
        }
    }
    Ok(escaped)
}

/// Lay out `rows` as a fixed-width table under `header`: columns are separated by two
/// spaces and padded to their widest cell, missing values print as `None`.
pub fn format_rows<H, V>(header: &[H], rows: &[Vec<Option<V>>]) -> String
where
    H: AsRef<str>,
    V: Display,
{
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            (0..header.len())
                .map(|i| match row.get(i) {
                    Some(Some(v)) => v.to_string(),
                    _ => "None".to_string(),
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(h.as_ref().chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let render = |values: Vec<String>| -> String {
        values
            .iter()
            .zip(&widths)
            .map(|(v, &w)| format!("{v:<w$}"))
            .collect::<Vec<_>>()
            .join("  ")
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render(header.iter().map(|h| h.as_ref().to_string()).collect()));
    lines.push(render(widths.iter().map(|&w| "-".repeat(w)).collect()));
    lines.extend(cells.into_iter().map(render));
    lines.join("\n")
}

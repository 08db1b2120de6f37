//! SQL text helpers for query builders and debugging output.

use std::fmt::{Display, Formatter};

use crate::ExtrasError;

/// `COUNT(*)`, for query builders that take a raw select expression.
pub fn count_all() -> &'static str {
    "COUNT(*)"
}

/// A positional query parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Display for Param {
    /// Every non-null value is written as a single-quoted literal.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Param::Null => write!(f, "NULL"),
            Param::Bool(v) => write!(f, "'{}'", u8::from(*v)),
            Param::Int(v) => write!(f, "'{v}'"),
            Param::Float(v) => write!(f, "'{v}'"),
            Param::Text(v) => write!(f, "'{}'", v.replace('\'', "''")),
        }
    }
}

impl From<bool> for Param {
    fn from(value: bool) -> Self {
        Param::Bool(value)
    }
}

impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Param::Int(value)
    }
}

impl From<i32> for Param {
    fn from(value: i32) -> Self {
        Param::Int(i64::from(value))
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Param::Float(value)
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::Text(value.to_string())
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Param::Text(value)
    }
}

impl<T: Into<Param>> From<Option<T>> for Param {
    fn from(value: Option<T>) -> Self {
        value.map_or(Param::Null, Into::into)
    }
}

/// Inline `params` into `sql` in place of its `?` or `%s` placeholders.
///
/// Placeholders inside single-quoted literals are left alone. The result is for logging
/// and debugging only; never execute it.
///
/// ```
/// use utilkit_extras::sql::{render, Param};
///
/// let sql = render("SELECT * FROM user WHERE name = ? AND id > %s", &["ann".into(), Param::Int(3)])?;
/// assert_eq!(sql, "SELECT * FROM user WHERE name = 'ann' AND id > '3'");
/// # Ok::<(), utilkit_extras::ExtrasError>(())
/// ```
pub fn render(sql: &str, params: &[Param]) -> Result<String, ExtrasError> {
    let mut out = String::with_capacity(sql.len() + params.len() * 8);
    let mut params_iter = params.iter();
    let mut placeholders = 0;
    let mut quoted = false;

    let mut chars = sql.chars().peekable();
    while let Some(c) = chars.next() {
        let is_placeholder = !quoted
            && match c {
                '?' => true,
                '%' if chars.peek() == Some(&'s') => {
                    chars.next();
                    true
                }
                _ => false,
            };

        if is_placeholder {
            placeholders += 1;
            if let Some(param) = params_iter.next() {
                out.push_str(&param.to_string());
            }
            continue;
        }

        // a doubled quote inside a literal toggles twice
        if c == '\'' {
            quoted = !quoted;
        }
        out.push(c);
    }

    if placeholders != params.len() {
        return Err(ExtrasError::ParamCount {
            placeholders,
            params: params.len(),
        });
    }
    Ok(out)
}

use tracing::debug;

use crate::{Literal, arg::Arg, error::Result};

/// Splits raw SQL at its `?` placeholders.
///
/// A `?` inside a `'string'` literal or a `"quoted"` identifier is text, as
/// are the jsonb operators `??`, `?|` and `?&`. Doubled quotes escape a quote
/// inside either form.
pub(crate) fn split_placeholders(sql: &str) -> Vec<&str> {
    enum State {
        Normal,
        Ident,
        Lit,
    }

    let mut state = State::Normal;
    let mut pieces = Vec::new();
    let mut span_start = 0;

    let mut chars = sql.char_indices().peekable();
    while let Some((index, char)) = chars.next() {
        match state {
            State::Normal => {
                if char == '\'' {
                    state = State::Lit;
                } else if char == '"' {
                    state = State::Ident;
                } else if char == '?' {
                    let is_placeholder = match chars.peek() {
                        Some(&(_, next_ch)) => next_ch != '?' && next_ch != '|' && next_ch != '&',
                        None => true,
                    };

                    if is_placeholder {
                        pieces.push(&sql[span_start..index]);
                        span_start = index + char.len_utf8();
                    } else {
                        // operator, skip its second char
                        chars.next();
                    }
                }
            }
            State::Ident => {
                if char == '"' {
                    if let Some(&(_, '"')) = chars.peek() {
                        chars.next();
                    } else {
                        state = State::Normal;
                    }
                }
            }
            State::Lit => {
                if char == '\'' {
                    if let Some(&(_, '\'')) = chars.peek() {
                        chars.next();
                    } else {
                        state = State::Normal;
                    }
                }
            }
        }
    }

    pieces.push(&sql[span_start..]);
    pieces
}

impl Literal {
    /// Builds a literal from SQL text using `?` as the value slot marker.
    pub fn raw<A>(sql: &str, args: A) -> Result<Self>
    where
        A: IntoIterator<Item = Arg>,
    {
        Literal::new(split_placeholders(sql), args)
            .inspect_err(|err| debug!(sql, %err, "raw sql rejected"))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, IntoArg, Value, dialect::Dialect, tests::format_writer};

    use super::*;

    #[test]
    fn test_raw_str() {
        let value = Literal::raw("'te?st'", []).unwrap();
        let raw = format_writer(&value, Dialect::Postgres);
        assert_eq!("'te?st'", raw);
    }

    #[test]
    fn test_raw_double_quote() {
        let value = Literal::raw("'te''? st'", []).unwrap();
        let raw = format_writer(&value, Dialect::Postgres);
        assert_eq!("'te''? st'", raw);
    }

    #[test]
    fn test_raw_bind() {
        let value = Literal::raw("'test' = ?", [5i32.into_arg()]).unwrap();
        let raw = format_writer(&value, Dialect::Postgres);
        assert_eq!("'test' = $1", raw);
        assert_eq!(&[Value::I32(5)], value.values());
    }

    #[test]
    fn test_raw_ident() {
        let value = Literal::raw("\"te? ? \"\"st\" = ?", [1i32.into_arg()]).unwrap();
        let raw = format_writer(&value, Dialect::Postgres);
        assert_eq!("\"te? ? \"\"st\" = $1", raw);
    }

    #[test]
    fn test_placeholder_double() {
        let value = Literal::raw("test ??", []).unwrap();
        let raw = format_writer(&value, Dialect::Postgres);
        assert_eq!("test ??", raw);

        let value = Literal::raw("data ?| ? and data ?& ?", ["a".into_arg(), "b".into_arg()]).unwrap();
        assert_eq!("data ?| $1 and data ?& $2", value.text());
    }

    #[test]
    fn test_raw_keeps_mysql_markers() {
        let value = Literal::raw("price + ? as fee, ?)", [5i32.into_arg(), 6i32.into_arg()]).unwrap();
        assert_eq!("price + ? as fee, ?)", format_writer(&value, Dialect::MySql));
        assert_eq!("price + $1 as fee, $2)", value.text());
    }

    #[test]
    fn test_raw_count_mismatch() {
        let err = Literal::raw("a = ? and b = ?", [1i32.into_arg()]).unwrap_err();
        assert_eq!(Error::malformed(3, 1), err);
    }

    #[test]
    fn test_raw_nested_literal() {
        let inner = Literal::raw("x = ?", [2i32.into_arg()]).unwrap();
        let value = Literal::raw("a = ? and (?)", [1i32.into_arg(), inner.into_arg()]).unwrap();
        assert_eq!("a = $1 and (x = $2)", value.text());
    }

    #[test]
    fn test_raw_multibyte() {
        let value = Literal::raw("'é?' = ? AND naïve = ?", ["ü".into_arg(), 2i32.into_arg()]).unwrap();
        assert_eq!("'é?' = $1 AND naïve = $2", value.text());
        assert_eq!(3, value.pieces().len());
    }
}

use std::fmt;

use smol_str::SmolStr;
use tracing::{debug, trace};

use crate::{
    arg::Arg,
    dialect::{HasDialect, PlaceholderStyle},
    error::{Error, Result},
    value::Value,
    writer::{FormatContext, FormatWriter},
};

/// Text pieces interleaved with the values bound between them.
///
/// There is always one more piece than values, and values never hold another
/// `Literal`: nested fragments are inlined when the outer one is built.
/// Every transform returns a new `Literal`.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pieces: Vec<SmolStr>,
    values: Vec<Value>,
    delimiter: SmolStr,
}

impl Default for Literal {
    fn default() -> Self {
        Self {
            pieces: vec![SmolStr::default()],
            values: Vec::new(),
            delimiter: SmolStr::default(),
        }
    }
}

/// Accumulates pieces and values, fusing adjoining text into one piece.
///
/// Text pushed between two values extends the current piece, a value closes
/// it. Splicing a literal therefore joins its first piece to the text before
/// the slot and its last piece to the text after it.
struct Fuser {
    pieces: Vec<SmolStr>,
    values: Vec<Value>,
    current: String,
}

impl Fuser {
    fn with_capacity(first: &str, values: usize) -> Self {
        Self {
            pieces: Vec::with_capacity(values + 1),
            values: Vec::with_capacity(values),
            current: first.to_owned(),
        }
    }

    fn push_text(&mut self, text: &str) {
        self.current.push_str(text);
    }

    fn push_value(&mut self, value: Value) {
        let piece = std::mem::take(&mut self.current);
        self.pieces.push(piece.into());
        self.values.push(value);
    }

    fn push_parts<I>(&mut self, pieces: &[SmolStr], values: I)
    where
        I: IntoIterator<Item = Value>,
    {
        let mut pieces = pieces.iter();
        if let Some(first) = pieces.next() {
            self.push_text(first);
        }
        for (value, piece) in values.into_iter().zip(pieces) {
            self.push_value(value);
            self.push_text(piece);
        }
    }

    fn push_literal(&mut self, literal: Literal) {
        // a constant literal only extends the current piece
        self.push_parts(&literal.pieces, literal.values);
    }

    fn finish(mut self, delimiter: SmolStr) -> Literal {
        self.pieces.push(self.current.into());
        Literal {
            pieces: self.pieces,
            values: self.values,
            delimiter,
        }
    }
}

impl Literal {
    /// Builds a literal from `n + 1` pieces and `n` interleaved arguments.
    pub fn new<P, A>(pieces: P, args: A) -> Result<Self>
    where
        P: IntoIterator,
        P::Item: Into<SmolStr>,
        A: IntoIterator<Item = Arg>,
    {
        let pieces: Vec<SmolStr> = pieces.into_iter().map(Into::into).collect();
        let args: Vec<Arg> = args.into_iter().collect();

        let Some((first, rest)) = pieces.split_first().filter(|_| pieces.len() == args.len() + 1)
        else {
            debug!(pieces = pieces.len(), values = args.len(), "malformed fragment");
            return Err(Error::malformed(pieces.len(), args.len()));
        };

        let mut fuser = Fuser::with_capacity(first, args.len());
        for (arg, piece) in args.into_iter().zip(rest) {
            match arg {
                Arg::Value(value) => fuser.push_value(value),
                Arg::Literal(literal) => {
                    trace!(values = literal.values.len(), "inlining nested literal");
                    fuser.push_literal(literal);
                }
                Arg::Query(query) => {
                    let literal = query.build_with(" ")?;
                    trace!(values = literal.values.len(), "inlining nested query");
                    fuser.push_literal(literal);
                }
            }
            fuser.push_text(piece);
        }

        Ok(fuser.finish(SmolStr::default()))
    }

    /// A literal made of one piece of text and no values.
    pub fn constant<T>(text: T) -> Self
    where
        T: Into<SmolStr>,
    {
        Self {
            pieces: vec![text.into()],
            values: Vec::new(),
            delimiter: SmolStr::default(),
        }
    }

    pub fn pieces(&self) -> &[SmolStr] {
        &self.pieces
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn delimiter(&self) -> &str {
        self.delimiter.as_str()
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Query text with `$1`, `$2`, ... placeholders.
    pub fn text(&self) -> String {
        self.render(PlaceholderStyle::Positional)
    }

    /// Query text with `?` placeholders.
    pub fn sql(&self) -> String {
        self.render(PlaceholderStyle::Anonymous)
    }

    pub fn render(&self, style: PlaceholderStyle) -> String {
        let size_hint = self.pieces.iter().map(SmolStr::len).sum::<usize>() + self.values.len() * 3;
        let mut str = String::with_capacity(size_hint);
        let mut context = FormatContext::new(&mut str, style);
        self.format_writer(&mut context)
            .expect("should not fail on a string writer");
        str
    }

    pub fn to_sql<Database: HasDialect>(&self) -> String {
        self.render(Database::DIALECT.placeholder_style())
    }

    /// Positional text and its values, ready for a `$N` driver.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.text(), self.values)
    }

    /// Anonymous text and its values, ready for a `?` driver.
    pub fn into_sql_parts(self) -> (String, Vec<Value>) {
        (self.sql(), self.values)
    }

    /// Joins `other` after this literal using `other`'s own delimiter.
    pub fn append<T: IntoLiteral>(&self, other: T) -> Self {
        self.append_with(other, "")
    }

    /// Joins `other` after this literal.
    ///
    /// An empty `delimiter` falls back to the delimiter carried by `other`.
    pub fn append_with<T: IntoLiteral>(&self, other: T, delimiter: &str) -> Self {
        let other = other.into_literal();
        let joint = if delimiter.is_empty() {
            other.delimiter.as_str()
        } else {
            delimiter
        };

        let mut fuser = Fuser::with_capacity("", self.values.len() + other.values.len());
        fuser.push_parts(&self.pieces, self.values.iter().cloned());
        fuser.push_text(joint);
        fuser.push_literal(other);
        fuser.finish(self.delimiter.clone())
    }

    pub fn prefix(&self, text: &str) -> Self {
        let mut pieces = self.pieces.clone();
        if let Some(first) = pieces.first_mut() {
            *first = SmolStr::from_iter([text, first.as_str()]);
        }
        Self {
            pieces,
            values: self.values.clone(),
            delimiter: self.delimiter.clone(),
        }
    }

    pub fn suffix(&self, text: &str) -> Self {
        let mut pieces = self.pieces.clone();
        if let Some(last) = pieces.last_mut() {
            *last = SmolStr::from_iter([last.as_str(), text]);
        }
        Self {
            pieces,
            values: self.values.clone(),
            delimiter: self.delimiter.clone(),
        }
    }

    /// Same pieces and values, joined to a predecessor with `delimiter`.
    pub fn with_delimiter<T>(&self, delimiter: T) -> Self
    where
        T: Into<SmolStr>,
    {
        Self {
            pieces: self.pieces.clone(),
            values: self.values.clone(),
            delimiter: delimiter.into(),
        }
    }
}

impl FormatWriter for Literal {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        for (index, piece) in self.pieces.iter().enumerate() {
            if index > 0 {
                context.write_placeholder()?;
            }
            context.writer.write_str(piece)?;
        }
        Ok(())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut context = FormatContext::new(f, PlaceholderStyle::Positional);
        self.format_writer(&mut context)
    }
}

pub trait IntoLiteral {
    fn into_literal(self) -> Literal;
}

impl IntoLiteral for Literal {
    fn into_literal(self) -> Literal {
        self
    }
}

impl IntoLiteral for &Literal {
    fn into_literal(self) -> Literal {
        self.clone()
    }
}

impl IntoLiteral for &str {
    fn into_literal(self) -> Literal {
        Literal::constant(self)
    }
}

impl IntoLiteral for String {
    fn into_literal(self) -> Literal {
        Literal::constant(self)
    }
}

impl IntoLiteral for SmolStr {
    fn into_literal(self) -> Literal {
        Literal::constant(self)
    }
}

use std::{fmt::Write, ops::Deref};

use crate::dialect::PlaceholderStyle;

pub(crate) trait FormatWriter {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> std::fmt::Result;
}

pub(crate) struct FormatContext<'a, W: Write> {
    pub(crate) writer: &'a mut W,
    pub(crate) style: PlaceholderStyle,
    pub(crate) placeholder: usize,
}

impl<'a, W: Write> FormatContext<'a, W> {
    pub fn new(writer: &'a mut W, style: PlaceholderStyle) -> Self {
        Self {
            writer,
            style,
            placeholder: 0,
        }
    }

    pub(crate) fn write_placeholder(&mut self) -> std::fmt::Result {
        self.placeholder += 1;
        match self.style {
            PlaceholderStyle::Positional => write!(self.writer, "${}", self.placeholder),
            PlaceholderStyle::Anonymous => self.writer.write_char('?'),
        }
    }
}

impl<D> FormatWriter for D
where
    D: Deref,
    D::Target: FormatWriter,
{
    fn format_writer<W: std::fmt::Write>(
        &self,
        ctx: &mut FormatContext<'_, W>,
    ) -> std::fmt::Result {
        self.deref().format_writer(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_numbering() {
        let mut str = String::new();
        let mut context = FormatContext::new(&mut str, PlaceholderStyle::Positional);
        context.write_placeholder().unwrap();
        context.writer.write_str(", ").unwrap();
        context.write_placeholder().unwrap();
        assert_eq!(2, context.placeholder);
        assert_eq!("$1, $2", str);
    }

    #[test]
    fn test_anonymous_placeholder() {
        let mut str = String::new();
        let mut context = FormatContext::new(&mut str, PlaceholderStyle::Anonymous);
        context.write_placeholder().unwrap();
        context.write_placeholder().unwrap();
        assert_eq!("??", str);
    }
}

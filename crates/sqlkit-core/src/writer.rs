//! SQL text writer.
//!
//! AST nodes render themselves through [`WriteSql`]: literal fragments go
//! straight into the [`SqlWriter`] buffer and nested nodes are interpolated by
//! handing the writer down to their own `write_sql`.

use core::fmt;

/// An AST node that can render itself as SQL text.
pub trait WriteSql {
    /// Appends this node's SQL text to `writer`.
    fn write_sql(&self, writer: &mut SqlWriter);

    /// Renders this node into a fresh string.
    #[must_use]
    fn to_sql(&self) -> String {
        let mut writer = SqlWriter::new();
        self.write_sql(&mut writer);
        writer.into_string()
    }
}

impl<T: WriteSql + ?Sized> WriteSql for &T {
    fn write_sql(&self, writer: &mut SqlWriter) {
        (**self).write_sql(writer);
    }
}

impl<T: WriteSql + ?Sized> WriteSql for Box<T> {
    fn write_sql(&self, writer: &mut SqlWriter) {
        (**self).write_sql(writer);
    }
}

/// Buffer that accumulates rendered SQL.
#[derive(Debug, Default, Clone)]
pub struct SqlWriter {
    buf: String,
}

impl SqlWriter {
    /// Creates an empty writer.
    #[must_use]
    pub const fn new() -> Self {
        Self { buf: String::new() }
    }

    /// Appends literal text.
    pub fn write(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(text);
        self
    }

    /// Appends the rendering of a nested element.
    pub fn write_sql<T: WriteSql + ?Sized>(&mut self, element: &T) -> &mut Self {
        element.write_sql(self);
        self
    }

    /// Appends each element's rendering, separated by `separator`.
    pub fn write_delimited<T: WriteSql>(&mut self, elements: &[T], separator: &str) -> &mut Self {
        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                self.buf.push_str(separator);
            }
            element.write_sql(self);
        }
        self
    }

    /// Appends the elements joined by `, `.
    pub fn write_comma_separated<T: WriteSql>(&mut self, elements: &[T]) -> &mut Self {
        self.write_delimited(elements, ", ")
    }

    /// Returns the text written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Returns true if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consumes the writer and returns the rendered SQL.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

impl fmt::Write for SqlWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.push_str(s);
        Ok(())
    }
}

/// Implements `Display` for types that implement [`WriteSql`].
macro_rules! display_via_write_sql {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ::core::fmt::Display for $ty {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.write_str(&$crate::writer::WriteSql::to_sql(self))
                }
            }
        )+
    };
}

pub(crate) use display_via_write_sql;

#[cfg(test)]
mod tests {
    use super::*;

    struct Word(&'static str);

    impl WriteSql for Word {
        fn write_sql(&self, writer: &mut SqlWriter) {
            writer.write(self.0);
        }
    }

    #[test]
    fn test_write_literal_and_nested() {
        let mut writer = SqlWriter::new();
        writer.write("SELECT ").write_sql(&Word("a"));
        assert_eq!(writer.as_str(), "SELECT a");
    }

    #[test]
    fn test_comma_separated() {
        let mut writer = SqlWriter::new();
        writer.write_comma_separated(&[Word("a"), Word("b"), Word("c")]);
        assert_eq!(writer.into_string(), "a, b, c");
    }

    #[test]
    fn test_delimited_empty_writes_nothing() {
        let mut writer = SqlWriter::new();
        writer.write_delimited::<Word>(&[], " AND ");
        assert!(writer.is_empty());
    }

    #[test]
    fn test_fmt_write() {
        use core::fmt::Write;

        let mut writer = SqlWriter::new();
        write!(writer, "{} PRECEDING", 5).unwrap();
        assert_eq!(writer.as_str(), "5 PRECEDING");
    }

    #[test]
    fn test_to_sql_through_box() {
        let boxed: Box<Word> = Box::new(Word("x"));
        assert_eq!(boxed.to_sql(), "x");
    }
}

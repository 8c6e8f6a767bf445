use std::{fmt, rc::Rc};

/// A named piece of source text.
///
/// Every [`Position`] holds a shared handle to the source it points into so
/// diagnostics can quote the offending line without threading the text
/// through every phase.
#[derive(PartialEq, Eq)]
pub struct Source {
    /// The name shown in diagnostics, usually a file path or `<stdin>`.
    pub name: String,
    /// The full text of the source.
    pub text: String,
}

impl Source {
    /// Creates a new shared source.
    ///
    /// # Example
    /// ```
    /// use glang::interpreter::position::Source;
    ///
    /// let source = Source::new("main.glang", "obj x = 1");
    /// assert_eq!(source.name, "main.glang");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Rc<Self> {
        Rc::new(Self { name: name.into(),
                       text: text.into(), })
    }

    /// Returns the text of a single zero-based line, without its newline.
    ///
    /// Lines past the end of the text are empty.
    #[must_use]
    pub fn line(&self, index: usize) -> &str {
        self.text.split('\n').nth(index).unwrap_or("")
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source").field("name", &self.name).finish_non_exhaustive()
    }
}

/// A location in a [`Source`].
///
/// `offset` is a byte offset into the text, `line` and `column` are zero-based
/// and counted in characters. Positions are cheap to clone and every token
/// keeps its own copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Byte offset into the source text.
    pub offset: usize,
    /// Zero-based line number.
    pub line:   usize,
    /// Zero-based column, in characters.
    pub column: usize,
    /// The source this position points into.
    pub source: Rc<Source>,
}

impl Position {
    /// Returns the position of the first character of `source`.
    #[must_use]
    pub const fn start(source: Rc<Source>) -> Self {
        Self { offset: 0,
               line: 0,
               column: 0,
               source }
    }

    /// Moves past a single character.
    ///
    /// The offset always grows by the encoded length of `ch`. A newline moves
    /// to column zero of the next line.
    ///
    /// # Example
    /// ```
    /// use glang::interpreter::position::{Position, Source};
    ///
    /// let mut pos = Position::start(Source::new("<test>", "a\nb"));
    /// pos.advance('a');
    /// pos.advance('\n');
    ///
    /// assert_eq!((pos.offset, pos.line, pos.column), (2, 1, 0));
    /// ```
    pub const fn advance(&mut self, ch: char) {
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }

    /// Advances character by character until `offset` is reached.
    ///
    /// Offsets behind the current one leave the position untouched.
    pub fn advance_to(&mut self, offset: usize) {
        let source = Rc::clone(&self.source);
        let end = offset.min(source.text.len());

        if let Some(pending) = source.text.get(self.offset..end) {
            for ch in pending.chars() {
                self.advance(ch);
            }
        }
    }
}

/// A half-open range of source positions, `start` inclusive and `end`
/// exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// First position covered by the span.
    pub start: Position,
    /// Position just past the last covered character.
    pub end:   Position,
}

impl Span {
    /// Creates a span between two positions.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Creates an empty span at a single position.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { start: position.clone(),
               end:   position, }
    }

    /// Returns a span starting where `self` starts and ending where `other`
    /// ends.
    #[must_use]
    pub fn to(&self, other: &Self) -> Self {
        Self { start: self.start.clone(),
               end:   other.end.clone(), }
    }

    /// The source this span points into.
    #[must_use]
    pub fn source(&self) -> &Source {
        &self.start.source
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "{}:{}:{}",
               self.start.source.name,
               self.start.line + 1,
               self.start.column + 1)
    }
}

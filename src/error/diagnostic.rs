use std::{fmt::Write, rc::Rc};

use crate::{
    error::Error,
    interpreter::{evaluator::context::Context, position::Span},
};

impl Error {
    /// Renders the full diagnostic text for this error.
    ///
    /// The layout is
    ///
    /// ```text
    /// <Kind>: <message>
    /// File "<source>", Line <line>
    ///
    /// <source line>
    /// <carets under the span>
    /// ```
    ///
    /// Runtime errors raised inside a call context are prefixed with a
    /// traceback, outermost frame first.
    ///
    /// # Example
    /// ```
    /// use glang::run_with_host;
    /// use glang::host::MemoryHost;
    ///
    /// let mut host = MemoryHost::default();
    /// let error = run_with_host("<test>", "1 + \"a\"", &mut host).unwrap_err();
    ///
    /// assert_eq!(error.render(),
    ///            "Traceback (most recent call last):\n  File <test>, Line 1, In <program>\n\
    ///             Illegal Operation: cannot apply '+' to a number and a string\n\
    ///             File \"<test>\", Line 1\n\n1 + \"a\"\n^^^^^^^");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();

        if self.kind.is_runtime()
           && let Some(context) = &self.context
        {
            out.push_str(&traceback(&self.span, context));
        }

        let _ = write!(out,
                       "{}: {}\nFile \"{}\", Line {}\n\n{}",
                       self.kind,
                       self.message,
                       self.span.source().name,
                       self.span.start.line + 1,
                       underline(&self.span));
        out
    }
}

/// Builds the traceback block for an error raised at `span` inside `context`.
///
/// The innermost frame is reported at the error site, every outer frame at the
/// call site that entered the frame below it.
fn traceback(span: &Span, context: &Rc<Context>) -> String {
    let mut frames = Vec::new();
    let mut site = Some(span.clone());
    let mut current = Some(Rc::clone(context));

    while let Some(ctx) = current {
        if let Some(site) = &site {
            frames.push(format!("  File {}, Line {}, In {}\n",
                                site.source().name,
                                site.start.line + 1,
                                ctx.display_name));
        }
        site.clone_from(&ctx.entry_span);
        current = ctx.parent.clone();
    }

    let mut out = String::from("Traceback (most recent call last):\n");
    for frame in frames.iter().rev() {
        out.push_str(frame);
    }
    out
}

/// Quotes every source line covered by `span` and underlines the covered
/// columns with `^`.
///
/// Tabs are quoted as single spaces, since columns count a tab as one
/// character. At least one caret is printed per line, so empty spans stay
/// visible. A span
/// ending at the very start of a line does not pull that line in.
///
/// # Example
/// ```
/// use glang::{error::diagnostic::underline, interpreter::position::{Position, Source, Span}};
///
/// let source = Source::new("<test>", "obj x = 1 / 0");
/// let mut start = Position::start(source);
/// start.advance_to(8);
/// let mut end = start.clone();
/// end.advance_to(13);
///
/// assert_eq!(underline(&Span::new(start, end)), "obj x = 1 / 0\n        ^^^^^");
/// ```
#[must_use]
pub fn underline(span: &Span) -> String {
    let source = span.source();
    let first = span.start.line;
    let last = if span.end.line > first && span.end.column == 0 {
        span.end.line - 1
    } else {
        span.end.line.max(first)
    };

    let mut lines = Vec::new();
    for index in first..=last {
        let line = source.line(index).replace('\t', " ");
        let col_start = if index == first { span.start.column } else { 0 };
        let col_end = if index == span.end.line {
            span.end.column
        } else {
            line.chars().count()
        };
        let width = col_end.saturating_sub(col_start).max(1);

        lines.push(format!("{line}\n{}{}", " ".repeat(col_start), "^".repeat(width)));
    }
    lines.join("\n")
}

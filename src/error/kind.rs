/// Every kind of error the language can report.
///
/// The `Display` form of a kind is the title that starts its diagnostic, for
/// example `Illegal Character: '@'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ErrorKind {
    /// The lexer met a character that starts no token.
    #[error("Illegal Character")]
    IllegalCharacter,
    /// The lexer needed a specific next character, such as `=` after `!`.
    #[error("Expected Character")]
    ExpectedCharacter,
    /// A string literal ran to the end of the input.
    #[error("Unterminated String")]
    UnterminatedString,
    /// The parser could not match the grammar.
    #[error("Invalid Syntax")]
    InvalidSyntax,
    /// A name was read before anything was assigned to it.
    #[error("Undefined Variable")]
    UndefinedVariable,
    /// A function was called with the wrong number of arguments.
    #[error("Arity Mismatch")]
    ArityMismatch,
    /// An operator was applied to values that do not support it.
    #[error("Illegal Operation")]
    IllegalOperation,
    /// A number was divided by zero.
    #[error("Division By Zero")]
    DivisionByZero,
    /// A list index was negative, fractional or past the end.
    #[error("Index Out Of Range")]
    IndexOutOfRange,
    /// A built-in received an argument of the wrong kind.
    #[error("Type Mismatch")]
    TypeMismatch,
    /// Text could not be converted to the requested value.
    #[error("Invalid Input")]
    InvalidInput,
    /// Raised on purpose by the program through `uhoh`.
    #[error("User Error")]
    UserError,
    /// A file read by `dig` or `run` does not exist.
    #[error("File Not Found")]
    FileNotFound,
    /// A module imported with `fetch` does not exist.
    #[error("Module Not Found")]
    ModuleNotFound,
    /// A symbol requested from a module is not defined there.
    #[error("Symbol Not Found")]
    SymbolNotFound,
    /// The host failed to read or write.
    #[error("IO Error")]
    Io,
}

impl ErrorKind {
    /// Returns `true` for errors raised while the program runs.
    ///
    /// Only runtime errors are rendered with a traceback.
    ///
    /// # Example
    /// ```
    /// use glang::error::ErrorKind;
    ///
    /// assert!(ErrorKind::DivisionByZero.is_runtime());
    /// assert!(!ErrorKind::InvalidSyntax.is_runtime());
    /// ```
    #[must_use]
    pub const fn is_runtime(self) -> bool {
        !matches!(self,
                  Self::IllegalCharacter
                  | Self::ExpectedCharacter
                  | Self::UnterminatedString
                  | Self::InvalidSyntax)
    }
}

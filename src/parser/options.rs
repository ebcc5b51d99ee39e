//! Parsing options and configuration.

/// Options for parsing plain-text answers.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// How to treat table rows that do not match their header
    pub error_mode: ErrorMode,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Drop malformed table rows silently (the default).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Fail on the first malformed table row.
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }
}

/// Error handling mode during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Skip table rows whose cell count differs from the header
    #[default]
    Lenient,
    /// Report such rows as [`Error::MalformedTableRow`](crate::Error::MalformedTableRow)
    Strict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.error_mode, ErrorMode::Lenient);
    }

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new().strict();
        assert_eq!(options.error_mode, ErrorMode::Strict);

        let options = options.lenient();
        assert_eq!(options.error_mode, ErrorMode::Lenient);

        let options = ParseOptions::new().with_error_mode(ErrorMode::Strict);
        assert_eq!(options.error_mode, ErrorMode::Strict);
    }
}

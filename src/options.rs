//! Configuration options for the text codec.
//!
//! - [`WriteOptions`]: layout and escaping of written text
//! - [`ControlEscape`]: how control characters inside strings are escaped
//! - [`ParseOptions`]: limits applied while reading text
//!
//! ## Examples
//!
//! ```rust
//! use serde_element::{to_string_with_options, ControlEscape, WriteOptions};
//!
//! let options = WriteOptions::new().with_control_escape(ControlEscape::Unicode);
//! let text = to_string_with_options(&"\u{1}", &options).unwrap();
//! assert_eq!(text, r#""\u0001""#);
//!
//! let options = WriteOptions::new().with_escape_solidus(false);
//! let text = to_string_with_options(&"a/b", &options).unwrap();
//! assert_eq!(text, r#""a/b""#);
//! ```

/// Escape form for control characters below `0x20` that have no short escape.
///
/// # Examples
///
/// ```rust
/// use serde_element::ControlEscape;
///
/// assert_eq!(ControlEscape::Short.prefix(), "\\00");
/// assert_eq!(ControlEscape::Unicode.prefix(), "\\u00");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ControlEscape {
    /// `\00XX`, the canonical form.
    #[default]
    Short,
    /// `\u00XX`, readable by any JSON parser.
    Unicode,
}

impl ControlEscape {
    /// Returns the text written before the two hex digits.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            ControlEscape::Short => "\\00",
            ControlEscape::Unicode => "\\u00",
        }
    }
}

/// Configuration options for writing text.
///
/// # Examples
///
/// ```rust
/// use serde_element::{ControlEscape, WriteOptions};
///
/// // Canonical compact text
/// let options = WriteOptions::new();
///
/// // Pretty-printed with 2-space indentation
/// let options = WriteOptions::pretty();
///
/// // Custom configuration
/// let options = WriteOptions::pretty()
///     .with_indent(4)
///     .with_control_escape(ControlEscape::Unicode);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WriteOptions {
    pub pretty: bool,
    pub indent: usize,
    pub escape_solidus: bool,
    pub control_escape: ControlEscape,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            pretty: false,
            indent: 2,
            escape_solidus: true,
            control_escape: ControlEscape::default(),
        }
    }
}

impl WriteOptions {
    /// Creates canonical options: compact, solidus escaped, short control escapes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_element::WriteOptions;
    ///
    /// let options = WriteOptions::new();
    /// assert_eq!(options.indent, 2);
    /// assert!(!options.pretty);
    /// assert!(options.escape_solidus);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for output with newlines and indentation.
    #[must_use]
    pub fn pretty() -> Self {
        WriteOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the number of spaces per nesting level.
    ///
    /// Default is 2. Only affects pretty-printed output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn with_escape_solidus(mut self, escape: bool) -> Self {
        self.escape_solidus = escape;
        self
    }

    #[must_use]
    pub fn with_control_escape(mut self, escape: ControlEscape) -> Self {
        self.control_escape = escape;
        self
    }
}

/// Limits applied while parsing text.
///
/// # Examples
///
/// ```rust
/// use serde_element::{ParseOptions, Value};
///
/// let options = ParseOptions::new().with_max_depth(2);
/// assert!(Value::parse_with_options("[[1]]", &options).is_ok());
/// assert!(Value::parse_with_options("[[[1]]]", &options).is_err());
///
/// let options = ParseOptions::new().with_max_len(4);
/// assert!(Value::parse_with_options("12345", &options).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum nesting of arrays and objects.
    pub max_depth: usize,
    /// Maximum input length in bytes, unlimited when `None`.
    pub max_len: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: 128,
            max_len: None,
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    #[must_use]
    pub fn with_max_len(mut self, len: usize) -> Self {
        self.max_len = Some(len);
        self
    }
}

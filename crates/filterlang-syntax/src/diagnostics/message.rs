use rowan::TextRange;

/// Diagnostic kinds ordered by priority (highest priority first).
///
/// When two diagnostics have overlapping spans, the higher-priority one
/// suppresses the lower-priority one. This prevents cascading error noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // These cause cascading errors throughout the rest of the filter
    UnclosedGroup,
    UnclosedValueList,
    UnterminatedString,
    UnterminatedComment,

    // User omitted something required - root cause errors
    ExpectedCondition,
    ExpectedOperator,
    ExpectedValue,
    ExpectedConnective,
    ExpectedComma,

    // User wrote something that doesn't belong
    EmptyGroup,
    EmptyValueList,
    UnmatchedParen,
    UnexpectedToken,
    NestingTooDeep,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::EmptyValueList => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Whether this kind suppresses `other` when spans overlap.
    ///
    /// Uses enum discriminant ordering: lower position = higher priority.
    pub fn suppresses(&self, other: &DiagnosticKind) -> bool {
        self < other
    }

    /// Unclosed delimiters cause cascading errors but should be suppressed by
    /// root-cause errors at the same position.
    pub fn is_structural_error(&self) -> bool {
        matches!(self, Self::UnclosedGroup | Self::UnclosedValueList)
    }

    pub fn is_root_cause_error(&self) -> bool {
        matches!(
            self,
            Self::ExpectedCondition
                | Self::ExpectedOperator
                | Self::ExpectedValue
                | Self::ExpectedConnective
                | Self::ExpectedComma
        )
    }

    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::ExpectedOperator => Some("e.g. `=`, `!=`, `IN`, `LIKE` or `<<`"),
            Self::ExpectedConnective => Some("join conditions with `AND` or `OR`"),
            Self::EmptyValueList => Some("a list matches nothing without values"),
            _ => None,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedGroup => "missing closing `)`",
            Self::UnclosedValueList => "missing closing `)` for value list",
            Self::UnterminatedString => "unterminated string",
            Self::UnterminatedComment => "unterminated block comment",

            Self::ExpectedCondition => "expected a condition",
            Self::ExpectedOperator => "expected an operator",
            Self::ExpectedValue => "expected a value",
            Self::ExpectedConnective => "expected `AND` or `OR`",
            Self::ExpectedComma => "expected `,` between values",

            Self::EmptyGroup => "empty `()` is not allowed",
            Self::EmptyValueList => "empty value list",
            Self::UnmatchedParen => "unmatched `)`",
            Self::UnexpectedToken => "unexpected token",
            Self::NestingTooDeep => "filter is nested too deeply",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnclosedGroup | Self::UnclosedValueList => {
                format!("{}; {{}}", self.fallback_message())
            }
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// The range shown to the user (underlined in output).
    pub(crate) range: TextRange,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        let hints = kind
            .default_hint()
            .map(|h| vec![h.to_string()])
            .unwrap_or_default();
        Self {
            kind,
            range,
            message: message.into(),
            related: Vec::new(),
            hints,
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity(),
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.range.start()),
                u32::from(related.range.end())
            )?;
        }
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}

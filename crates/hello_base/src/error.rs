use std::error::Error as StdError;
use std::fmt;
use std::io;

use tracing_error::{SpanTrace, SpanTraceStatus};

/* 📖 # Error layout

ErrorKind holds the structural variant, HelloError wraps it with the context
strings added while the error propagates, an optional cause and the span trace
captured when the error was created.

Display renders a single line (contexts first, then the message).
Debug renders a tree, which is what ends up in logs.
*/

/// Error variants that can occur in hello operations.
#[derive(Debug)]
pub enum ErrorKind {
    /// Reading or writing a stream failed
    Io { source: io::Error },

    /// Catch-all for other errors with a message
    Message { message: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Io { source } => write!(f, "I/O error: {}", source),
            ErrorKind::Message { message } => write!(f, "{}", message),
        }
    }
}

/// Error type wrapping an [`ErrorKind`] with context, cause and span trace.
pub struct HelloError {
    kind: ErrorKind,
    context: Vec<String>,
    cause: Option<Box<HelloError>>,
    span_trace: SpanTrace,
}

impl HelloError {
    /// Creates a new error from an ErrorKind, capturing the current span trace.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: vec![],
            cause: None,
            span_trace: SpanTrace::capture(),
        }
    }

    /// Shorthand for an [`ErrorKind::Message`] error.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Message {
            message: message.into(),
        })
    }

    /// Attaches context to an error.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Attaches context using lazy evaluation.
    pub fn with_context<F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> String,
    {
        self.context.push(f());
        self
    }

    /// Records the error that led to this one.
    pub fn caused_by(mut self, cause: impl Into<Box<HelloError>>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn get_context(&self) -> &[String] {
        &self.context
    }

    pub fn cause(&self) -> Option<&HelloError> {
        self.cause.as_deref()
    }

    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// Returns the innermost error.
    ///
    /// Follows the `caused_by` chain to its end first, then that error's
    /// `source` chain, so a cause attached to an `Io` error is not skipped.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut innermost = self;
        while let Some(cause) = innermost.cause.as_deref() {
            innermost = cause;
        }
        let mut current: &(dyn StdError + 'static) = innermost;
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }

    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: &str) -> fmt::Result {
        let branches = self.context.len() + usize::from(self.cause.is_some());
        for (i, context) in self.context.iter().enumerate() {
            let branch = if i + 1 == branches { "└─" } else { "├─" };
            write!(f, "\n{indent}{branch} {context}")?;
        }
        if let Some(cause) = &self.cause {
            write!(f, "\n{indent}└─ cause: {}", cause.kind)?;
            cause.fmt_tree(f, &format!("{indent}   "))?;
        }
        Ok(())
    }
}

impl From<ErrorKind> for HelloError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<io::Error> for HelloError {
    fn from(source: io::Error) -> Self {
        Self::new(ErrorKind::Io { source })
    }
}

impl StdError for HelloError {
    // Io reports the io error; a cause attached to it is reachable via
    // `cause()` and `root_cause()`.
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.kind {
            ErrorKind::Io { source } => Some(source),
            ErrorKind::Message { .. } => self
                .cause
                .as_deref()
                .map(|cause| cause as &(dyn StdError + 'static)),
        }
    }
}

impl fmt::Display for HelloError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for context in &self.context {
            write!(f, "{}: ", context)?;
        }
        write!(f, "{}", self.kind)
    }
}

impl fmt::Debug for HelloError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        self.fmt_tree(f, "")?;
        if self.span_trace.status() == SpanTraceStatus::CAPTURED {
            write!(f, "\nTrace: {}", self.span_trace)?;
        }
        Ok(())
    }
}

/// Standard result type for hello operations.
pub type HelloResult<T> = std::result::Result<T, Box<HelloError>>;

/// Extension trait for attaching context to results during propagation.
pub trait ResultExt<T> {
    /// Attaches context to an error. Eager evaluation.
    fn context(self, context: impl Into<String>) -> HelloResult<T>;

    /// Attaches context using lazy evaluation.
    /// The closure only runs if the result is an error.
    fn with_context<F>(self, f: F) -> HelloResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for HelloResult<T> {
    fn context(self, context: impl Into<String>) -> HelloResult<T> {
        self.map_err(|err| Box::new((*err).context(context)))
    }

    fn with_context<F>(self, f: F) -> HelloResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| Box::new((*err).with_context(f)))
    }
}

impl<T> ResultExt<T> for io::Result<T> {
    fn context(self, context: impl Into<String>) -> HelloResult<T> {
        self.map_err(|err| Box::new(HelloError::from(err).context(context)))
    }

    fn with_context<F>(self, f: F) -> HelloResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| Box::new(HelloError::from(err).with_context(f)))
    }
}

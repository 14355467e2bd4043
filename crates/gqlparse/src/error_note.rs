use smallvec::SmallVec;

/// The kind of an [`ErrorNote`], which determines how it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorNoteKind {
    /// General context about the error. Rendered as `= note: ...`.
    General,

    /// An actionable suggestion for fixing the error. Rendered as
    /// `= help: ...`.
    Help,
}

/// A note providing additional context about a [`SyntaxError`](crate::SyntaxError).
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorNote {
    pub kind: ErrorNoteKind,
    pub message: String,
}

impl ErrorNote {
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorNoteKind::General,
            message: message.into(),
        }
    }

    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorNoteKind::Help,
            message: message.into(),
        }
    }
}

/// Most errors carry zero to two notes, so they are stored inline.
pub type ErrorNotes = SmallVec<[ErrorNote; 2]>;

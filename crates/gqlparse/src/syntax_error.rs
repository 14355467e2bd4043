use crate::ErrorNote;
use crate::ErrorNoteKind;
use crate::ErrorNotes;
use crate::SyntaxErrorKind;

/// The single terminal error of a failed parse.
///
/// Lexical and grammatical failures both surface as a `SyntaxError`; the
/// parser never returns a partial document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct SyntaxError {
    /// Human-readable primary error message.
    message: String,

    /// Categorized error kind for programmatic handling.
    kind: SyntaxErrorKind,

    /// 1-based line of the offending token.
    line: usize,

    /// 1-based rune column of the offending token's first rune.
    position: usize,

    /// Width, in runes, of the offending token as it appeared in the source.
    width: usize,

    notes: ErrorNotes,
}

impl SyntaxError {
    pub fn new(
        message: impl Into<String>,
        kind: SyntaxErrorKind,
        line: usize,
        position: usize,
    ) -> Self {
        Self {
            message: message.into(),
            kind,
            line,
            position,
            width: 1,
            notes: ErrorNotes::new(),
        }
    }

    /// Sets how many runes of the source line the error underlines.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &SyntaxErrorKind {
        &self.kind
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn notes(&self) -> &ErrorNotes {
        &self.notes
    }

    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(ErrorNote::general(message));
    }

    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(ErrorNote::help(message));
    }

    /// Formats this error as a multi-line diagnostic.
    ///
    /// ```text
    /// error: expected `:`, found int `1`
    ///   --> 1:17
    ///    |
    ///  1 | query { user(id 1) }
    ///    |                 ^
    ///    = help: arguments are written as `name: value`
    /// ```
    ///
    /// The snippet is omitted when `source` is `None`.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');
        output.push_str(&format!("  --> {}:{}\n", self.line, self.position));

        if let Some(src) = source
            && let Some(snippet) = self.format_source_snippet(src)
        {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            let prefix = match note.kind {
                ErrorNoteKind::General => "note",
                ErrorNoteKind::Help => "help",
            };
            output.push_str(&format!("   = {prefix}: {}\n", note.message));
        }

        output
    }

    /// Formats this error as a single-line summary: `line:position: message`.
    pub fn format_oneline(&self) -> String {
        format!("{}:{}: error: {}", self.line, self.position, self.message)
    }

    fn format_source_snippet(&self, source: &str) -> Option<String> {
        let line_content = source_lines(source).nth(self.line.checked_sub(1)?)?;
        let line_num_width = self.line.to_string().len().max(2);
        let padding = self.position.saturating_sub(1);

        let mut output = String::new();
        output.push_str(&format!("{:>line_num_width$} |\n", ""));
        output.push_str(&format!("{:>line_num_width$} | {line_content}\n", self.line));
        output.push_str(&format!(
            "{:>line_num_width$} | {:>padding$}{}\n",
            "",
            "",
            "^".repeat(self.width),
        ));
        Some(output)
    }
}

/// Splits `source` at `\r\n`, `\r` or `\n`, the same line terminators the
/// lexer counts.
fn source_lines(source: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(source);
    std::iter::from_fn(move || {
        let remaining = rest?;
        match remaining.find(['\r', '\n']) {
            Some(idx) => {
                let terminator_len = if remaining[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&remaining[idx + terminator_len..]);
                Some(&remaining[..idx])
            },
            None => {
                rest = None;
                Some(remaining)
            },
        }
    })
}

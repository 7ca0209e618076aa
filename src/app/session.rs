//! Session: Drives a root from a scripted list of edits.
//!
//! An [`Edit`] is what one change event in a text field produces: the full
//! new content of one field. A session applies edits in order and evaluates
//! the root after each one that changed state, like the TUI does per
//! keystroke.

use super::root::{Frame, RenderStats, Root};
use super::variant::Variant;
use crate::error::{IoSnafu, Result};
use snafu::ResultExt;
use std::fmt;
use std::io::{self, Write};

/// One of the two text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The name field.
    Name,
    /// The surname field.
    Surname,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Surname => "surname",
        })
    }
}

/// New content for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// The field being edited.
    pub field: Field,
    /// Its content after the edit.
    pub value: String,
}

impl Edit {
    /// An edit setting `field` to `value`.
    pub fn new(field: Field, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    /// The edits produced by typing `word` into an empty `field`, one
    /// character at a time: `"Doe"` becomes `"D"`, `"Do"`, `"Doe"`.
    pub fn typing(field: Field, word: &str) -> Vec<Self> {
        word.char_indices()
            .map(|(i, c)| Self::new(field, &word[..i + c.len_utf8()]))
            .collect()
    }
}

/// A mounted root plus the edits applied to it so far.
#[derive(Debug)]
pub struct Session {
    root: Root,
    last: Frame,
    applied: usize,
}

impl Session {
    /// Mount a new root: the first evaluation renders both cards.
    pub fn new(variant: Variant) -> Self {
        let mut root = Root::new(variant);
        let last = root.evaluate();
        Self {
            root,
            last,
            applied: 0,
        }
    }

    /// Apply one edit. Returns the new frame, or `None` when the edit left
    /// the field unchanged and the root was not re-evaluated.
    pub fn apply(&mut self, edit: &Edit) -> Option<&Frame> {
        let changed = match edit.field {
            Field::Name => self.root.set_name(edit.value.as_str()),
            Field::Surname => self.root.set_surname(edit.value.as_str()),
        };
        if !changed {
            tracing::trace!(field = %edit.field, "edit left state unchanged");
            return None;
        }
        self.applied += 1;
        self.last = self.root.evaluate();
        Some(&self.last)
    }

    /// Apply every edit in order and return the final frame.
    pub fn replay<'a>(&mut self, edits: impl IntoIterator<Item = &'a Edit>) -> &Frame {
        for edit in edits {
            self.apply(edit);
        }
        &self.last
    }

    /// The most recent frame.
    pub const fn frame(&self) -> &Frame {
        &self.last
    }

    /// Current counters.
    pub const fn stats(&self) -> RenderStats {
        self.root.stats()
    }

    /// Edits that changed state.
    pub const fn applied(&self) -> usize {
        self.applied
    }

    /// The root being driven.
    pub const fn root(&self) -> &Root {
        &self.root
    }
}

/// Write the counters and final views of a replayed `frame`.
pub fn write_report(out: &mut impl Write, variant: Variant, frame: &Frame) -> Result<()> {
    write_lines(out, variant, frame).context(IoSnafu)
}

fn write_lines(out: &mut impl Write, variant: Variant, frame: &Frame) -> io::Result<()> {
    let stats = frame.stats;
    writeln!(out, "{variant}: {}", variant.summary())?;
    writeln!(out, "  root evaluations     {}", stats.root_evaluations)?;
    writeln!(
        out,
        "  NameCard renders     {} (skipped {})",
        stats.name_renders, stats.name_skips
    )?;
    writeln!(
        out,
        "  SurnameCard renders  {} (skipped {})",
        stats.surname_renders, stats.surname_skips
    )?;
    for line in frame.name.lines().iter().chain(frame.surname.lines()) {
        writeln!(out, "  | {line}")?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memo::RenderOutcome;

    #[test]
    fn test_typing_expands_prefixes() {
        let edits = Edit::typing(Field::Surname, "Doe");
        let values: Vec<&str> = edits.iter().map(|e| e.value.as_str()).collect();
        assert_eq!(values, ["D", "Do", "Doe"]);
    }

    #[test]
    fn test_typing_multibyte() {
        let edits = Edit::typing(Field::Name, "Zoë");
        assert_eq!(edits.last().map(|e| e.value.as_str()), Some("Zoë"));
        assert_eq!(edits.len(), 3);
    }

    #[test]
    fn test_optimized_surname_typing_renders_three_times() {
        let mut session = Session::new(Variant::Optimized);
        let mounted = session.stats().surname_renders;
        session.replay(&Edit::typing(Field::Surname, "Doe"));

        assert_eq!(session.stats().surname_renders - mounted, 3);
        assert_eq!(session.stats().root_evaluations, 4);
    }

    #[test]
    fn test_optimized_name_typing_never_reaches_surname_card() {
        let mut session = Session::new(Variant::Optimized);
        session.replay(&Edit::typing(Field::Surname, "Doe"));
        let before = session.stats().surname_renders;

        for word in ["J", "Jane", "Jane Q. Public", ""] {
            session.replay(&Edit::typing(Field::Name, word));
            assert_eq!(session.stats().surname_renders, before);
        }
    }

    #[test]
    fn test_naive_name_keystroke_rerenders_surname_card() {
        let mut session = Session::new(Variant::Naive);
        let frame = session.apply(&Edit::new(Field::Name, "D")).cloned();

        let frame = frame.expect("state changed");
        assert_eq!(frame.surname_outcome, RenderOutcome::Rendered);
        assert_eq!(frame.stats.surname_renders, 2);
    }

    #[test]
    fn test_round_trip_display() {
        let text = "Ünïcödé  spaces\tand-tabs";
        let mut session = Session::new(Variant::Optimized);
        session.replay(&Edit::typing(Field::Name, text));
        let frame = session.replay(&Edit::typing(Field::Surname, text));

        assert_eq!(frame.name.lines()[0], format!("Name: {text}"));
        assert_eq!(frame.surname.lines()[0], format!("Surname: {text}"));
        assert_eq!(session.root().name(), text);
    }

    #[test]
    fn test_unchanged_edit_is_not_evaluated() {
        let mut session = Session::new(Variant::Plain);
        session.apply(&Edit::new(Field::Name, "Jane"));

        assert!(session.apply(&Edit::new(Field::Name, "Jane")).is_none());
        assert_eq!(session.applied(), 1);
        assert_eq!(session.stats().root_evaluations, 2);
    }

    #[test]
    fn test_report_lists_counts_and_views() {
        let mut session = Session::new(Variant::Optimized);
        session.replay(&Edit::typing(Field::Name, "Jane"));
        let frame = session.replay(&Edit::typing(Field::Surname, "Doe"));
        let mut out = Vec::new();
        write_report(&mut out, Variant::Optimized, frame).expect("write to vec");

        let text = String::from_utf8(out).expect("utf-8");
        assert!(text.starts_with("optimized: "));
        assert!(text.contains("root evaluations     8"));
        assert!(text.contains("NameCard renders     5 (skipped 3)"));
        assert!(text.contains("SurnameCard renders  4 (skipped 4)"));
        assert!(text.contains("  | Surname: Doe"));
    }

    #[test]
    fn test_report_write_failure_is_io_error() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let session = Session::new(Variant::Plain);
        let err = write_report(&mut Broken, Variant::Plain, session.frame())
            .expect_err("broken writer");
        assert!(matches!(err, crate::error::Error::Io { .. }));
    }
}

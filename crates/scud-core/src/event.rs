//! Match events - the ordered input stream the extractor consumes
//!
//! The pattern engine is decoupled from the extractor by this small
//! vocabulary: the engine produces [`MatchEvent`]s in non-decreasing
//! end-offset order, the extractor folds them into a span table and
//! answers with a [`Scan`] verdict after each one.

use crate::kind::AnchorKind;

/// Which pattern produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// One of the named header anchors
    Anchor(AnchorKind),
    /// A bare `\n`
    Newline,
    /// The `\r\n\r\n` head terminator
    EndOfHeaders,
}

/// One pattern match inside a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchEvent {
    pub kind: PatternKind,
    /// Offset of the first matched byte
    pub start: usize,
    /// One past the last matched byte
    pub end: usize,
}

/// Consumer verdict after handling one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// Keep feeding events
    Continue,
    /// No further events are meaningful for this message
    Stop,
}

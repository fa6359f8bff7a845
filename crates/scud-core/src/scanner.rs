//! Compiled pattern engine - produces ordered match events over a buffer
//!
//! Wraps two automata: an anchored set for the prefix split scan and an
//! unanchored overlapping set for the full-buffer anchor scan. Every
//! pattern is a literal, so a literal automaton stands in for a general
//! multi-pattern regex engine. The automata are immutable once built and
//! need no per-scan scratch state, so a [`Scanner`] can be shared freely
//! across threads.

use aho_corasick::{AhoCorasick, Anchored, FindOverlappingIter, Input, MatchKind, StartKind};

use crate::error::Result;
use crate::event::{MatchEvent, PatternKind};
use crate::patterns::{ANCHOR_PATTERNS, SPLIT_PATTERNS, SPLIT_WINDOW};

/// Compiled split and anchor pattern sets
#[derive(Debug)]
pub struct Scanner {
    split: AhoCorasick,
    anchors: AhoCorasick,
    anchor_kinds: [PatternKind; ANCHOR_PATTERNS.len()],
}

impl Scanner {
    /// Compile both pattern sets
    ///
    /// The only failure mode is pattern compilation, which makes this a
    /// startup-time error: a scanner that built successfully never fails
    /// to compile again.
    pub fn new() -> Result<Self> {
        let split = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::Standard)
            .start_kind(StartKind::Anchored)
            .build(SPLIT_PATTERNS)?;
        let anchors = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::Standard)
            .build(ANCHOR_PATTERNS.iter().map(|(literal, _)| *literal))?;
        Ok(Self {
            split,
            anchors,
            anchor_kinds: ANCHOR_PATTERNS.map(|(_, kind)| kind),
        })
    }

    /// Scan the first [`SPLIT_WINDOW`] bytes for a recognized prefix
    ///
    /// Returns the end offset of the first match, or `None` when the
    /// buffer does not start with any known method/version token. A match
    /// that runs to the buffer's last byte is also rejected: no message
    /// content can follow it.
    pub fn find_split(&self, buf: &[u8]) -> Result<Option<usize>> {
        let window = &buf[..buf.len().min(SPLIT_WINDOW)];
        let input = Input::new(window).anchored(Anchored::Yes);
        let found = self.split.try_find(input)?;
        Ok(found.map(|m| m.end()).filter(|&end| end + 1 < buf.len()))
    }

    /// Ordered stream of anchor/newline/end-of-head matches over `buf`
    ///
    /// Events arrive in non-decreasing end-offset order: the overlapping
    /// scan reports every match as its end position is passed, left to
    /// right, in a single pass.
    pub fn match_events<'s, 'b>(&'s self, buf: &'b [u8]) -> Result<MatchEvents<'s, 'b>> {
        let inner = self.anchors.try_find_overlapping_iter(Input::new(buf))?;
        Ok(MatchEvents {
            inner,
            kinds: &self.anchor_kinds,
        })
    }
}

/// Iterator adapter translating engine matches into [`MatchEvent`]s
pub struct MatchEvents<'s, 'b> {
    inner: FindOverlappingIter<'s, 'b>,
    kinds: &'s [PatternKind],
}

impl Iterator for MatchEvents<'_, '_> {
    type Item = MatchEvent;

    #[inline]
    fn next(&mut self) -> Option<MatchEvent> {
        let m = self.inner.next()?;
        Some(MatchEvent {
            kind: self.kinds[m.pattern().as_usize()],
            start: m.start(),
            end: m.end(),
        })
    }
}

//! Split detection and anchor extraction
//!
//! The extractor is a tiny state machine folded over the ordered match
//! events of one buffer: a named-header match opens a provisional value
//! span, the next newline closes and trims it, and the end-of-head
//! terminator records the body boundary and stops the pass. Everything
//! works on offsets; nothing is copied out of the buffer.

use crate::error::Result;
use crate::event::{MatchEvent, PatternKind, Scan};
use crate::kind::AnchorKind;
use crate::patterns::SPLIT_WINDOW;
use crate::scanner::Scanner;
use crate::span::{Span, SpanTable};

/// Classification of one parsed buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No recognized prefix within the split window; the span table is
    /// left all-empty
    NotHttp,
    /// An HTTP head. `complete_head` is false when no end-of-headers
    /// terminator was found: the capture is truncated, field spans are
    /// best effort and no body boundary is known.
    Http { complete_head: bool },
}

/// Per-message extraction state
///
/// Created fresh for every message; holds no heap state. One context per
/// worker when extracting in parallel.
#[derive(Debug, Clone, Copy)]
pub struct ExtractContext {
    /// Anchor currently awaiting its closing newline
    pub current_anchor: Option<AnchorKind>,
    /// End offset of the split match, where the message really begins
    pub split_offset: usize,
}

impl ExtractContext {
    /// Context positioned at the start of the request line
    pub fn new(split_offset: usize) -> Self {
        Self {
            current_anchor: Some(AnchorKind::RequestLine),
            split_offset,
        }
    }
}

/// Fold one match event into the table
///
/// Returns [`Scan::Stop`] once no further events are meaningful for this
/// message. All offset arithmetic is bounds-checked; a hostile event
/// stream can at worst leave spans empty.
pub fn apply_event(
    table: &mut SpanTable,
    cx: &mut ExtractContext,
    buf: &[u8],
    ev: MatchEvent,
) -> Scan {
    match ev.kind {
        PatternKind::Anchor(kind) => {
            // The anchor literal stops before the separator; step over the
            // colon and any run of padding spaces to land on the value.
            let last = buf.len().saturating_sub(1);
            let mut at = ev.end;
            if at < last && buf[at] == b':' {
                at += 1;
            }
            while at < last && buf[at] == b' ' {
                at += 1;
            }
            if at < last {
                cx.current_anchor = Some(kind);
                table.set(kind, Span::at(at));
            }
            // A value that never starts before the buffer ends is dropped;
            // the previous state is kept.
            Scan::Continue
        }
        PatternKind::Newline => {
            match cx.current_anchor {
                Some(AnchorKind::RequestLine) => {
                    // The request-line span starts at the split match end,
                    // so its length is measured back from the newline by
                    // the full split window. The window is sized for a
                    // ` HTTP/1.x\r` tail; shorter tails leave the trailing
                    // space for the trim below to take.
                    let start = cx.split_offset;
                    let mut len = ev.end.saturating_sub(start + SPLIT_WINDOW);
                    if len > 0 && buf.get(start + len - 1) == Some(&b' ') {
                        len -= 1;
                    }
                    table.set(AnchorKind::RequestLine, Span { offset: start, len });
                }
                Some(kind) => {
                    let start = table.get(kind).offset;
                    let mut len = ev.end.saturating_sub(1).saturating_sub(start);
                    if len > 0 && buf.get(start + len - 1) == Some(&b'\r') {
                        len -= 1;
                    }
                    while len > 0 && buf.get(start + len - 1) == Some(&b' ') {
                        len -= 1;
                    }
                    table.set(kind, Span { offset: start, len });
                }
                None => {}
            }
            cx.current_anchor = None;
            Scan::Continue
        }
        PatternKind::EndOfHeaders => {
            table.set(
                AnchorKind::EndOfHeaders,
                Span {
                    offset: ev.end,
                    len: buf.len().saturating_sub(ev.end),
                },
            );
            cx.current_anchor = None;
            Scan::Stop
        }
    }
}

/// Run the anchor pass over an ordered event stream
///
/// `events` must arrive in non-decreasing end-offset order (the engine's
/// single-pass guarantee). The pass stops at the first end-of-headers
/// event; returns whether that terminator was seen.
pub fn extract_anchors<I>(buf: &[u8], split_offset: usize, events: I, table: &mut SpanTable) -> bool
where
    I: IntoIterator<Item = MatchEvent>,
{
    let mut cx = ExtractContext::new(split_offset);
    table.set(AnchorKind::RequestLine, Span::at(split_offset));
    for ev in events {
        if apply_event(table, &mut cx, buf, ev) == Scan::Stop {
            return true;
        }
    }
    false
}

/// Compiled extractor: split detection plus anchor extraction
///
/// Compile once with [`Extractor::new`], then call
/// [`parse`](Extractor::parse) per message. The compiled sets are
/// immutable, so one extractor may be shared across threads; the
/// [`SpanTable`] handed to `parse` is per-worker state.
#[derive(Debug)]
pub struct Extractor {
    scanner: Scanner,
}

impl Extractor {
    /// Compile the split and anchor pattern sets
    pub fn new() -> Result<Self> {
        Ok(Self {
            scanner: Scanner::new()?,
        })
    }

    /// The underlying pattern engine
    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    /// Classify `buf` and populate `table` with its field spans
    ///
    /// The table is reset first, so a rejected buffer always leaves it
    /// all-empty. Repeated calls over the same buffer produce identical
    /// tables.
    pub fn parse(&self, buf: &[u8], table: &mut SpanTable) -> Result<Outcome> {
        table.reset();
        let Some(split_offset) = self.scanner.find_split(buf)? else {
            return Ok(Outcome::NotHttp);
        };
        let events = self.scanner.match_events(buf)?;
        let complete_head = extract_anchors(buf, split_offset, events, table);
        Ok(Outcome::Http { complete_head })
    }
}

//! scud-core: anchor-based HTTP head field extraction
//!
//! Locates semantically meaningful substrings of raw HTTP bytes — the
//! request line, a fixed set of well-known header values, and the
//! end-of-headers boundary — by running a multi-pattern literal scan and
//! folding the ordered match events into a fixed 16-slot table of
//! (offset, length) spans.
//!
//! Two passes per buffer:
//! 1. A split scan over the first [`SPLIT_WINDOW`] bytes classifies the
//!    buffer as HTTP before anything else runs, so non-HTTP traffic is
//!    rejected without paying for the full anchor scan.
//! 2. A full-buffer anchor scan turns header-name / newline / end-of-head
//!    matches into trimmed value spans.
//!
//! The table stores offsets, not references: [`SpanTable::slice`] borrows
//! the field bytes back out of the caller's buffer, so spans can never
//! outlive it and a table can be reset in place and reused message after
//! message with no allocation.
//!
//! ## Example
//! ```
//! use scud_core::{AnchorKind, Extractor, Outcome, SpanTable};
//!
//! let extractor = Extractor::new().unwrap();
//! let mut table = SpanTable::new();
//!
//! let buf = b"GET /x HTTP/1.1\r\nHost: example.com\r\n\r\nBODY";
//! let outcome = extractor.parse(buf, &mut table).unwrap();
//!
//! assert_eq!(outcome, Outcome::Http { complete_head: true });
//! assert_eq!(table.slice(AnchorKind::RequestLine, buf), Some(&b"/x"[..]));
//! assert_eq!(table.slice(AnchorKind::Host, buf), Some(&b"example.com"[..]));
//! assert_eq!(table.slice(AnchorKind::EndOfHeaders, buf), Some(&b"BODY"[..]));
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod error;
pub mod event;
pub mod extract;
pub mod kind;
pub mod patterns;
pub mod scanner;
pub mod span;

// Re-exports
pub use error::{Error, Result};
pub use event::{MatchEvent, PatternKind, Scan};
pub use extract::{apply_event, extract_anchors, ExtractContext, Extractor, Outcome};
pub use kind::{AnchorKind, ANCHOR_SLOTS};
pub use patterns::{ANCHOR_PATTERNS, SPLIT_PATTERNS, SPLIT_WINDOW};
pub use scanner::{MatchEvents, Scanner};
pub use span::{Span, SpanTable};

//! Literal pattern sets for the split and anchor scans
//!
//! All patterns are literals matched case-insensitively. The split set
//! recognizes request-method and response-version prefixes; the anchor
//! set covers the eight extracted header names plus the two structural
//! patterns (newline, end-of-head terminator).

use crate::event::PatternKind;
use crate::kind::AnchorKind;

/// The split scan looks at most this many bytes into the buffer.
///
/// The request-line closing logic measures back from the newline by the
/// same amount (see [`apply_event`](crate::extract::apply_event)).
pub const SPLIT_WINDOW: usize = 10;

/// Prefix literals that classify a buffer as an HTTP head
///
/// Matched anchored at the buffer start; the first (earliest-ending)
/// match wins and the split scan stops there.
pub const SPLIT_PATTERNS: [&str; 12] = [
    "GET ",
    "POST ",
    "Head ",
    "HTTP/1.0",
    "HTTP/1.1",
    "HTTP/0.",
    "PUT",
    "Delete",
    "trace",
    "Options",
    "Connect",
    "Patch",
];

/// Anchor literals, each paired with the event kind it reports
pub const ANCHOR_PATTERNS: [(&str, PatternKind); 10] = [
    ("User-Agent", PatternKind::Anchor(AnchorKind::UserAgent)),
    ("Content-Type", PatternKind::Anchor(AnchorKind::ContentType)),
    ("Host", PatternKind::Anchor(AnchorKind::Host)),
    ("Referer", PatternKind::Anchor(AnchorKind::Referer)),
    ("Server", PatternKind::Anchor(AnchorKind::Server)),
    ("Cookie", PatternKind::Anchor(AnchorKind::Cookie)),
    ("Content-Length", PatternKind::Anchor(AnchorKind::ContentLength)),
    ("Connection", PatternKind::Anchor(AnchorKind::Connection)),
    ("\n", PatternKind::Newline),
    ("\r\n\r\n", PatternKind::EndOfHeaders),
];

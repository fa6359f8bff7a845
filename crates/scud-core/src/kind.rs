//! Anchor kinds - fixed slot assignments for the span table
//!
//! Slot numbers are part of the table layout consumers index by, so they
//! are stable: slot 3 is reserved and slot 15 is unused, giving
//! [`ANCHOR_SLOTS`] slots total.

/// Number of slots in a [`SpanTable`](crate::SpanTable)
pub const ANCHOR_SLOTS: usize = 16;

/// Identifies one extracted field of an HTTP head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AnchorKind {
    /// Request-line remainder after the split match (the URI for requests)
    RequestLine = 0,
    UserAgent = 1,
    ContentType = 2,
    Host = 4,
    XOnlineHost = 5,
    /// Where the header block ends and the body begins
    EndOfHeaders = 6,
    Referer = 7,
    Server = 8,
    Cookie = 9,
    ContentLength = 10,
    Connection = 11,
    XRequestedWith = 12,
    TransferEncoding = 13,
    ContentEncoding = 14,
}

impl AnchorKind {
    /// All kinds, in slot order
    pub const ALL: [AnchorKind; 14] = [
        AnchorKind::RequestLine,
        AnchorKind::UserAgent,
        AnchorKind::ContentType,
        AnchorKind::Host,
        AnchorKind::XOnlineHost,
        AnchorKind::EndOfHeaders,
        AnchorKind::Referer,
        AnchorKind::Server,
        AnchorKind::Cookie,
        AnchorKind::ContentLength,
        AnchorKind::Connection,
        AnchorKind::XRequestedWith,
        AnchorKind::TransferEncoding,
        AnchorKind::ContentEncoding,
    ];

    /// Slot index in the span table
    #[inline]
    pub const fn slot(self) -> usize {
        self as usize
    }

    /// Canonical header name for field kinds; `None` for the two
    /// structural kinds
    pub const fn header_name(self) -> Option<&'static str> {
        match self {
            AnchorKind::RequestLine | AnchorKind::EndOfHeaders => None,
            AnchorKind::UserAgent => Some("User-Agent"),
            AnchorKind::ContentType => Some("Content-Type"),
            AnchorKind::Host => Some("Host"),
            AnchorKind::XOnlineHost => Some("X-Online-Host"),
            AnchorKind::Referer => Some("Referer"),
            AnchorKind::Server => Some("Server"),
            AnchorKind::Cookie => Some("Cookie"),
            AnchorKind::ContentLength => Some("Content-Length"),
            AnchorKind::Connection => Some("Connection"),
            AnchorKind::XRequestedWith => Some("X-Requested-With"),
            AnchorKind::TransferEncoding => Some("Transfer-Encoding"),
            AnchorKind::ContentEncoding => Some("Content-Encoding"),
        }
    }

    /// Map a header name onto its kind (case-insensitive)
    pub fn from_header_name(name: &str) -> Option<Self> {
        AnchorKind::ALL
            .iter()
            .copied()
            .find(|kind| matches!(kind.header_name(), Some(n) if n.eq_ignore_ascii_case(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_numbers_are_stable() {
        assert_eq!(AnchorKind::RequestLine.slot(), 0);
        assert_eq!(AnchorKind::ContentType.slot(), 2);
        // Slot 3 is reserved.
        assert_eq!(AnchorKind::Host.slot(), 4);
        assert_eq!(AnchorKind::EndOfHeaders.slot(), 6);
        assert_eq!(AnchorKind::ContentEncoding.slot(), 14);
        for kind in AnchorKind::ALL {
            assert!(kind.slot() < ANCHOR_SLOTS);
            assert_ne!(kind.slot(), 3);
            assert_ne!(kind.slot(), 15);
        }
    }

    #[test]
    fn test_from_header_name() {
        assert_eq!(AnchorKind::from_header_name("Host"), Some(AnchorKind::Host));
        assert_eq!(AnchorKind::from_header_name("hOsT"), Some(AnchorKind::Host));
        assert_eq!(
            AnchorKind::from_header_name("content-length"),
            Some(AnchorKind::ContentLength)
        );
        assert_eq!(AnchorKind::from_header_name("Accept"), None);
        assert_eq!(AnchorKind::from_header_name(""), None);
    }

    #[test]
    fn test_structural_kinds_have_no_name() {
        assert_eq!(AnchorKind::RequestLine.header_name(), None);
        assert_eq!(AnchorKind::EndOfHeaders.header_name(), None);
    }
}

//! Span table - fixed-capacity (offset, length) view of one HTTP head

use crate::kind::{AnchorKind, ANCHOR_SLOTS};

/// A byte range inside the caller's buffer
///
/// `len == 0` means "not present". Offsets are only meaningful together
/// with the buffer the table was populated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset of the first value byte
    pub offset: usize,
    /// Value length in bytes
    pub len: usize,
}

impl Span {
    /// The "not present" span
    pub const EMPTY: Span = Span { offset: 0, len: 0 };

    /// Provisional span: start recorded, length not yet known
    #[inline]
    pub const fn at(offset: usize) -> Self {
        Span { offset, len: 0 }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One past the last value byte
    #[inline]
    pub const fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// Fixed-capacity table of field spans, indexed by [`AnchorKind`]
///
/// Reset in place between messages; never allocates. One table per
/// worker: the table is plain mutable state and must not be shared
/// across threads mid-extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanTable {
    slots: [Span; ANCHOR_SLOTS],
}

impl Default for SpanTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SpanTable {
    /// An all-empty table
    pub const fn new() -> Self {
        Self {
            slots: [Span::EMPTY; ANCHOR_SLOTS],
        }
    }

    /// Clear every slot back to the "not present" state
    #[inline]
    pub fn reset(&mut self) {
        self.slots = [Span::EMPTY; ANCHOR_SLOTS];
    }

    #[inline]
    pub fn get(&self, kind: AnchorKind) -> Span {
        self.slots[kind.slot()]
    }

    #[inline]
    pub fn set(&mut self, kind: AnchorKind, span: Span) {
        self.slots[kind.slot()] = span;
    }

    /// Borrow the field bytes back out of `buf`
    ///
    /// Returns `None` when the field is absent or the span does not fit
    /// inside `buf` (a table paired with the wrong buffer).
    pub fn slice<'b>(&self, kind: AnchorKind, buf: &'b [u8]) -> Option<&'b [u8]> {
        let span = self.get(kind);
        if span.is_empty() {
            return None;
        }
        buf.get(span.offset..span.offset.checked_add(span.len)?)
    }

    /// Iterate populated `(kind, span)` pairs in slot order
    pub fn populated(&self) -> impl Iterator<Item = (AnchorKind, Span)> + '_ {
        AnchorKind::ALL
            .iter()
            .copied()
            .map(|kind| (kind, self.get(kind)))
            .filter(|(_, span)| !span.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_is_empty() {
        let table = SpanTable::new();
        assert_eq!(table.populated().count(), 0);
        assert!(table.get(AnchorKind::Host).is_empty());
    }

    #[test]
    fn test_set_get_reset() {
        let mut table = SpanTable::new();
        table.set(AnchorKind::Host, Span { offset: 6, len: 11 });
        assert_eq!(table.get(AnchorKind::Host), Span { offset: 6, len: 11 });
        assert_eq!(table.populated().count(), 1);

        table.reset();
        assert!(table.get(AnchorKind::Host).is_empty());
        assert_eq!(table.populated().count(), 0);
    }

    #[test]
    fn test_slice_borrows_from_buffer() {
        let buf = b"Host: example.com\r\n";
        let mut table = SpanTable::new();
        table.set(AnchorKind::Host, Span { offset: 6, len: 11 });
        assert_eq!(table.slice(AnchorKind::Host, buf), Some(&b"example.com"[..]));
    }

    #[test]
    fn test_slice_rejects_out_of_bounds() {
        let mut table = SpanTable::new();
        table.set(AnchorKind::Host, Span { offset: 2, len: 10 });
        assert_eq!(table.slice(AnchorKind::Host, b"short"), None);

        table.set(AnchorKind::Host, Span {
            offset: usize::MAX,
            len: 2,
        });
        assert_eq!(table.slice(AnchorKind::Host, b"short"), None);
    }

    #[test]
    fn test_empty_span_yields_none() {
        let table = SpanTable::new();
        assert_eq!(table.slice(AnchorKind::Cookie, b"Cookie: a=b"), None);
    }
}

//! Incremental state-machine baseline
//!
//! Drives `httparse` over the capture and copies the request path plus
//! any recognized header values into the shared span table, so both
//! engines are measured doing equivalent work.

use scud_core::{AnchorKind, Outcome, Span, SpanTable};

const MAX_HEADERS: usize = 32;

/// Parse `buf` with the state-machine engine and populate `table`
pub fn parse(buf: &[u8], table: &mut SpanTable) -> Outcome {
    table.reset();
    let mut headers = [httparse::EMPTY_HEADER; MAX_HEADERS];
    let mut req = httparse::Request::new(&mut headers);
    match req.parse(buf) {
        Ok(httparse::Status::Complete(body_start)) => {
            record(buf, &req, table);
            table.set(
                AnchorKind::EndOfHeaders,
                Span {
                    offset: body_start,
                    len: buf.len() - body_start,
                },
            );
            Outcome::Http {
                complete_head: true,
            }
        }
        Ok(httparse::Status::Partial) => {
            record(buf, &req, table);
            Outcome::Http {
                complete_head: false,
            }
        }
        Err(_) => Outcome::NotHttp,
    }
}

fn record(buf: &[u8], req: &httparse::Request<'_, '_>, table: &mut SpanTable) {
    if let Some(path) = req.path {
        table.set(AnchorKind::RequestLine, span_of(buf, path.as_bytes()));
    }
    for header in req.headers.iter() {
        if let Some(kind) = AnchorKind::from_header_name(header.name) {
            table.set(kind, span_of(buf, header.value));
        }
    }
}

/// Offset of a parsed subslice within the original capture
fn span_of(buf: &[u8], field: &[u8]) -> Span {
    Span {
        offset: field.as_ptr() as usize - buf.as_ptr() as usize,
        len: field.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_fills_the_same_table_shape() {
        let buf = b"GET /x HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test\r\n\r\nBODY";
        let mut table = SpanTable::new();
        let outcome = parse(buf, &mut table);
        assert_eq!(
            outcome,
            Outcome::Http {
                complete_head: true
            }
        );
        assert_eq!(table.slice(AnchorKind::RequestLine, buf), Some(&b"/x"[..]));
        assert_eq!(table.slice(AnchorKind::Host, buf), Some(&b"example.com"[..]));
        assert_eq!(table.slice(AnchorKind::UserAgent, buf), Some(&b"test"[..]));
        assert_eq!(table.slice(AnchorKind::EndOfHeaders, buf), Some(&b"BODY"[..]));
    }

    #[test]
    fn test_baseline_rejects_junk() {
        let mut table = SpanTable::new();
        assert_eq!(parse(b"\x00\x01\x02 junk\r\n", &mut table), Outcome::NotHttp);
    }
}

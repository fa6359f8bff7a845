//! Criterion benches: anchor extraction vs an incremental parser baseline
//!
//! Both engines run over the same request capture and populate the same
//! 16-slot span table, so the numbers compare equivalent work: locating
//! the request line, the recognized header values and the body boundary.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scud_core::{AnchorKind, Extractor, Span, SpanTable};

const REQ: &[u8] = b"\
GET /wp-content/uploads/2010/03/hello-kitty-darth-vader-pink.jpg HTTP/1.1\r\n\
Host: www.kittyhell.com\r\n\
User-Agent: Mozilla/5.0 (Macintosh; U; Intel Mac OS X 10.6; ja-JP-mac; rv:1.9.2.3) Gecko/20100401 Firefox/3.6.3 Pathtraq/0.9\r\n\
Accept: text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8\r\n\
Accept-Language: ja,en-us;q=0.7,en;q=0.3\r\n\
Accept-Encoding: gzip,deflate\r\n\
Accept-Charset: Shift_JIS,utf-8;q=0.7,*;q=0.7\r\n\
Keep-Alive: 115\r\n\
Connection: keep-alive\r\n\
Cookie: wp_ozh_wsa_visits=2; wp_ozh_wsa_visit_lasttime=xxxxxxxxxx; __utma=xxxxxxxxx.xxxxxxxxxx.xxxxxxxxxx.xxxxxxxxxx.xxxxxxxxxx.x; __utmz=xxxxxxxxx.xxxxxxxxxx.x.x.utmccn=(referral)|utmcsr=reader.livedoor.com|utmcct=/reader/|utmcmd=referral\r\n\r\n";

const NOT_HTTP: &[u8] = b"SSH-2.0-OpenSSH_8.9p1 Ubuntu-3ubuntu0.1\r\n";

fn anchor_parse(c: &mut Criterion) {
    let extractor = Extractor::new().unwrap();
    let mut table = SpanTable::new();
    c.bench_function("anchor_parse", |b| {
        b.iter(|| extractor.parse(black_box(REQ), &mut table).unwrap())
    });
}

fn anchor_reject(c: &mut Criterion) {
    let extractor = Extractor::new().unwrap();
    let mut table = SpanTable::new();
    c.bench_function("anchor_reject", |b| {
        b.iter(|| extractor.parse(black_box(NOT_HTTP), &mut table).unwrap())
    });
}

fn httparse_baseline(c: &mut Criterion) {
    let mut table = SpanTable::new();
    c.bench_function("httparse_baseline", |b| {
        b.iter(|| {
            table.reset();
            let buf = black_box(REQ);
            let mut headers = [httparse::EMPTY_HEADER; 32];
            let mut req = httparse::Request::new(&mut headers);
            let status = req.parse(buf).unwrap();
            if let Some(path) = req.path {
                table.set(AnchorKind::RequestLine, span_of(buf, path.as_bytes()));
            }
            for header in req.headers.iter() {
                if let Some(kind) = AnchorKind::from_header_name(header.name) {
                    table.set(kind, span_of(buf, header.value));
                }
            }
            if let httparse::Status::Complete(body_start) = status {
                table.set(
                    AnchorKind::EndOfHeaders,
                    Span {
                        offset: body_start,
                        len: buf.len() - body_start,
                    },
                );
            }
        })
    });
}

fn span_of(buf: &[u8], field: &[u8]) -> Span {
    Span {
        offset: field.as_ptr() as usize - buf.as_ptr() as usize,
        len: field.len(),
    }
}

criterion_group!(benches, anchor_parse, anchor_reject, httparse_baseline);
criterion_main!(benches);

//! PROPFIND multistatus parsing.
//!
//! Only `DAV:`-namespaced elements are recognised, whatever prefix the
//! server binds to the namespace. The expected shape is:
//!
//! ```text
//! <multistatus>
//!   <response>
//!     <href>/dav/movies/a.mkv</href>
//!     <propstat><prop><resourcetype><collection/></resourcetype></prop></propstat>
//!   </response>
//! </multistatus>
//! ```

use std::borrow::Cow;

use davshelf_core::{Error, FileEntry, Result};
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;

const DAV_NAMESPACE: &[u8] = b"DAV:";

/// Request body asking the server for all properties.
pub const PROPFIND_ALLPROP: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<propfind xmlns="DAV:">
    <allprop/>
</propfind>"#;

/// Depth of `<response>` elements: direct children of the root.
const RESPONSE_DEPTH: usize = 2;

#[derive(Default)]
struct PendingResponse {
    href: String,
    in_href: bool,
    in_resourcetype: bool,
    is_collection: bool,
}

impl PendingResponse {
    /// Turn a finished `<response>` into an entry, or `None` when it is the
    /// listed directory itself or a sub-collection.
    fn into_entry(self) -> Option<FileEntry> {
        let trimmed = self.href.trim_end_matches('/');
        if trimmed.is_empty() || self.is_collection {
            return None;
        }
        let segment = trimmed.rsplit('/').next().unwrap_or(trimmed);
        let name = urlencoding::decode(segment).unwrap_or(Cow::Borrowed(segment));
        Some(FileEntry::new(name.into_owned(), self.href))
    }
}

/// Parse a multistatus document into leaf entries, in document order.
///
/// Fails with [`Error::MalformedResponse`] when the body is not a
/// well-formed XML document.
pub fn parse_multistatus(body: &str) -> Result<Vec<FileEntry>> {
    let mut reader = NsReader::from_str(body);
    reader.trim_text(true);

    let mut entries = Vec::new();
    let mut depth = 0usize;
    let mut saw_root = false;
    let mut pending: Option<PendingResponse> = None;

    loop {
        let (ns, event) = reader.read_resolved_event().map_err(malformed)?;
        let is_dav = matches!(ns, ResolveResult::Bound(Namespace(uri)) if uri == DAV_NAMESPACE);

        match event {
            Event::Start(e) => {
                depth += 1;
                saw_root = true;
                if !is_dav {
                    continue;
                }
                match e.local_name().as_ref() {
                    b"response" if depth == RESPONSE_DEPTH => {
                        pending = Some(PendingResponse::default());
                    }
                    b"href" if depth == RESPONSE_DEPTH + 1 => {
                        if let Some(p) = pending.as_mut() {
                            p.in_href = true;
                        }
                    }
                    b"resourcetype" => {
                        if let Some(p) = pending.as_mut() {
                            p.in_resourcetype = true;
                        }
                    }
                    b"collection" => mark_collection(&mut pending),
                    _ => {}
                }
            }
            Event::Empty(e) => {
                saw_root = true;
                if is_dav && e.local_name().as_ref() == b"collection" {
                    mark_collection(&mut pending);
                }
            }
            Event::Text(t) => {
                if let Some(p) = pending.as_mut().filter(|p| p.in_href) {
                    p.href.push_str(&t.unescape().map_err(malformed)?);
                }
            }
            Event::End(e) => {
                if is_dav {
                    match e.local_name().as_ref() {
                        b"response" if depth == RESPONSE_DEPTH => {
                            if let Some(entry) = pending.take().and_then(PendingResponse::into_entry) {
                                entries.push(entry);
                            }
                        }
                        b"href" => {
                            if let Some(p) = pending.as_mut() {
                                p.in_href = false;
                            }
                        }
                        b"resourcetype" => {
                            if let Some(p) = pending.as_mut() {
                                p.in_resourcetype = false;
                            }
                        }
                        _ => {}
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(Error::MalformedResponse("no root element".into()));
    }
    if depth != 0 {
        return Err(Error::MalformedResponse(format!(
            "document ended with {depth} unclosed element(s)"
        )));
    }

    Ok(entries)
}

fn mark_collection(pending: &mut Option<PendingResponse>) {
    if let Some(p) = pending.as_mut().filter(|p| p.in_resourcetype) {
        p.is_collection = true;
    }
}

fn malformed(e: quick_xml::Error) -> Error {
    Error::MalformedResponse(format!("invalid multistatus XML: {e}"))
}

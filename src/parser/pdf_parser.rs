//! PDF document parser using lopdf.

use std::fs;
use std::io::Read;
use std::path::Path;

use lopdf::Document as LopdfDocument;

use crate::error::{Error, Result};
use crate::model::{Metadata, TextSpan};
use crate::options::{ErrorMode, ExtractOptions};

use super::spans;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";

/// PDF document parser.
///
/// Wraps a loaded lopdf document and exposes the two things the pipeline
/// needs: document metadata and the ordered span sequence.
pub struct PdfParser {
    doc: LopdfDocument,
}

impl PdfParser {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Parse a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if !data.starts_with(PDF_MAGIC) {
            return Err(Error::UnknownFormat);
        }

        let doc = LopdfDocument::load_mem(data).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;

        // Encrypted content streams cannot be walked for spans.
        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }

        Ok(Self { doc })
    }

    /// Parse a PDF from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Get PDF version.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }

    /// Extract document metadata from the information dictionary.
    pub fn metadata(&self) -> Metadata {
        let mut metadata = Metadata::with_version(self.doc.version.to_string());
        metadata.page_count = self.page_count();
        metadata.encrypted = self.doc.is_encrypted();

        if let Ok(info) = self.doc.trailer.get(b"Info") {
            if let Ok(info_ref) = info.as_reference() {
                if let Ok(info_dict) = self.doc.get_dictionary(info_ref) {
                    metadata.title = get_string_from_dict(info_dict, b"Title");
                    metadata.author = get_string_from_dict(info_dict, b"Author");
                    metadata.subject = get_string_from_dict(info_dict, b"Subject");
                    metadata.keywords = get_string_from_dict(info_dict, b"Keywords");
                    metadata.creator = get_string_from_dict(info_dict, b"Creator");
                    metadata.producer = get_string_from_dict(info_dict, b"Producer");

                    if let Some(date_str) = get_string_from_dict(info_dict, b"CreationDate") {
                        metadata.created = parse_pdf_date(&date_str);
                    }
                    if let Some(date_str) = get_string_from_dict(info_dict, b"ModDate") {
                        metadata.modified = parse_pdf_date(&date_str);
                    }
                }
            }
        }

        metadata
    }

    /// Collect the document's text spans in reading order.
    ///
    /// Pages are visited in ascending page number; within a page the
    /// content-stream order is preserved. Blank spans are dropped. A page
    /// that yields no extractable text contributes zero spans; in lenient
    /// mode the same applies to pages whose streams fail to decode.
    pub fn collect_spans(&self, options: &ExtractOptions) -> Result<Vec<TextSpan>> {
        let mut all = Vec::new();

        for (page_num, page_id) in self.doc.get_pages() {
            match spans::extract_page_spans(&self.doc, page_id, page_num) {
                Ok(page_spans) => all.extend(page_spans),
                Err(e) => match options.error_mode {
                    ErrorMode::Strict => return Err(e),
                    ErrorMode::Lenient => {
                        log::warn!("page {}: no extractable text ({})", page_num, e);
                    }
                },
            }
        }

        Ok(all)
    }
}

/// Helper to get a string from a PDF dictionary.
fn get_string_from_dict(dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
    dict.get(key).ok().and_then(|obj| match obj {
        lopdf::Object::String(bytes, _) => {
            // UTF-16BE with BOM is the PDF standard for Unicode strings
            if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
                let utf16: Vec<u16> = bytes[2..]
                    .chunks(2)
                    .filter_map(|c| {
                        if c.len() == 2 {
                            Some(u16::from_be_bytes([c[0], c[1]]))
                        } else {
                            None
                        }
                    })
                    .collect();
                String::from_utf16(&utf16).ok()
            } else {
                String::from_utf8(bytes.clone())
                    .ok()
                    .or_else(|| Some(bytes.iter().map(|&b| b as char).collect()))
            }
        }
        lopdf::Object::Name(bytes) => String::from_utf8(bytes.clone()).ok(),
        _ => None,
    })
}

/// Parse a PDF date string (D:YYYYMMDDHHmmSSOHH'mm').
fn parse_pdf_date(s: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    let s = s.strip_prefix("D:")?;

    if s.len() < 4 {
        return None;
    }

    let year: i32 = s.get(0..4)?.parse().ok()?;
    let month: u32 = s.get(4..6).and_then(|m| m.parse().ok()).unwrap_or(1);
    let day: u32 = s.get(6..8).and_then(|d| d.parse().ok()).unwrap_or(1);
    let hour: u32 = s.get(8..10).and_then(|h| h.parse().ok()).unwrap_or(0);
    let minute: u32 = s.get(10..12).and_then(|m| m.parse().ok()).unwrap_or(0);
    let second: u32 = s.get(12..14).and_then(|s| s.parse().ok()).unwrap_or(0);

    chrono::NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .map(|dt| chrono::DateTime::from_naive_utc_and_offset(dt, chrono::Utc))
}

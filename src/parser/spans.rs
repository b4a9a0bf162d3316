//! Per-page text span extraction.
//!
//! Walks a page's decoded content stream, tracking the text state (font,
//! size, text matrix) and emitting one [`TextSpan`] per shown string.

use std::collections::BTreeMap;

use lopdf::content::Content;
use lopdf::{Dictionary, Document as LopdfDocument, Object, ObjectId};
use unicode_normalization::UnicodeNormalization;

use crate::error::Result;
use crate::model::TextSpan;

/// TJ kerning adjustments beyond this (in 1/1000 text space units) are
/// treated as word spaces.
const TJ_SPACE_THRESHOLD: f32 = 200.0;

/// Extract the ordered text spans of one page.
pub(crate) fn extract_page_spans(
    doc: &LopdfDocument,
    page_id: ObjectId,
    page_num: u32,
) -> Result<Vec<TextSpan>> {
    let fonts = doc.get_page_fonts(page_id)?;
    let content = doc.get_page_content(page_id)?;
    walk_content(doc, &content, &fonts, page_num)
}

/// Interpret the text-showing operators of a content stream.
fn walk_content(
    doc: &LopdfDocument,
    content: &[u8],
    fonts: &BTreeMap<Vec<u8>, &Dictionary>,
    page_num: u32,
) -> Result<Vec<TextSpan>> {
    let content = Content::decode(content)?;

    let mut spans = Vec::new();
    let mut state = TextState::new();

    for op in content.operations {
        match op.operator.as_str() {
            "BT" => state.begin_text(),
            "ET" => state.in_text = false,
            "Tf" => {
                if op.operands.len() >= 2 {
                    if let Object::Name(name) = &op.operands[0] {
                        state.font_key = name.clone();
                    }
                    state.font_size = as_number(&op.operands[1]).unwrap_or(state.font_size);
                }
            }
            "TL" => {
                if let Some(leading) = op.operands.first().and_then(as_number) {
                    state.leading = leading;
                }
            }
            "Td" => {
                if op.operands.len() >= 2 {
                    let tx = as_number(&op.operands[0]).unwrap_or(0.0);
                    let ty = as_number(&op.operands[1]).unwrap_or(0.0);
                    state.translate(tx, ty);
                }
            }
            "TD" => {
                if op.operands.len() >= 2 {
                    let tx = as_number(&op.operands[0]).unwrap_or(0.0);
                    let ty = as_number(&op.operands[1]).unwrap_or(0.0);
                    state.leading = -ty;
                    state.translate(tx, ty);
                }
            }
            "Tm" => {
                if op.operands.len() >= 6 {
                    let m: Vec<f32> = op.operands[..6]
                        .iter()
                        .map(|o| as_number(o).unwrap_or(0.0))
                        .collect();
                    state.set_matrix(m[0], m[1], m[2], m[3], m[4], m[5]);
                }
            }
            "T*" => state.next_line(),
            "Tj" => {
                if state.in_text {
                    if let Some(Object::String(bytes, _)) = op.operands.first() {
                        let text = decode_string(doc, fonts, &state.font_key, bytes);
                        push_span(&mut spans, &state, fonts, text, page_num);
                    }
                }
            }
            "TJ" => {
                if state.in_text {
                    if let Some(Object::Array(items)) = op.operands.first() {
                        let text = decode_tj_array(doc, fonts, &state.font_key, items);
                        push_span(&mut spans, &state, fonts, text, page_num);
                    }
                }
            }
            "'" | "\"" => {
                state.next_line();
                if state.in_text {
                    let text_idx = if op.operator == "\"" { 2 } else { 0 };
                    if let Some(Object::String(bytes, _)) = op.operands.get(text_idx) {
                        let text = decode_string(doc, fonts, &state.font_key, bytes);
                        push_span(&mut spans, &state, fonts, text, page_num);
                    }
                }
            }
            _ => {}
        }
    }

    Ok(spans)
}

/// Emit a span for shown text, dropping blank runs.
fn push_span(
    spans: &mut Vec<TextSpan>,
    state: &TextState,
    fonts: &BTreeMap<Vec<u8>, &Dictionary>,
    text: String,
    page_num: u32,
) {
    if text.trim().is_empty() {
        return;
    }

    let normalized: String = text.nfc().collect();
    let (x, y) = state.position();
    let font_name = fonts
        .get(&state.font_key)
        .map(|f| base_font_name(f, &state.font_key))
        .unwrap_or_else(|| String::from_utf8_lossy(&state.font_key).into_owned());

    spans.push(TextSpan::new(
        normalized,
        state.effective_font_size(),
        font_name,
        page_num,
        x,
        y,
    ));
}

/// Decode a TJ array: strings interleaved with kerning adjustments.
/// Large negative adjustments stand in for word spaces.
fn decode_tj_array(
    doc: &LopdfDocument,
    fonts: &BTreeMap<Vec<u8>, &Dictionary>,
    font_key: &[u8],
    items: &[Object],
) -> String {
    let mut combined = String::new();

    for item in items {
        match item {
            Object::String(bytes, _) => {
                combined.push_str(&decode_string(doc, fonts, font_key, bytes));
            }
            Object::Integer(n) => {
                if -(*n as f32) > TJ_SPACE_THRESHOLD && !combined.ends_with(' ') {
                    combined.push(' ');
                }
            }
            Object::Real(n) => {
                if -n > TJ_SPACE_THRESHOLD && !combined.ends_with(' ') {
                    combined.push(' ');
                }
            }
            _ => {}
        }
    }

    combined
}

/// Decode a shown string through the current font's encoding, falling back
/// to byte-level guessing when the font carries none.
fn decode_string(
    doc: &LopdfDocument,
    fonts: &BTreeMap<Vec<u8>, &Dictionary>,
    font_key: &[u8],
    bytes: &[u8],
) -> String {
    if let Some(font) = fonts.get(font_key) {
        if let Ok(encoding) = font.get_font_encoding(doc) {
            if let Ok(text) = LopdfDocument::decode_text(&encoding, bytes) {
                return text;
            }
        }
    }
    decode_text_simple(bytes)
}

/// Resolve a font's BaseFont name, falling back to the resource key.
fn base_font_name(font: &Dictionary, key: &[u8]) -> String {
    font.get(b"BaseFont")
        .ok()
        .and_then(|o| o.as_name().ok())
        .map(|n| String::from_utf8_lossy(n).into_owned())
        .unwrap_or_else(|| String::from_utf8_lossy(key).into_owned())
}

/// Fallback decoding: UTF-16BE with BOM, then UTF-8, then Latin-1.
fn decode_text_simple(bytes: &[u8]) -> String {
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
        return String::from_utf16(&utf16).unwrap_or_default();
    }

    if let Ok(s) = String::from_utf8(bytes.to_vec()) {
        return s;
    }

    bytes.iter().map(|&b| b as char).collect()
}

/// Helper to extract a number from a PDF object.
fn as_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

/// Text state: current font, size, leading and text matrix.
struct TextState {
    font_key: Vec<u8>,
    font_size: f32,
    leading: f32,
    in_text: bool,
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
}

impl TextState {
    fn new() -> Self {
        Self {
            font_key: Vec::new(),
            font_size: 12.0,
            leading: 0.0,
            in_text: false,
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    /// BT resets the text matrix to identity.
    fn begin_text(&mut self) {
        self.in_text = true;
        self.a = 1.0;
        self.b = 0.0;
        self.c = 0.0;
        self.d = 1.0;
        self.e = 0.0;
        self.f = 0.0;
    }

    fn set_matrix(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        self.a = a;
        self.b = b;
        self.c = c;
        self.d = d;
        self.e = e;
        self.f = f;
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.e += tx * self.a + ty * self.c;
        self.f += tx * self.b + ty * self.d;
    }

    fn next_line(&mut self) {
        let leading = -self.leading;
        self.translate(0.0, leading);
    }

    fn position(&self) -> (f32, f32) {
        (self.e, self.f)
    }

    /// Effective size is the nominal Tf size scaled by the text matrix's
    /// vertical scale factor.
    fn effective_font_size(&self) -> f32 {
        self.font_size * (self.b * self.b + self.d * self.d).sqrt()
    }
}

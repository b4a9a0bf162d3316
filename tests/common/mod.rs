//! Shared helpers for integration tests: build small PDFs with lopdf.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// One line of text to place on a page.
pub struct Line {
    pub text: &'static str,
    pub size: i64,
    pub y: i64,
}

/// Shorthand constructor.
pub fn line(text: &'static str, size: i64, y: i64) -> Line {
    Line { text, size, y }
}

/// Build a Helvetica-only PDF with the given lines per page and an
/// optional metadata title.
pub fn build_pdf(pages: &[Vec<Line>], title: Option<&str>) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in pages {
        let mut ops: Vec<Operation> = Vec::new();
        for l in lines {
            ops.push(Operation::new("BT", vec![]));
            ops.push(Operation::new("Tf", vec!["F1".into(), l.size.into()]));
            ops.push(Operation::new("Td", vec![72.into(), l.y.into()]));
            ops.push(Operation::new("Tj", vec![Object::string_literal(l.text)]));
            ops.push(Operation::new("ET", vec![]));
        }

        let content = Content { operations: ops };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content stream"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
            },
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    if let Some(title) = title {
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(title),
        });
        doc.trailer.set("Info", info_id);
    }

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("serialize test PDF");
    buf
}

/// A three-page report: 24pt display title on page 1, 18pt chapter
/// headings, 14pt section headings, 11pt body text.
pub fn sample_report(title: Option<&str>) -> Vec<u8> {
    let body = |y: i64| line("Lorem ipsum dolor sit amet, consectetur.", 11, y);

    build_pdf(
        &[
            vec![
                line("Deep Learning Systems", 24, 720),
                body(650),
                body(630),
                body(610),
                body(590),
                body(570),
            ],
            vec![
                line("Introduction", 18, 720),
                body(690),
                body(670),
                body(650),
                line("Motivation", 14, 620),
                body(590),
                body(570),
                body(550),
            ],
            vec![
                line("Methods", 18, 720),
                body(690),
                body(670),
                body(650),
                body(630),
                line("Datasets", 14, 600),
                body(570),
                body(550),
            ],
        ],
        title,
    )
}

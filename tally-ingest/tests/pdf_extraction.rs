use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use tally_ingest::source::{extract_bytes, PdfTextExtractor};
use tally_ingest::{parse, DocumentKind, ExtractionError, IngestOptions, TextExtractor};

/// Build a one-page PDF with one text block per line.
fn pdf_with_lines(lines: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut operations = vec![Operation::new("q", vec![])];
    for (i, line) in lines.iter().enumerate() {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Tf", vec!["F1".into(), 10.into()]));
        operations.push(Operation::new(
            "Td",
            vec![50.into(), (800 - 20 * i as i64).into()],
        ));
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        operations.push(Operation::new("ET", vec![]));
    }
    operations.push(Operation::new("Q", vec![]));
    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

#[test]
fn test_pdf_text_layer_parses() {
    let bytes = pdf_with_lines(&[
        "Statement Period",
        "03/15/2024 Grocery Store -$45.67",
        "Jan 5, 2024 Paycheck 2500.00",
    ]);
    assert_eq!(DocumentKind::from_magic(&bytes), Some(DocumentKind::Pdf));

    let extracted = extract_bytes(DocumentKind::Pdf, &bytes, &IngestOptions::default()).unwrap();
    assert!(extracted.text.contains("Grocery Store"));

    let table = parse(&extracted.text);
    assert_eq!(table.len(), 2);
    assert_eq!(table.records()[0].amount, "-$45.67");
    assert_eq!(table.records()[1].date, "Jan 5, 2024");
}

#[test]
fn test_pdf_without_text_layer() {
    let bytes = pdf_with_lines(&[]);
    let err = PdfTextExtractor.extract(&bytes).unwrap_err();
    assert!(matches!(err, ExtractionError::NoTextLayer), "got {err:?}");
}

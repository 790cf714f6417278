//! End-to-end extraction over a PDF generated with lopdf.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use pretty_assertions::assert_eq;

use dirx_core::{extract_file, DirectoryParser, PdfExtractor, PdfProcessor};

const LEFT_X: i64 = 40;
const RIGHT_X: i64 = 320;

/// One printed line: column x, baseline y, text.
type Line = (i64, i64, &'static str);

fn page_content(lines: &[Line]) -> Vec<u8> {
    let mut operations = Vec::new();
    for &(x, y, text) in lines {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Tf", vec!["F1".into(), 10.into()]));
        operations.push(Operation::new("Td", vec![x.into(), y.into()]));
        operations.push(Operation::new("Tj", vec![Object::string_literal(text)]));
        operations.push(Operation::new("ET", vec![]));
    }
    Content { operations }.encode().unwrap()
}

fn build_pdf(pages: &[Vec<Line>]) -> Vec<u8> {
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

    let kids: Vec<ObjectId> = pages
        .iter()
        .map(|lines| {
            let content_id = doc.add_object(Stream::new(dictionary! {}, page_content(lines)));
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 600.into(), 800.into()],
            })
        })
        .collect();

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids.iter().map(|&id| id.into()).collect::<Vec<Object>>(),
            "Count" => kids.len() as i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

/// Two pages; rows are drawn left then right so the content order interleaves the columns.
fn directory_pdf() -> Vec<u8> {
    build_pdf(&[
        vec![
            (LEFT_X, 700, "(1) Acme Corp (Reg.# 42)"),
            (RIGHT_X, 700, "Tel (Off): 555-0000"),
            (LEFT_X, 686, "John Smith, CEO"),
            (RIGHT_X, 686, "(2) Beta Traders (Reg.# 7)"),
            (LEFT_X, 672, "1 Road"),
            (RIGHT_X, 672, "Email: sales@beta.test"),
        ],
        vec![(LEFT_X, 700, "(3) Gamma Mills (Reg.# 9)")],
    ])
}

#[test]
fn pages_are_read_as_left_then_right_halves() {
    let mut extractor = PdfExtractor::new();
    extractor.load(&directory_pdf()).unwrap();
    assert_eq!(extractor.page_count(), 2);

    let pages = extractor.extract_columns().unwrap();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].number, 1);
    assert!(pages[0].left.contains("John Smith"));
    assert!(!pages[0].left.contains("Beta"));
    assert!(pages[0].right.contains("Beta Traders"));
    assert!(pages[1].right.trim().is_empty());
}

#[test]
fn generated_directory_is_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("directory.pdf");
    std::fs::write(&path, directory_pdf()).unwrap();

    let result = extract_file(&path, &DirectoryParser::new(), true).unwrap();
    let records = result.records;
    assert_eq!(records.len(), 3);

    assert_eq!(records[0].record_index, 1);
    assert_eq!(records[0].company_name, "Acme Corp");
    assert_eq!(records[0].registration_number, "42");
    assert_eq!(records[0].managing_director_name, "John Smith");
    assert_eq!(records[0].managing_director_title, "CEO");
    assert_eq!(records[0].address, "1 Road");
    assert_eq!(records[0].telephone_office, "555-0000");

    assert_eq!(records[1].company_name, "Beta Traders");
    assert_eq!(records[1].email, "sales@beta.test");

    assert_eq!(records[2].record_index, 3);
    assert_eq!(records[2].company_name, "Gamma Mills");
}

#[test]
fn drawing_order_does_not_change_reading_order() {
    // Lines drawn bottom-up, and the head line's words drawn right to left.
    let pdf = build_pdf(&[vec![
        (LEFT_X, 672, "1 Road"),
        (LEFT_X, 686, "John Smith, CEO"),
        (100, 700, "Corp (Reg.# 42)"),
        (LEFT_X, 700, "(1) Acme"),
        (RIGHT_X, 686, "Fax (Off): 555-1111"),
        (RIGHT_X, 700, "Tel (Off): 555-0000"),
    ]]);

    let mut extractor = PdfExtractor::new();
    extractor.load(&pdf).unwrap();
    let pages = extractor.extract_columns().unwrap();
    assert_eq!(
        pages[0].left,
        "(1) Acme Corp (Reg.# 42)\nJohn Smith, CEO\n1 Road"
    );
    assert_eq!(pages[0].right, "Tel (Off): 555-0000\nFax (Off): 555-1111");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reversed.pdf");
    std::fs::write(&path, pdf).unwrap();

    let records = extract_file(&path, &DirectoryParser::new(), true)
        .unwrap()
        .records;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].company_name, "Acme Corp");
    assert_eq!(records[0].managing_director_name, "John Smith");
    assert_eq!(records[0].managing_director_title, "CEO");
    assert_eq!(records[0].address, "1 Road");
    assert_eq!(records[0].telephone_office, "555-0000");
    assert_eq!(records[0].fax_office, "555-1111");
}

#[test]
fn garbage_bytes_fail_to_load() {
    let mut extractor = PdfExtractor::new();
    assert!(extractor.load(b"%PDF-1.5 truncated").is_err());
}

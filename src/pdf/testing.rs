//! In-memory PDFs for tests.
//!
//! Page `n` (1-based) gets a MediaBox `100 + n` points wide, so the width
//! identifies which source page ended up where.

use lopdf::{
    content::Content, content::Operation, Dictionary, Document, Object, ObjectId, Stream,
};
use std::collections::HashSet;

/// Build a PDF with `num_pages` pages and return its bytes
pub fn create_test_pdf(num_pages: u32) -> Vec<u8> {
    to_bytes(build_test_document(num_pages))
}

pub fn build_test_document(num_pages: u32) -> Document {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut page_ids = Vec::new();

    for i in 0..num_pages {
        let content_id = add_content(&mut doc, i + 1);

        let page = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            ("MediaBox", media_box(100 + i as i64 + 1)),
            ("Contents", Object::Reference(content_id)),
        ]);
        page_ids.push(doc.add_object(page));
    }

    let pages = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Count", Object::Integer(num_pages as i64)),
        ("Kids", references(&page_ids)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    set_catalog(&mut doc, pages_id);
    doc
}

fn add_content(doc: &mut Document, page_number: u32) -> ObjectId {
    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new(
                "Tf",
                vec![Object::Name(b"F1".to_vec()), Object::Integer(12)],
            ),
            Operation::new("Td", vec![Object::Integer(50), Object::Integer(700)]),
            Operation::new(
                "Tj",
                vec![Object::String(
                    format!("Page {}", page_number).into_bytes(),
                    lopdf::StringFormat::Literal,
                )],
            ),
            Operation::new("ET", vec![]),
        ],
    };
    doc.add_object(Stream::new(Dictionary::new(), content.encode().unwrap()))
}

fn media_box(width: i64) -> Object {
    Object::Array(vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(width),
        Object::Integer(792),
    ])
}

fn references(ids: &[ObjectId]) -> Object {
    Object::Array(ids.iter().map(|id| Object::Reference(*id)).collect())
}

fn set_catalog(doc: &mut Document, pages_id: ObjectId) {
    let catalog = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]);
    let catalog_id = doc.add_object(catalog);
    doc.trailer.set("Root", Object::Reference(catalog_id));
}

fn to_bytes(mut doc: Document) -> Vec<u8> {
    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

/// A PDF whose catalog points at page 1 through a bookmark, a named
/// destination and an open action
pub fn create_test_pdf_with_outline(num_pages: u32) -> Vec<u8> {
    let mut doc = build_test_document(num_pages);
    let first_page = *doc.get_pages().get(&1).unwrap();
    let dest = Object::Array(vec![
        Object::Reference(first_page),
        Object::Name(b"Fit".to_vec()),
    ]);

    let outlines_id = doc.new_object_id();
    let item_id = doc.add_object(Dictionary::from_iter(vec![
        ("Title", Object::string_literal("Chapter 1")),
        ("Parent", Object::Reference(outlines_id)),
        ("Dest", dest.clone()),
    ]));
    let outlines = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Outlines".to_vec())),
        ("First", Object::Reference(item_id)),
        ("Last", Object::Reference(item_id)),
        ("Count", Object::Integer(1)),
    ]);
    doc.objects.insert(outlines_id, Object::Dictionary(outlines));

    let dests_id = doc.add_object(Dictionary::from_iter(vec![(
        "Names",
        Object::Array(vec![Object::string_literal("intro"), dest.clone()]),
    )]));
    let names_id = doc.add_object(Dictionary::from_iter(vec![(
        "Dests",
        Object::Reference(dests_id),
    )]));

    let root_id = doc.trailer.get(b"Root").unwrap().as_reference().unwrap();
    let catalog = doc.get_dictionary_mut(root_id).unwrap();
    catalog.set("Outlines", Object::Reference(outlines_id));
    catalog.set("Names", Object::Reference(names_id));
    catalog.set("OpenAction", dest);

    to_bytes(doc)
}

/// Four pages under two intermediate page tree nodes.
///
/// The pages carry no MediaBox of their own: pages 1-2 inherit a 201 wide
/// box and shared resources from the first node, pages 3-4 a 202 wide box
/// and a 90 degree rotation from the second.
pub fn create_nested_test_pdf() -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let root_id = doc.new_object_id();

    let mut node_ids = Vec::new();
    let mut page_number = 0;
    for (width, rotate) in [(201, None), (202, Some(90))] {
        let node_id = doc.new_object_id();
        let mut kids = Vec::new();
        for _ in 0..2 {
            page_number += 1;
            let content_id = add_content(&mut doc, page_number);
            kids.push(doc.add_object(Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Page".to_vec())),
                ("Parent", Object::Reference(node_id)),
                ("Contents", Object::Reference(content_id)),
            ])));
        }

        let mut node = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Parent", Object::Reference(root_id)),
            ("Count", Object::Integer(2)),
            ("Kids", references(&kids)),
            ("MediaBox", media_box(width)),
            ("Resources", Object::Dictionary(Dictionary::new())),
        ]);
        if let Some(degrees) = rotate {
            node.set("Rotate", Object::Integer(degrees));
        }
        doc.objects.insert(node_id, Object::Dictionary(node));
        node_ids.push(node_id);
    }

    let root = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Count", Object::Integer(4)),
        ("Kids", references(&node_ids)),
    ]);
    doc.objects.insert(root_id, Object::Dictionary(root));

    set_catalog(&mut doc, root_id);
    to_bytes(doc)
}

/// Number of `Dest` entries whose target is not a page of `doc`
pub fn dangling_dests(doc: &Document) -> usize {
    let pages: HashSet<ObjectId> = doc.get_pages().values().copied().collect();
    doc.objects
        .values()
        .filter_map(|obj| obj.as_dict().ok())
        .filter_map(|dict| dict.get(b"Dest").ok())
        .filter(|dest| match dest.as_array() {
            Ok(items) => !matches!(items.first(), Some(Object::Reference(id)) if pages.contains(id)),
            Err(_) => false,
        })
        .count()
}

/// Pages of `doc` that are still stored but no longer in its page tree
pub fn orphaned_pages(doc: &Document) -> usize {
    let pages: HashSet<ObjectId> = doc.get_pages().values().copied().collect();
    doc.objects
        .iter()
        .filter(|(id, obj)| {
            obj.as_dict()
                .ok()
                .and_then(|dict| dict.get(b"Type").ok())
                .and_then(|t| t.as_name().ok())
                == Some(b"Page".as_slice())
                && !pages.contains(*id)
        })
        .count()
}

/// MediaBox widths of every page, in page order
pub fn page_widths(doc: &Document) -> Vec<i64> {
    doc.get_pages()
        .values()
        .map(|page_id| {
            let page = doc.get_dictionary(*page_id).unwrap();
            let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
            media_box[2].as_i64().unwrap()
        })
        .collect()
}

/// Load a saved PDF and return its page widths
pub fn page_widths_of(path: &std::path::Path) -> Vec<i64> {
    page_widths(&Document::load(path).unwrap())
}

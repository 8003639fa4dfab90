use crate::partition::Piece;
use anyhow::{Context, Result};
use lopdf::{Document, Object, ObjectId};
use std::collections::HashSet;
use std::path::Path;

/// Page attributes a page may take from its ancestors in the page tree
const INHERITABLE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Catalog entries whose targets are pages of the source document
const PAGE_ADDRESSING_KEYS: [&[u8]; 5] = [
    b"Outlines",
    b"Dests",
    b"OpenAction",
    b"PageLabels",
    b"StructTreeRoot",
];

pub struct PdfDocument {
    pub doc: Document,
    pub path: String,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().display().to_string();
        let doc =
            Document::load(&path).with_context(|| format!("Failed to open PDF: {}", path_str))?;
        Ok(PdfDocument {
            doc,
            path: path_str,
        })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Get 1-indexed page object IDs
    pub fn page_ids(&self) -> Vec<(u32, ObjectId)> {
        let mut pages: Vec<_> = self.doc.get_pages().into_iter().collect();
        pages.sort_by_key(|(num, _)| *num);
        pages
    }

    /// Build a new document holding only the pages of `piece`, in order.
    ///
    /// The kept pages are hung directly off the root page tree node in a
    /// single pass, carrying over any attributes they inherited from
    /// intermediate nodes. Catalog entries that address pages of the source
    /// (bookmarks, named destinations, page labels) are dropped. An empty
    /// piece yields a document with an empty page tree.
    pub fn extract_piece(&self, piece: &Piece) -> Result<Document> {
        let total = self.page_count();
        if piece.end > total {
            anyhow::bail!(
                "Pages {}-{} are out of range (1-{}) in {}",
                piece.first_page(),
                piece.last_page(),
                total,
                self.path
            );
        }

        let kept: Vec<ObjectId> = self
            .page_ids()
            .into_iter()
            .filter(|(num, _)| piece.contains(num - 1))
            .map(|(_, id)| id)
            .collect();

        let mut new_doc = self.doc.clone();
        let root_id = new_doc.trailer.get(b"Root")?.as_reference()?;
        let pages_id = new_doc
            .get_dictionary(root_id)?
            .get(b"Pages")?
            .as_reference()?;

        for &page_id in &kept {
            let inherited = inherited_attributes(&self.doc, page_id)?;
            let page = new_doc.get_dictionary_mut(page_id)?;
            for (key, value) in inherited {
                page.set(key, value);
            }
            page.set("Parent", Object::Reference(pages_id));
        }

        let pages = new_doc.get_dictionary_mut(pages_id)?;
        pages.set(
            "Kids",
            Object::Array(kept.iter().map(|id| Object::Reference(*id)).collect()),
        );
        pages.set("Count", Object::Integer(kept.len() as i64));

        strip_page_references(&mut new_doc, root_id)?;

        // Drop the other pages and everything only they referenced
        new_doc.prune_objects();
        new_doc.compress();

        Ok(new_doc)
    }

    /// Save to a file, replacing any existing one
    pub fn save<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<()> {
        doc.save(&path)
            .with_context(|| format!("Failed to save PDF: {}", path.as_ref().display()))?;
        Ok(())
    }
}

/// Inheritable attributes missing on the page itself, resolved from its ancestors
fn inherited_attributes(doc: &Document, page_id: ObjectId) -> Result<Vec<(Vec<u8>, Object)>> {
    let page = doc.get_dictionary(page_id)?;
    let mut found = Vec::new();

    for key in INHERITABLE_KEYS {
        if page.has(key) {
            continue;
        }

        let mut seen = HashSet::new();
        let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
        while let Some(node_id) = parent {
            if !seen.insert(node_id) {
                break;
            }
            let Ok(node) = doc.get_dictionary(node_id) else {
                break;
            };
            if let Ok(value) = node.get(key) {
                found.push((key.to_vec(), value.clone()));
                break;
            }
            parent = node.get(b"Parent").and_then(Object::as_reference).ok();
        }
    }

    Ok(found)
}

fn strip_page_references(doc: &mut Document, root_id: ObjectId) -> Result<()> {
    let catalog = doc.get_dictionary_mut(root_id)?;
    for key in PAGE_ADDRESSING_KEYS {
        catalog.remove(key);
    }

    let names_id = match catalog.get_mut(b"Names") {
        Ok(Object::Dictionary(names)) => {
            names.remove(b"Dests");
            None
        }
        Ok(Object::Reference(id)) => Some(*id),
        _ => None,
    };

    if let Some(id) = names_id {
        if let Ok(names) = doc.get_dictionary_mut(id) {
            names.remove(b"Dests");
        }
    }

    Ok(())
}

//! ZIP container abstraction for OOXML packages.
//!
//! An OOXML document is a ZIP archive of XML "parts" plus two kinds of
//! bookkeeping: `[Content_Types].xml`, which maps every part to a content
//! type, and `.rels` parts, which wire parts together by relationship id.
//! `PackageWriter` collects parts and relationships and derives both when
//! the archive is serialized.

use crate::error::{Error, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// XML namespace of package relationship parts.
const RELATIONSHIPS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// XML namespace of `[Content_Types].xml`.
const CONTENT_TYPES_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

/// Content type of `.rels` parts (a `Default` rule, keyed by extension).
const RELS_CONTENT_TYPE: &str = "application/vnd.openxmlformats-package.relationships+xml";

/// A relationship entry destined for a .rels part.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1")
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target path, relative to the source part's directory
    pub target: String,
}

/// An ordered collection of relationships for one source part.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship with an explicit id.
    pub fn add(
        &mut self,
        id: impl Into<String>,
        rel_type: impl Into<String>,
        target: impl Into<String>,
    ) {
        self.rels.push(Relationship {
            id: id.into(),
            rel_type: rel_type.into(),
            target: target.into(),
        });
    }

    /// Add a relationship with the next sequential `rIdN` id, returning
    /// the id.
    pub fn add_next(&mut self, rel_type: impl Into<String>, target: impl Into<String>) -> String {
        let id = format!("rId{}", self.rels.len() + 1);
        self.add(id.clone(), rel_type, target);
        id
    }

    /// Number of relationships.
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Render the `.rels` part XML.
    pub fn to_xml(&self) -> Result<Vec<u8>> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
            .map_err(|e| Error::Xml(e.to_string()))?;

        let mut root = BytesStart::new("Relationships");
        root.push_attribute(("xmlns", RELATIONSHIPS_NS));
        writer
            .write_event(Event::Start(root))
            .map_err(|e| Error::Xml(e.to_string()))?;

        for rel in &self.rels {
            let mut elem = BytesStart::new("Relationship");
            elem.push_attribute(("Id", rel.id.as_str()));
            elem.push_attribute(("Type", rel.rel_type.as_str()));
            elem.push_attribute(("Target", rel.target.as_str()));
            writer
                .write_event(Event::Empty(elem))
                .map_err(|e| Error::Xml(e.to_string()))?;
        }

        writer
            .write_event(Event::End(BytesEnd::new("Relationships")))
            .map_err(|e| Error::Xml(e.to_string()))?;
        Ok(writer.into_inner().into_inner())
    }
}

/// A package part: name, declared content type, payload.
#[derive(Debug, Clone)]
pub struct Part {
    /// Part name without a leading slash (e.g., "ppt/slides/slide1.xml")
    pub name: String,
    /// Content type declared in `[Content_Types].xml`
    pub content_type: String,
    /// Part payload
    pub data: Vec<u8>,
}

/// Derive a part's `.rels` part name.
///
/// The package-level source (empty name) maps to `_rels/.rels`;
/// `ppt/presentation.xml` maps to `ppt/_rels/presentation.xml.rels`.
pub fn rels_part_name(part_name: &str) -> String {
    if part_name.is_empty() {
        return "_rels/.rels".to_string();
    }
    match part_name.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None => format!("_rels/{}.rels", part_name),
    }
}

/// Accumulates parts and relationships, then serializes the archive.
#[derive(Debug, Default)]
pub struct PackageWriter {
    parts: Vec<Part>,
    rels: Vec<(String, Relationships)>,
}

impl PackageWriter {
    /// Create an empty package.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part.
    pub fn add_part(
        &mut self,
        name: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) {
        self.parts.push(Part {
            name: name.into(),
            content_type: content_type.into(),
            data,
        });
    }

    /// Attach relationships to a source part (empty name = package level).
    pub fn add_relationships(&mut self, source_part: impl Into<String>, rels: Relationships) {
        if !rels.is_empty() {
            self.rels.push((source_part.into(), rels));
        }
    }

    /// Number of parts added so far (excluding derived `.rels` parts).
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Render `[Content_Types].xml` from the accumulated parts.
    fn content_types_xml(&self) -> Result<Vec<u8>> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
            .map_err(|e| Error::Xml(e.to_string()))?;

        let mut root = BytesStart::new("Types");
        root.push_attribute(("xmlns", CONTENT_TYPES_NS));
        writer
            .write_event(Event::Start(root))
            .map_err(|e| Error::Xml(e.to_string()))?;

        let mut rels_default = BytesStart::new("Default");
        rels_default.push_attribute(("Extension", "rels"));
        rels_default.push_attribute(("ContentType", RELS_CONTENT_TYPE));
        writer
            .write_event(Event::Empty(rels_default))
            .map_err(|e| Error::Xml(e.to_string()))?;

        let mut xml_default = BytesStart::new("Default");
        xml_default.push_attribute(("Extension", "xml"));
        xml_default.push_attribute(("ContentType", "application/xml"));
        writer
            .write_event(Event::Empty(xml_default))
            .map_err(|e| Error::Xml(e.to_string()))?;

        for part in &self.parts {
            let mut elem = BytesStart::new("Override");
            let part_name = format!("/{}", part.name);
            elem.push_attribute(("PartName", part_name.as_str()));
            elem.push_attribute(("ContentType", part.content_type.as_str()));
            writer
                .write_event(Event::Empty(elem))
                .map_err(|e| Error::Xml(e.to_string()))?;
        }

        writer
            .write_event(Event::End(BytesEnd::new("Types")))
            .map_err(|e| Error::Xml(e.to_string()))?;
        Ok(writer.into_inner().into_inner())
    }

    /// Serialize the package into an archive behind any seekable writer.
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let mut zip = ZipWriter::new(writer);
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        zip.start_file("[Content_Types].xml", options)?;
        zip.write_all(&self.content_types_xml()?)?;

        for (source, rels) in &self.rels {
            zip.start_file(rels_part_name(source), options)?;
            zip.write_all(&rels.to_xml()?)?;
        }

        for part in &self.parts {
            zip.start_file(part.name.as_str(), options)?;
            zip.write_all(&part.data)?;
        }

        zip.finish()?;
        Ok(())
    }

    /// Serialize the package to an in-memory byte buffer.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        self.write_to(&mut buffer)?;
        Ok(buffer.into_inner())
    }

    /// Serialize the package to a file.
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref())?;
        self.write_to(BufWriter::new(file))?;
        Ok(())
    }
}

//! Assembly of the full .pptx package from a `Presentation`.
//!
//! Produces the fixed part tree: the presentation part and its
//! relationships, one slide part per slide (each related to its layout),
//! the template parts (master, layouts, theme, property parts), and the
//! `docProps` metadata parts.

use super::{template, writer};
use crate::container::{PackageWriter, Relationships};
use crate::error::Result;
use crate::model::Presentation;
use chrono::Utc;
use quick_xml::escape::escape;
use std::fmt::Write as FmtWrite;
use std::path::Path;

// Relationship type URIs
const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_CORE_PROPS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
const REL_EXTENDED_PROPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
const REL_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
const REL_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const REL_SLIDE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const REL_THEME: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
const REL_PRES_PROPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps";
const REL_VIEW_PROPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/viewProps";
const REL_TABLE_STYLES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/tableStyles";

// Content types
const CT_PRESENTATION: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
const CT_SLIDE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
const CT_SLIDE_LAYOUT: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
const CT_SLIDE_MASTER: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
const CT_THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
const CT_PRES_PROPS: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presProps+xml";
const CT_VIEW_PROPS: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml";
const CT_TABLE_STYLES: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml";
const CT_CORE_PROPS: &str = "application/vnd.openxmlformats-package.core-properties+xml";
const CT_EXTENDED_PROPS: &str =
    "application/vnd.openxmlformats-officedocument.extended-properties+xml";

/// First slide id in `p:sldIdLst`; PowerPoint numbers slides from 256.
const FIRST_SLIDE_ID: usize = 256;

/// Serialize a presentation to .pptx bytes.
pub fn write_bytes(presentation: &Presentation) -> Result<Vec<u8>> {
    build_package(presentation)?.to_bytes()
}

/// Serialize a presentation to a .pptx file.
pub fn write_file(presentation: &Presentation, path: impl AsRef<Path>) -> Result<()> {
    build_package(presentation)?.write_file(path)
}

/// Collect every part and relationship of the package.
fn build_package(presentation: &Presentation) -> Result<PackageWriter> {
    let mut pkg = PackageWriter::new();
    let slide_count = presentation.slide_count();
    let layout_count = template::slide_layout_count();

    // Package-level relationships
    let mut root_rels = Relationships::new();
    root_rels.add_next(REL_OFFICE_DOCUMENT, "ppt/presentation.xml");
    root_rels.add_next(REL_CORE_PROPS, "docProps/core.xml");
    root_rels.add_next(REL_EXTENDED_PROPS, "docProps/app.xml");
    pkg.add_relationships("", root_rels);

    // docProps
    pkg.add_part(
        "docProps/core.xml",
        CT_CORE_PROPS,
        core_props_xml(presentation)?.into_bytes(),
    );
    pkg.add_part(
        "docProps/app.xml",
        CT_EXTENDED_PROPS,
        app_props_xml(presentation)?.into_bytes(),
    );

    // Presentation part and its relationships: rId1 is the master, slides
    // follow from rId2, the fixed-function parts come last.
    pkg.add_part(
        "ppt/presentation.xml",
        CT_PRESENTATION,
        presentation_xml(presentation)?.into_bytes(),
    );
    let mut pres_rels = Relationships::new();
    pres_rels.add_next(REL_SLIDE_MASTER, "slideMasters/slideMaster1.xml");
    for n in 1..=slide_count {
        pres_rels.add_next(REL_SLIDE, format!("slides/slide{}.xml", n));
    }
    pres_rels.add_next(REL_PRES_PROPS, "presProps.xml");
    pres_rels.add_next(REL_VIEW_PROPS, "viewProps.xml");
    pres_rels.add_next(REL_THEME, "theme/theme1.xml");
    pres_rels.add_next(REL_TABLE_STYLES, "tableStyles.xml");
    pkg.add_relationships("ppt/presentation.xml", pres_rels);

    // Slide master; its rIds 1..=7 must match the template's layout id list
    pkg.add_part(
        "ppt/slideMasters/slideMaster1.xml",
        CT_SLIDE_MASTER,
        template::slide_master_xml().as_bytes().to_vec(),
    );
    let mut master_rels = Relationships::new();
    for n in 1..=layout_count {
        master_rels.add_next(REL_SLIDE_LAYOUT, format!("../slideLayouts/slideLayout{}.xml", n));
    }
    master_rels.add_next(REL_THEME, "../theme/theme1.xml");
    pkg.add_relationships("ppt/slideMasters/slideMaster1.xml", master_rels);

    // Layouts
    for index in 0..layout_count {
        let part_name = format!("ppt/slideLayouts/slideLayout{}.xml", index + 1);
        pkg.add_part(
            part_name.clone(),
            CT_SLIDE_LAYOUT,
            template::slide_layout_xml(index).as_bytes().to_vec(),
        );
        let mut layout_rels = Relationships::new();
        layout_rels.add_next(REL_SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
        pkg.add_relationships(part_name, layout_rels);
    }

    // Slides
    for (i, slide) in presentation.slides.iter().enumerate() {
        let part_name = format!("ppt/slides/slide{}.xml", i + 1);
        pkg.add_part(
            part_name.clone(),
            CT_SLIDE,
            writer::slide_xml(slide)?.into_bytes(),
        );
        let mut slide_rels = Relationships::new();
        slide_rels.add_next(
            REL_SLIDE_LAYOUT,
            format!("../slideLayouts/slideLayout{}.xml", slide.layout.part_number()),
        );
        pkg.add_relationships(part_name, slide_rels);
    }

    // Fixed-function parts
    pkg.add_part(
        "ppt/theme/theme1.xml",
        CT_THEME,
        template::theme_xml().as_bytes().to_vec(),
    );
    pkg.add_part(
        "ppt/presProps.xml",
        CT_PRES_PROPS,
        template::pres_props_xml().as_bytes().to_vec(),
    );
    pkg.add_part(
        "ppt/viewProps.xml",
        CT_VIEW_PROPS,
        template::view_props_xml().as_bytes().to_vec(),
    );
    pkg.add_part(
        "ppt/tableStyles.xml",
        CT_TABLE_STYLES,
        template::table_styles_xml().as_bytes().to_vec(),
    );

    Ok(pkg)
}

/// Render `ppt/presentation.xml`.
fn presentation_xml(presentation: &Presentation) -> Result<String> {
    let mut xml = String::with_capacity(1024);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#,
    );

    xml.push_str("<p:sldMasterIdLst>");
    xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
    xml.push_str("</p:sldMasterIdLst>");

    if !presentation.slides.is_empty() {
        xml.push_str("<p:sldIdLst>");
        for i in 0..presentation.slide_count() {
            write!(
                xml,
                r#"<p:sldId id="{}" r:id="rId{}"/>"#,
                FIRST_SLIDE_ID + i,
                i + 2
            )?;
        }
        xml.push_str("</p:sldIdLst>");
    }

    write!(
        xml,
        r#"<p:sldSz cx="{}" cy="{}"/>"#,
        presentation.slide_width, presentation.slide_height
    )?;
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");

    Ok(xml)
}

/// Render `docProps/core.xml` with creation/modification timestamps.
fn core_props_xml(presentation: &Presentation) -> Result<String> {
    let now = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    let title = presentation.metadata.title.as_deref().unwrap_or("");
    let author = presentation.metadata.author.as_deref().unwrap_or("");

    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
    );
    write!(xml, "<dc:title>{}</dc:title>", escape(title))?;
    write!(xml, "<dc:creator>{}</dc:creator>", escape(author))?;
    write!(xml, "<cp:lastModifiedBy>{}</cp:lastModifiedBy>", escape(author))?;
    write!(
        xml,
        r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
        now
    )?;
    write!(
        xml,
        r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>"#,
        now
    )?;
    xml.push_str("</cp:coreProperties>");
    Ok(xml)
}

/// Render `docProps/app.xml`.
fn app_props_xml(presentation: &Presentation) -> Result<String> {
    let mut xml = String::with_capacity(256);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
    );
    xml.push_str("<Application>deckgen</Application>");
    write!(xml, "<Slides>{}</Slides>", presentation.slide_count())?;
    xml.push_str("<PresentationFormat>On-screen Show (4:3)</PresentationFormat>");
    xml.push_str("</Properties>");
    Ok(xml)
}

//! Slide part XML generation.
//!
//! Slides are rendered as PresentationML shape trees: placeholders inherit
//! position and styling from their layout via `<p:ph>`, auto shapes carry
//! explicit geometry and fills, and tables are DrawingML `<a:tbl>` graphic
//! frames.

use crate::error::{Error, Result};
use crate::model::{
    Paragraph, Placeholder, PlaceholderKind, Shape, Slide, SlideLayout, Table, TextStyle,
};
use quick_xml::escape::escape;
use std::fmt::Write as FmtWrite;

/// Table style referenced by generated table frames; must match the id in
/// the template's tableStyles part.
const TABLE_STYLE_ID: &str = "{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}";

/// Generate the slide part XML for one slide.
pub fn slide_xml(slide: &Slide) -> Result<String> {
    let mut xml = String::with_capacity(4096);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#,
    );

    xml.push_str("<p:cSld>");
    xml.push_str("<p:spTree>");

    // Group shape properties (required; the group itself is id 1)
    xml.push_str("<p:nvGrpSpPr>");
    xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
    xml.push_str("<p:cNvGrpSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGrpSpPr>");
    xml.push_str("<p:grpSpPr>");
    xml.push_str("<a:xfrm>");
    xml.push_str(r#"<a:off x="0" y="0"/>"#);
    xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
    xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
    xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
    xml.push_str("</a:xfrm>");
    xml.push_str("</p:grpSpPr>");

    let mut shape_id = 2u32;

    for placeholder in &slide.placeholders {
        write_placeholder(&mut xml, slide.layout, placeholder, shape_id)?;
        shape_id += 1;
    }

    for shape in &slide.shapes {
        write_auto_shape(&mut xml, shape, shape_id)?;
        shape_id += 1;
    }

    for table in &slide.tables {
        write_table_frame(&mut xml, table, shape_id)?;
        shape_id += 1;
    }

    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
    xml.push_str("</p:sld>");

    Ok(xml)
}

/// `<p:ph>` attributes for a placeholder on the given layout.
///
/// Slides repeat the layout's type/idx pair so the placeholder inherits
/// from the right layout shape: the Title layout uses `ctrTitle` +
/// `subTitle`, the Section Header body keeps its explicit `body` type, and
/// content regions elsewhere are identified by `idx` alone.
fn ph_attributes(layout: SlideLayout, kind: PlaceholderKind) -> (Option<&'static str>, Option<u8>) {
    match kind {
        PlaceholderKind::Title => {
            if layout == SlideLayout::Title {
                (Some("ctrTitle"), None)
            } else {
                (Some("title"), None)
            }
        }
        PlaceholderKind::Subtitle => (Some("subTitle"), Some(1)),
        PlaceholderKind::Body { idx } => {
            if layout == SlideLayout::SectionHeader {
                (Some("body"), Some(idx))
            } else {
                (None, Some(idx))
            }
        }
    }
}

fn placeholder_name(kind: PlaceholderKind, shape_id: u32) -> String {
    match kind {
        PlaceholderKind::Title => format!("Title {}", shape_id - 1),
        PlaceholderKind::Subtitle => format!("Subtitle {}", shape_id - 1),
        PlaceholderKind::Body { .. } => format!("Content Placeholder {}", shape_id - 1),
    }
}

fn write_placeholder(
    xml: &mut String,
    layout: SlideLayout,
    placeholder: &Placeholder,
    shape_id: u32,
) -> Result<()> {
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="{}"/>"#,
        shape_id,
        placeholder_name(placeholder.kind, shape_id)
    )?;
    xml.push_str("<p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>");

    xml.push_str("<p:nvPr><p:ph");
    let (ph_type, ph_idx) = ph_attributes(layout, placeholder.kind);
    if let Some(t) = ph_type {
        write!(xml, r#" type="{}""#, t)?;
    }
    if let Some(idx) = ph_idx {
        write!(xml, r#" idx="{}""#, idx)?;
    }
    xml.push_str("/></p:nvPr>");
    xml.push_str("</p:nvSpPr>");

    // Geometry is inherited from the layout placeholder
    xml.push_str("<p:spPr/>");

    xml.push_str("<p:txBody>");
    xml.push_str("<a:bodyPr/>");
    xml.push_str("<a:lstStyle/>");
    for paragraph in &placeholder.frame.paragraphs {
        write_paragraph(xml, paragraph)?;
    }
    xml.push_str("</p:txBody>");

    xml.push_str("</p:sp>");
    Ok(())
}

fn write_paragraph(xml: &mut String, paragraph: &Paragraph) -> Result<()> {
    if paragraph.is_empty() {
        xml.push_str("<a:p/>");
        return Ok(());
    }

    xml.push_str("<a:p>");
    for run in &paragraph.runs {
        xml.push_str("<a:r>");
        write_run_properties(xml, &run.style)?;
        write!(xml, "<a:t>{}</a:t>", escape(run.text.as_str()))?;
        xml.push_str("</a:r>");
    }
    xml.push_str("</a:p>");
    Ok(())
}

fn write_run_properties(xml: &mut String, style: &TextStyle) -> Result<()> {
    xml.push_str(r#"<a:rPr lang="en-US""#);
    if style.bold {
        xml.push_str(r#" b="1""#);
    }
    xml.push_str(r#" dirty="0""#);

    if let Some(color) = style.color {
        xml.push('>');
        write!(
            xml,
            r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
            color.to_hex()
        )?;
        xml.push_str("</a:rPr>");
    } else {
        xml.push_str("/>");
    }
    Ok(())
}

fn write_auto_shape(xml: &mut String, shape: &Shape, shape_id: u32) -> Result<()> {
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="{} {}"/>"#,
        shape_id,
        shape.kind.display_name(),
        shape_id - 1
    )?;
    xml.push_str("<p:cNvSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr>");
    xml.push_str("<a:xfrm>");
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, shape.left, shape.top)?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, shape.width, shape.height)?;
    xml.push_str("</a:xfrm>");
    write!(
        xml,
        r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#,
        shape.kind.preset()
    )?;
    write!(
        xml,
        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
        shape.fill.to_hex()
    )?;
    xml.push_str("</p:spPr>");

    if let Some(ref text) = shape.text {
        xml.push_str("<p:txBody>");
        xml.push_str(r#"<a:bodyPr rtlCol="0" anchor="ctr"/>"#);
        xml.push_str("<a:lstStyle/>");
        xml.push_str(r#"<a:p><a:pPr algn="ctr"/><a:r><a:rPr lang="en-US" dirty="0"/>"#);
        write!(xml, "<a:t>{}</a:t>", escape(text.as_str()))?;
        xml.push_str("</a:r></a:p>");
        xml.push_str("</p:txBody>");
    }

    xml.push_str("</p:sp>");
    Ok(())
}

fn write_table_frame(xml: &mut String, table: &Table, shape_id: u32) -> Result<()> {
    let columns = table.column_count();
    for (i, row) in table.rows.iter().enumerate() {
        if row.len() != columns {
            return Err(Error::InvalidData(format!(
                "table row {} has {} cells, expected {}",
                i,
                row.len(),
                columns
            )));
        }
    }

    xml.push_str("<p:graphicFrame>");
    xml.push_str("<p:nvGraphicFramePr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="Table {}"/>"#,
        shape_id,
        shape_id - 1
    )?;
    xml.push_str("<p:cNvGraphicFramePr><a:graphicFrameLocks noGrp=\"1\"/></p:cNvGraphicFramePr>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGraphicFramePr>");

    xml.push_str("<p:xfrm>");
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, table.left, table.top)?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, table.width, table.height)?;
    xml.push_str("</p:xfrm>");

    xml.push_str("<a:graphic>");
    xml.push_str(
        r#"<a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/table">"#,
    );
    xml.push_str("<a:tbl>");

    write!(
        xml,
        r#"<a:tblPr firstRow="1" bandRow="1"><a:tableStyleId>{}</a:tableStyleId></a:tblPr>"#,
        TABLE_STYLE_ID
    )?;

    xml.push_str("<a:tblGrid>");
    for width in &table.column_widths {
        write!(xml, r#"<a:gridCol w="{}"/>"#, width)?;
    }
    xml.push_str("</a:tblGrid>");

    // Rows share the frame height evenly
    let row_height = if table.rows.is_empty() {
        0
    } else {
        table.height.value() / table.rows.len() as i64
    };

    for row in &table.rows {
        write!(xml, r#"<a:tr h="{}">"#, row_height)?;
        for cell in &row.cells {
            xml.push_str("<a:tc>");
            xml.push_str("<a:txBody>");
            xml.push_str("<a:bodyPr/>");
            xml.push_str("<a:lstStyle/>");
            xml.push_str("<a:p>");
            xml.push_str("<a:r>");
            write_run_properties(xml, &cell.style)?;
            write!(xml, "<a:t>{}</a:t>", escape(cell.text.as_str()))?;
            xml.push_str("</a:r>");
            xml.push_str("</a:p>");
            xml.push_str("</a:txBody>");
            match cell.fill {
                Some(color) => {
                    write!(
                        xml,
                        r#"<a:tcPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:tcPr>"#,
                        color.to_hex()
                    )?;
                }
                None => xml.push_str("<a:tcPr/>"),
            }
            xml.push_str("</a:tc>");
        }
        xml.push_str("</a:tr>");
    }

    xml.push_str("</a:tbl>");
    xml.push_str("</a:graphicData>");
    xml.push_str("</a:graphic>");
    xml.push_str("</p:graphicFrame>");
    Ok(())
}

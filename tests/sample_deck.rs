//! Integration tests for the built-in sample deck.
//!
//! These tests serialize the sample presentation, re-open the package as a
//! ZIP archive, and verify the emitted XML: part tree, slide order, layout
//! references, placeholder text, shape fills, and table styling.

use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

fn sample_bytes() -> Vec<u8> {
    deckgen::sample::build().to_bytes().expect("serialize sample deck")
}

fn open_archive(bytes: Vec<u8>) -> ZipArchive<Cursor<Vec<u8>>> {
    ZipArchive::new(Cursor::new(bytes)).expect("valid zip archive")
}

fn read_part(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
    let mut content = String::new();
    archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("missing part: {}", name))
        .read_to_string(&mut content)
        .expect("part is UTF-8");
    content
}

/// Collect the character content of every `<a:t>` element, in order.
fn collect_texts(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut texts = Vec::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"a:t" => in_text = true,
            Ok(Event::End(e)) if e.name().as_ref() == b"a:t" => in_text = false,
            Ok(Event::Text(e)) if in_text => {
                texts.push(e.unescape().expect("valid text").into_owned());
            }
            Ok(Event::Eof) => break,
            Err(e) => panic!("XML parse error: {}", e),
            _ => {}
        }
    }
    texts
}

#[test]
fn output_file_exists_and_is_nonempty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(deckgen::sample::OUTPUT_FILE);

    deckgen::sample::build().save(&path).unwrap();

    let data = std::fs::read(&path).unwrap();
    assert!(!data.is_empty());
    // ZIP local file header magic
    assert_eq!(&data[..2], b"PK");
}

#[test]
fn package_contains_expected_parts() {
    let archive = open_archive(sample_bytes());
    let names: Vec<String> = {
        let mut v: Vec<String> = archive.file_names().map(String::from).collect();
        v.sort();
        v
    };

    for required in [
        "[Content_Types].xml",
        "_rels/.rels",
        "docProps/core.xml",
        "docProps/app.xml",
        "ppt/presentation.xml",
        "ppt/_rels/presentation.xml.rels",
        "ppt/slideMasters/slideMaster1.xml",
        "ppt/theme/theme1.xml",
        "ppt/presProps.xml",
        "ppt/viewProps.xml",
        "ppt/tableStyles.xml",
    ] {
        assert!(names.iter().any(|n| n == required), "missing {}", required);
    }

    for n in 1..=8 {
        assert!(names.iter().any(|x| x == &format!("ppt/slides/slide{}.xml", n)));
        assert!(names
            .iter()
            .any(|x| x == &format!("ppt/slides/_rels/slide{}.xml.rels", n)));
    }
    assert!(!names.iter().any(|x| x == "ppt/slides/slide9.xml"));

    for n in 1..=7 {
        assert!(names
            .iter()
            .any(|x| x == &format!("ppt/slideLayouts/slideLayout{}.xml", n)));
    }
}

#[test]
fn presentation_lists_eight_slides_in_order() {
    let mut archive = open_archive(sample_bytes());
    let xml = read_part(&mut archive, "ppt/presentation.xml");

    assert_eq!(xml.matches("<p:sldId ").count(), 8);
    for (i, id) in (256..264).enumerate() {
        assert!(
            xml.contains(&format!(r#"<p:sldId id="{}" r:id="rId{}"/>"#, id, i + 2)),
            "slide {} id/rel mismatch",
            i + 1
        );
    }
    assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000"/>"#));
}

#[test]
fn slides_reference_layouts_in_fixed_order() {
    let mut archive = open_archive(sample_bytes());
    // Deck order: title, title+content, section header, two content,
    // title-only (shapes), title-only (table), title+content, title.
    let expected = [1, 2, 3, 4, 6, 6, 2, 1];

    for (i, layout_no) in expected.iter().enumerate() {
        let rels = read_part(
            &mut archive,
            &format!("ppt/slides/_rels/slide{}.xml.rels", i + 1),
        );
        assert!(
            rels.contains(&format!("../slideLayouts/slideLayout{}.xml", layout_no)),
            "slide {} should use layout {}",
            i + 1,
            layout_no
        );
    }
}

#[test]
fn title_slide_text_and_date() {
    let mut archive = open_archive(sample_bytes());
    let xml = read_part(&mut archive, "ppt/slides/slide1.xml");
    let texts = collect_texts(&xml);

    assert_eq!(texts[0], "Sample Presentation");
    assert_eq!(texts[1], "Created with Python");

    // "Month DD, YYYY"
    let date = &texts[2];
    let (month, rest) = date.split_once(' ').expect("date has a space");
    assert!(month.chars().all(|c| c.is_ascii_alphabetic()));
    assert!(month.chars().next().unwrap().is_ascii_uppercase());
    let (day, year) = rest.split_once(", ").expect("date has comma");
    assert_eq!(day.len(), 2);
    assert!(day.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(year.len(), 4);
    assert!(year.chars().all(|c| c.is_ascii_digit()));

    assert!(xml.contains(r#"<p:ph type="ctrTitle"/>"#));
    assert!(xml.contains(r#"<p:ph type="subTitle" idx="1"/>"#));
}

#[test]
fn shapes_slide_has_three_filled_shapes() {
    let mut archive = open_archive(sample_bytes());
    let xml = read_part(&mut archive, "ppt/slides/slide5.xml");

    assert_eq!(xml.matches("<a:prstGeom").count(), 3);
    for (preset, fill) in [
        ("rect", "0070C0"),
        ("ellipse", "70AD47"),
        ("rightArrow", "FFC000"),
    ] {
        assert!(
            xml.contains(&format!(r#"<a:prstGeom prst="{}">"#, preset)),
            "missing {} geometry",
            preset
        );
        assert!(
            xml.contains(&format!(r#"<a:srgbClr val="{}"/>"#, fill)),
            "missing {} fill",
            fill
        );
    }

    let texts = collect_texts(&xml);
    assert_eq!(texts, vec!["Visual Elements", "Rectangle", "Circle", "Arrow"]);

    // 2" x 2" shapes at 1", 3.5", 6" from the left, 2" from the top
    for x in ["914400", "3200400", "5486400"] {
        assert!(xml.contains(&format!(r#"<a:off x="{}" y="1828800"/>"#, x)));
    }
    assert_eq!(xml.matches(r#"<a:ext cx="1828800" cy="1828800"/>"#).count(), 3);
}

#[test]
fn table_slide_grid_and_styling() {
    let mut archive = open_archive(sample_bytes());
    let xml = read_part(&mut archive, "ppt/slides/slide6.xml");

    assert_eq!(xml.matches("<a:tr ").count(), 4);
    assert_eq!(xml.matches("<a:tc>").count(), 12);
    assert_eq!(xml.matches(r#"<a:gridCol w="1828800"/>"#).count(), 3);

    // Frame at (1.5", 2"), 6" x 3"
    assert!(xml.contains(r#"<a:off x="1371600" y="1828800"/>"#));
    assert!(xml.contains(r#"<a:ext cx="5486400" cy="2743200"/>"#));

    // Header row styling: blue fill, bold white runs
    assert_eq!(
        xml.matches(r#"<a:tcPr><a:solidFill><a:srgbClr val="4472C4"/></a:solidFill></a:tcPr>"#)
            .count(),
        3
    );
    assert_eq!(
        xml.matches(r#"<a:rPr lang="en-US" b="1" dirty="0"><a:solidFill><a:srgbClr val="FFFFFF"/></a:solidFill></a:rPr>"#)
            .count(),
        3
    );

    let texts = collect_texts(&xml);
    assert_eq!(
        texts,
        vec![
            "Data Table Example",
            "Category",
            "Q1 Results",
            "Q2 Results",
            "Product A",
            "85%",
            "92%",
            "Product B",
            "78%",
            "81%",
            "Product C",
            "91%",
            "88%",
        ]
    );
}

#[test]
fn body_slides_keep_literal_bullets() {
    let mut archive = open_archive(sample_bytes());

    let intro = read_part(&mut archive, "ppt/slides/slide2.xml");
    let texts = collect_texts(&intro);
    assert_eq!(texts[0], "Introduction");
    assert!(texts.contains(&"• Various slide layouts".to_string()));
    assert!(texts.contains(&"• Charts and tables".to_string()));

    let two_content = read_part(&mut archive, "ppt/slides/slide4.xml");
    assert!(two_content.contains(r#"<p:ph idx="1"/>"#));
    assert!(two_content.contains(r#"<p:ph idx="2"/>"#));
    let texts = collect_texts(&two_content);
    assert!(texts.contains(&"Efficiency".to_string()));
    assert!(texts.contains(&"Flexibility".to_string()));
    assert!(texts.contains(&"• Batch processing".to_string()));

    let conclusion = read_part(&mut archive, "ppt/slides/slide7.xml");
    let texts = collect_texts(&conclusion);
    assert_eq!(texts[0], "Conclusion");
    assert!(texts.iter().filter(|t| t.starts_with('✓')).count() == 4);
    assert_eq!(texts.last().map(String::as_str), Some("Thank you!"));
}

#[test]
fn repeated_builds_are_structurally_identical() {
    let first = sample_bytes();
    let second = sample_bytes();

    let mut a = open_archive(first);
    let mut b = open_archive(second);

    let names_a: Vec<String> = a.file_names().map(String::from).collect();
    let names_b: Vec<String> = b.file_names().map(String::from).collect();
    assert_eq!(names_a, names_b);

    // Every part except docProps timestamps and the dated first slide must
    // match byte for byte.
    for name in names_a {
        if name == "docProps/core.xml" || name == "ppt/slides/slide1.xml" {
            continue;
        }
        let pa = read_part(&mut a, &name);
        let pb = read_part(&mut b, &name);
        assert_eq!(pa, pb, "part {} differs between builds", name);
    }
}

//! Minimal WordprocessingML package writer.
//!
//! Produces a .docx (a zip archive) with four parts: `[Content_Types].xml`,
//! the package relationships, `word/document.xml` built from the flattened
//! block model, and `word/styles.xml` carrying the export defaults
//! (Arial 10pt, 1.15 line spacing — the same sheet the rendered panels use).

use std::io::{Cursor, Write};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::errors::AppError;
use crate::export::html::{parse_html, BlockKind, DocBlock};

const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
</Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

// Arial 10pt (sz is half-points), black, 1.15 line spacing (240 * 1.15).
const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:docDefaults>
<w:rPrDefault>
<w:rPr>
<w:rFonts w:ascii="Arial" w:hAnsi="Arial" w:cs="Arial"/>
<w:color w:val="000000"/>
<w:sz w:val="20"/>
<w:szCs w:val="20"/>
</w:rPr>
</w:rPrDefault>
<w:pPrDefault>
<w:pPr>
<w:spacing w:after="120" w:line="276" w:lineRule="auto"/>
</w:pPr>
</w:pPrDefault>
</w:docDefaults>
</w:styles>"#;

/// Heading font sizes in half-points, indexed by level 1-4. Body text is 20.
fn heading_size(level: u8) -> u32 {
    match level {
        1 => 32,
        2 => 26,
        3 => 24,
        _ => 22,
    }
}

/// Converts an HTML string into DOCX bytes.
pub fn html_to_docx(html: &str) -> Result<Vec<u8>, AppError> {
    let blocks = parse_html(html);
    if blocks.is_empty() {
        return Err(AppError::Export(
            "HTML contained no renderable content".to_string(),
        ));
    }

    let document_xml = build_document_xml(&blocks)
        .map_err(|e| AppError::Export(format!("Failed to build document.xml: {e}")))?;

    write_package(&document_xml)
        .map_err(|e| AppError::Export(format!("Failed to write DOCX package: {e}")))
}

/// Builds `word/document.xml` from the block model.
fn build_document_xml(blocks: &[DocBlock]) -> anyhow::Result<Vec<u8>> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

    let mut document = BytesStart::new("w:document");
    document.push_attribute(("xmlns:w", WORDML_NS));
    writer.write_event(Event::Start(document))?;
    writer.write_event(Event::Start(BytesStart::new("w:body")))?;

    for block in blocks {
        write_paragraph(&mut writer, block)?;
    }

    // Section properties: US letter, 1" margins (twentieths of a point)
    writer.write_event(Event::Start(BytesStart::new("w:sectPr")))?;
    let mut pg_sz = BytesStart::new("w:pgSz");
    pg_sz.push_attribute(("w:w", "12240"));
    pg_sz.push_attribute(("w:h", "15840"));
    writer.write_event(Event::Empty(pg_sz))?;
    let mut pg_mar = BytesStart::new("w:pgMar");
    pg_mar.push_attribute(("w:top", "1440"));
    pg_mar.push_attribute(("w:right", "1440"));
    pg_mar.push_attribute(("w:bottom", "1440"));
    pg_mar.push_attribute(("w:left", "1440"));
    writer.write_event(Event::Empty(pg_mar))?;
    writer.write_event(Event::End(BytesEnd::new("w:sectPr")))?;

    writer.write_event(Event::End(BytesEnd::new("w:body")))?;
    writer.write_event(Event::End(BytesEnd::new("w:document")))?;

    Ok(writer.into_inner().into_inner())
}

fn write_paragraph<W: Write>(writer: &mut Writer<W>, block: &DocBlock) -> anyhow::Result<()> {
    writer.write_event(Event::Start(BytesStart::new("w:p")))?;

    // List items carry a literal bullet prefix instead of a numbering part;
    // the visible text is identical.
    if block.kind == BlockKind::ListItem {
        write_run(writer, "\u{2022} ", false, false, None)?;
    }

    let heading = match block.kind {
        BlockKind::Heading(level) => Some(heading_size(level)),
        _ => None,
    };

    for run in &block.runs {
        write_run(
            writer,
            &run.text,
            run.bold || heading.is_some(),
            run.italic,
            heading,
        )?;
    }

    writer.write_event(Event::End(BytesEnd::new("w:p")))?;
    Ok(())
}

fn write_run<W: Write>(
    writer: &mut Writer<W>,
    text: &str,
    bold: bool,
    italic: bool,
    size: Option<u32>,
) -> anyhow::Result<()> {
    writer.write_event(Event::Start(BytesStart::new("w:r")))?;

    if bold || italic || size.is_some() {
        writer.write_event(Event::Start(BytesStart::new("w:rPr")))?;
        if bold {
            writer.write_event(Event::Empty(BytesStart::new("w:b")))?;
        }
        if italic {
            writer.write_event(Event::Empty(BytesStart::new("w:i")))?;
        }
        if let Some(half_points) = size {
            let mut sz = BytesStart::new("w:sz");
            sz.push_attribute(("w:val", half_points.to_string().as_str()));
            writer.write_event(Event::Empty(sz))?;
        }
        writer.write_event(Event::End(BytesEnd::new("w:rPr")))?;
    }

    let mut t = BytesStart::new("w:t");
    t.push_attribute(("xml:space", "preserve"));
    writer.write_event(Event::Start(t))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new("w:t")))?;

    writer.write_event(Event::End(BytesEnd::new("w:r")))?;
    Ok(())
}

/// Zips the four parts into the final package.
fn write_package(document_xml: &[u8]) -> anyhow::Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("[Content_Types].xml", options)?;
    zip.write_all(CONTENT_TYPES_XML.as_bytes())?;

    zip.start_file("_rels/.rels", options)?;
    zip.write_all(PACKAGE_RELS_XML.as_bytes())?;

    zip.start_file("word/_rels/document.xml.rels", options)?;
    zip.write_all(DOCUMENT_RELS_XML.as_bytes())?;

    zip.start_file("word/document.xml", options)?;
    zip.write_all(document_xml)?;

    zip.start_file("word/styles.xml", options)?;
    zip.write_all(STYLES_XML.as_bytes())?;

    Ok(zip.finish()?.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::resume::render_resume;
    use crate::tailor::models::tests::sample_result;
    use std::io::Read;
    use zip::ZipArchive;

    fn read_part(docx: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(docx.to_vec())).unwrap();
        let mut part = archive.by_name(name).unwrap();
        let mut content = String::new();
        part.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_package_has_all_parts() {
        let docx = html_to_docx("<p>hello</p>").unwrap();
        let mut archive = ZipArchive::new(Cursor::new(docx)).unwrap();
        for name in [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/_rels/document.xml.rels",
            "word/document.xml",
            "word/styles.xml",
        ] {
            assert!(archive.by_name(name).is_ok(), "missing part {name}");
        }
    }

    #[test]
    fn test_document_contains_visible_text() {
        let docx = html_to_docx("<h1>Jane Doe</h1><p>Python and SQL</p>").unwrap();
        let document = read_part(&docx, "word/document.xml");
        assert!(document.contains("Jane Doe"));
        assert!(document.contains("Python and SQL"));
    }

    #[test]
    fn test_bold_run_carries_bold_property() {
        let docx = html_to_docx("<p><strong>Important</strong></p>").unwrap();
        let document = read_part(&docx, "word/document.xml");
        assert!(document.contains("<w:b/>"));
        assert!(document.contains("Important"));
    }

    #[test]
    fn test_list_items_are_bulleted() {
        let docx = html_to_docx("<ul><li>Python</li></ul>").unwrap();
        let document = read_part(&docx, "word/document.xml");
        assert!(document.contains("\u{2022} "));
        assert!(document.contains("Python"));
    }

    #[test]
    fn test_text_is_xml_escaped() {
        let docx = html_to_docx("<p>A &amp; B &lt; C</p>").unwrap();
        let document = read_part(&docx, "word/document.xml");
        assert!(document.contains("A &amp; B &lt; C"));
    }

    #[test]
    fn test_empty_html_is_an_export_error() {
        let err = html_to_docx("<div>   </div>").unwrap_err();
        assert!(matches!(err, AppError::Export(_)));
    }

    #[test]
    fn test_rendered_resume_panel_round_trips_into_docx() {
        let result = sample_result();
        let html = render_resume(&result);
        let docx = html_to_docx(&html).unwrap();
        let document = read_part(&docx, "word/document.xml");
        // The panel's visible text content survives the conversion
        assert!(document.contains("Jane Doe"));
        assert!(document.contains("Objective"));
        assert!(document.contains("Data Analyst"));
        assert!(document.contains("Churn Dashboard"));
        assert!(document.contains("Tableau Desktop Specialist"));
    }

    #[test]
    fn test_styles_part_sets_arial_10pt() {
        let docx = html_to_docx("<p>x</p>").unwrap();
        let styles = read_part(&docx, "word/styles.xml");
        assert!(styles.contains(r#"w:ascii="Arial""#));
        assert!(styles.contains(r#"<w:sz w:val="20"/>"#));
    }
}

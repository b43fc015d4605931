// DOCX export: the rendered panel markup is parsed into a flat paragraph
// model and written out as a minimal WordprocessingML package. A DOCX is a
// zip archive of OOXML parts; the main content lives in word/document.xml.

pub mod docx;
pub mod handlers;
pub mod html;

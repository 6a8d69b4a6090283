/*!
 * Serializers from the styled-run model to output bytes.
 */

use docx_rs::{Docx, Paragraph as DocxParagraph, Run};
use std::io::Cursor;

use crate::document::model::{StyledRun, SubtitleDocument};
use crate::errors::ExportError;

/// Common trait for document output formats
pub trait DocumentWriter {
    /// File extension without the dot
    fn extension(&self) -> &'static str;

    /// Serialize the whole document into memory
    fn write(&self, document: &SubtitleDocument) -> Result<Vec<u8>, ExportError>;
}

/// Word `.docx` writer
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxWriter;

impl DocxWriter {
    fn run(styled: &StyledRun) -> Run {
        let mut run = Run::new();
        // Word treats a literal tab character inside text as a space
        let mut segments = styled.text.split('\t').peekable();
        while let Some(segment) = segments.next() {
            if !segment.is_empty() {
                run = run.add_text(segment);
            }
            if segments.peek().is_some() {
                run = run.add_tab();
            }
        }
        if styled.bold {
            run = run.bold();
        }
        if styled.italic {
            run = run.italic();
        }
        if let Some(size) = styled.size_pt {
            // docx sizes are half-points
            run = run.size((size * 2) as usize);
        }
        if let Some(color) = styled.color {
            run = run.color(color.hex());
        }
        run
    }

    /// Word document for the model, before packing
    pub fn build(document: &SubtitleDocument) -> Docx {
        let mut docx = Docx::new();
        for paragraph in &document.paragraphs {
            let mut out = DocxParagraph::new();
            for run in &paragraph.runs {
                out = out.add_run(Self::run(run));
            }
            docx = docx.add_paragraph(out);
        }
        docx
    }
}

impl DocumentWriter for DocxWriter {
    fn extension(&self) -> &'static str {
        "docx"
    }

    fn write(&self, document: &SubtitleDocument) -> Result<Vec<u8>, ExportError> {
        let mut buffer = Cursor::new(Vec::new());
        Self::build(document)
            .build()
            .pack(&mut buffer)
            .map_err(|e| ExportError::Build(e.to_string()))?;
        Ok(buffer.into_inner())
    }
}

/// Plain UTF-8 text, one paragraph per line
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextWriter;

impl DocumentWriter for PlainTextWriter {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn write(&self, document: &SubtitleDocument) -> Result<Vec<u8>, ExportError> {
        let mut text = document.plain_text();
        text.push('\n');
        Ok(text.into_bytes())
    }
}

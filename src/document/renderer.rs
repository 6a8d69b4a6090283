use chrono::NaiveDate;
use log::debug;

use crate::document::model::{Paragraph, StyledRun, SubtitleDocument};
use crate::parts::PartTag;
use crate::subtitle_list::SubtitleLine;

// @module: Session state to styled document

// @const: Heading of every sheet
pub const TITLE: &str = "찬양 자막";

// @const: Lead-in of the color legend
pub const LEGEND_HEADING: &str = "[파트 색상 안내] ";

const TITLE_SIZE_PT: u32 = 20;
const BODY_SIZE_PT: u32 = 12;
const TAG_GAP: &str = "    ";

/// Everything the renderer reads
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    pub author: &'a str,
    pub date: NaiveDate,
    pub singer: &'a str,
    pub part_mode: bool,
    pub lines: &'a [SubtitleLine],
}

/// Build the sheet for the given state.
///
/// Part data on lines is ignored when `part_mode` is off.
pub fn render_document(input: &RenderInput<'_>) -> SubtitleDocument {
    let mut doc = SubtitleDocument::new();

    doc.push(Paragraph::new().with_run(StyledRun::new(TITLE).bold().size(TITLE_SIZE_PT)));
    doc.push(meta_paragraph(input));
    doc.push(Paragraph::new());

    if input.part_mode {
        doc.push(legend_paragraph());
        doc.push(Paragraph::new());
    }

    for (i, line) in input.lines.iter().enumerate() {
        doc.push(line_paragraph(i + 1, line, input.part_mode));
    }

    debug!(
        "Rendered {} lines into {} paragraphs (part mode: {})",
        input.lines.len(),
        doc.paragraphs.len(),
        input.part_mode
    );
    doc
}

fn meta_paragraph(input: &RenderInput<'_>) -> Paragraph {
    Paragraph::new()
        .with_run(StyledRun::new(format!("작성자: {}\t", input.author)).bold())
        .with_run(StyledRun::new(format!("찬양일: {}\t", input.date.format("%Y-%m-%d"))).bold())
        .with_run(StyledRun::new(format!("찬양대/특송자: {}", input.singer)).bold())
}

fn legend_paragraph() -> Paragraph {
    let mut legend = Paragraph::new().with_run(StyledRun::new(LEGEND_HEADING));
    for part in PartTag::ALL {
        legend.push(StyledRun::new(format!("{} ", part.label())).color(part.color()));
    }
    legend
}

fn line_paragraph(number: usize, line: &SubtitleLine, part_mode: bool) -> Paragraph {
    let parts: &[PartTag] = if part_mode { &line.parts } else { &[] };

    let mut paragraph = Paragraph::new()
        .with_run(StyledRun::new(format!("{}. ", number)).bold().size(BODY_SIZE_PT));

    let mut text = StyledRun::new(line.text.trim()).size(BODY_SIZE_PT);
    if let Some(lead) = parts.first() {
        text = text.color(lead.color());
    }
    paragraph.push(text);

    if !parts.is_empty() {
        paragraph.push(StyledRun::new(format!("{}[{}]", TAG_GAP, PartTag::join_labels(parts))).italic());
    }

    paragraph
}

/*!
 * Entry composition rules applied before a line reaches the list.
 *
 * A lone prelude or interlude selection with no text gets its text filled
 * in automatically. Any other combination requires typed text.
 */

use crate::errors::SubmissionError;
use crate::parts::PartTag;

/// Unit word appended to a measure count
pub const MEASURE_UNIT: &str = "마디";

/// Largest measure count the editor accepts
pub const MAX_MEASURES: u32 = 128;

/// A line ready to be appended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub text: String,
    pub parts: Vec<PartTag>,
}

/// Synthesized text for a single instrumental selection.
///
/// Returns `None` unless `parts` holds exactly one tag and that tag is
/// prelude or interlude. A zero or absent measure count yields the label
/// alone.
pub fn auto_text(parts: &[PartTag], measures: Option<u32>) -> Option<String> {
    let [part] = parts else {
        return None;
    };
    if !part.is_instrumental() {
        return None;
    }
    match measures {
        Some(count) if count > 0 => Some(format!("{} {}{}", part.label(), count, MEASURE_UNIT)),
        _ => Some(part.label().to_string()),
    }
}

/// Validate a submission from the add form.
///
/// Parts are dropped when part-mode is off. Blank text falls back to
/// `auto_text`, and is rejected if that does not apply either.
pub fn prepare_submission(
    part_mode: bool,
    text: &str,
    parts: &[PartTag],
    measures: Option<u32>,
) -> Result<Submission, SubmissionError> {
    let parts: Vec<PartTag> = if part_mode { parts.to_vec() } else { Vec::new() };

    let text = if text.trim().is_empty() && part_mode {
        auto_text(&parts, measures.map(|m| m.min(MAX_MEASURES))).unwrap_or_default()
    } else {
        text.to_string()
    };

    if text.trim().is_empty() {
        return Err(SubmissionError::EmptyContent);
    }

    Ok(Submission { text, parts })
}

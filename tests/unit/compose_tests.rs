/*!
 * Tests for submission validation and the auto-text rule
 */

use che2_subtitles::compose::{auto_text, prepare_submission, MAX_MEASURES};
use che2_subtitles::errors::SubmissionError;
use che2_subtitles::parts::PartTag;

/// Lone prelude with measures
#[test]
fn test_prepareSubmission_withPreludeAndFourMeasures_shouldSynthesizeText() {
    let submission = prepare_submission(true, "", &[PartTag::Prelude], Some(4)).unwrap();
    assert_eq!(submission.text, "전주 4마디");
    assert_eq!(submission.parts, vec![PartTag::Prelude]);
}

/// Lone prelude without measures
#[test]
fn test_prepareSubmission_withPreludeAndZeroMeasures_shouldUseLabel() {
    let submission = prepare_submission(true, "   ", &[PartTag::Prelude], Some(0)).unwrap();
    assert_eq!(submission.text, "전주");
}

/// Both instrumental tags together still need text
#[test]
fn test_prepareSubmission_withBothInstrumentals_shouldRejectEmpty() {
    let result = prepare_submission(true, "", &[PartTag::Prelude, PartTag::Interlude], Some(4));
    assert_eq!(result, Err(SubmissionError::EmptyContent));
}

/// Instrumental mixed with a vocal part does not trigger auto-text
#[test]
fn test_autoText_withMixedSelection_shouldNotFire() {
    assert_eq!(auto_text(&[PartTag::Interlude, PartTag::Choir], Some(2)), None);
    assert_eq!(
        prepare_submission(true, "", &[PartTag::Interlude, PartTag::Choir], Some(2)),
        Err(SubmissionError::EmptyContent)
    );
}

/// Measure counts are capped at the editor maximum
#[test]
fn test_prepareSubmission_withHugeMeasureCount_shouldClamp() {
    let submission = prepare_submission(true, "", &[PartTag::Interlude], Some(500)).unwrap();
    assert_eq!(submission.text, format!("간주 {}마디", MAX_MEASURES));
}

/// Blank text without part-mode is always rejected
#[test]
fn test_prepareSubmission_withoutPartMode_shouldRequireText() {
    assert_eq!(
        prepare_submission(false, "\n", &[], None),
        Err(SubmissionError::EmptyContent)
    );
    assert_eq!(SubmissionError::EmptyContent.to_string(), "자막 내용을 입력하세요.");
}

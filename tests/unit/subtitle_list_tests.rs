/*!
 * Tests for subtitle list operations
 */

use che2_subtitles::parts::PartTag;
use che2_subtitles::subtitle_list::{SubtitleLine, SubtitleList};
use crate::common;

fn texts(list: &SubtitleList) -> Vec<String> {
    list.iter().map(|l| l.text.clone()).collect()
}

/// Appending then deleting the last line restores the list
#[test]
fn test_append_thenDeleteLast_shouldRestoreList() {
    let original = common::sample_list();
    for parts in [vec![], vec![PartTag::Soprano], vec![PartTag::Bass, PartTag::Tutti]] {
        let mut list = original.clone();
        list.append("  새 줄 ", &parts);
        assert_eq!(list.len(), 4);
        list.delete_at(list.len() - 1);
        assert_eq!(list, original);
    }
}

/// Moving a middle line up then down is the identity
#[test]
fn test_moveUp_thenMoveDown_shouldBeIdentity() {
    let original = common::sample_list();
    let mut list = original.clone();
    list.move_up(1);
    assert_eq!(texts(&list), vec!["b", "a", "c"]);
    list.move_down(0);
    assert_eq!(list, original);
}

/// Boundary moves are ignored
#[test]
fn test_boundaryMoves_shouldBeNoops() {
    let original = common::sample_list();
    let mut list = original.clone();
    list.move_up(0);
    list.move_down(list.len() - 1);
    assert_eq!(list, original);

    let mut empty = SubtitleList::new();
    empty.move_up(0);
    empty.move_down(0);
    assert!(empty.is_empty());
}

/// Out-of-range indices never change the list
#[test]
fn test_outOfRangeIndices_shouldLeaveListUnchanged() {
    let original = common::sample_list();
    let mut list = original.clone();
    list.delete_at(3);
    list.delete_at(usize::MAX);
    list.move_down(usize::MAX);
    list.set_text_at(10, "x");
    assert_eq!(list, original);
}

/// Editing keeps the text verbatim, parts untouched
#[test]
fn test_setTextAt_shouldKeepWhitespaceAndParts() {
    let mut list = common::sample_list();
    list.set_text_at(1, "\t편집됨 ");
    assert_eq!(
        list.get(1),
        Some(&SubtitleLine::new("\t편집됨 ", vec![PartTag::Alto]))
    );
}

/// Reordering carries parts along with the text
#[test]
fn test_reorder_shouldMoveWholeLine() {
    let mut list = common::sample_list();
    list.move_down(1);
    assert_eq!(list.get(2).unwrap().lead_part(), Some(PartTag::Alto));
    assert_eq!(list.get(1).unwrap().lead_part(), None);
}

/*!
 * End-to-end tests of the line editor
 */

use anyhow::Result;
use che2_subtitles::app_controller::Controller;
use che2_subtitles::parts::PartTag;
use std::fs;
use crate::common;

async fn run_script(controller: &mut Controller, script: &str) -> Result<String> {
    let mut output = Vec::new();
    controller.run_interactive(script.as_bytes(), &mut output).await?;
    Ok(String::from_utf8(output)?)
}

/// Editing commands before login are refused
#[tokio::test]
async fn test_editor_withoutLogin_shouldRefuseEdits() -> Result<()> {
    let mut controller = Controller::new_for_test()?;
    let output = run_script(&mut controller, "add 가사\nlogin 홍길동 9999\nadd 가사\n").await?;

    assert!(output.contains("Login required before editing"));
    assert!(output.contains("작성자와 비밀번호를 확인하세요."));
    assert!(controller.manager().session().lines.is_empty());
    Ok(())
}

/// A full session: tagging, auto-text, reorder, edit and delete
#[tokio::test]
async fn test_editor_fullSession_shouldBuildExpectedList() -> Result<()> {
    let mut controller = Controller::new_for_test()?;
    let script = "\
login 홍길동 0001
date 2025-03-09
singer 할렐루야 찬양대
parts on
add --parts prelude --measures 4
add --parts soprano Hello
add --parts tenor,bass 주를 찬양
add --parts prelude,interlude
add --parts choir 삭제될 줄
del 4
up 3
set 1 전주 8마디
list
quit
add 무시됨
";
    let output = run_script(&mut controller, script).await?;
    assert!(output.contains("자막 내용을 입력하세요."));

    let session = controller.manager().session();
    assert_eq!(session.author, "홍길동");
    assert_eq!(session.meta.date, common::test_date());
    assert_eq!(session.meta.singer, "할렐루야 찬양대");

    let texts: Vec<&str> = session.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["전주 8마디", "주를 찬양", "Hello"]);
    assert_eq!(session.lines.get(1).unwrap().parts, vec![PartTag::Tenor, PartTag::Bass]);
    Ok(())
}

/// Preview shows the rendered sheet
#[tokio::test]
async fn test_editor_preview_shouldShowRenderedLines() -> Result<()> {
    let mut controller = Controller::new_for_test()?;
    let script = "login 홍길동 0001\nparts on\nadd --parts soprano Hello\npreview\n";
    let output = run_script(&mut controller, script).await?;

    assert!(output.contains("[파트 색상 안내]"));
    assert!(output.contains("1. Hello    [소프라노]"));
    Ok(())
}

/// Export writes the dated file and refuses to overwrite it
#[tokio::test]
async fn test_editor_export_shouldWriteDatedFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut controller = Controller::with_config(common::text_config(temp_dir.path()))?;

    let script = "login 홍길동 0001\nexport\ndate 2025-03-09\nadd 주 하나님\nexport\nexport\nquit\n";
    let output = run_script(&mut controller, script).await?;

    assert!(output.contains("아직 추가된 자막이 없습니다."));
    assert!(output.contains("Output file already exists"));

    let written = temp_dir.path().join("찬양자막_20250309.txt");
    let content = fs::read_to_string(written)?;
    assert!(content.contains("작성자: 홍길동"));
    assert!(content.contains("1. 주 하나님"));
    Ok(())
}

/// Logging out discards the session
#[tokio::test]
async fn test_editor_logout_shouldDiscardSession() -> Result<()> {
    let mut controller = Controller::new_for_test()?;
    run_script(&mut controller, "login 홍길동 0001\nadd 가사\nlogout\n").await?;

    assert!(!controller.manager().is_authenticated());
    assert!(controller.manager().session().lines.is_empty());
    Ok(())
}

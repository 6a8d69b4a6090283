/*!
 * Tests for rendering JSON sheets without the editor
 */

use anyhow::Result;
use che2_subtitles::app_config::{Config, ExportFormat};
use che2_subtitles::app_controller::Controller;
use std::fs;
use crate::common;

/// Sheet rendered as text into a directory
#[tokio::test]
async fn test_renderSheet_toDirectory_shouldUseDatedFilename() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let sheet = common::create_test_sheet(temp_dir.path(), "sheet.json")?;
    let controller = Controller::with_config(common::text_config(temp_dir.path()))?;

    let written = controller.render_sheet(&sheet, Some(temp_dir.path()), false).await?;
    assert_eq!(written, temp_dir.path().join("찬양자막_20250309.txt"));

    let content = fs::read_to_string(&written)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "찬양 자막");
    assert_eq!(lines[1], "작성자: 홍길동\t찬양일: 2025-03-09\t찬양대/특송자: 할렐루야 찬양대");
    assert!(lines[3].starts_with("[파트 색상 안내] 소프라노 알토"));
    assert_eq!(lines[5], "1. 전주 4마디    [전주]");
    assert_eq!(lines[6], "2. Hello    [소프라노, 알토]");
    assert_eq!(lines[7], "3. 다같이");
    Ok(())
}

/// Sheet rendered as Word to an explicit path
#[tokio::test]
async fn test_renderSheet_asDocx_shouldWriteArchive() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let sheet = common::create_test_sheet(temp_dir.path(), "sheet.json")?;
    let mut config = Config::default();
    config.export.format = ExportFormat::Docx;
    let controller = Controller::with_config(config)?;

    let output = temp_dir.path().join("out.docx");
    let written = controller.render_sheet(&sheet, Some(&output), false).await?;
    assert_eq!(written, output);

    let bytes = fs::read(&output)?;
    assert_eq!(&bytes[..2], b"PK");

    assert!(controller.render_sheet(&sheet, Some(&output), false).await.is_err());
    assert!(controller.render_sheet(&sheet, Some(&output), true).await.is_ok());
    Ok(())
}

/// Invalid config is refused up front
#[test]
fn test_controller_withInvalidConfig_shouldFail() {
    let mut config = Config::default();
    config.access_code = String::new();
    assert!(Controller::with_config(config).is_err());
}

/*!
 * Tests for file utility functions
 */

use std::fs;
use std::path::Path;
use anyhow::Result;
use tmxalign::errors::AppError;
use tmxalign::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(&temp_dir.path().to_path_buf(), "exists.txt", "content")?;

    assert!(FileManager::file_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.txt"));
}

/// Test that file_exists returns false for directories
#[test]
fn test_file_exists_withDirectory_shouldReturnFalse() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    assert!(!FileManager::file_exists(temp_dir.path()));

    Ok(())
}

/// Test that read_to_lines splits content into ordered lines
#[test]
fn test_read_to_lines_withValidFile_shouldReturnLines() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "lines.txt",
        "first line\nsecond line\nthird line\n",
    )?;

    let lines = FileManager::read_to_lines(&test_file)?;

    assert_eq!(lines, vec!["first line", "second line", "third line"]);

    Ok(())
}

/// Test that CRLF terminators are stripped by the line split
#[test]
fn test_read_to_lines_withCrlfTerminators_shouldStripThem() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "crlf.txt",
        "one\r\ntwo\r\n",
    )?;

    let lines = FileManager::read_to_lines(&test_file)?;

    assert_eq!(lines, vec!["one", "two"]);

    Ok(())
}

/// Test that an empty file yields no lines
#[test]
fn test_read_to_lines_withEmptyFile_shouldReturnEmpty() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(&temp_dir.path().to_path_buf(), "empty.txt", "")?;

    let lines = FileManager::read_to_lines(&test_file)?;

    assert!(lines.is_empty());

    Ok(())
}

/// Test that a missing input surfaces as a MissingFile error
#[test]
fn test_read_to_lines_withMissingFile_shouldReturnMissingFileError() {
    let result = FileManager::read_to_lines("definitely_not_here.txt");

    assert!(matches!(result, Err(AppError::MissingFile { .. })));
}

/// Test that invalid UTF-8 surfaces as a Decoding error
#[test]
fn test_read_to_lines_withInvalidUtf8_shouldReturnDecodingError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let bad_file = temp_dir.path().join("bad.txt");
    fs::write(&bad_file, [0xC3u8, 0x28, 0xA0, 0xA1])?;

    let result = FileManager::read_to_lines(&bad_file);

    assert!(matches!(result, Err(AppError::Decoding { .. })));

    Ok(())
}

/// Test that write_to_file writes content and creates parent directories
#[test]
fn test_write_to_file_withNestedPath_shouldCreateParents() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("a").join("b").join("out.tmx");

    FileManager::write_to_file(&nested, "<tmx/>")?;

    assert!(nested.exists());
    assert_eq!(fs::read_to_string(&nested)?, "<tmx/>");

    Ok(())
}

/// Test that generate_output_path derives the language-pair filename
#[test]
fn test_generate_output_path_withValidInputs_shouldCreateCorrectPath() {
    let source_file = Path::new("/tmp/input/document.txt");

    let output_path = FileManager::generate_output_path(source_file, "fr", "en");

    assert_eq!(output_path, Path::new("/tmp/input/document.fr-en.tmx"));
}

/// Test that generate_output_path handles a bare filename
#[test]
fn test_generate_output_path_withBareFilename_shouldStayRelative() {
    let output_path = FileManager::generate_output_path(Path::new("notes.txt"), "es", "pt");

    assert_eq!(output_path, Path::new("notes.es-pt.tmx"));
}

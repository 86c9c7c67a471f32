/*!
 * Integration tests for the full app lifecycle
 */

use std::fs;
use anyhow::Result;
use tmxalign::app_config::Config;
use tmxalign::app_controller::Controller;
use tmxalign::errors::AppError;
use crate::common;

/// Test that a controller with default config reports itself initialized
#[test]
fn test_controller_withDefaultConfig_shouldBeInitialized() -> Result<()> {
    let controller = Controller::new_for_test()?;

    assert!(controller.is_initialized());

    Ok(())
}

/// Test the full run: two files in, one TMX document out
#[test]
fn test_controller_run_withParallelFiles_shouldWriteTmx() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let (source_path, target_path) = common::create_test_document_pair(&dir)?;
    let output_path = dir.join("memory.tmx");

    let controller = Controller::with_config(Config::default())?;
    controller.run(&source_path, &target_path, &output_path, false)?;

    assert!(output_path.exists());
    let document = fs::read_to_string(&output_path)?;

    assert!(document.contains("<tmx version=\"1.4\">"));
    assert!(document.contains("srclang=\"fr\""));
    assert!(document.contains("<tuv xml:lang=\"en\">"));
    assert!(document.contains("<tu tuid=\"1\">"));

    Ok(())
}

/// Test that a missing source file aborts before any output is written
#[test]
fn test_controller_run_withMissingSourceFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let target_path = common::create_test_file(&dir, "target.txt", "Du texte valide ici.\n")?;
    let output_path = dir.join("memory.tmx");

    let controller = Controller::new_for_test()?;
    let result = controller.run(&dir.join("missing.txt"), &target_path, &output_path, false);

    let error = result.unwrap_err();
    assert!(matches!(
        error.downcast_ref::<AppError>(),
        Some(AppError::MissingFile { .. })
    ));
    assert!(!output_path.exists(), "no output may be written on a failed precondition");

    Ok(())
}

/// Test that an undecodable input aborts the run without output
#[test]
fn test_controller_run_withInvalidUtf8Input_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let source_path = dir.join("binary.txt");
    fs::write(&source_path, [0xFFu8, 0xFE, 0x00, 0x41])?;
    let target_path = common::create_test_file(&dir, "target.txt", "Du texte valide ici.\n")?;
    let output_path = dir.join("memory.tmx");

    let controller = Controller::new_for_test()?;
    let result = controller.run(&source_path, &target_path, &output_path, false);

    let error = result.unwrap_err();
    assert!(matches!(
        error.downcast_ref::<AppError>(),
        Some(AppError::Decoding { .. })
    ));
    assert!(!output_path.exists());

    Ok(())
}

/// Test that an existing output is left untouched without the force flag
#[test]
fn test_controller_run_withExistingOutput_shouldSkip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let (source_path, target_path) = common::create_test_document_pair(&dir)?;
    let output_path = common::create_test_file(&dir, "memory.tmx", "sentinel")?;

    let controller = Controller::new_for_test()?;
    controller.run(&source_path, &target_path, &output_path, false)?;

    assert_eq!(fs::read_to_string(&output_path)?, "sentinel");

    Ok(())
}

/// Test that the force flag overwrites an existing output
#[test]
fn test_controller_run_withForceOverwrite_shouldReplaceOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let (source_path, target_path) = common::create_test_document_pair(&dir)?;
    let output_path = common::create_test_file(&dir, "memory.tmx", "sentinel")?;

    let controller = Controller::new_for_test()?;
    controller.run(&source_path, &target_path, &output_path, true)?;

    let document = fs::read_to_string(&output_path)?;
    assert_ne!(document, "sentinel");
    assert!(document.contains("<tmx version=\"1.4\">"));

    Ok(())
}

/// Test that empty inputs are a valid run producing an empty body
#[test]
fn test_controller_run_withEmptyFiles_shouldWriteEmptyBody() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let source_path = common::create_test_file(&dir, "empty_src.txt", "")?;
    let target_path = common::create_test_file(&dir, "empty_tgt.txt", "")?;
    let output_path = dir.join("memory.tmx");

    let controller = Controller::new_for_test()?;
    controller.run(&source_path, &target_path, &output_path, false)?;

    let document = fs::read_to_string(&output_path)?;
    assert!(document.contains("<body>"));
    assert!(!document.contains("<tu "));

    Ok(())
}

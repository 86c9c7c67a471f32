use anyhow::Result;
use log::{warn, info, debug};
use std::path::Path;
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::alignment::{Aligner, AlignmentRun, TranslationUnit};
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::tmx::{self, TmxWriter};

// @module: Application controller for the alignment workflow

// @const: Units shown in the post-run preview
const PREVIEW_UNIT_COUNT: usize = 5;

// @const: Character cap per preview column
const PREVIEW_TEXT_WIDTH: usize = 100;

/// Main application controller for parallel-text alignment
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let controller = Self { config };

        Ok(controller)
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.source_language.is_empty() && !self.config.target_language.is_empty()
    }

    /// Run the full alignment workflow: read both files, align, serialize, write.
    ///
    /// Input preconditions are checked before alignment begins; a failed
    /// write discards the aligned units. There is no partial-output mode.
    pub fn run(&self, source_file: &Path, target_file: &Path, output_file: &Path, force_overwrite: bool) -> Result<()> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        // Both inputs must exist before any alignment work starts
        if !FileManager::file_exists(source_file) {
            return Err(AppError::MissingFile { path: source_file.to_path_buf() }.into());
        }
        if !FileManager::file_exists(target_file) {
            return Err(AppError::MissingFile { path: target_file.to_path_buf() }.into());
        }

        // Skip if the output already exists and no force flag
        if output_file.exists() && !force_overwrite {
            warn!("Skipping, output already exists (use -f to force overwrite): {}", output_file.display());
            return Ok(());
        }

        let source_lines = FileManager::read_to_lines(source_file)?;
        let target_lines = FileManager::read_to_lines(target_file)?;

        info!("Read {} source lines, {} target lines", source_lines.len(), target_lines.len());

        let units = self.align_with_progress(&source_lines, &target_lines);

        // Serialize and write in one go; units are discarded on failure
        let writer = TmxWriter::new(
            self.config.tmx.creation_tool.clone(),
            self.config.tmx.creation_tool_version.clone(),
        );
        let document = writer.serialize(
            &units,
            &self.config.source_language,
            &self.config.target_language,
            &tmx::creation_timestamp(),
        );

        FileManager::write_to_file(output_file, &document)?;

        self.log_preview(&units);

        info!(
            "Wrote {} translation units to {} in {}",
            units.len(),
            output_file.display(),
            Self::format_duration(start_time.elapsed())
        );

        Ok(())
    }

    /// Align the two line sequences with a progress bar over line indices
    fn align_with_progress(&self, source_lines: &[String], target_lines: &[String]) -> Vec<TranslationUnit> {
        let aligner = Aligner::new();
        let line_count = source_lines.len().max(target_lines.len());

        let progress_bar = ProgressBar::new(line_count as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result);
        progress_bar.set_message("Aligning");

        let mut run = AlignmentRun::new();
        for index in 0..line_count {
            let raw_source = source_lines.get(index).map(String::as_str).unwrap_or("");
            let raw_target = target_lines.get(index).map(String::as_str).unwrap_or("");

            run.process_line_pair(aligner.rules(), raw_source, raw_target);
            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();

        debug!("Alignment produced {} units over {} line indices", run.unit_count(), line_count);

        run.into_units()
    }

    /// Log a short preview of the aligned units
    fn log_preview(&self, units: &[TranslationUnit]) {
        if units.is_empty() {
            info!("No valid translation units were produced");
            return;
        }

        let source_label = language_utils::get_language_name(&self.config.source_language)
            .unwrap_or_else(|_| self.config.source_language.clone());
        let target_label = language_utils::get_language_name(&self.config.target_language)
            .unwrap_or_else(|_| self.config.target_language.clone());

        info!("Preview ({} -> {}):", source_label, target_label);
        for unit in units.iter().take(PREVIEW_UNIT_COUNT) {
            info!(
                "  {} => {}",
                Self::truncate_for_preview(&unit.source),
                Self::truncate_for_preview(&unit.target)
            );
        }

        if units.len() > PREVIEW_UNIT_COUNT {
            info!("  ... and {} more units", units.len() - PREVIEW_UNIT_COUNT);
        }
    }

    // @returns: Text capped at the preview width, with an ellipsis when cut
    fn truncate_for_preview(text: &str) -> String {
        if text.chars().count() <= PREVIEW_TEXT_WIDTH {
            return text.to_string();
        }

        let truncated: String = text.chars().take(PREVIEW_TEXT_WIDTH).collect();
        format!("{}...", truncated)
    }

    /// Format a duration for the final summary
    fn format_duration(duration: std::time::Duration) -> String {
        let total_secs = duration.as_secs();
        if total_secs >= 60 {
            format!("{}m {}s", total_secs / 60, total_secs % 60)
        } else {
            format!("{:.1}s", duration.as_secs_f64())
        }
    }
}

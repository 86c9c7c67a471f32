use std::fs;
use std::path::{Path, PathBuf};
use crate::errors::AppError;

// @module: File reading and writing utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<(), AppError> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path).map_err(|e| AppError::Write {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        }
        Ok(())
    }

    // @generates: Output path for the TMX document
    // @params: source_file, source_language, target_language
    pub fn generate_output_path<P: AsRef<Path>>(
        source_file: P,
        source_language: &str,
        target_language: &str,
    ) -> PathBuf {
        let source_file = source_file.as_ref();

        // Get the file stem (filename without extension)
        let stem = source_file.file_stem().unwrap_or_default();

        // Create the output filename with the language pair and extension
        let mut output_filename = stem.to_string_lossy().to_string();
        output_filename.push('.');
        output_filename.push_str(source_language);
        output_filename.push('-');
        output_filename.push_str(target_language);
        output_filename.push_str(".tmx");

        // Place it next to the source file
        source_file
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(output_filename)
    }

    /// Read a text file as an ordered sequence of lines
    ///
    /// The bytes must be valid UTF-8; line terminators are stripped by the
    /// line split. A missing file and a decoding failure are distinct errors
    /// so the caller can report which precondition failed.
    pub fn read_to_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, AppError> {
        let path = path.as_ref();

        if !Self::file_exists(path) {
            return Err(AppError::MissingFile {
                path: path.to_path_buf(),
            });
        }

        let bytes = fs::read(path).map_err(|e| AppError::Unknown(e.to_string()))?;
        let content = String::from_utf8(bytes).map_err(|_| AppError::Decoding {
            path: path.to_path_buf(),
        })?;

        Ok(content.lines().map(String::from).collect())
    }

    /// Write a string to a file, creating parent directories as needed
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<(), AppError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                Self::ensure_dir(parent)?;
            }
        }

        fs::write(path, content).map_err(|e| AppError::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(())
    }
}

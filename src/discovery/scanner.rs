//! Input path expansion.
//!
//! Files named on the command line are taken as-is; directories are walked
//! recursively for image files.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{DfError, Result};

/// File extensions picked up when scanning a directory.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "bmp", "gif"];

/// Check whether a path looks like an input image.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .is_some_and(|e| IMAGE_EXTENSIONS.contains(&e.as_str()))
}

/// Scan a directory for image files, sorted by path.
pub fn scan_directory(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file() && is_image_file(entry.path()))
        .map(|entry| entry.into_path())
        .collect()
}

/// An image to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputImage {
    /// Where the image is read from.
    pub path: PathBuf,
    /// Where its outputs go, relative to the output directory. Images found by
    /// scanning a directory keep their path below it; images named directly
    /// use their file name.
    pub relative: PathBuf,
}

impl InputImage {
    /// An image named directly on the command line.
    pub fn from_file(path: PathBuf) -> Self {
        let relative = path
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| path.clone());
        Self { path, relative }
    }

    /// An image found while scanning `root`.
    pub fn from_scan(root: &Path, path: PathBuf) -> Self {
        let relative = path.strip_prefix(root).map(Path::to_path_buf);
        match relative {
            Ok(relative) => Self { path, relative },
            Err(_) => Self::from_file(path),
        }
    }

    /// Output file for this image under `output`, with a new extension.
    pub fn output_path(&self, output: &Path, extension: &str) -> PathBuf {
        output.join(&self.relative).with_extension(extension)
    }
}

/// Expand input paths into the list of images to process.
///
/// Order follows the arguments; duplicates are dropped. A path that does not
/// exist is an error.
pub fn scan_inputs(inputs: &[PathBuf]) -> Result<Vec<InputImage>> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for input in inputs {
        let found = if input.is_dir() {
            scan_directory(input)
                .into_iter()
                .map(|path| InputImage::from_scan(input, path))
                .collect()
        } else if input.exists() {
            vec![InputImage::from_file(input.clone())]
        } else {
            return Err(DfError::Io {
                path: input.clone(),
                message: "No such file or directory".to_string(),
            });
        };

        for file in found {
            if seen.insert(file.path.clone()) {
                files.push(file);
            }
        }
    }

    Ok(files)
}

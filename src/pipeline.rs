//! Per-file annotation pipeline and directory batch driver.
//!
//! The pipeline for one image is decode -> annotate -> encode, with the
//! output written to the output directory under the input's file name.
//! Directory mode runs the same pipeline over every non-directory entry
//! (no recursion) with explicit partial-failure semantics: one bad file is
//! logged and skipped, the rest still produce output, and the batch as a
//! whole reports an aggregate failure.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::banner::{annotate, BannerError, BannerSpec, LabelFont};
use crate::codec::{self, CodecError};

/// Errors from the file pipeline and batch driver.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Banner(#[from] BannerError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output directory '{}' is not writable: {message}", .path.display())]
    OutputNotWritable { path: PathBuf, message: String },

    #[error("{failed} of {total} images failed to process")]
    BatchFailed { failed: usize, total: usize },
}

/// Outcome of a fully successful batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Non-directory entries processed
    pub total: usize,
    /// Images annotated and written
    pub succeeded: usize,
}

/// Create the output directory if needed and verify it is writable.
///
/// Writability is probed by creating and removing a marker file, so the
/// failure surfaces before any image work starts rather than at the first
/// write.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PipelineError> {
    let not_writable = |e: std::io::Error| PipelineError::OutputNotWritable {
        path: dir.to_path_buf(),
        message: e.to_string(),
    };

    fs::create_dir_all(dir).map_err(not_writable)?;

    let probe = dir.join(".write_probe.tmp");
    fs::write(&probe, b"").map_err(not_writable)?;
    fs::remove_file(&probe).map_err(not_writable)?;

    Ok(())
}

/// Run the decode -> annotate -> encode pipeline for a single image.
///
/// Returns the path of the written output file. The output format always
/// equals the detected input format.
pub fn process_file(
    input: &Path,
    spec: &BannerSpec,
    font: &LabelFont,
    output_dir: &Path,
) -> Result<PathBuf, PipelineError> {
    let data = fs::read(input)?;
    let (source, kind) = codec::decode(&data)?;

    let canvas = annotate(&source, spec, font)?;
    let encoded = codec::encode(&canvas, kind)?;

    let file_name = input.file_name().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "input path has no file name",
        )
    })?;

    let output_path = output_dir.join(file_name);
    fs::write(&output_path, encoded)?;

    tracing::debug!(
        input = %input.display(),
        output = %output_path.display(),
        format = kind.as_str(),
        "Annotated image"
    );

    Ok(output_path)
}

/// Run the pipeline over every non-directory entry of `dir`.
///
/// Per-file failures are logged and recorded but never abort the batch;
/// every remaining file is still processed and persisted. If any file
/// failed, the call returns [`PipelineError::BatchFailed`] after the whole
/// directory has been visited.
pub fn process_directory(
    dir: &Path,
    spec: &BannerSpec,
    font: &LabelFont,
    output_dir: &Path,
) -> Result<BatchSummary, PipelineError> {
    let mut total = 0usize;
    let mut failed = 0usize;

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }

        total += 1;
        let path = entry.path();

        match process_file(&path, spec, font, output_dir) {
            Ok(output_path) => {
                tracing::info!(
                    input = %path.display(),
                    output = %output_path.display(),
                    "Classified image"
                );
            }
            Err(e) => {
                tracing::warn!(
                    input = %path.display(),
                    error = %e,
                    "Failed to process image"
                );
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(PipelineError::BatchFailed { failed, total });
    }

    Ok(BatchSummary {
        total,
        succeeded: total,
    })
}

use super::delivery::DeliveryAdapter;
use crate::error::DeliveryFailure;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Writes documents into a directory on the local filesystem.
///
/// Content goes to a temporary file in the target directory first and is
/// renamed into place once fully written, so a failed save never leaves a
/// truncated document behind.
#[derive(Debug, Clone)]
pub struct FileDelivery {
    dir: PathBuf,
}

impl FileDelivery {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where a document saved under `filename` ends up.
    pub fn target_path(&self, filename: &str) -> PathBuf {
        self.dir.join(sanitize_filename(filename))
    }
}

/// Replace characters that cannot appear in a single path component.
///
/// Separators, NUL, control characters and the characters Windows reserves
/// all become `_`, so the result never names anything outside the directory
/// unless it is `.` or `..`, which `save` refuses.
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

impl DeliveryAdapter for FileDelivery {
    fn name(&self) -> &'static str {
        "file"
    }

    fn save(
        &self,
        content: &str,
        filename: &str,
        mime_type: &str,
    ) -> std::result::Result<(), DeliveryFailure> {
        let sanitized = sanitize_filename(filename);
        if matches!(sanitized.as_str(), "" | "." | "..") {
            return Err(format!("`{}` is not a usable filename", filename).into());
        }

        fs::create_dir_all(&self.dir)?;

        // Dropping the temp file on any early return deletes it.
        let mut staged = tempfile::NamedTempFile::new_in(&self.dir)?;
        staged.write_all(content.as_bytes())?;
        staged.flush()?;

        let target = self.dir.join(&sanitized);
        staged.persist(&target).map_err(|err| err.error)?;

        debug!(path = %target.display(), mime_type, bytes = content.len(), "document written");
        Ok(())
    }
}

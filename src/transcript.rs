//! Plain-text transcript rendering and persistence.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::debug;

use crate::error::Result;
use crate::types::Message;

/// Render messages as `ROLE: content` paragraphs, each followed by a blank line.
pub fn render_transcript(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|m| {
            format!(
                "{}: {}\n\n",
                m.role.to_string().to_uppercase(),
                m.content
            )
        })
        .collect()
}

/// Timestamped file name in the working directory, e.g. `transcript-20250101-093000.txt`.
pub fn default_transcript_path() -> PathBuf {
    PathBuf::from(format!(
        "transcript-{}.txt",
        Local::now().format("%Y%m%d-%H%M%S")
    ))
}

/// Write the transcript to `path`, creating missing parent directories.
pub fn save_transcript(path: &Path, messages: &[Message]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, render_transcript(messages))?;
    debug!(path = %path.display(), messages = messages.len(), "transcript saved");
    Ok(())
}

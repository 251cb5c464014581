//! Output list writer

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};

/// Render items one per line with a trailing newline, or nothing when empty.
pub fn render_list<S: AsRef<str>>(items: &[S]) -> String {
    let mut content = String::new();
    for item in items {
        content.push_str(item.as_ref());
        content.push('\n');
    }
    content
}

/// Write `items` to `path`, creating parent directories.
///
/// A `None` path disables the output and nothing is written. The file is
/// always fully overwritten.
pub fn write_list<S: AsRef<str>>(path: Option<&Path>, items: &[S]) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::write(parent, e))?;
    }

    fs::write(path, render_list(items)).map_err(|e| Error::write(path, e))?;

    debug!("Wrote {} entries to {}", items.len(), path.display());
    Ok(())
}

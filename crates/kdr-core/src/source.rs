//! Rule list discovery

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// File name suffix of rule lists
pub const LIST_SUFFIX: &str = ".list";

/// Characters that end a line in a rule list. `\r\n` counts as one break.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}',
    '\u{2029}',
];

/// Find the `*.list` files directly inside `dir`, sorted by file name.
///
/// Fails when `dir` does not exist or holds no rule lists. A path that
/// exists but is not a directory holds no rule lists.
pub fn discover_lists(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(Error::InputDirNotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(Error::NoListFiles {
            path: dir.to_path_buf(),
        });
    }

    let mut lists = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::read(dir, e))? {
        let path = entry.map_err(|e| Error::read(dir, e))?.path();
        if path.is_file() && is_list_file(&path) {
            lists.push(path);
        }
    }

    if lists.is_empty() {
        return Err(Error::NoListFiles {
            path: dir.to_path_buf(),
        });
    }

    lists.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(lists)
}

fn is_list_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(LIST_SUFFIX))
}

/// Read a rule list as UTF-8 text
pub fn read_list(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::read(path, e))
}

/// Split rule list text into lines.
///
/// Breaks on `\n`, `\r\n`, a lone `\r` and the other Unicode line and
/// record separators. A trailing break does not produce an empty last line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(pos) = rest.find(LINE_BREAKS) else {
            let line = rest;
            rest = "";
            return Some(line);
        };
        let (line, tail) = rest.split_at(pos);
        let width = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[width..];
        Some(line)
    })
}

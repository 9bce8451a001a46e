use std::path::{Path, PathBuf};

/// Characters that are never valid in a file name on at least one platform.
const ILLEGAL_CHARS: &[char] = &['/', '?', '<', '>', '\\', ':', '*', '|', '"', '@'];

/// Device names Windows refuses as file names, with or without an extension.
const WINDOWS_RESERVED: &[&str] = &["con", "prn", "aux", "nul"];

const MAX_FILE_NAME_LEN: usize = 255;

/// Walk up from `start` looking for a file named `filename`.
/// Returns the path to the directory containing the file, or `None`.
pub fn find_ancestor_with(start: &Path, filename: &str) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(filename);
        if candidate.is_file() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

/// Recursively list every directory below `root`, as paths relative to `root`
/// with `/` separators, sorted.
///
/// Directories named in `skip` and hidden directories are not entered.
pub fn list_dirs(root: &Path, skip: &[&str]) -> std::io::Result<Vec<String>> {
    let mut found = Vec::new();
    let mut pending = vec![PathBuf::new()];
    while let Some(rel) = pending.pop() {
        for entry in std::fs::read_dir(root.join(&rel))? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') || skip.contains(&name.as_str()) {
                continue;
            }
            let child = rel.join(&name);
            found.push(to_slash(&child));
            pending.push(child);
        }
    }
    found.sort();
    Ok(found)
}

fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Turn an arbitrary label (such as a package group name) into a string that
/// is safe to use as a single path component.
///
/// Illegal and control characters are replaced one by one with `replacement`.
/// Names made only of dots and Windows device names are replaced whole. The
/// result is truncated to 255 characters.
pub fn sanitize_file_name(input: &str, replacement: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    for c in input.chars() {
        if ILLEGAL_CHARS.contains(&c) || is_control(c) {
            sanitized.push_str(replacement);
        } else {
            sanitized.push(c);
        }
    }

    if !sanitized.is_empty() && sanitized.chars().all(|c| c == '.') {
        sanitized = replacement.to_string();
    }
    if is_windows_reserved(&sanitized) {
        sanitized = replacement.to_string();
    }

    sanitized.chars().take(MAX_FILE_NAME_LEN).collect()
}

fn is_control(c: char) -> bool {
    matches!(c as u32, 0x00..=0x1f | 0x80..=0x9f)
}

fn is_windows_reserved(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    let stem = lower.split('.').next().unwrap_or("");
    if WINDOWS_RESERVED.contains(&stem) {
        return true;
    }
    // com0-com9 and lpt0-lpt9
    let bytes = stem.as_bytes();
    bytes.len() == 4
        && (stem.starts_with("com") || stem.starts_with("lpt"))
        && bytes[3].is_ascii_digit()
}

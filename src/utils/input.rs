//! Line-based input for the command line front end

use anyhow::{Context, Result};
use memchr::memchr_iter;
use std::io::Read;
use std::path::Path;

/// Split a buffer into lines, dropping a trailing `\r` from each
pub fn lines(data: &[u8]) -> impl Iterator<Item = &[u8]> + '_ {
    let mut start = 0;
    let mut breaks = memchr_iter(b'\n', data);
    std::iter::from_fn(move || {
        if start > data.len() {
            return None;
        }
        let end = breaks.next().unwrap_or(data.len());
        let line = &data[start..end];
        start = end + 1;
        // No empty tail after a final newline
        if line.is_empty() && end == data.len() {
            return None;
        }
        Some(line.strip_suffix(b"\r").unwrap_or(line))
    })
}

/// First line of a buffer, surrounding whitespace trimmed
pub fn first_line(data: &[u8]) -> Result<&str> {
    let line = lines(data).next().unwrap_or_default();
    let line = std::str::from_utf8(line).context("Input is not valid UTF-8")?;
    Ok(line.trim())
}

/// Resolve the text to index: inline, from a file, or from stdin
///
/// Files and stdin contribute their first line only.
pub fn read_text(inline: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = inline {
        return Ok(text);
    }

    let data = match file {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut data = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut data)
                .context("Failed to read stdin")?;
            data
        }
    };

    Ok(first_line(&data)?.to_owned())
}

/// Read one pattern per line, skipping blank lines
pub fn read_patterns(path: &Path) -> Result<Vec<String>> {
    let data = std::fs::read(path)
        .with_context(|| format!("Failed to read patterns from {}", path.display()))?;

    lines(&data)
        .enumerate()
        .filter_map(|(number, line)| {
            let line = match std::str::from_utf8(line) {
                Ok(line) => line.trim(),
                Err(_) => {
                    return Some(Err(anyhow::anyhow!(
                        "{}:{}: pattern is not valid UTF-8",
                        path.display(),
                        number + 1
                    )));
                }
            };
            (!line.is_empty()).then(|| Ok(line.to_owned()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines() {
        let collected: Vec<&[u8]> = lines(b"ab\r\ncd\n\nef").collect();
        assert_eq!(collected, vec![&b"ab"[..], b"cd", b"", b"ef"]);

        let collected: Vec<&[u8]> = lines(b"ab\n").collect();
        assert_eq!(collected, vec![&b"ab"[..]]);

        assert_eq!(lines(b"").count(), 0);
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line(b"  banana \nsecond").unwrap(), "banana");
        assert_eq!(first_line(b"").unwrap(), "");
        assert!(first_line(b"\xff\xfe").is_err());
    }

    #[test]
    fn test_read_text_sources() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("text.txt");
        std::fs::write(&path, "abcabxabcd\nignored\n").unwrap();

        assert_eq!(read_text(None, Some(&path)).unwrap(), "abcabxabcd");
        assert_eq!(read_text(Some("inline".into()), Some(&path)).unwrap(), "inline");
        assert!(read_text(None, Some(&dir.path().join("missing"))).is_err());
    }

    #[test]
    fn test_read_patterns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patterns.txt");
        std::fs::write(&path, "cd\n\n cdx \r\nab").unwrap();
        assert_eq!(read_patterns(&path).unwrap(), vec!["cd", "cdx", "ab"]);
    }
}

use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// Reads a replay script: one visitor message per line.
pub struct InputReader;

impl InputReader {
    /// Reads raw input from `file_path`, or stdin when `None`.
    pub fn read(file_path: Option<&str>) -> Result<String> {
        file_path.map_or_else(Self::read_stdin, Self::read_file)
    }

    /// Reads input and splits it into messages.
    pub fn read_messages(file_path: Option<&str>) -> Result<Vec<String>> {
        Self::read(file_path).map(|content| parse_messages(&content))
    }

    fn read_file(path: &str) -> Result<String> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;

        let size = metadata.len() as usize;
        if size > MAX_INPUT_SIZE {
            bail!(
                "Error: Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
                 Consider splitting the script into smaller parts.",
                size as f64 / 1024.0 / 1024.0
            );
        }

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
    }

    #[allow(clippy::significant_drop_tightening)]
    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_INPUT_SIZE {
                bail!(
                    "Error: Input size ({:.1} MB) exceeds maximum allowed size (1 MB).",
                    buffer.len() as f64 / 1024.0 / 1024.0
                );
            }
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

/// Splits a script into messages, skipping blank lines and `#` comments.
pub fn parse_messages(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_read_messages_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "intro\n\n  skills  \n# a comment\ncontact\n").unwrap();

        let path = temp_file.path().to_str().unwrap();
        let messages = InputReader::read_messages(Some(path)).unwrap();
        assert_eq!(messages, vec!["intro", "skills", "contact"]);
    }

    #[test]
    fn test_read_nonexistent_file() {
        let result = InputReader::read(Some("/nonexistent/path/to/script.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn test_read_empty_file() {
        let temp_file = NamedTempFile::new().unwrap();

        let path = temp_file.path().to_str().unwrap();
        let messages = InputReader::read_messages(Some(path)).unwrap();
        assert!(messages.is_empty());
    }

    #[test]
    fn test_read_file_exceeds_max_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("large_script.txt");

        let large_content = "x".repeat(MAX_INPUT_SIZE + 1);
        fs::write(&file_path, &large_content).unwrap();

        let result = InputReader::read(Some(file_path.to_str().unwrap()));
        assert!(result.unwrap_err().to_string().contains("exceeds maximum"));
    }

    #[test]
    fn test_parse_messages_keeps_case_and_inner_spaces() {
        assert_eq!(
            parse_messages("Tell me  more\r\nCV"),
            vec!["Tell me  more", "CV"]
        );
    }

    #[test]
    fn test_parse_messages_unicode() {
        assert_eq!(parse_messages("こんにちは\n👋"), vec!["こんにちは", "👋"]);
    }
}

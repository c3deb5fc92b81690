//! Step outputs written to the runner's `GITHUB_OUTPUT` file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::Result;

/// Append `name=value` to the output file at `path`.
///
/// Values containing a newline use the heredoc form
/// (`name<<DELIM`, value, `DELIM`) with a delimiter absent from the value.
pub fn set_output(path: &Path, name: &str, value: &str) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(format_output(name, value).as_bytes())?;
    tracing::debug!("Set output {} in {}", name, path.display());
    Ok(())
}

fn format_output(name: &str, value: &str) -> String {
    if !value.contains('\n') && !value.contains('\r') {
        return format!("{}={}\n", name, value);
    }

    let mut delimiter = format!("ACTKIT_EOF_{}", std::process::id());
    while value.contains(&delimiter) {
        delimiter.push('_');
    }
    format!("{}<<{}\n{}\n{}\n", name, delimiter, value, delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn single_line_value() {
        assert_eq!(format_output("check-run-id", "42"), "check-run-id=42\n");
    }

    #[test]
    fn multi_line_value_uses_delimiter() {
        let formatted = format_output("log", "a\nb");
        let lines: Vec<&str> = formatted.lines().collect();
        assert_eq!(lines.len(), 4);
        let delimiter = lines[0].strip_prefix("log<<").unwrap();
        assert_eq!(lines[1], "a");
        assert_eq!(lines[2], "b");
        assert_eq!(lines[3], delimiter);
    }

    #[test]
    fn delimiter_never_appears_in_value() {
        let value = format!("x\nACTKIT_EOF_{}", std::process::id());
        let formatted = format_output("log", &value);
        let first = formatted.lines().next().unwrap();
        let delimiter = first.strip_prefix("log<<").unwrap();
        assert!(!value.lines().any(|l| l == delimiter));
    }

    #[test]
    fn set_output_appends() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output");
        set_output(&path, "first", "1").unwrap();
        set_output(&path, "second", "2").unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first=1\nsecond=2\n");
    }
}

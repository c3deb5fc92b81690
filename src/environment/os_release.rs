//! Linux distribution detection via `/etc/os-release`.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// Standard location of the os-release descriptor.
pub const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Returned when the distribution cannot be determined.
pub const UNKNOWN_OS: &str = "(unknown)";

static ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^ID=(.*)$").unwrap());

/// Distribution identifier of the host, e.g. `ubuntu`.
///
/// The value is unquoted: `ID="centos"` yields `centos`, not the raw
/// `"centos"` text.
///
/// Never fails: a missing file, an unreadable file, or a file without an
/// `ID=` line all yield [`UNKNOWN_OS`].
pub fn os_release_id() -> String {
    os_release_id_from(Path::new(OS_RELEASE_PATH))
}

/// Distribution identifier read from an explicit os-release file, unquoted
/// like [`os_release_id`].
pub fn os_release_id_from(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_os_release_id(&content).unwrap_or_else(|| UNKNOWN_OS.to_string()),
        Err(e) => {
            tracing::debug!("Could not read {}: {}", path.display(), e);
            UNKNOWN_OS.to_string()
        }
    }
}

/// Extract the `ID=` field from os-release content.
///
/// Quoting is optional in os-release, so one pair of surrounding quotes is
/// removed.
pub fn parse_os_release_id(content: &str) -> Option<String> {
    let raw = ID_PATTERN.captures(content)?.get(1)?.as_str().trim();
    let id = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| raw.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
        .unwrap_or(raw);
    Some(id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const UBUNTU: &str = r#"PRETTY_NAME="Ubuntu 22.04.4 LTS"
NAME="Ubuntu"
VERSION_ID="22.04"
VERSION="22.04.4 LTS (Jammy Jellyfish)"
ID=ubuntu
ID_LIKE=debian
"#;

    #[test]
    fn parses_unquoted_id() {
        assert_eq!(parse_os_release_id(UBUNTU).as_deref(), Some("ubuntu"));
    }

    #[test]
    fn ignores_id_like_and_version_id() {
        let content = "ID_LIKE=debian\nVERSION_ID=12\n";
        assert_eq!(parse_os_release_id(content), None);
    }

    #[test]
    fn strips_quotes() {
        assert_eq!(
            parse_os_release_id("ID=\"centos\"\n").as_deref(),
            Some("centos")
        );
        assert_eq!(parse_os_release_id("ID='arch'\n").as_deref(), Some("arch"));
    }

    #[test]
    fn reads_id_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("os-release");
        std::fs::write(&path, UBUNTU).unwrap();
        assert_eq!(os_release_id_from(&path), "ubuntu");
    }

    #[test]
    fn reads_quoted_id_from_file_unquoted() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("os-release");
        std::fs::write(&path, "NAME=\"CentOS Stream\"\nID=\"centos\"\n").unwrap();
        assert_eq!(os_release_id_from(&path), "centos");
    }

    #[test]
    fn missing_file_is_unknown() {
        let temp = TempDir::new().unwrap();
        assert_eq!(os_release_id_from(&temp.path().join("nope")), "(unknown)");
    }

    #[test]
    fn file_without_id_is_unknown() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("os-release");
        std::fs::write(&path, "NAME=\"Something\"\n").unwrap();
        assert_eq!(os_release_id_from(&path), UNKNOWN_OS);
    }

    #[test]
    fn host_lookup_never_panics() {
        assert!(!os_release_id().is_empty());
    }
}

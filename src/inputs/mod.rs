//! Step inputs supplied by the CI runner.
//!
//! GitHub Actions exposes each `with:` input as an `INPUT_<NAME>` environment
//! variable, with the name upper-cased and spaces replaced by underscores.
//! [`Inputs`] snapshots those variables once so lookups are pure.

pub mod sudo;
pub mod validate;

use std::collections::HashMap;

pub use sudo::SudoMode;
pub use validate::validate_input;

/// Prefix of runner-provided input variables.
const INPUT_PREFIX: &str = "INPUT_";

/// Snapshot of step inputs.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    values: HashMap<String, String>,
}

impl Inputs {
    /// Collect every `INPUT_*` variable from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Collect `INPUT_*` entries from an arbitrary set of variables.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| k.starts_with(INPUT_PREFIX))
            .collect();
        Self { values }
    }

    /// Build inputs from `name -> value` pairs, normalizing the names.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let values = pairs
            .into_iter()
            .map(|(k, v)| (variable_name(k.as_ref()), v.into()))
            .collect();
        Self { values }
    }

    /// Get an input by name. Values are trimmed; blank values count as absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(&variable_name(name))
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// The `github-token` input.
    pub fn github_token(&self) -> Option<&str> {
        self.get("github-token")
    }

    /// The `sudo` input, defaulting to [`SudoMode::Auto`] when unset.
    pub fn sudo(&self) -> crate::Result<SudoMode> {
        self.get("sudo")
            .map(str::parse::<SudoMode>)
            .transpose()
            .map(Option::unwrap_or_default)
    }
}

/// Environment variable name for an input.
pub fn variable_name(name: &str) -> String {
    format!("{}{}", INPUT_PREFIX, name.replace(' ', "_").to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_name_is_uppercased_with_underscores() {
        assert_eq!(variable_name("github-token"), "INPUT_GITHUB-TOKEN");
        assert_eq!(variable_name("my input"), "INPUT_MY_INPUT");
    }

    #[test]
    fn from_vars_keeps_only_input_variables() {
        let inputs = Inputs::from_vars([
            ("INPUT_SUDO", "true"),
            ("PATH", "/usr/bin"),
            ("HOME", "/root"),
        ]);
        assert_eq!(inputs.get("sudo"), Some("true"));
        assert_eq!(inputs.get("path"), None);
    }

    #[test]
    fn get_trims_values() {
        let inputs = Inputs::from_pairs([("foo", "  bar \n")]);
        assert_eq!(inputs.get("foo"), Some("bar"));
    }

    #[test]
    fn blank_value_is_absent() {
        let inputs = Inputs::from_pairs([("foo", "   ")]);
        assert_eq!(inputs.get("foo"), None);
    }

    #[test]
    fn lookup_is_case_insensitive_on_name() {
        let inputs = Inputs::from_pairs([("GitHub-Token", "tok")]);
        assert_eq!(inputs.github_token(), Some("tok"));
    }

    #[test]
    fn sudo_defaults_to_auto() {
        let inputs = Inputs::default();
        assert_eq!(inputs.sudo().unwrap(), SudoMode::Auto);
    }

    #[test]
    fn sudo_parses_value() {
        let inputs = Inputs::from_pairs([("sudo", "false")]);
        assert_eq!(inputs.sudo().unwrap(), SudoMode::Never);
    }

    #[test]
    fn sudo_rejects_unknown_value() {
        let inputs = Inputs::from_pairs([("sudo", "maybe")]);
        assert!(inputs.sudo().is_err());
    }
}

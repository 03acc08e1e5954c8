//! GitHub Actions input/output binding.
//!
//! Implements the slice of the runner contract this step needs: `INPUT_*`
//! environment lookups, the `GITHUB_OUTPUT` key=value file, and `::error::`
//! workflow commands for failure signaling.

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Environment variable name for a declared action input.
///
/// Mirrors the runner's mapping: `INPUT_` prefix, spaces to underscores,
/// uppercased. Dashes are preserved (`aws-region` -> `INPUT_AWS-REGION`).
fn input_env_name(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Escape message data for a workflow command.
fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Snapshot of the step's input surface.
///
/// Values are captured once at startup. Tests build one from explicit
/// pairs instead of mutating the process environment.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    vars: HashMap<String, String>,
}

impl Inputs {
    /// Capture the current process environment.
    pub fn from_env() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Build from explicit key/value pairs using raw environment names.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a declared input by its action name.
    ///
    /// Values are trimmed; a blank value counts as absent, matching how the
    /// runner passes undeclared inputs as empty strings.
    pub fn input(&self, name: &str) -> Option<String> {
        self.raw(&input_env_name(name))
    }

    /// Look up a plain environment variable.
    pub fn env(&self, name: &str) -> Option<String> {
        self.raw(name)
    }

    fn raw(&self, key: &str) -> Option<String> {
        self.vars
            .get(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

/// Emits step results back to the enclosing workflow run.
///
/// Failure is latched rather than exiting in place; `main` converts the
/// flag to the process exit status once, at the end of the run.
#[derive(Debug)]
pub struct Reporter {
    output_path: Option<PathBuf>,
    failed: bool,
}

impl Reporter {
    /// Bind to the output file named by `GITHUB_OUTPUT`, if any.
    pub fn from_env() -> Self {
        Self {
            output_path: std::env::var_os("GITHUB_OUTPUT").map(PathBuf::from),
            failed: false,
        }
    }

    /// Bind to an explicit output file.
    pub fn with_output_path(path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: Some(path.into()),
            failed: false,
        }
    }

    /// Whether [`Reporter::set_failed`] has been called.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Record a named step output.
    ///
    /// Appends `name=value` to the output file. Multi-line values are
    /// rejected rather than silently corrupting the file.
    pub fn set_output(&self, name: &str, value: &str) -> Result<()> {
        if name.contains('\n') || value.contains('\n') {
            return Err(Error::Io(std::io::Error::other(
                "step outputs must be single-line",
            )));
        }
        let Some(path) = &self.output_path else {
            tracing::warn!(name, value, "GITHUB_OUTPUT not set; skipping step output");
            return Ok(());
        };
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{name}={value}")?;
        Ok(())
    }

    /// Signal step failure to the runner with a human-readable message.
    pub fn set_failed(&mut self, message: &str) {
        println!("::error::{}", escape_data(message));
        self.failed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn input_names_map_like_the_runner() {
        assert_eq!(input_env_name("aws-region"), "INPUT_AWS-REGION");
        assert_eq!(input_env_name("retries"), "INPUT_RETRIES");
        assert_eq!(input_env_name("my input"), "INPUT_MY_INPUT");
    }

    #[test]
    fn escape_data_covers_command_delimiters() {
        assert_eq!(escape_data("50% done\r\n"), "50%25 done%0D%0A");
        assert_eq!(escape_data("plain"), "plain");
    }

    #[test]
    fn inputs_trim_and_treat_blank_as_absent() {
        let inputs = Inputs::from_pairs([
            ("INPUT_ECS-CLUSTER", "  prod  "),
            ("INPUT_VERBOSE", ""),
        ]);
        assert_eq!(inputs.input("ecs-cluster").as_deref(), Some("prod"));
        assert_eq!(inputs.input("verbose"), None);
        assert_eq!(inputs.input("retries"), None);
    }

    #[test]
    fn set_output_appends_key_value_lines() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("output");
        let reporter = Reporter::with_output_path(&path);

        reporter.set_output("retries", "3").expect("set_output");
        reporter.set_output("other", "x").expect("set_output");

        let contents = fs::read_to_string(&path).expect("read output");
        assert_eq!(contents, "retries=3\nother=x\n");
    }

    #[test]
    fn set_output_rejects_multiline_values() {
        let dir = tempfile::tempdir().expect("tempdir");
        let reporter = Reporter::with_output_path(dir.path().join("output"));
        assert!(reporter.set_output("retries", "1\n2").is_err());
    }

    #[test]
    fn set_failed_latches_the_flag() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut reporter = Reporter::with_output_path(dir.path().join("output"));
        assert!(!reporter.failed());
        reporter.set_failed("boom");
        assert!(reporter.failed());
    }
}

//! One external command in the perf pipeline.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::process::Command;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Short human label, used in logs and errors.
    pub label: String,
    pub program: String,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
    pub cwd: Option<PathBuf>,
    /// Directories created (`mkdir -p`) before the command runs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mkdirs: Vec<PathBuf>,
}

impl Step {
    pub fn new(label: impl Into<String>, program: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
            cwd: None,
            mkdirs: Vec::new(),
        }
    }

    pub fn arg(mut self, a: impl Into<String>) -> Self {
        self.args.push(a.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        self.env.push((k.into(), v.into()));
        self
    }

    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn mkdir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.mkdirs.push(dir.into());
        self
    }

    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        for (k, v) in &self.env {
            cmd.env(k, v);
        }
        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }
        cmd
    }
}

/// POSIX single-quoting; nothing inside `'...'` expands.
pub(crate) fn quote(s: &str) -> String {
    let plain = |c: char| c.is_ascii_alphanumeric() || "_@%+=:,./-".contains(c);
    if !s.is_empty() && s.chars().all(plain) {
        return s.to_string();
    }
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Renders the step as a copy-pasteable shell line.
impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, v) in &self.env {
            write!(f, "{k}={} ", quote(v))?;
        }
        f.write_str(&self.program)?;
        for a in &self.args {
            write!(f, " {}", quote(a))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_quotes_env_with_spaces() {
        let step = Step::new("build", "cargo")
            .env("RUSTFLAGS", "-g --cfg s2n_quic_unstable")
            .args(["build", "--release"]);
        assert_eq!(
            step.to_string(),
            "RUSTFLAGS='-g --cfg s2n_quic_unstable' cargo build --release"
        );
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("+stable"), "+stable");
        assert_eq!(quote("https://github.com/quinn-rs/quinn"), "https://github.com/quinn-rs/quinn");
        assert_eq!(quote(""), "''");
        assert_eq!(quote("-rpath,$ORIGIN"), "'-rpath,$ORIGIN'");
        assert_eq!(quote("it's"), "'it'\\''s'");
    }

    #[cfg(unix)]
    #[test]
    fn test_display_survives_sh() {
        let flags = "-g -C link-arg=-Wl,-rpath,$ORIGIN `id` \\ \"q\" it's";
        let step = Step::new("echo", "printenv").env("RUSTFLAGS", flags).arg("RUSTFLAGS");
        let line = step.to_string();
        let out = Command::new("sh").args(["-c", line.as_str()]).output().unwrap();
        assert!(out.status.success());
        assert_eq!(String::from_utf8_lossy(&out.stdout).trim_end_matches('\n'), flags);
    }

    #[test]
    fn test_to_command_carries_args_and_env() {
        let step = Step::new("x", "cargo")
            .args(["install", "inferno"])
            .env("RUSTFLAGS", "-g")
            .cwd("/tmp");
        let cmd = step.to_command();
        let args: Vec<_> = cmd.get_args().filter_map(|a| a.to_str()).collect();
        assert_eq!(args, ["install", "inferno"]);
        assert_eq!(cmd.get_program(), "cargo");
        assert_eq!(cmd.get_current_dir(), Some(std::path::Path::new("/tmp")));
        let envs: Vec<_> = cmd.get_envs().collect();
        assert_eq!(envs.len(), 1);
    }
}

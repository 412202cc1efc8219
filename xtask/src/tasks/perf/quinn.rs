//! quinn's `perf` client/server, the reference QUIC implementation the qns
//! numbers are compared against.
//!
//! Installed from git at a pinned revision into its own root, never into
//! `~/.cargo/bin`.

use super::probe::Probe;
use super::step::Step;
use crate::config::PerfConfig;
use std::path::{Path, PathBuf};

pub const PACKAGE: &str = "perf";
pub const BINARIES: &[&str] = &["perf_client", "perf_server"];

#[derive(Clone, Debug)]
pub struct QuinnPerf {
    pub git: String,
    pub rev: String,
    pub toolchain: String,
    /// `cargo install --root`; binaries land in `<root>/bin`.
    pub root: PathBuf,
}

impl QuinnPerf {
    pub fn from_config(repo_root: &Path, cfg: &PerfConfig) -> Self {
        Self {
            git: cfg.quinn.git.clone(),
            rev: cfg.quinn.rev.clone(),
            toolchain: cfg.toolchain.clone(),
            root: crate::util::repo::resolve(repo_root, &cfg.quinn.root),
        }
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.root.join("bin")
    }

    pub fn binary_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        BINARIES.iter().map(|b| self.bin_dir().join(b))
    }

    /// Both binaries must be present; one alone triggers a reinstall.
    pub fn is_installed(&self, probe: &dyn Probe) -> bool {
        self.binary_paths().all(|p| probe.is_file(&p))
    }

    pub fn install_step(&self) -> Step {
        let root = self.root.to_string_lossy().into_owned();
        let mut step = Step::new("install quinn perf", "cargo")
            .arg(format!("+{}", self.toolchain))
            .args(["install", "--git", self.git.as_str(), "--rev", self.rev.as_str()]);
        for b in BINARIES {
            step = step.args(["--bin", *b]);
        }
        step.args(["--root", root.as_str(), "--target-dir", root.as_str()])
            .arg(PACKAGE)
            .mkdir(&self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::perf::probe::fake::FakeProbe;

    fn quinn() -> QuinnPerf {
        QuinnPerf::from_config(Path::new("/repo"), &PerfConfig::default())
    }

    #[test]
    fn test_paths() {
        let q = quinn();
        assert_eq!(q.root, PathBuf::from("/repo/target/perf/quinn"));
        let bins: Vec<_> = q.binary_paths().collect();
        assert_eq!(
            bins,
            [
                PathBuf::from("/repo/target/perf/quinn/bin/perf_client"),
                PathBuf::from("/repo/target/perf/quinn/bin/perf_server"),
            ]
        );
    }

    #[test]
    fn test_installed_needs_both_binaries() {
        let q = quinn();
        let client = q.bin_dir().join("perf_client");
        let server = q.bin_dir().join("perf_server");

        assert!(!q.is_installed(&FakeProbe::default()));
        assert!(!q.is_installed(&FakeProbe::default().with_files(&[&client])));
        assert!(!q.is_installed(&FakeProbe::default().with_files(&[&server])));
        assert!(q.is_installed(&FakeProbe::default().with_files(&[client, server])));
    }

    #[test]
    fn test_install_step() {
        let step = quinn().install_step();
        assert_eq!(
            step.to_string(),
            "cargo +stable install --git https://github.com/quinn-rs/quinn --rev 0.10.2 \
             --bin perf_client --bin perf_server \
             --root /repo/target/perf/quinn --target-dir /repo/target/perf/quinn perf"
        );
        assert_eq!(step.mkdirs, [PathBuf::from("/repo/target/perf/quinn")]);
    }
}

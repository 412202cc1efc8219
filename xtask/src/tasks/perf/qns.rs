use super::step::Step;
use crate::config::PerfConfig;
use std::path::Path;

pub const BIN: &str = "s2n-quic-qns";

/// `-g` keeps symbols in the release binary so perf can resolve frames.
pub fn rustflags(extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        "-g".to_string()
    } else {
        format!("-g {extra}")
    }
}

pub fn build_step(repo_root: &Path, cfg: &PerfConfig) -> Step {
    Step::new(format!("build {BIN}"), "cargo")
        .arg(format!("+{}", cfg.toolchain))
        .args(["build", "--bin", BIN, "--release"])
        .env("RUSTFLAGS", rustflags(&cfg.rustflags))
        .cwd(repo_root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rustflags() {
        assert_eq!(rustflags(""), "-g");
        assert_eq!(rustflags("  "), "-g");
        assert_eq!(rustflags("--cfg s2n_quic_unstable"), "-g --cfg s2n_quic_unstable");
    }

    #[test]
    fn test_build_step() {
        let step = build_step(Path::new("/repo"), &PerfConfig::default());
        assert_eq!(
            step.to_string(),
            "RUSTFLAGS=-g cargo +stable build --bin s2n-quic-qns --release"
        );
        assert_eq!(step.cwd.as_deref(), Some(Path::new("/repo")));
    }
}

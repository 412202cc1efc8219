//! Prerequisite tool registry
//!
//! Helpers the perf scripts call by name. Each one is probed on PATH and,
//! when missing, installed from crates.io with `cargo install`.

use super::probe::Probe;
use super::step::Step;

#[derive(Debug, Clone)]
pub struct Tool {
    /// Short name (e.g., "inferno")
    pub name: &'static str,
    /// Command looked up on PATH to decide whether the tool is installed
    pub command: &'static str,
    /// crates.io package that provides `command`
    pub krate: &'static str,
    /// What the perf scripts use it for
    pub role: &'static str,
}

pub static TOOLS: &[Tool] = &[
    Tool {
        name: "inferno",
        command: "inferno-collapse-perf",
        krate: "inferno",
        role: "flamegraph collapser",
    },
    Tool {
        name: "ultraman",
        command: "ultraman",
        krate: "ultraman",
        role: "process supervisor",
    },
];

impl Tool {
    pub fn is_installed(&self, probe: &dyn Probe) -> bool {
        probe.on_path(self.command)
    }

    pub fn install_step(&self) -> Step {
        Step::new(format!("install {}", self.name), "cargo").args(["install", self.krate])
    }
}

/// Tools whose command is not on PATH.
pub fn missing<'a>(probe: &'a dyn Probe) -> impl Iterator<Item = &'static Tool> + 'a {
    TOOLS.iter().filter(move |t| !t.is_installed(probe))
}

//! Decides which steps a `build` run needs.
//!
//! Planning only reads the host through [`Probe`], so the whole decision
//! table is testable without touching PATH or the filesystem.

use super::probe::Probe;
use super::quinn::QuinnPerf;
use super::step::Step;
use super::{qns, tools};
use crate::config::PerfConfig;
use serde::Serialize;
use std::path::Path;

#[derive(Clone, Debug, Default, Serialize)]
pub struct Plan {
    pub steps: Vec<Step>,
}

/// Installs for whatever is missing, then the qns build, always last.
pub fn plan(repo_root: &Path, cfg: &PerfConfig, probe: &dyn Probe) -> Plan {
    let mut steps = Vec::new();

    for tool in tools::missing(probe) {
        tracing::debug!(tool = tool.name, command = tool.command, "missing from PATH");
        steps.push(tool.install_step());
    }

    let quinn = QuinnPerf::from_config(repo_root, cfg);
    if quinn.is_installed(probe) {
        tracing::debug!(root = %quinn.root.display(), "quinn perf already installed");
    } else {
        steps.push(quinn.install_step());
    }

    steps.push(qns::build_step(repo_root, cfg));
    Plan { steps }
}

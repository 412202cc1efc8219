use std::path::Path;

/// Answers the two questions the planner asks of the host.
pub trait Probe {
    /// Is `command` resolvable on the command search path?
    fn on_path(&self, command: &str) -> bool;

    fn is_file(&self, path: &Path) -> bool;
}

/// Probes the real host via `which` and the filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct HostProbe;

impl Probe for HostProbe {
    fn on_path(&self, command: &str) -> bool {
        let found = which::which(command);
        tracing::debug!(command, found = ?found.as_ref().ok(), "PATH lookup");
        found.is_ok()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

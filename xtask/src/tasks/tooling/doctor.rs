use anyhow::{Result, bail};

use crate::tasks::perf::probe::Probe;
use crate::tasks::perf::{PerfCtx, tools};

/// Reports every prerequisite without installing anything.
pub fn run(ctx: &PerfCtx, probe: &dyn Probe) -> Result<()> {
    let mut ok = true;

    for tool in tools::TOOLS {
        if tool.is_installed(probe) {
            eprintln!("[OK] {} ({})", tool.command, tool.role);
        } else {
            eprintln!(
                "[MISSING] `{}` not in PATH ({}; `cargo install {}`)",
                tool.command, tool.role, tool.krate
            );
            ok = false;
        }
    }

    for bin in ctx.quinn().binary_paths() {
        if probe.is_file(&bin) {
            eprintln!("[OK] {}", bin.display());
        } else {
            eprintln!("[MISSING] {}", bin.display());
            ok = false;
        }
    }

    if !probe.on_path("cargo") {
        eprintln!("[MISSING] `cargo` not in PATH");
        ok = false;
    }

    if !ok {
        bail!("doctor checks failed; run `cargo xtask build` to install what is missing");
    }
    Ok(())
}

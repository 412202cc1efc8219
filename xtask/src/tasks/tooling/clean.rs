use anyhow::{Context, Result};

use crate::tasks::perf::PerfCtx;

/// Drops the quinn perf install so the next build reinstalls it.
pub fn run(ctx: &PerfCtx) -> Result<()> {
    let root = ctx.quinn().root;
    crate::util::repo::ensure_disposable(&ctx.root, &root)?;
    if !root.exists() {
        tracing::info!("nothing to clean at {}", root.display());
        return Ok(());
    }
    tracing::info!("removing {}", root.display());
    std::fs::remove_dir_all(&root).with_context(|| format!("Removing {}", root.display()))
}

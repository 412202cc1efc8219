use anyhow::{Context, Result};

use crate::config::{Overrides, PerfConfig};
use crate::tasks::perf::PerfCtx;

pub fn run(cli: crate::cli::Cli) -> Result<()> {
    let root = crate::util::repo::repo_root()?;

    let overrides = match &cli.cmd {
        crate::cli::Cmd::Build { plan, .. } | crate::cli::Cmd::Plan { plan, .. } => {
            overrides_from(plan)
        }
        _ => Overrides::default(),
    };
    let cwd = std::env::current_dir().context("Reading current directory")?;
    let (config, required) = config_file(&root, &cwd, cli.config.as_deref());
    let ctx = load_ctx(root, &config, required, overrides)?;

    match cli.cmd {
        crate::cli::Cmd::Build { dry_run, .. } => crate::tasks::perf::build(&ctx, dry_run),
        crate::cli::Cmd::Plan { json, .. } => crate::tasks::perf::show_plan(&ctx, json),
        crate::cli::Cmd::Doctor => {
            crate::tasks::tooling::doctor::run(&ctx, &crate::tasks::perf::probe::HostProbe)
        }
        crate::cli::Cmd::Env { shell } => crate::tasks::tooling::env::run(&ctx, shell),
        crate::cli::Cmd::Clean => crate::tasks::tooling::clean::run(&ctx),
    }
}

fn overrides_from(args: &crate::cli::PlanArgs) -> Overrides {
    Overrides {
        toolchain: args.toolchain.clone(),
        quinn_rev: args.quinn_rev.clone(),
        rustflags: args.rustflags.clone(),
    }
}

/// Picks the config file and whether it must exist.
///
/// An explicit `--config` is relative to the caller's working directory and
/// must exist; the default `<repo>/perf.toml` is optional.
fn config_file(
    root: &std::path::Path,
    cwd: &std::path::Path,
    explicit: Option<&std::path::Path>,
) -> (std::path::PathBuf, bool) {
    match explicit {
        Some(path) => (crate::util::repo::resolve(cwd, path), true),
        None => (crate::util::repo::config_path(root), false),
    }
}

fn load_ctx(
    root: std::path::PathBuf,
    config: &std::path::Path,
    required: bool,
    overrides: Overrides,
) -> Result<PerfCtx> {
    let cfg = PerfConfig::load(config, required)?.apply(overrides);
    tracing::debug!(?cfg, root = %root.display(), "resolved perf config");
    let ctx = PerfCtx { root, cfg };
    crate::util::repo::ensure_disposable(&ctx.root, &ctx.quinn().root)
        .context("Invalid [quinn].root")?;
    Ok(ctx)
}

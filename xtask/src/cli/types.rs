use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Shell {
    Bash,
    Sh,
    Fish,
}

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "s2n-quic perf tasks: install benchmarking helpers and build qns")]
pub struct Cli {
    /// Debug-level logs (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to perf.toml, relative to the current directory (default: <repo>/perf.toml if present).
    #[arg(long, global = true, env = "PERF_XTASK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

/// Settings shared by every command that plans steps.
#[derive(clap::Args, Clone, Debug, Default)]
pub struct PlanArgs {
    /// Rustup toolchain for the quinn install and the qns build.
    #[arg(long)]
    pub toolchain: Option<String>,

    /// git revision of quinn to install perf_client/perf_server from.
    #[arg(long = "quinn-rev")]
    pub quinn_rev: Option<String>,

    /// Extra RUSTFLAGS appended after `-g` for the qns build.
    #[arg(long, allow_hyphen_values = true)]
    pub rustflags: Option<String>,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Install missing perf helpers, then build s2n-quic-qns (release, with symbols).
    Build {
        #[command(flatten)]
        plan: PlanArgs,

        #[arg(long = "dry-run", help = "Print the commands that would run and exit.")]
        dry_run: bool,
    },

    /// Print the steps `build` would run on this machine.
    Plan {
        #[command(flatten)]
        plan: PlanArgs,

        #[arg(long)]
        json: bool,
    },

    /// Check that the perf helpers are installed, without installing them.
    Doctor,

    /// Print shell exports that put quinn's perf binaries on PATH.
    ///
    /// Usage:
    ///   eval "$(cargo xtask env bash)"
    Env {
        #[arg(value_enum, default_value_t = Shell::Bash)]
        shell: Shell,
    },

    /// Remove the quinn perf install so the next build reinstalls it.
    Clean,
}

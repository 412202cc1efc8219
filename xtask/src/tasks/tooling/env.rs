use anyhow::Result;

use crate::cli::Shell;
use crate::tasks::perf::PerfCtx;

pub fn run(ctx: &PerfCtx, shell: Shell) -> Result<()> {
    print!("{}", exports(ctx, shell));
    Ok(())
}

/// Pure string exports so users can `eval` them.
fn exports(ctx: &PerfCtx, shell: Shell) -> String {
    let bin = ctx.quinn().bin_dir();
    match shell {
        Shell::Bash | Shell::Sh => format!("export PATH=\"{}:$PATH\"\n", bin.display()),
        Shell::Fish => format!("set -gx PATH \"{}\" $PATH\n", bin.display()),
    }
}

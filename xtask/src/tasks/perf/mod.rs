//! QUIC perf setup: install the benchmarking helpers, then build qns.

pub mod exec;
pub mod plan;
pub mod probe;
pub mod qns;
pub mod quinn;
pub mod step;
pub mod tools;

use crate::config::PerfConfig;
use anyhow::Result;
use std::path::PathBuf;

/// Repo root plus resolved configuration, shared by every perf task.
#[derive(Clone, Debug)]
pub struct PerfCtx {
    pub root: PathBuf,
    pub cfg: PerfConfig,
}

impl PerfCtx {
    pub fn quinn(&self) -> quinn::QuinnPerf {
        quinn::QuinnPerf::from_config(&self.root, &self.cfg)
    }

    pub fn plan(&self, probe: &dyn probe::Probe) -> plan::Plan {
        plan::plan(&self.root, &self.cfg, probe)
    }
}

pub fn build(ctx: &PerfCtx, dry_run: bool) -> Result<()> {
    run_build(ctx, dry_run, &probe::HostProbe, &mut exec::ProcessRunner)
}

fn run_build(
    ctx: &PerfCtx,
    dry_run: bool,
    probe: &dyn probe::Probe,
    runner: &mut dyn exec::Runner,
) -> Result<()> {
    let plan = ctx.plan(probe);
    if dry_run {
        print!("{}", render_steps(&plan));
        return Ok(());
    }

    exec::execute(&plan, runner)?;
    tracing::info!(
        "{} ready in {}",
        qns::BIN,
        ctx.root.join("target/release").display()
    );
    Ok(())
}

pub fn show_plan(ctx: &PerfCtx, json: bool) -> Result<()> {
    let plan = ctx.plan(&probe::HostProbe);
    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", render_steps(&plan));
    }
    Ok(())
}

fn render_steps(plan: &plan::Plan) -> String {
    let mut out = String::new();
    for step in &plan.steps {
        for dir in &step.mkdirs {
            out.push_str(&format!("mkdir -p {}\n", step::quote(&dir.to_string_lossy())));
        }
        out.push_str(&format!("{step}\n"));
    }
    out
}

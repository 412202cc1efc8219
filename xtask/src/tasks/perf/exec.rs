//! Fail-fast step execution.

use super::plan::Plan;
use super::step::Step;
use crate::error::StepError;
use std::io;

/// Runs one step to completion.
///
/// Returns the exit code, or `None` if the child died without one.
pub trait Runner {
    fn run(&mut self, step: &Step) -> io::Result<Option<i32>>;
}

/// Spawns real child processes with inherited stdio.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessRunner;

impl Runner for ProcessRunner {
    fn run(&mut self, step: &Step) -> io::Result<Option<i32>> {
        for dir in &step.mkdirs {
            std::fs::create_dir_all(dir)?;
        }
        let status = step.to_command().status()?;
        Ok(status.code())
    }
}

/// Runs `plan` in order and stops at the first step that does not exit 0.
pub fn execute(plan: &Plan, runner: &mut dyn Runner) -> Result<(), StepError> {
    let total = plan.steps.len();
    for (i, step) in plan.steps.iter().enumerate() {
        tracing::info!("[{}/{}] {}", i + 1, total, step.label);
        tracing::debug!(command = %step, "running");

        let code = runner.run(step).map_err(|source| StepError::Spawn {
            step: step.label.clone(),
            source,
        })?;

        match code {
            Some(0) => {}
            Some(code) => {
                return Err(StepError::Failed { step: step.label.clone(), code });
            }
            None => return Err(StepError::Signaled { step: step.label.clone() }),
        }
    }
    Ok(())
}

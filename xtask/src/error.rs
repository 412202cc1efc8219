use thiserror::Error;

/// Why a pipeline step stopped the run.
#[derive(Debug, Error)]
pub enum StepError {
    #[error("step `{step}` failed with exit code {code}")]
    Failed { step: String, code: i32 },

    #[error("step `{step}` was terminated by a signal")]
    Signaled { step: String },

    #[error("failed to spawn step `{step}`")]
    Spawn {
        step: String,
        #[source]
        source: std::io::Error,
    },
}

impl StepError {
    /// Exit code the xtask process should return.
    pub fn exit_code(&self) -> i32 {
        match self {
            StepError::Failed { code, .. } => *code,
            StepError::Signaled { .. } | StepError::Spawn { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_propagates() {
        let e = StepError::Failed { step: "build s2n-quic-qns".into(), code: 101 };
        assert_eq!(e.exit_code(), 101);
        assert_eq!(e.to_string(), "step `build s2n-quic-qns` failed with exit code 101");
    }

    #[test]
    fn test_signal_maps_to_one() {
        let e = StepError::Signaled { step: "install inferno".into() };
        assert_eq!(e.exit_code(), 1);
    }
}

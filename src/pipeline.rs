// src/pipeline.rs
//
// Pipeline driver: run each step as its own blocking child process, in order,
// and stop at the first one that does not exit cleanly.

use std::{
    error::Error,
    fmt, io,
    path::PathBuf,
    process::Command,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Extract,
    Normalize,
}

impl Step {
    pub const ORDER: [Step; 2] = [Step::Extract, Step::Normalize];

    /// Subcommand that runs this step in-process.
    pub fn arg(self) -> &'static str {
        match self {
            Step::Extract => "extract",
            Step::Normalize => "normalize",
        }
    }

    pub fn from_arg(s: &str) -> Option<Self> {
        Self::ORDER.into_iter().find(|st| st.arg().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.arg())
    }
}

/// Launches one step and waits for it. `Ok(None)` means the child ended
/// without an exit code (killed by a signal).
pub trait StepRunner {
    fn run_step(&mut self, step: Step) -> io::Result<Option<i32>>;
}

/// Re-invokes a binary (normally the current executable) with the step's subcommand.
pub struct ProcessRunner {
    program: PathBuf,
}

impl ProcessRunner {
    pub fn new(program: PathBuf) -> Self { Self { program } }

    pub fn current_exe() -> io::Result<Self> {
        Ok(Self::new(std::env::current_exe()?))
    }
}

impl StepRunner for ProcessRunner {
    fn run_step(&mut self, step: Step) -> io::Result<Option<i32>> {
        let status = Command::new(&self.program).arg(step.arg()).status()?;
        Ok(status.code())
    }
}

#[derive(Debug)]
pub enum PipelineError {
    Spawn { step: Step, source: io::Error },
    StepFailed { step: Step, code: Option<i32> },
}

impl PipelineError {
    pub fn step(&self) -> Step {
        match self {
            PipelineError::Spawn { step, .. } | PipelineError::StepFailed { step, .. } => *step,
        }
    }

    /// Process exit status to hand back: the step's own code, else 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::StepFailed { code: Some(c), .. } => *c,
            _ => 1,
        }
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Spawn { step, source } => write!(f, "step '{step}' could not start: {source}"),
            PipelineError::StepFailed { step, code: Some(c) } => write!(f, "step '{step}' exited with status {c}"),
            PipelineError::StepFailed { step, code: None } => write!(f, "step '{step}' was terminated"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Spawn { source, .. } => Some(source),
            PipelineError::StepFailed { .. } => None,
        }
    }
}

/// Run `steps` in order; the first failure stops the sequence.
pub fn run_steps(steps: &[Step], runner: &mut dyn StepRunner) -> Result<(), PipelineError> {
    for &step in steps {
        logf!("Pipeline: Begin step {step}");
        match runner.run_step(step) {
            Ok(Some(0)) => logf!("Pipeline: Step {step} OK"),
            Ok(code) => {
                loge!("Pipeline: Step {step} failed ({code:?})");
                return Err(PipelineError::StepFailed { step, code });
            }
            Err(source) => {
                loge!("Pipeline: Step {step} could not start: {source}");
                return Err(PipelineError::Spawn { step, source });
            }
        }
    }
    Ok(())
}

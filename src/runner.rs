use std::path::PathBuf;
use std::process::Command;

use crate::error::{Error, Result};

/// A fully-planned subprocess invocation. Planning is separated from
/// execution so the routers can be tested without spawning anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn run(&self) -> Result<()> {
        run(&self.program, &self.args)
    }
}

/// Look up an executable on the search path.
pub fn resolve(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}

/// Run an executable with the caller's stdin/stdout/stderr attached and
/// wait for it to exit. The wrapped tools prompt and stream progress, so
/// nothing is captured.
pub fn run(program: &str, args: &[String]) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|e| Error::CommandFailed {
            program: program.to_string(),
            detail: e.to_string(),
        })?;

    if !status.success() {
        return Err(Error::CommandFailed {
            program: program.to_string(),
            detail: match status.code() {
                Some(code) => format!("exited with status {}", code),
                None => "terminated by signal".to_string(),
            },
        });
    }

    Ok(())
}

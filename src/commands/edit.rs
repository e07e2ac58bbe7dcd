use crate::config::Config;
use crate::error::{Error, Result};
use crate::runner;

/// `rui edit`: open the flake reference in the resolved editor.
pub fn run(config: &Config) -> Result<()> {
    let editor = config.editor().ok_or(Error::NoEditor)?;
    runner::run(&editor, &[config.flake()])
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("This command is not supported with nh. Use {force_flag} to use {tool} instead.")]
    NhUnsupported {
        force_flag: &'static str,
        tool: &'static str,
    },

    #[error("{program}: {detail}")]
    CommandFailed { program: String, detail: String },

    #[error("Could not determine hostname: {0}")]
    Hostname(std::io::Error),

    #[error("No editor configured. Set \"editor\" in config.json, $FLAKE_EDITOR, or $EDITOR.")]
    NoEditor,
}

pub type Result<T> = std::result::Result<T, Error>;

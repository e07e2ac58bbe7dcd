//! OS-domain router: `rui os <action>`.
//!
//! Mirrors the home router with two differences: the native path runs
//! nixos-rebuild under a privilege escalator (doas when available, else
//! sudo), and the target is a hostname rather than a user. nh escalates on
//! its own, so the nh path takes no prefix.

use crate::action::Action;
use crate::cli::OsArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::notify::notify;
use crate::runner::{self, Invocation};

pub const FORCE_FLAG: &str = "--force-nixos-rebuild";

pub fn run(config: &Config, action: Action, args: &OsArgs) -> Result<()> {
    let nh_available = runner::resolve("nh").is_some();

    notify(config, &format!("Queued OS {}", action.name()))?;

    let invocation = if nh_available && !args.force_nixos_rebuild {
        plan_nh(action)?
    } else {
        let hostname = match &args.hostname {
            Some(hostname) => hostname.clone(),
            None => hostname::get()
                .map_err(Error::Hostname)?
                .to_string_lossy()
                .into_owned(),
        };
        plan_native(action, escalator(), &config.flake(), &hostname)
    };

    match invocation.run() {
        Ok(()) => notify(config, &format!("OS {}", action.verb())),
        Err(err) => {
            let _ = notify(config, &format!("Failed to {} OS: {}", action.name(), err));
            Err(err)
        }
    }
}

fn escalator() -> &'static str {
    if runner::resolve("doas").is_some() {
        "doas"
    } else {
        "sudo"
    }
}

pub fn plan_nh(action: Action) -> Result<Invocation> {
    if !action.nh_supported() {
        return Err(Error::NhUnsupported {
            force_flag: FORCE_FLAG,
            tool: "nixos-rebuild",
        });
    }

    Ok(Invocation::new(
        "nh",
        vec!["os".to_string(), action.name().to_string()],
    ))
}

pub fn plan_native(action: Action, escalator: &str, flake: &str, hostname: &str) -> Invocation {
    Invocation::new(
        escalator,
        vec![
            "nixos-rebuild".to_string(),
            action.name().to_string(),
            "--flake".to_string(),
            format!("{}#{}", flake, hostname),
        ],
    )
}

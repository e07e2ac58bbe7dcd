//! Home-domain router: `rui home <action>`.
//!
//! Exactly one backing tool runs per request. nh handles the actions it
//! supports unless `--force-home-manager` is passed or nh is not on the
//! search path; everything else goes to home-manager with an explicit
//! `--flake <ref>#<user>` target.

use crate::action::Action;
use crate::cli::{HomeArgs, NewsArgs};
use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::notify::notify;
use crate::runner::{self, Invocation};

pub const FORCE_FLAG: &str = "--force-home-manager";

pub fn run(config: &Config, action: Action, args: &HomeArgs) -> Result<()> {
    let nh_available = runner::resolve("nh").is_some();

    // A failure to even queue the notification means the execution
    // environment is broken; abort before delegating.
    notify(config, &format!("Queued home {}", action.name()))?;

    let user = config::resolve(args.user.as_deref(), "USER", "", &whoami::username());
    let invocation = plan(
        action,
        nh_available,
        args.force_home_manager,
        &user,
        &config.flake(),
        &args.extra,
    )?;

    match invocation.run() {
        Ok(()) => notify(config, &format!("Home {}", action.verb())),
        Err(err) => {
            // Delivery of the failure notification is best-effort; the
            // subprocess error is what the caller sees.
            let _ = notify(config, &format!("Failed to {} home: {}", action.name(), err));
            Err(err)
        }
    }
}

/// Map a home action onto a single tool invocation.
pub fn plan(
    action: Action,
    nh_available: bool,
    force_home_manager: bool,
    user: &str,
    flake: &str,
    extra: &[String],
) -> Result<Invocation> {
    if nh_available && !force_home_manager {
        if !action.nh_supported() {
            return Err(Error::NhUnsupported {
                force_flag: FORCE_FLAG,
                tool: "Home Manager",
            });
        }

        let mut argv = vec!["home".to_string(), action.name().to_string(), "--".to_string()];
        argv.extend(extra.iter().cloned());
        return Ok(Invocation::new("nh", argv));
    }

    let mut argv = vec![
        action.name().to_string(),
        "--flake".to_string(),
        format!("{}#{}", flake, user),
    ];
    argv.extend(extra.iter().cloned());
    Ok(Invocation::new("home-manager", argv))
}

/// `rui home news`: always home-manager, no notifications. The `#<user>`
/// suffix is only appended when a user was passed explicitly.
pub fn news(config: &Config, args: &NewsArgs) -> Result<()> {
    let mut flake = config.flake();
    if let Some(user) = &args.user {
        flake = format!("{}#{}", flake, user);
    }

    let mut argv = vec!["news".to_string(), "--flake".to_string(), flake];
    argv.extend(args.extra.iter().cloned());
    runner::run("home-manager", &argv)
}

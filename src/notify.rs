//! Best-effort desktop notifications.
//!
//! Delivery problems are not the user's problem: headless sessions and a
//! missing notification helper are both quiet no-ops. Only an actual
//! failure to run a resolved helper surfaces as an error.

use crate::config::{env_non_empty, Config};
use crate::error::Result;
use crate::runner;

/// Notification title for every message rui sends.
pub const TITLE: &str = "Rui";

pub fn notify(config: &Config, message: &str) -> Result<()> {
    if !graphical_session() {
        return Ok(());
    }

    let Some(notifier) = runner::resolve(&config.notifier()) else {
        return Ok(());
    };

    if !config.notify {
        return Ok(());
    }

    runner::run(
        &notifier.to_string_lossy(),
        &[TITLE.to_string(), message.to_string()],
    )
}

fn graphical_session() -> bool {
    env_non_empty("DISPLAY").is_some() || env_non_empty("WAYLAND_DISPLAY").is_some()
}

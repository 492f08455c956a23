//! Operator commands.

use vc_config::ConfigHandle;

use crate::ScanResult;

/// An administrative command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AdminCommand {
    /// Re-read the configuration file; the next pass uses it.
    Reload,
    /// Stop the scan loop after the current pass.
    Stop,
}

impl AdminCommand {
    /// Parse a command line split into words.  Only a single word is
    /// accepted; matching is case-insensitive.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Option<Self> {
        let [word] = args else { return None };
        let word = word.as_ref();
        if word.eq_ignore_ascii_case("reload") {
            Some(AdminCommand::Reload)
        } else if word.eq_ignore_ascii_case("stop") {
            Some(AdminCommand::Stop)
        } else {
            None
        }
    }

    /// Usage text for `command`.
    pub fn usage(command: &str) -> String {
        format!("Usage: {command} reload - Reload the configuration. | {command} stop - Stop scanning.")
    }
}

/// Reload `config` from its file and return the operator message.
///
/// A bad file leaves the current settings in place and is returned as an
/// error.
pub fn reload(config: &ConfigHandle, name: &str) -> ScanResult<String> {
    config.reload()?;
    Ok(format!("{name} configuration reloaded."))
}

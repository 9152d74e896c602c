//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the navigation state and returns results.

use crate::config::{HELP_TEXT, PARENT_ENTRY_NAME, ROOT_PATH};
use crate::filesystem::VirtualFs;
use crate::models::OutputLine;
use crate::navigation::NavigationState;

use super::{Command, CommandResult, PathArg};

/// Execute a parsed command.
///
/// Only `cd` and `back` mutate `nav`; every failure leaves it unchanged and
/// is reported as an output line.
pub fn execute_command(cmd: Command, nav: &mut NavigationState, fs: &VirtualFs) -> CommandResult {
    match cmd {
        Command::Help => CommandResult::output(HELP_TEXT.lines().map(OutputLine::text).collect()),
        Command::Clear => CommandResult::clear(),
        Command::Ls => nav.listing(fs).into(),
        Command::Cd(dir) => execute_cd(&dir, nav, fs),
        Command::Back => match nav.step_back(fs) {
            Some(result) => result.into(),
            None => CommandResult::empty(),
        },
        Command::Open(file) => {
            CommandResult::output(vec![OutputLine::text(format!("Opening file: {}...", file))])
        }
        Command::Unknown(input) => CommandResult::error(format!(
            "Command not found: {}. Type 'help' for available commands.",
            input
        )),
    }
}

/// Execute `cd` command.
fn execute_cd(dir: &PathArg, nav: &mut NavigationState, fs: &VirtualFs) -> CommandResult {
    if dir == &ROOT_PATH {
        return nav.reset(fs).into();
    }
    let target = cd_target(nav.current_path(), dir.as_str());
    nav.move_to(fs, &target).into()
}

/// Absolute path `cd <dir>` navigates to from `current`.
///
/// `..` means the parent of `current` and `/` the root. Relative arguments
/// are joined with `current`. Any other argument starting with `/` is taken
/// as an absolute path rather than joined, so `cd /x` from `/docs` goes to
/// `/x`, not `/docs/x`.
pub fn cd_target(current: &str, dir: &str) -> String {
    if dir == PARENT_ENTRY_NAME {
        NavigationState::parent_of(current)
    } else if dir == ROOT_PATH {
        ROOT_PATH.to_string()
    } else if dir.starts_with('/') {
        dir.to_string()
    } else {
        VirtualFs::join_path(current, dir)
    }
}

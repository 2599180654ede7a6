//! User confirmation prompts for destructive operations

use dialoguer::Confirm;

use crate::error::Result;

/// Ask before deleting `count` items
///
/// `--yes` and batch mode skip the prompt.
pub fn confirm_delete(what: &str, count: usize, assume_yes: bool, batch: bool) -> Result<bool> {
    if assume_yes || batch {
        return Ok(true);
    }

    let confirmed = Confirm::new()
        .with_prompt(format!("This will delete {} {}. Continue?", count, what))
        .default(false)
        .interact()?;
    Ok(confirmed)
}

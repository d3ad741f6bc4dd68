use std::path::Path;

use tracing::info;

use crate::error::{Result, RosterError};
use crate::model::Roster;

/// Save a roster to a JSON file.
pub fn save_roster(roster: &Roster, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(roster)?;
    std::fs::write(path, json).map_err(|e| RosterError::io(path, e))?;
    info!(path = %path.display(), shifts = roster.entries.len(), "roster saved");
    Ok(())
}

/// Load a roster from a JSON file.
///
/// Times are parsed strictly, so a malformed "HH:MM" fails the whole load.
/// Every entry must also start before it ends.
pub fn load_roster(path: &Path) -> Result<Roster> {
    let json = std::fs::read_to_string(path).map_err(|e| RosterError::io(path, e))?;
    let roster: Roster = serde_json::from_str(&json)?;
    if let Some(bad) = roster.entries.iter().find(|e| e.start >= e.end) {
        return Err(RosterError::InvalidInterval {
            name: bad.name.clone(),
            start: bad.start.to_string(),
            end: bad.end.to_string(),
        });
    }
    info!(path = %path.display(), shifts = roster.entries.len(), "roster loaded");
    Ok(roster)
}

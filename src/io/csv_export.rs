use std::path::Path;

use crate::error::Result;
use crate::model::ShiftEntry;

/// Export shifts to a semicolon-delimited CSV file matching the import format.
///
/// Columns: Member ; Role ; Start ; End ; Minutes
/// Returns the number of shifts written.
pub fn export_csv(entries: &[ShiftEntry], path: &Path) -> Result<usize> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(path)?;
    write_entries(&mut wtr, entries)?;
    Ok(entries.len())
}

fn write_entries<W: std::io::Write>(wtr: &mut csv::Writer<W>, entries: &[ShiftEntry]) -> Result<()> {
    wtr.write_record(["Member", "Role", "Start", "End", "Minutes"])?;
    for entry in entries {
        let start = entry.start.to_string();
        let end = entry.end.to_string();
        let minutes = entry.duration_minutes().to_string();
        wtr.write_record([
            entry.name.as_str(),
            entry.role.label(),
            start.as_str(),
            end.as_str(),
            minutes.as_str(),
        ])?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

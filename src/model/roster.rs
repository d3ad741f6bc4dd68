use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::shift::{Role, ShiftEntry};
use super::time::TimeOfDay;

/// Lookup and write-back the timeline editor needs from whoever owns the
/// shift entries.
pub trait ShiftStore {
    fn find_by_id(&self, id: &str) -> Option<&ShiftEntry>;

    /// Rewrite the interval of an existing entry. Returns the updated entry,
    /// or `None` if no entry has that id.
    fn replace(&mut self, id: &str, start: TimeOfDay, end: TimeOfDay) -> Option<ShiftEntry>;
}

/// One day's shifts, in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub name: String,
    pub date: NaiveDate,
    pub entries: Vec<ShiftEntry>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            name: "Untitled Roster".to_string(),
            date: chrono::Local::now().date_naive(),
            entries: Vec::new(),
            created: Utc::now(),
            modified: Utc::now(),
        }
    }
}

impl Roster {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date,
            ..Default::default()
        }
    }

    /// Append a shift for a new member spanning `start`-`end` and return its id.
    pub fn add_member(
        &mut self,
        name: impl Into<String>,
        role: Role,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> String {
        let entry = ShiftEntry::new(name, start, end).with_role(role);
        let id = entry.id.clone();
        self.entries.push(entry);
        self.touch();
        id
    }

    /// Remove a shift. Returns the removed entry if it existed.
    pub fn remove(&mut self, id: &str) -> Option<ShiftEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        let removed = self.entries.remove(index);
        self.touch();
        Some(removed)
    }

    pub fn total_minutes(&self) -> i32 {
        self.entries.iter().map(ShiftEntry::duration_minutes).sum()
    }

    /// Touch the modified timestamp.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}

impl ShiftStore for Roster {
    fn find_by_id(&self, id: &str) -> Option<&ShiftEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn replace(&mut self, id: &str, start: TimeOfDay, end: TimeOfDay) -> Option<ShiftEntry> {
        let entry = self.entries.iter_mut().find(|e| e.id == id)?;
        entry.start = start;
        entry.end = end;
        let updated = entry.clone();
        self.touch();
        Some(updated)
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::time::TimeOfDay;

/// What kind of member works a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Manager,
    #[default]
    PartTime,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Manager, Role::PartTime];

    pub fn label(self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::PartTime => "Part-time",
        }
    }

    /// Lenient parse used by CSV import.
    pub fn parse_loose(s: &str) -> Option<Role> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "manager" | "mgr" | "lead" => Some(Role::Manager),
            "parttime" | "pt" | "staff" | "" => Some(Role::PartTime),
            _ => None,
        }
    }
}

/// One member's shift on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: Role,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl ShiftEntry {
    /// Create an entry with a fresh identifier.
    pub fn new(name: impl Into<String>, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            id: format!("shift-{}", Uuid::new_v4()),
            name: name.into(),
            role: Role::default(),
            start,
            end,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn duration_minutes(&self) -> i32 {
        self.end.minutes() - self.start.minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_prefixed() {
        let start = TimeOfDay::from_hm(9, 0).unwrap();
        let end = TimeOfDay::from_hm(17, 0).unwrap();
        let a = ShiftEntry::new("Aiko", start, end);
        let b = ShiftEntry::new("Aiko", start, end);
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("shift-"));
        assert_eq!(a.duration_minutes(), 480);
    }

    #[test]
    fn role_defaults_when_absent_in_json() {
        let json = r#"{"id":"s1","name":"Ren","start":"10:00","end":"12:00"}"#;
        let entry: ShiftEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.role, Role::PartTime);
    }

    #[test]
    fn role_serializes_in_upper_case() {
        assert_eq!(serde_json::to_string(&Role::PartTime).unwrap(), "\"PART_TIME\"");
        assert_eq!(Role::parse_loose("Part-time"), Some(Role::PartTime));
        assert_eq!(Role::parse_loose("MANAGER"), Some(Role::Manager));
        assert_eq!(Role::parse_loose("owner"), None);
    }
}

use shift_timeline::io::{csv_export, csv_import, load_roster, save_roster};
use shift_timeline::model::{Role, Roster, ShiftStore, TimeOfDay};
use shift_timeline::RosterError;

fn t(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

fn sample_roster() -> Roster {
    let date = chrono::NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    let mut roster = Roster::new("Friday", date);
    roster.add_member("Mei", Role::Manager, t("07:00"), t("15:30"));
    roster.add_member("Taro", Role::PartTime, t("17:00"), t("24:00"));
    roster
}

#[test]
fn json_save_and_load_keeps_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("friday.roster.json");
    let roster = sample_roster();

    save_roster(&roster, &path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"24:00\""));
    assert!(text.contains("\"MANAGER\""));

    let loaded = load_roster(&path).unwrap();
    assert_eq!(loaded.name, "Friday");
    assert_eq!(loaded.date, roster.date);
    assert_eq!(loaded.entries, roster.entries);
    let id = &roster.entries[1].id;
    assert_eq!(loaded.find_by_id(id).map(|e| e.end), Some(TimeOfDay::END_OF_DAY));
}

#[test]
fn malformed_time_fails_the_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.roster.json");
    let mut value = serde_json::to_value(sample_roster()).unwrap();
    value["entries"][0]["start"] = serde_json::Value::String("7 o'clock".into());
    std::fs::write(&path, value.to_string()).unwrap();

    let err = load_roster(&path).unwrap_err();
    assert!(matches!(err, RosterError::Json(_)), "got {err:?}");
    assert!(err.to_string().contains("malformed time of day"));
}

#[test]
fn reversed_interval_fails_the_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reversed.roster.json");
    let mut value = serde_json::to_value(sample_roster()).unwrap();
    value["entries"][0]["start"] = serde_json::Value::String("16:00".into());
    std::fs::write(&path, value.to_string()).unwrap();

    let err = load_roster(&path).unwrap_err();
    assert!(matches!(err, RosterError::InvalidInterval { ref name, .. } if name == "Mei"));
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nowhere.json");
    let err = load_roster(&path).unwrap_err();
    assert!(matches!(err, RosterError::Io { path: ref p, .. } if *p == path));
}

#[test]
fn csv_export_then_import() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("friday.csv");
    let roster = sample_roster();

    assert_eq!(csv_export::export_csv(&roster.entries, &path).unwrap(), 2);
    let (entries, skipped) = csv_import::import_csv(&path).unwrap();
    assert_eq!(skipped, 0);
    let summary: Vec<_> = entries
        .iter()
        .map(|e| (e.name.as_str(), e.role, e.start.to_string(), e.end.to_string()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Mei", Role::Manager, "07:00".to_string(), "15:30".to_string()),
            ("Taro", Role::PartTime, "17:00".to_string(), "24:00".to_string()),
        ]
    );
}

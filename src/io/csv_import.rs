use std::path::Path;

use tracing::warn;

use crate::error::{Result, RosterError};
use crate::model::{Role, ShiftEntry, TimeOfDay};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Name,
    Start,
    End,
    Role,
}

/// Detect delimiter by checking the first line for common separators.
fn detect_delimiter(first_line: &str) -> u8 {
    let semicolons = first_line.matches(';').count();
    let commas = first_line.matches(',').count();
    let tabs = first_line.matches('\t').count();

    if semicolons >= commas && semicolons >= tabs {
        b';'
    } else if tabs >= commas {
        b'\t'
    } else {
        b','
    }
}

fn header_to_col(header: &str) -> Option<Column> {
    match header.trim().to_lowercase().replace([' ', '-', '_'], "").as_str() {
        "name" | "member" | "membername" | "staff" | "employee" => Some(Column::Name),
        "start" | "starttime" | "from" | "begin" | "in" => Some(Column::Start),
        "end" | "endtime" | "to" | "finish" | "out" => Some(Column::End),
        "role" | "position" | "type" => Some(Column::Role),
        _ => None,
    }
}

/// Import shifts from a CSV file.
///
/// Auto-detects delimiter (comma, semicolon, tab) and matches column headers
/// flexibly. Returns `(entries, skipped_count)`.
pub fn import_csv(path: &Path) -> Result<(Vec<ShiftEntry>, usize)> {
    let content = std::fs::read_to_string(path).map_err(|e| RosterError::io(path, e))?;
    parse_csv(&content)
}

pub fn parse_csv(content: &str) -> Result<(Vec<ShiftEntry>, usize)> {
    let first_line = content.lines().next().unwrap_or("");
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(detect_delimiter(first_line))
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let col_map: Vec<Option<Column>> = headers.iter().map(header_to_col).collect();
    let has = |c: Column| col_map.contains(&Some(c));
    if !(has(Column::Name) && has(Column::Start) && has(Column::End)) {
        return Err(RosterError::MissingColumns {
            found: headers.iter().map(str::to_string).collect(),
        });
    }

    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for (i, result) in reader.records().enumerate() {
        let row = i + 2;
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                warn!(row, error = %e, "skipping unreadable CSV row");
                skipped += 1;
                continue;
            }
        };

        let field = |col: Column| {
            col_map
                .iter()
                .position(|c| *c == Some(col))
                .and_then(|idx| record.get(idx))
                .unwrap_or("")
        };

        let name = field(Column::Name);
        if name.is_empty() {
            skipped += 1;
            continue;
        }
        let (start, end) = match (field(Column::Start).parse::<TimeOfDay>(), field(Column::End).parse::<TimeOfDay>()) {
            (Ok(start), Ok(end)) if start < end => (start, end),
            (Err(e), _) | (_, Err(e)) => {
                warn!(row, error = %e, "skipping CSV row");
                skipped += 1;
                continue;
            }
            (Ok(start), Ok(end)) => {
                warn!(row, %start, %end, "skipping CSV row that ends before it starts");
                skipped += 1;
                continue;
            }
        };
        let role = Role::parse_loose(field(Column::Role)).unwrap_or_default();

        entries.push(ShiftEntry::new(name, start, end).with_role(role));
    }

    if entries.is_empty() {
        return Err(RosterError::EmptyImport { skipped });
    }
    Ok((entries, skipped))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_delimiters() {
        assert_eq!(detect_delimiter("a;b;c"), b';');
        assert_eq!(detect_delimiter("a,b,c"), b',');
        assert_eq!(detect_delimiter("a\tb\tc"), b'\t');
    }

    #[test]
    fn imports_aliased_headers_and_skips_bad_rows() {
        let csv = "Member,Start Time,End Time,Role\n\
                   Aki,09:00,17:00,Manager\n\
                   Bo,9h,17:00,\n\
                   ,10:00,11:00,\n\
                   Cy,18:00,12:00,\n\
                   Di,22:00,24:00,part-time\n";
        let (entries, skipped) = parse_csv(csv).unwrap();
        assert_eq!(skipped, 3);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Aki");
        assert_eq!(entries[0].role, Role::Manager);
        assert_eq!(entries[1].end, TimeOfDay::END_OF_DAY);
        assert_eq!(entries[1].role, Role::PartTime);
    }

    #[test]
    fn reads_its_own_export_format() {
        let csv = "Member;Role;Start;End;Minutes\nAoi;Manager;09:00;24:00;900\n";
        let (entries, skipped) = parse_csv(csv).unwrap();
        assert_eq!(skipped, 0);
        assert_eq!(entries[0].duration_minutes(), 900);
    }

    #[test]
    fn missing_columns_is_an_error() {
        let err = parse_csv("Name,Start\nA,09:00\n").unwrap_err();
        assert!(matches!(err, RosterError::MissingColumns { ref found } if found.len() == 2));
    }

    #[test]
    fn all_rows_bad_is_an_error() {
        let err = parse_csv("name,start,end\nA,xx,yy\n").unwrap_err();
        assert!(matches!(err, RosterError::EmptyImport { skipped: 1 }));
    }
}

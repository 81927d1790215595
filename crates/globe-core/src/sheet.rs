//! Parsing of the spreadsheet CSV exports that feed the destination card and
//! the chart panels.

use crate::constants::DEFAULT_DESTINATION;

const SHEETS_BASE: &str = "https://docs.google.com/spreadsheets/d";
const DESTINATION_LABEL: &str = "Destino";

/// CSV export URL of a whole sheet.
pub fn sheet_csv_url(spreadsheet_id: &str, sheet: &str) -> String {
    format!("{SHEETS_BASE}/{spreadsheet_id}/gviz/tq?tqx=out:csv&sheet={sheet}")
}

/// CSV export URL of the single cell `A2` of a sheet.
pub fn cell_a2_url(spreadsheet_id: &str, sheet: &str) -> String {
    format!("{}&range=A2", sheet_csv_url(spreadsheet_id, sheet))
}

/// Destination country name from the destination sheet: the second line,
/// unquoted, with an optional leading label, uppercased.
pub fn parse_destination(csv: &str) -> String {
    let Some(row) = csv.split('\n').nth(1) else {
        return DEFAULT_DESTINATION.to_string();
    };
    let raw = row.replace('"', "");
    let raw = raw.trim();
    let name = raw.strip_prefix(DESTINATION_LABEL).unwrap_or(raw);
    name.trim().to_uppercase()
}

/// Percentage in `[0, 100]` from a single-cell export. Anything unreadable
/// yields 0.
pub fn parse_percentage(csv: &str, sheet: &str) -> f64 {
    let mut lines = csv.split('\n');
    let first = lines.next().map(str::trim).unwrap_or("");
    let raw = match lines.next().map(str::trim) {
        Some(second) if !second.is_empty() => second,
        _ => first,
    };
    if raw.is_empty() {
        log::warn!("[charts] empty or unexpected data for sheet {}", sheet);
        return 0.0;
    }
    let cleaned = raw.replace('"', "").replacen(',', ".", 1);
    match leading_number(&cleaned) {
        Some(v) => v.clamp(0.0, 100.0),
        None => {
            log::warn!(
                "[charts] non-numeric value in sheet {}: \"{}\", using 0%",
                sheet,
                cleaned
            );
            0.0
        }
    }
}

/// Parses a leading `-?\d+(\.\d+)?` prefix.
fn leading_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = usize::from(bytes.first() == Some(&b'-'));
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if end == int_start {
        return None;
    }
    if bytes.get(end) == Some(&b'.') && bytes.get(end + 1).is_some_and(u8::is_ascii_digit) {
        end += 1;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
    }
    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_from_second_line() {
        assert_eq!(parse_destination("\"A\"\n\"Japan\"\n"), "JAPAN");
        assert_eq!(parse_destination("h\n\"Destino Spain \""), "SPAIN");
        assert_eq!(parse_destination("h\n  united states "), "UNITED STATES");
    }

    #[test]
    fn destination_defaults_without_data_row() {
        assert_eq!(parse_destination("only header"), "BRAZIL");
        assert_eq!(parse_destination(""), "BRAZIL");
    }

    #[test]
    fn percentage_variants() {
        assert_eq!(parse_percentage("\"h\"\n\"42,5%\"", "CUBA"), 42.5);
        assert_eq!(parse_percentage("\"73\"", "EVO"), 73.0);
        assert_eq!(parse_percentage("h\n150", "TESTES"), 100.0);
        assert_eq!(parse_percentage("h\n-3", "TESTES"), 0.0);
        assert_eq!(parse_percentage("h\nabc", "TESTES"), 0.0);
        assert_eq!(parse_percentage("", "TESTES"), 0.0);
        assert_eq!(parse_percentage("h\n12.", "TESTES"), 12.0);
    }

    #[test]
    fn urls_target_csv_export() {
        assert_eq!(
            cell_a2_url("abc", "EVO"),
            "https://docs.google.com/spreadsheets/d/abc/gviz/tq?tqx=out:csv&sheet=EVO&range=A2"
        );
    }
}

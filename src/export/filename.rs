//! Export filename convention
//!
//! Exported files embed a fixed prefix and the export date:
//! `usuarios_2024-06-15.csv`.

use chrono::{Local, NaiveDate};

/// Build an export filename for a given date
pub fn export_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", prefix, date.format("%Y-%m-%d"))
}

/// Build an export filename for today's date
pub fn export_filename_today(prefix: &str) -> String {
    export_filename(prefix, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        assert_eq!(export_filename("usuarios", date), "usuarios_2024-06-05.csv");
    }

    #[test]
    fn test_today_has_prefix_and_extension() {
        let name = export_filename_today("movimientos");
        assert!(name.starts_with("movimientos_"));
        assert!(name.ends_with(".csv"));
    }
}

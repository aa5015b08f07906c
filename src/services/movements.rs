//! Movement log service
//!
//! Snapshot view over a movement collection: search by activity or
//! receipt code, filter by kind, sort, summarize and export with the
//! three-line summary trailer.
//!
//! The summary always covers the FULL snapshot even when a filtered view
//! is displayed; the totals cards are global while the table is filtered.

use serde::{Deserialize, Serialize};

use crate::error::SisgefiResult;
use crate::export::{self, ColumnSpec, TrailerBlock};
use crate::models::{money, Money, Movement, MovementKind};
use crate::query::{self, FieldFilter, FieldSchema, FieldValue, FilterCriteria, QueryOutput, SortSpec};
use crate::reports::{self, ActivityReport};

use super::FILTER_ALL;

/// Export filename prefix for movement lists
pub const EXPORT_PREFIX: &str = "movimientos";

/// Income/expense totals and balance, in the backend's resumen shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementSummary {
    /// Total income
    #[serde(rename = "ingresos", with = "money::serde_units")]
    pub income: Money,
    /// Total expenses
    #[serde(rename = "egresos", with = "money::serde_units")]
    pub expense: Money,
    /// Income minus expenses
    #[serde(with = "money::serde_units")]
    pub balance: Money,
}

/// Snapshot-holding view over a movement collection
pub struct MovementLog {
    movements: Vec<Movement>,
    schema: FieldSchema<Movement>,
}

impl MovementLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self {
            movements: Vec::new(),
            schema: Self::schema(),
        }
    }

    /// Create a log from a fetched snapshot
    pub fn with_records(movements: Vec<Movement>) -> Self {
        Self {
            movements,
            schema: Self::schema(),
        }
    }

    /// Field schema for movement records
    ///
    /// "fecha" resolves to the ISO date so lexicographic order is
    /// chronological; "fecha_es" is the derived display form used in
    /// exports.
    pub fn schema() -> FieldSchema<Movement> {
        FieldSchema::new(|m: &Movement| FieldValue::Integer(m.id.value()))
            .field("id", |m| FieldValue::Integer(m.id.value()))
            .field("fecha", |m| FieldValue::Text(m.date.to_string()))
            .field("fecha_es", |m| {
                FieldValue::Text(m.date.format("%d/%m/%Y").to_string())
            })
            .field("tipo", |m| FieldValue::text(m.kind.as_str()))
            .searchable("actividad", |m| FieldValue::text(&m.activity))
            .searchable("codigo", |m| FieldValue::opt_text(m.code.as_deref()))
            .field("cantidad", |m| FieldValue::Money(m.amount))
            .field("usuario", |m| FieldValue::opt_text(m.user_name.as_deref()))
    }

    /// Export column layout for movement lists
    pub fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::new("Fecha", "fecha_es", 15),
            ColumnSpec::new("Tipo", "tipo", 12),
            ColumnSpec::new("Actividad", "actividad", 25),
            ColumnSpec::with_placeholder("Código", "codigo", 15, "-"),
            ColumnSpec::new("Cantidad", "cantidad", 12),
        ]
    }

    /// Build criteria from dropdown-style selections
    pub fn criteria(search: &str, kind: &str) -> FilterCriteria {
        FilterCriteria::new()
            .search(search)
            .filter("tipo", FieldFilter::from_selection(kind, FILTER_ALL, None))
    }

    /// Replace the snapshot wholesale after a refetch
    pub fn replace_all(&mut self, movements: Vec<Movement>) {
        self.movements = movements;
    }

    /// The current snapshot
    pub fn records(&self) -> &[Movement] {
        &self.movements
    }

    /// Filter and order the snapshot
    pub fn query(&self, criteria: &FilterCriteria, sort: &SortSpec) -> QueryOutput<Movement> {
        query::query(&self.movements, &self.schema, criteria, sort)
    }

    /// Income/expense totals over the full snapshot
    pub fn summary(&self) -> MovementSummary {
        let totals = reports::aggregate(
            &self.movements,
            &self.schema,
            "tipo",
            "cantidad",
            &[MovementKind::Income.as_str(), MovementKind::Expense.as_str()],
            MovementKind::Income.as_str(),
            MovementKind::Expense.as_str(),
        );

        MovementSummary {
            income: totals.total(MovementKind::Income.as_str()),
            expense: totals.total(MovementKind::Expense.as_str()),
            balance: totals.grand_balance,
        }
    }

    /// Activity drill-down statistics over the full snapshot
    pub fn activity_report(&self) -> ActivityReport {
        ActivityReport::generate(&self.movements)
    }

    /// Encode a movement list as spreadsheet bytes, appending the
    /// three-line summary trailer (totals over the full snapshot)
    pub fn export(&self, visible: &[Movement]) -> SisgefiResult<Vec<u8>> {
        let summary = self.summary();
        let trailer = TrailerBlock {
            // Labels land in the Actividad column, values in Cantidad
            label_column: 2,
            value_column: 4,
            rows: vec![
                ("INGRESOS TOTALES".to_string(), summary.income),
                ("EGRESOS".to_string(), summary.expense),
                ("BALANCE".to_string(), summary.balance),
            ],
        };

        export::encode(
            "movements",
            visible,
            &self.schema,
            &Self::columns(),
            Some(&trailer),
        )
    }
}

impl Default for MovementLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MovementId;
    use chrono::NaiveDate;

    fn movement(id: i64, kind: MovementKind, activity: &str, code: Option<&str>, units: i64) -> Movement {
        Movement {
            id: MovementId::new(id),
            date: NaiveDate::from_ymd_opt(2024, 6, id as u32).unwrap(),
            kind,
            activity: activity.to_string(),
            code: code.map(String::from),
            amount: Money::from_units(units),
            user_name: None,
            voucher: None,
        }
    }

    fn log() -> MovementLog {
        MovementLog::with_records(vec![
            movement(1, MovementKind::Income, "Pollada", Some("R-001"), 100),
            movement(2, MovementKind::Expense, "Insumos", None, 40),
            movement(3, MovementKind::Income, "Rifa", Some("R-002"), 10),
        ])
    }

    #[test]
    fn test_summary_totals() {
        let summary = log().summary();
        assert_eq!(summary.income, Money::from_units(110));
        assert_eq!(summary.expense, Money::from_units(40));
        assert_eq!(summary.balance, Money::from_units(70));
    }

    #[test]
    fn test_summary_ignores_filtered_view() {
        let log = log();
        let out = log.query(&MovementLog::criteria("", "Ingreso"), &SortSpec::default());
        assert_eq!(out.visible_count, 2);
        // Totals stay global regardless of the active filter
        assert_eq!(log.summary().balance, Money::from_units(70));
    }

    #[test]
    fn test_kind_filter() {
        let out = log().query(&MovementLog::criteria("", "Egreso"), &SortSpec::default());
        assert_eq!(out.visible_count, 1);
        assert_eq!(out.records[0].activity, "Insumos");
    }

    #[test]
    fn test_date_sort_is_chronological() {
        let out = log().query(&FilterCriteria::new(), &SortSpec::desc("fecha"));
        let ids: Vec<i64> = out.records.iter().map(|m| m.id.value()).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_export_with_trailer() {
        let log = log();
        let out = log.query(&FilterCriteria::new(), &SortSpec::asc("id"));
        let bytes = log.export(&out.records).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Fecha,Tipo,Actividad,Código,Cantidad");
        assert_eq!(lines[1], "01/06/2024,Ingreso,Pollada,R-001,100.00");
        // Null code gets the "-" placeholder
        assert_eq!(lines[2], "02/06/2024,Egreso,Insumos,-,40.00");
        // Blank separator then the summary block
        assert_eq!(lines[4], ",,,,");
        assert_eq!(lines[5], ",,INGRESOS TOTALES,,110.00");
        assert_eq!(lines[6], ",,EGRESOS,,40.00");
        assert_eq!(lines[7], ",,BALANCE,,70.00");
    }

    #[test]
    fn test_summary_wire_shape() {
        let json = serde_json::to_string(&log().summary()).unwrap();
        assert_eq!(json, r#"{"ingresos":110.0,"egresos":40.0,"balance":70.0}"#);
    }
}

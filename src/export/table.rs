//! Tabular export encoder
//!
//! Serializes a record collection into a spreadsheet-compatible CSV byte
//! stream: header row first, one row per record, field values resolved
//! through the same schema the comparator uses, and an optional summary
//! trailer block appended after a blank separator row. CSV carries no
//! styling, so the trailer rows rely on position alone.

use csv::WriterBuilder;

use crate::error::{SisgefiError, SisgefiResult};
use crate::models::Money;
use crate::query::FieldSchema;

/// One export column: header text, schema field, display width hint and
/// the placeholder written when the field resolves to null
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    /// Header row text
    pub header: &'static str,
    /// Schema field name resolved per record
    pub field: &'static str,
    /// Minimum column width in the terminal table renderer
    pub width: u16,
    /// Written instead of null/absent values; never a raw null
    pub placeholder: &'static str,
}

impl ColumnSpec {
    /// Column with an empty-string placeholder
    pub fn new(header: &'static str, field: &'static str, width: u16) -> Self {
        Self {
            header,
            field,
            width,
            placeholder: "",
        }
    }

    /// Column with an explicit null placeholder ("Sin comité", "-")
    pub fn with_placeholder(
        header: &'static str,
        field: &'static str,
        width: u16,
        placeholder: &'static str,
    ) -> Self {
        Self {
            header,
            field,
            width,
            placeholder,
        }
    }
}

/// Summary lines appended after the data rows
#[derive(Debug, Clone)]
pub struct TrailerBlock {
    /// Column index the labels land in
    pub label_column: usize,
    /// Column index the money values land in
    pub value_column: usize,
    /// Label/value pairs, one trailer row each
    pub rows: Vec<(String, Money)>,
}

/// Encode a record collection as CSV bytes
///
/// Column order is preserved and the header row comes first. An empty
/// collection is an error: the caller surfaces a "nothing to export"
/// message instead of producing an empty file.
pub fn encode<T>(
    entity: &'static str,
    records: &[T],
    schema: &FieldSchema<T>,
    columns: &[ColumnSpec],
    trailer: Option<&TrailerBlock>,
) -> SisgefiResult<Vec<u8>> {
    if records.is_empty() {
        return Err(SisgefiError::empty_export(entity));
    }

    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    writer
        .write_record(columns.iter().map(|c| c.header))
        .map_err(|e| SisgefiError::Export(e.to_string()))?;

    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|column| {
                let value = schema.resolve(column.field, record);
                if value.is_missing() {
                    column.placeholder.to_string()
                } else {
                    value.as_text()
                }
            })
            .collect();
        writer
            .write_record(&row)
            .map_err(|e| SisgefiError::Export(e.to_string()))?;
    }

    if let Some(trailer) = trailer {
        let blank = vec![String::new(); columns.len()];
        writer
            .write_record(&blank)
            .map_err(|e| SisgefiError::Export(e.to_string()))?;

        for (label, value) in &trailer.rows {
            let mut row = vec![String::new(); columns.len()];
            if let Some(cell) = row.get_mut(trailer.label_column) {
                *cell = label.clone();
            }
            if let Some(cell) = row.get_mut(trailer.value_column) {
                *cell = value.to_string();
            }
            writer
                .write_record(&row)
                .map_err(|e| SisgefiError::Export(e.to_string()))?;
        }
    }

    writer
        .into_inner()
        .map_err(|e| SisgefiError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::FieldValue;

    struct Row {
        id: i64,
        group: Option<&'static str>,
        amount: Money,
    }

    fn schema() -> FieldSchema<Row> {
        FieldSchema::new(|r: &Row| FieldValue::Integer(r.id))
            .field("id", |r| FieldValue::Integer(r.id))
            .field("group", |r| FieldValue::opt_text(r.group))
            .field("amount", |r| FieldValue::Money(r.amount))
    }

    fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::new("ID", "id", 10),
            ColumnSpec::with_placeholder("Comité", "group", 20, "Sin comité"),
            ColumnSpec::new("Cantidad", "amount", 12),
        ]
    }

    #[test]
    fn test_header_and_rows() {
        let rows = vec![
            Row { id: 1, group: Some("Pastoral"), amount: Money::from_units(100) },
            Row { id: 2, group: None, amount: Money::from_units(40) },
        ];

        let bytes = encode("rows", &rows, &schema(), &columns(), None).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "ID,Comité,Cantidad");
        assert_eq!(lines[1], "1,Pastoral,100.00");
        assert_eq!(lines[2], "2,Sin comité,40.00");
    }

    #[test]
    fn test_empty_export_guard() {
        let err = encode("rows", &[] as &[Row], &schema(), &columns(), None).unwrap_err();
        assert!(err.is_empty_export());
    }

    #[test]
    fn test_trailer_block_placement() {
        let rows = vec![Row { id: 1, group: None, amount: Money::from_units(100) }];
        let trailer = TrailerBlock {
            label_column: 1,
            value_column: 2,
            rows: vec![
                ("INGRESOS TOTALES".to_string(), Money::from_units(100)),
                ("BALANCE".to_string(), Money::from_units(100)),
            ],
        };

        let bytes = encode("rows", &rows, &schema(), &columns(), Some(&trailer)).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        // Data row, blank separator, then the trailer rows
        assert_eq!(lines[2], ",,");
        assert_eq!(lines[3], ",INGRESOS TOTALES,100.00");
        assert_eq!(lines[4], ",BALANCE,100.00");
    }

    #[test]
    fn test_unknown_field_uses_placeholder() {
        let rows = vec![Row { id: 1, group: None, amount: Money::zero() }];
        let cols = vec![ColumnSpec::with_placeholder("X", "missing-field", 5, "-")];
        let bytes = encode("rows", &rows, &schema(), &cols, None).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.lines().nth(1).unwrap(), "-");
    }
}

//! CSV import for expense files
//!
//! Expected columns: `date,category,amount` (header names are matched
//! case-insensitively, in any order; extra columns are ignored). Cells are
//! kept as raw text so the store's repair policy applies to them.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::store::TransactionStore;

/// One unparsed expense row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawExpense {
    pub date: String,
    pub category: String,
    pub amount: String,
}

impl RawExpense {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
        }
    }

    /// Parse a `DATE,CATEGORY,AMOUNT` triple (e.g. from the command line)
    pub fn parse_triple(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.splitn(3, ',').collect();
        match parts.as_slice() {
            [date, category, amount] => Ok(Self::new(*date, *category, *amount)),
            _ => Err(Error::InvalidData(format!(
                "Expected DATE,CATEGORY,AMOUNT, got {:?}",
                s
            ))),
        }
    }
}

/// Counts from loading rows into a store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportStats {
    pub added: usize,
    /// Rows that needed at least one repair
    pub repaired: usize,
}

fn column(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::Import(format!("Missing required column: {}", name)))
}

/// Parse expense rows from CSV data
pub fn parse_expenses_csv<R: Read>(reader: R) -> Result<Vec<RawExpense>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let date_col = column(&headers, "date")?;
    let category_col = column(&headers, "category")?;
    let amount_col = column(&headers, "amount")?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;

        // Skip blank lines
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        let cell = |i: usize| record.get(i).unwrap_or("").to_string();
        rows.push(RawExpense {
            date: cell(date_col),
            category: cell(category_col),
            amount: cell(amount_col),
        });
    }

    debug!(rows = rows.len(), "Parsed expense CSV");
    Ok(rows)
}

/// Append rows to the store in order
pub fn import_expenses(
    store: &TransactionStore,
    rows: impl IntoIterator<Item = RawExpense>,
) -> ImportStats {
    let mut stats = ImportStats::default();
    for row in rows {
        let outcome = store.add_expense(&row.date, &row.category, row.amount.as_str());
        stats.added += 1;
        if outcome.was_repaired() {
            stats.repaired += 1;
        }
    }

    info!(
        added = stats.added,
        repaired = stats.repaired,
        "Imported expenses"
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_basic_csv() {
        let data = "date,category,amount\n2026-10-01,Food,12.50\n2026-10-02,Rent,800\n";
        let rows = parse_expenses_csv(data.as_bytes()).unwrap();
        assert_eq!(
            rows,
            vec![
                RawExpense::new("2026-10-01", "Food", "12.50"),
                RawExpense::new("2026-10-02", "Rent", "800"),
            ]
        );
    }

    #[test]
    fn test_parse_reordered_headers_with_extra_columns() {
        let data = "Amount,Note,Category,Date\n5, coffee ,Food,2026-10-03\n";
        let rows = parse_expenses_csv(data.as_bytes()).unwrap();
        assert_eq!(rows, vec![RawExpense::new("2026-10-03", "Food", "5")]);
    }

    #[test]
    fn test_missing_amount_header() {
        let data = "date,category\n2026-10-01,Food\n";
        let err = parse_expenses_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("amount"));
    }

    #[test]
    fn test_short_rows_become_empty_cells() {
        let data = "date,category,amount\n2026-10-01,Food\n";
        let rows = parse_expenses_csv(data.as_bytes()).unwrap();
        assert_eq!(rows[0].amount, "");
    }

    #[test]
    fn test_parse_triple() {
        let row = RawExpense::parse_triple("2026-10-01,Food,9.99").unwrap();
        assert_eq!(row, RawExpense::new("2026-10-01", "Food", "9.99"));
        assert!(RawExpense::parse_triple("2026-10-01,Food").is_err());
    }

    #[test]
    fn test_import_counts_repairs() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        let store = TransactionStore::with_clock(Box::new(move || today));
        let rows = vec![
            RawExpense::new("2026-10-01", "Food", "10"),
            RawExpense::new("yesterday", "Food", "abc"),
            RawExpense::new("2026-10-02", "Rent", "500"),
        ];

        let stats = import_expenses(&store, rows);
        assert_eq!(
            stats,
            ImportStats {
                added: 3,
                repaired: 1
            }
        );

        let expenses = store.expenses();
        assert_eq!(expenses[1].date, today);
        assert_eq!(expenses[1].amount, 0.0);
    }
}

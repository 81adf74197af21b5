//! Monthly sales dataset for the dashboard.
//!
//! The dataset is a set of four positionally aligned sequences: month labels
//! plus sales, expenses and profit figures. Index `i` in every sequence refers
//! to the same month. Datasets borrow `'static` slices, so the sample data is
//! a compile-time constant that lives for the whole process and is never
//! mutated.
//!
//! # Usage
//!
//! ```rust
//! use dash_data::SAMPLE;
//!
//! let row = SAMPLE.row(2).unwrap();
//! assert_eq!(row.month, "Mar");
//! assert_eq!(row.sales, 80.0);
//! assert_eq!(SAMPLE.rows().count(), 6);
//! ```

use serde::Serialize;

/// Column headers for the data table, in display order.
pub const TABLE_HEADERS: [&str; 4] = ["Month", "Sales ($)", "Expenses ($)", "Profit ($)"];

/// The built-in sample dataset: January through June.
pub const SAMPLE: Dataset = Dataset::new(
    &["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
    &[65.0, 59.0, 80.0, 81.0, 56.0, 55.0],
    &[45.0, 50.0, 55.0, 50.0, 45.0, 40.0],
    &[20.0, 9.0, 25.0, 31.0, 11.0, 15.0],
);

/// Month labels with three aligned numeric series.
///
/// All four slices have the same length. The figures are taken as given:
/// profit is not checked against sales minus expenses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dataset {
    months: &'static [&'static str],
    sales: &'static [f64],
    expenses: &'static [f64],
    profits: &'static [f64],
}

impl Dataset {
    /// Build a dataset from aligned slices.
    ///
    /// Panics if the slices differ in length. In a `const` item this is a
    /// compile error.
    pub const fn new(
        months: &'static [&'static str],
        sales: &'static [f64],
        expenses: &'static [f64],
        profits: &'static [f64],
    ) -> Self {
        assert!(
            months.len() == sales.len()
                && months.len() == expenses.len()
                && months.len() == profits.len(),
            "dataset series must have equal length"
        );
        Self {
            months,
            sales,
            expenses,
            profits,
        }
    }

    pub fn months(&self) -> &'static [&'static str] {
        self.months
    }

    pub fn sales(&self) -> &'static [f64] {
        self.sales
    }

    pub fn expenses(&self) -> &'static [f64] {
        self.expenses
    }

    pub fn profits(&self) -> &'static [f64] {
        self.profits
    }

    /// Number of months in the dataset.
    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// The aligned row at index `i`, or `None` past the end.
    pub fn row(&self, i: usize) -> Option<TableRow> {
        Some(TableRow {
            month: *self.months.get(i)?,
            sales: *self.sales.get(i)?,
            expenses: *self.expenses.get(i)?,
            profit: *self.profits.get(i)?,
        })
    }

    /// Every row in dataset order. No sorting, filtering or totals.
    pub fn rows(&self) -> impl Iterator<Item = TableRow> + '_ {
        (0..self.len()).filter_map(move |i| self.row(i))
    }
}

/// One data table row: (month, sales, expenses, profit).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableRow {
    pub month: &'static str,
    pub sales: f64,
    pub expenses: f64,
    pub profit: f64,
}

impl TableRow {
    /// Cell text in [`TABLE_HEADERS`] order.
    pub fn cells(&self) -> [String; 4] {
        [
            self.month.to_string(),
            self.sales.to_string(),
            self.expenses.to_string(),
            self.profit.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_matches_aligned_series() {
        for i in 0..SAMPLE.len() {
            let row = SAMPLE.row(i).unwrap();
            assert_eq!(row.month, SAMPLE.months()[i]);
            assert_eq!(row.sales, SAMPLE.sales()[i]);
            assert_eq!(row.expenses, SAMPLE.expenses()[i]);
            assert_eq!(row.profit, SAMPLE.profits()[i]);
        }
    }

    #[test]
    fn test_march_row() {
        let row = SAMPLE.row(2).unwrap();
        assert_eq!(
            (row.month, row.sales, row.expenses, row.profit),
            ("Mar", 80.0, 55.0, 25.0)
        );
        assert_eq!(row.cells(), ["Mar", "80", "55", "25"]);
    }

    #[test]
    fn test_row_past_end() {
        assert_eq!(SAMPLE.len(), 6);
        assert!(SAMPLE.row(6).is_none());
    }

    #[test]
    fn test_rows_keep_dataset_order() {
        let months: Vec<&str> = SAMPLE.rows().map(|r| r.month).collect();
        assert_eq!(months, ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
    }

    #[test]
    fn test_empty_dataset() {
        let empty = Dataset::new(&[], &[], &[], &[]);
        assert!(empty.is_empty());
        assert_eq!(empty.rows().count(), 0);
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn test_mismatched_lengths_panic() {
        let _ = Dataset::new(&["Jan", "Feb"], &[1.0], &[1.0, 2.0], &[1.0, 2.0]);
    }

    #[test]
    fn test_serializes_series_by_name() {
        let json = serde_json::to_value(SAMPLE).unwrap();
        assert_eq!(json["months"][0], "Jan");
        assert_eq!(json["profits"][1], 9.0);
    }
}

//! Plain-markup table of the monthly dataset.

use dash_data::{Dataset, TABLE_HEADERS};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps {
    pub dataset: Dataset,
}

/// One row per month in dataset order: month, sales, expenses, profit.
///
/// No chart backend is involved, so there is nothing to release when the
/// table is hidden.
#[component]
pub fn DataTable(props: DataTableProps) -> Element {
    let cell = "padding: 8px 12px; border-bottom: 1px solid #e0e0e0; text-align: left;";

    rsx! {
        table {
            style: "width: 100%; border-collapse: collapse; font-size: 14px;",
            thead {
                tr {
                    for header in TABLE_HEADERS {
                        th {
                            style: "{cell} background: #f5f5f5;",
                            "{header}"
                        }
                    }
                }
            }
            tbody {
                for (i, row) in props.dataset.rows().enumerate() {
                    tr {
                        key: "{i}",
                        for value in row.cells() {
                            td { style: "{cell}", "{value}" }
                        }
                    }
                }
            }
        }
    }
}

//! The dashboard's selectable panels.

use serde::Serialize;
use std::fmt;

/// One of the four selectable dashboard views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    #[default]
    Table,
    Bar,
    Line,
    Pie,
}

impl Panel {
    /// All panels in tab order.
    pub const ALL: [Panel; 4] = [Panel::Table, Panel::Bar, Panel::Line, Panel::Pie];

    /// Stable lowercase identifier, also used for DOM ids.
    pub fn id(self) -> &'static str {
        match self {
            Panel::Table => "table",
            Panel::Bar => "bar",
            Panel::Line => "line",
            Panel::Pie => "pie",
        }
    }

    /// Short tab label.
    pub fn label(self) -> &'static str {
        match self {
            Panel::Table => "Table",
            Panel::Bar => "Bar Chart",
            Panel::Line => "Line Chart",
            Panel::Pie => "Pie Chart",
        }
    }

    /// Section heading shown above the panel.
    pub fn title(self) -> &'static str {
        match self {
            Panel::Table => "Data Table",
            Panel::Bar => "Monthly Sales & Expenses",
            Panel::Line => "Monthly Profit Trend",
            Panel::Pie => "Revenue Distribution",
        }
    }

    /// Whether this panel draws through the plotting backend.
    /// The table is plain markup and holds no chart handle.
    pub fn is_chart(self) -> bool {
        !matches!(self, Panel::Table)
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::Panel;

    #[test]
    fn test_default_is_table() {
        assert_eq!(Panel::default(), Panel::Table);
    }

    #[test]
    fn test_only_table_is_not_a_chart() {
        let charts: Vec<Panel> = Panel::ALL.into_iter().filter(|p| p.is_chart()).collect();
        assert_eq!(charts, [Panel::Bar, Panel::Line, Panel::Pie]);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<&str> = Panel::ALL.iter().map(|p| p.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Panel::ALL.len());
    }

    #[test]
    fn test_display_uses_id() {
        assert_eq!(Panel::Pie.to_string(), "pie");
    }
}

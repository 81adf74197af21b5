//! Visual constants shared by every chart.

/// DOM id of the shared region all chart panels draw into.
pub const CHART_REGION: &str = "dashboard-chart";

/// Chart height in pixels.
pub const CHART_HEIGHT: u32 = 400;

pub const SALES_COLOR: &str = "#4285F4";
pub const EXPENSES_COLOR: &str = "#EA4335";
pub const PROFIT_COLOR: &str = "#34A853";

/// Slice colors for the revenue pie, in slice order.
pub const PIE_COLORS: [&str; 4] = ["#4285F4", "#34A853", "#FBBC05", "#EA4335"];

/// Width of the profit line in pixels.
pub const PROFIT_LINE_WIDTH: u32 = 3;

/// Plot margins: left, right, bottom, top, padding.
pub const MARGIN: (u32, u32, u32, u32, u32) = (50, 50, 50, 30, 4);

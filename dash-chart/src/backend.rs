//! The plotting capability consumed by the renderer.

use crate::figure::Figure;

/// A chart instance drawn into a display region.
///
/// Handles are created by a [`PlotBackend`] and are neither `Clone` nor
/// `Copy`: releasing one consumes it.
#[derive(Debug, PartialEq, Eq)]
pub struct ChartHandle {
    id: u64,
    region: String,
}

impl ChartHandle {
    /// Called by backends when a draw succeeds.
    pub fn new(id: u64, region: impl Into<String>) -> Self {
        Self {
            id,
            region: region.into(),
        }
    }

    /// Backend-assigned identity, unique per draw.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The region the chart was drawn into.
    pub fn region(&self) -> &str {
        &self.region
    }
}

/// Something that can draw a [`Figure`] into a named region and later free it.
///
/// Errors are the backend's own and are passed through untouched.
pub trait PlotBackend {
    /// Draw `figure` into `region`, returning the handle for the new chart.
    fn draw(&mut self, region: &str, figure: &Figure) -> anyhow::Result<ChartHandle>;

    /// Free everything the backend holds for `handle`.
    fn release(&mut self, handle: ChartHandle) -> anyhow::Result<()>;
}

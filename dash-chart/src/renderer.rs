//! Per-region panel reconciliation.
//!
//! A [`PanelRenderer`] owns one display region and at most one chart handle
//! for it. Switching panels releases the old handle before anything new is
//! drawn, so a region never holds two stacked charts.

use crate::backend::{ChartHandle, PlotBackend};
use crate::figures;
use crate::panel::Panel;
use anyhow::Context;
use dash_data::Dataset;

pub struct PanelRenderer<B: PlotBackend> {
    backend: B,
    region: String,
    current: Option<Panel>,
    mounted: Option<ChartHandle>,
}

impl<B: PlotBackend> PanelRenderer<B> {
    /// A renderer for `region` with nothing mounted.
    pub fn new(backend: B, region: impl Into<String>) -> Self {
        Self {
            backend,
            region: region.into(),
            current: None,
            mounted: None,
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// The panel last rendered successfully, if any.
    pub fn current(&self) -> Option<Panel> {
        self.current
    }

    /// The chart handle currently mounted in the region.
    pub fn handle(&self) -> Option<&ChartHandle> {
        self.mounted.as_ref()
    }

    /// Reconcile the region to show `panel`.
    ///
    /// Rendering the panel that is already shown does nothing. Otherwise the
    /// mounted chart (if any) is released first, then the new chart is drawn.
    /// The table panel draws nothing and leaves the region empty.
    ///
    /// On error the region is left empty and the next call starts fresh.
    pub fn render(&mut self, panel: Panel, dataset: &Dataset) -> anyhow::Result<()> {
        if self.current == Some(panel) {
            log::debug!("region '{}' already shows {}", self.region, panel);
            return Ok(());
        }

        self.unmount()?;

        if let Some(figure) = figures::build(panel, dataset) {
            let handle = self
                .backend
                .draw(&self.region, &figure)
                .with_context(|| format!("drawing {} chart into '{}'", panel, self.region))?;
            log::debug!(
                "drew {} chart #{} into '{}'",
                panel,
                handle.id(),
                self.region
            );
            self.mounted = Some(handle);
        }

        self.current = Some(panel);
        Ok(())
    }

    /// Release any mounted chart and forget the current panel.
    pub fn teardown(&mut self) -> anyhow::Result<()> {
        self.unmount()
    }

    fn unmount(&mut self) -> anyhow::Result<()> {
        self.current = None;
        let Some(handle) = self.mounted.take() else {
            return Ok(());
        };
        let id = handle.id();
        self.backend
            .release(handle)
            .with_context(|| format!("releasing chart #{} in '{}'", id, self.region))?;
        log::debug!("released chart #{} from '{}'", id, self.region);
        Ok(())
    }
}

impl<B: PlotBackend> Drop for PanelRenderer<B> {
    fn drop(&mut self) {
        if let Err(e) = self.unmount() {
            log::warn!("chart release on drop failed: {:#}", e);
        }
    }
}

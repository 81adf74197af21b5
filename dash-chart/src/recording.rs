//! In-memory `PlotBackend` that records every call, for tests.

use crate::backend::{ChartHandle, PlotBackend};
use crate::figure::Figure;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Draw { id: u64, region: String, kinds: Vec<&'static str> },
    Release { id: u64, region: String },
}

#[derive(Debug, Default)]
pub struct Recording {
    pub calls: Vec<Call>,
    /// (handle id, region) for every chart drawn and not yet released.
    pub live: Vec<(u64, String)>,
    pub fail_draw: bool,
    pub fail_release: bool,
    next_id: u64,
}

impl Recording {
    pub fn live_in(&self, region: &str) -> usize {
        self.live.iter().filter(|(_, r)| r == region).count()
    }

    pub fn draws(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Draw { .. }))
            .count()
    }
}

/// Cloning shares the recording, so a test can keep one copy to inspect after
/// the renderer has taken (or dropped) the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    pub log: Rc<RefCell<Recording>>,
}

impl PlotBackend for RecordingBackend {
    fn draw(&mut self, region: &str, figure: &Figure) -> anyhow::Result<ChartHandle> {
        let mut log = self.log.borrow_mut();
        if log.fail_draw {
            anyhow::bail!("plot library unavailable");
        }
        log.next_id += 1;
        let id = log.next_id;
        log.calls.push(Call::Draw {
            id,
            region: region.to_string(),
            kinds: figure.data.iter().map(|t| t.kind()).collect(),
        });
        log.live.push((id, region.to_string()));
        Ok(ChartHandle::new(id, region))
    }

    fn release(&mut self, handle: ChartHandle) -> anyhow::Result<()> {
        let mut log = self.log.borrow_mut();
        log.live.retain(|(id, _)| *id != handle.id());
        log.calls.push(Call::Release {
            id: handle.id(),
            region: handle.region().to_string(),
        });
        if log.fail_release {
            anyhow::bail!("purge failed");
        }
        Ok(())
    }
}

//! Per-tick sampling and rendering.

use tracing::debug;

use crate::collector::{MetricSample, Platform, SampleTiming};
use crate::host::HostSnapshot;
use crate::panels::PanelSet;
use crate::theme::Theme;

/// Turns platform queries into panel texts.
///
/// Owns the platform; every call to [`Sampler::tick`] queries it afresh, so
/// nothing but the host snapshot and the theme carries over between ticks.
pub struct Sampler<P: Platform> {
    platform: P,
    ticks: u64,
    last_timing: Option<SampleTiming>,
}

impl<P: Platform> Sampler<P> {
    /// Creates a new sampler.
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            ticks: 0,
            last_timing: None,
        }
    }

    /// Collects the static host facts. Called once before the first tick.
    pub fn host_snapshot(&mut self) -> HostSnapshot {
        HostSnapshot::collect(&mut self.platform)
    }

    /// Queries the live metrics.
    pub fn collect(&mut self) -> MetricSample {
        let sample = MetricSample::collect(&mut self.platform);
        self.ticks += 1;
        self.last_timing = Some(sample.timing);
        debug!(
            "Sample {} collected in {:?} (cpu {:?}, disks {:?})",
            self.ticks, sample.timing.total, sample.timing.cpu, sample.timing.disks
        );
        sample
    }

    /// Collects one sample and renders it with `theme`.
    pub fn tick(&mut self, host: &HostSnapshot, theme: &'static Theme) -> PanelSet {
        let sample = self.collect();
        PanelSet::render(&sample, host, theme)
    }

    /// Number of samples taken.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Timing of the most recent sample.
    pub fn last_timing(&self) -> Option<&SampleTiming> {
        self.last_timing.as_ref()
    }
}

//! Background sampling thread.
//!
//! Samples once immediately, then on a fixed cadence. Finished panels are
//! handed to a sink, which in the application forwards them to the UI event
//! queue. The thread never touches the terminal.

use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::collector::Platform;
use crate::host::HostSnapshot;
use crate::panels::PanelSet;
use crate::sampler::Sampler;
use crate::theme::ActiveTheme;

/// Default sampling period.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// Shortest accepted period.
const MIN_PERIOD: Duration = Duration::from_millis(10);

/// Handle to the sampling thread.
///
/// Dropping it stops the thread and waits for it to finish.
pub struct Scheduler {
    control: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Scheduler {
    /// Starts sampling.
    ///
    /// Each tick reads the active theme once, so a tick is rendered with a
    /// single theme. The thread ends when `sink` returns `false` or the
    /// scheduler is dropped.
    pub fn spawn<P, F>(
        sampler: Sampler<P>,
        host: Arc<HostSnapshot>,
        theme: Arc<ActiveTheme>,
        period: Duration,
        sink: F,
    ) -> io::Result<Self>
    where
        P: Platform + 'static,
        F: FnMut(PanelSet) -> bool + Send + 'static,
    {
        let period = period.max(MIN_PERIOD);
        let (control, requests) = mpsc::channel();

        let handle = thread::Builder::new()
            .name("sysdash-sampler".to_string())
            .spawn(move || run(sampler, &host, &theme, period, requests, sink))?;

        info!("Sampler started, period {:?}", period);
        Ok(Self {
            control: Some(control),
            handle: Some(handle),
        })
    }

    /// Requests a sample ahead of schedule. The cadence is unchanged.
    pub fn refresh_now(&self) {
        if let Some(control) = &self.control {
            // Fails only once the thread has already stopped.
            let _ = control.send(());
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.control.take();
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            debug!("Sampler thread panicked");
        }
    }
}

fn run<P, F>(
    mut sampler: Sampler<P>,
    host: &HostSnapshot,
    theme: &ActiveTheme,
    period: Duration,
    requests: mpsc::Receiver<()>,
    mut sink: F,
) where
    P: Platform,
    F: FnMut(PanelSet) -> bool,
{
    let mut deadline = Instant::now();
    loop {
        let panels = sampler.tick(host, theme.current());
        if !sink(panels) {
            debug!("Panel sink closed");
            break;
        }

        // Skip boundaries missed while sampling instead of bunching ticks.
        let now = Instant::now();
        while deadline <= now {
            deadline += period;
        }

        match requests.recv_timeout(deadline.saturating_duration_since(now)) {
            Ok(()) => while requests.try_recv().is_ok() {},
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    info!("Sampler stopped after {} ticks", sampler.ticks());
}

//! Event handling for TUI.
//!
//! Terminal input is polled on a separate thread. The sampler thread feeds
//! finished panels into the same queue, so the UI thread is the only one
//! that ever draws.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

use crate::panels::PanelSet;

/// Application events.
#[derive(Debug)]
pub enum Event {
    /// Keyboard input.
    Key(KeyEvent),
    /// Terminal resize (width, height).
    Resize(u16, u16),
    /// Panels of one sampler tick.
    Refresh(Box<PanelSet>),
}

/// Event queue with an input polling thread.
pub struct EventHandler {
    rx: Receiver<Event>,
    tx: Sender<Event>,
    stop: Arc<AtomicBool>,
    input: Option<JoinHandle<()>>,
}

impl EventHandler {
    /// Starts polling terminal input every `poll_rate`.
    pub fn new(poll_rate: Duration) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));

        let event_tx = tx.clone();
        let stop_flag = Arc::clone(&stop);
        let input = thread::Builder::new()
            .name("sysdash-input".to_string())
            .spawn(move || {
                while !stop_flag.load(Ordering::Relaxed) {
                    // Poll with timeout so the stop flag is noticed
                    if !event::poll(poll_rate).unwrap_or(false) {
                        continue;
                    }
                    let event = match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            Event::Key(key)
                        }
                        Ok(CrosstermEvent::Resize(w, h)) => Event::Resize(w, h),
                        _ => continue,
                    };
                    if event_tx.send(event).is_err() {
                        break;
                    }
                }
            })?;

        Ok(Self {
            rx,
            tx,
            stop,
            input: Some(input),
        })
    }

    /// Sender for producers outside the input thread.
    pub fn sender(&self) -> Sender<Event> {
        self.tx.clone()
    }

    /// Receives the next event, blocking until one is available.
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(input) = self.input.take() {
            let _ = input.join();
        }
    }
}

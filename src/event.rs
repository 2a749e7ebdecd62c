use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

pub enum DrillEvent {
    Key(KeyEvent),
    /// Periodic wake-up for redrawing the elapsed time. Carries no state.
    Tick,
}

/// Terminal input pump. A background thread polls crossterm and forwards
/// key presses, sending a tick whenever a poll interval passes quietly.
/// Dropping the handler stops the thread.
pub struct EventHandler {
    rx: mpsc::Receiver<DrillEvent>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        thread::spawn(move || {
            while !thread_stop.load(Ordering::Relaxed) {
                let sent = if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                            tx.send(DrillEvent::Key(key))
                        }
                        _ => Ok(()),
                    }
                } else {
                    tx.send(DrillEvent::Tick)
                };
                if sent.is_err() {
                    return;
                }
            }
        });

        Self { rx, stop }
    }

    pub fn next(&self) -> anyhow::Result<DrillEvent> {
        Ok(self.rx.recv()?)
    }

    pub fn cancel(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.cancel();
    }
}

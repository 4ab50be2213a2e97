use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::controller::GenerationOutcome;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// A generation task finished on the runtime.
    Generation(GenerationOutcome),
}

/// Single queue for terminal input, ticks and background results.
///
/// Terminal input is read on a dedicated thread that stops once the queue's
/// receiver is dropped.
pub struct EventHandler {
    queue: Receiver<AppEvent>,
    producer: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (producer, queue) = channel();
        let input_tx = producer.clone();

        let spawned = thread::Builder::new()
            .name("terminal-input".to_string())
            .spawn(move || read_terminal(input_tx, tick_rate));
        if let Err(err) = spawned {
            tracing::error!(error = %err, "Failed to start terminal input thread");
        }

        Self { queue, producer }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.queue.recv_timeout(timeout)
    }

    /// Handle for background tasks that report back to the UI loop.
    pub fn sender(&self) -> Sender<AppEvent> {
        self.producer.clone()
    }
}

fn read_terminal(tx: Sender<AppEvent>, tick_rate: Duration) {
    let mut next_tick = Instant::now() + tick_rate;
    loop {
        let wait = next_tick.saturating_duration_since(Instant::now());
        match event::poll(wait) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if let Some(app_event) = translate(ev) {
                        if tx.send(app_event).is_err() {
                            return;
                        }
                    }
                }
                Err(err) => {
                    tracing::error!(error = %err, "Terminal read failed");
                    return;
                }
            },
            Ok(false) => {}
            Err(err) => {
                tracing::error!(error = %err, "Terminal poll failed");
                return;
            }
        }

        if Instant::now() >= next_tick {
            if tx.send(AppEvent::Tick).is_err() {
                return;
            }
            next_tick = Instant::now() + tick_rate;
        }
    }
}

fn translate(ev: Event) -> Option<AppEvent> {
    match ev {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
        Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
        _ => None,
    }
}

use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, MouseEventKind};

pub enum AppEvent {
    Key(KeyEvent),
    /// Pointer moved to (column, row).
    Mouse(u16, u16),
    /// Wheel movement; positive scrolls back towards older output.
    Scroll(i8),
    Tick,
    Resize(u16, u16),
}

/// Fixed-rate tick schedule that input events cannot starve.
pub struct TickClock {
    rate: Duration,
    last: Instant,
}

impl TickClock {
    pub fn new(rate: Duration, now: Instant) -> Self {
        Self { rate, last: now }
    }

    /// How long to wait for input before the next tick is due.
    pub fn timeout(&self, now: Instant) -> Duration {
        self.rate.saturating_sub(now.saturating_duration_since(self.last))
    }

    /// True once per elapsed period.
    pub fn take_tick(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) >= self.rate {
            self.last = now;
            true
        } else {
            false
        }
    }
}

fn translate(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) => Some(AppEvent::Key(key)),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                Some(AppEvent::Mouse(mouse.column, mouse.row))
            }
            MouseEventKind::ScrollUp => Some(AppEvent::Scroll(1)),
            MouseEventKind::ScrollDown => Some(AppEvent::Scroll(-1)),
            _ => None,
        },
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        _ => None,
    }
}

pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    _tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let _tx = tx.clone();

        thread::spawn(move || {
            let mut clock = TickClock::new(tick_rate, Instant::now());
            loop {
                if event::poll(clock.timeout(Instant::now())).unwrap_or(false) {
                    if let Some(ev) = event::read().ok().and_then(translate) {
                        if tx.send(ev).is_err() {
                            return;
                        }
                    }
                }
                if clock.take_tick(Instant::now()) && tx.send(AppEvent::Tick).is_err() {
                    return;
                }
            }
        });

        Self { rx, _tx }
    }

    pub fn next(&self) -> anyhow::Result<AppEvent> {
        Ok(self.rx.recv()?)
    }
}

// Repeating game tick, re-armed (never rescheduled in place) when the period changes
use gloo::timers::callback::Interval;

use crate::util::clog;

/// A running repeating timer. Dropping the handle cancels it.
pub trait RepeatingTimer: Sized {
    fn start(period_ms: u32, callback: Box<dyn FnMut()>) -> Self;
}

impl RepeatingTimer for Interval {
    fn start(period_ms: u32, callback: Box<dyn FnMut()>) -> Self {
        Interval::new(period_ms, callback)
    }
}

pub struct Ticker<T: RepeatingTimer = Interval> {
    active: Option<(u32, T)>,
}

impl<T: RepeatingTimer> Default for Ticker<T> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<T: RepeatingTimer> Ticker<T> {
    /// Starts ticking every `period_ms`. A timer already running at that
    /// period is kept; any other is dropped before the new one exists, so no
    /// tick from the old period can fire after this returns.
    pub fn arm(&mut self, period_ms: u32, callback: impl FnMut() + 'static) {
        if self.period_ms() == Some(period_ms) {
            return;
        }
        self.cancel();
        clog(&format!("tick armed every {}ms", period_ms));
        let timer = T::start(period_ms, Box::new(callback));
        self.active = Some((period_ms, timer));
    }

    pub fn cancel(&mut self) {
        if let Some((period_ms, timer)) = self.active.take() {
            drop(timer);
            clog(&format!("tick {}ms cancelled", period_ms));
        }
    }

    pub fn period_ms(&self) -> Option<u32> {
        self.active.as_ref().map(|(p, _)| *p)
    }
}

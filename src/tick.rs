//! Movement timer that runs only while a game is active.

use std::future::pending;
use std::time::Duration;

use log::debug;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

pub struct TickController {
    period: Duration,
    timer: Option<Interval>,
}

impl TickController {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            timer: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Arm the timer; the first tick fires one full period from now
    pub fn start(&mut self) {
        let mut timer = interval_at(Instant::now() + self.period, self.period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.timer = Some(timer);
        debug!("tick timer started ({:?})", self.period);
    }

    pub fn stop(&mut self) {
        if self.timer.take().is_some() {
            debug!("tick timer stopped");
        }
    }

    /// Start or stop to match `active`; a no-op when already in that state
    pub fn sync(&mut self, active: bool) {
        match (active, self.is_running()) {
            (true, false) => self.start(),
            (false, true) => self.stop(),
            _ => {}
        }
    }

    /// Wait for the next tick. Never resolves while stopped.
    pub async fn tick(&mut self) {
        match self.timer.as_mut() {
            Some(timer) => {
                timer.tick().await;
            }
            None => pending::<()>().await,
        }
    }
}

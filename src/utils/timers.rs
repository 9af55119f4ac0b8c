use gloo_timers::callback::Timeout;
use std::time::Duration;

use crate::services::{ScheduledTask, Scheduler};

/// `setTimeout` scheduler; dropping the handle clears the timeout
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task)
    }
}

impl ScheduledTask for Timeout {
    fn cancel(self) {
        // Inherent cancel returns the callback, dropping it is enough
        let _ = Timeout::cancel(self);
    }
}

use std::time::Duration;

use gpui::Context;

/// Tracks whether an auto-dismissing surface has outlived its duration.
///
/// Every call to [`DismissTimer::start`] or [`DismissTimer::cancel`] bumps an
/// epoch, so timers that were scheduled earlier expire silently.
pub struct DismissTimer {
    expired: bool,
    running: bool,
    epoch: usize,
}

impl Default for DismissTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl DismissTimer {
    /// Creates an idle timer.
    pub fn new() -> Self {
        Self {
            expired: false,
            running: false,
            epoch: 0,
        }
    }

    /// Returns true once a started timer ran to completion.
    pub fn expired(&self) -> bool {
        self.expired
    }

    /// Returns true while a timer is pending.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Starts (or restarts) the countdown.
    pub fn start(&mut self, duration: Duration, cx: &mut Context<Self>) {
        self.expired = false;
        self.running = true;
        self.epoch = self.epoch.wrapping_add(1);
        self.schedule(self.epoch, duration, cx);
    }

    /// Cancels any pending countdown and clears the expired flag.
    pub fn cancel(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.expired = false;
        self.running = false;
    }

    fn schedule(&mut self, epoch: usize, duration: Duration, cx: &mut Context<Self>) {
        cx.spawn(async move |this, cx| {
            cx.background_executor().timer(duration).await;
            if let Some(this) = this.upgrade() {
                this.update(cx, |timer, cx| {
                    timer.expire(epoch, cx);
                });
            }
        })
        .detach();
    }

    fn expire(&mut self, epoch: usize, cx: &mut Context<Self>) {
        if epoch != self.epoch {
            return;
        }
        self.expired = true;
        self.running = false;
        log::debug!("dismiss timer expired");
        cx.notify();
    }
}

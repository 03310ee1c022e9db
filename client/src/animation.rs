//! The loading-message dot animation.
//!
//! One running animation per in-flight submission. The tick loop writes the
//! waiting message with a cycling trail of dots into the loading-message
//! cell every half second until its token is cancelled.

use std::time::Duration;

use tokio::{select, task::JoinHandle, time};
use tokio_util::sync::CancellationToken;

use crate::ui::Cell;

pub const PROCESSING_MESSAGE: &str = "Please wait, your video is being processed";
const MAX_DOTS: usize = 3;
pub(crate) const TICK: Duration = Duration::from_millis(500);

/// A running animation, owned by exactly one submission. Stopping it (or
/// dropping it, should the submission future be abandoned) cancels the tick
/// loop.
#[derive(Debug)]
pub struct DotAnimation {
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl DotAnimation {
    pub fn start(message: Cell<String>) -> Self {
        let token = CancellationToken::new();
        let task = tokio::spawn(tick_loop(message, token.clone()));
        Self {
            token,
            task: Some(task),
        }
    }

    /// Cancels the tick loop and waits for it to wind down, so no message
    /// update can land after this returns.
    pub async fn stop(mut self) {
        self.token.cancel();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for DotAnimation {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

async fn tick_loop(message: Cell<String>, token: CancellationToken) {
    let mut timer = time::interval(TICK);
    timer.set_missed_tick_behavior(time::MissedTickBehavior::Skip);
    let mut dots = 0;
    loop {
        select! {
            _ = timer.tick() => {
                message.set(format!("{PROCESSING_MESSAGE}{}", ".".repeat(dots)));
                dots = (dots + 1) % (MAX_DOTS + 1);
            }
            _ = token.cancelled() => return,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DotAnimation, PROCESSING_MESSAGE, TICK};
    use crate::ui::Cell;

    #[tokio::test(start_paused = true)]
    async fn dots_cycle_and_wrap() {
        let cell = Cell::new(String::new());
        let mut rx = cell.subscribe();
        let animation = DotAnimation::start(cell.clone());
        for dots in ["", ".", "..", "...", ""] {
            rx.changed().await.unwrap();
            assert_eq!(*rx.borrow_and_update(), format!("{PROCESSING_MESSAGE}{dots}"));
        }
        animation.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn no_update_lands_after_stop() {
        let cell = Cell::new(String::new());
        let mut rx = cell.subscribe();
        let animation = DotAnimation::start(cell.clone());
        rx.changed().await.unwrap();
        rx.borrow_and_update();
        animation.stop().await;
        rx.borrow_and_update();
        let before = cell.get();
        tokio::time::advance(TICK * 4).await;
        tokio::task::yield_now().await;
        assert_eq!(cell.get(), before);
        assert!(!rx.has_changed().unwrap());
    }
}

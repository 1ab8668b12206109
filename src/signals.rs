use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A timer-derived cancellation source.
///
/// Arming the timer spawns a task that sleeps for the configured duration and
/// then cancels the target token. The timer must be disarmed once the guarded
/// call settles; dropping the guard disarms it too, so a pending sleep never
/// outlives the call it was armed for.
#[derive(Debug)]
pub struct TimeoutTimer {
    after: Duration,
    fired: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl TimeoutTimer {
    /// Arms a timer that cancels `target` after `after` elapses.
    #[must_use]
    pub fn arm(after: Duration, target: &CancellationToken) -> Self {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);
        let target = target.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            flag.store(true, Ordering::SeqCst);
            target.cancel();
        });
        Self {
            after,
            fired,
            handle,
        }
    }

    /// Returns the duration this timer was armed with.
    #[must_use]
    pub const fn after(&self) -> Duration {
        self.after
    }

    /// Returns true if the timer elapsed and cancelled its target.
    #[must_use]
    pub fn fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }

    /// Cancels the pending sleep. A no-op if the timer already fired.
    pub fn disarm(&self) {
        self.handle.abort();
    }

    /// Returns true while the timer task is still scheduled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for TimeoutTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Derives one combined cancellation signal from up to two sources.
///
/// First-fires-wins: the combined token is a child of the external token (so
/// external cancellation propagates down) and the armed timer cancels the
/// combined token directly (so the timeout fires without touching the
/// caller's token). With neither source the call carries no signal at all.
#[must_use]
pub fn combine(
    timeout: Option<Duration>,
    external: Option<&CancellationToken>,
) -> (Option<CancellationToken>, Option<TimeoutTimer>) {
    match (timeout, external) {
        (None, None) => (None, None),
        (None, Some(ext)) => (Some(ext.child_token()), None),
        (Some(after), ext) => {
            let token = ext.map_or_else(CancellationToken::new, CancellationToken::child_token);
            let timer = TimeoutTimer::arm(after, &token);
            (Some(token), Some(timer))
        }
    }
}

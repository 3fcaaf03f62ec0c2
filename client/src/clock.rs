use std::time::Duration;

/// Source of suspension for pacing and the typewriter.
///
/// Timed waits are the only place the controller yields besides network
/// calls, so swapping the clock is enough to make playback deterministic.
pub trait Clock {
    async fn sleep(&self, duration: Duration);
}

/// Wall clock backed by the tokio timer. Under a paused test runtime
/// (`start_paused = true`) it auto-advances and runs without real waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

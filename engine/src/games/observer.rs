use super::snake::GameSnapshot;

/// Receives one snapshot per simulated tick. Implementations draw; they never
/// get a handle into engine-owned state.
pub trait FrameObserver: Send + Sync + 'static {
    fn on_frame(&self, snapshot: GameSnapshot);
}

impl<F> FrameObserver for F
where
    F: Fn(GameSnapshot) + Send + Sync + 'static,
{
    fn on_frame(&self, snapshot: GameSnapshot) {
        self(snapshot)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl FrameObserver for NoopObserver {
    fn on_frame(&self, _snapshot: GameSnapshot) {}
}

mod observer;
mod session_rng;
pub mod snake;

pub use observer::{FrameObserver, NoopObserver};
pub use session_rng::SessionRng;

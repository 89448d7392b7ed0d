//! Timed, grid-based snake engine.
//!
//! [`SnakeGame`](games::snake::SnakeGame) owns the game state and drives it from a
//! tokio ticker; every tick it hands an owned [`GameSnapshot`](games::snake::GameSnapshot)
//! to a [`FrameObserver`](games::FrameObserver). Drawing and input belong to the caller.

pub mod config;
pub mod games;
pub mod logger;

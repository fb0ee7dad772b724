//! Frame generation.
//!
//! [`FrameAssembler`] walks frames × rows × columns on the calling thread.
//! Each frame owns a fresh canvas; nothing is shared between frames except
//! the read-only grid and configuration.

mod assembler;
mod config;
mod frame;
mod progress;

pub use assembler::FrameAssembler;
pub use config::{
    ConfigError, RenderConfig, COLUMNS_RANGE, FPS_RANGE, FRAMES_RANGE, SPEED_RANGE,
    THICKNESS_RANGE,
};
pub use frame::{Animation, Frame, TileColors};
pub use progress::{CancelToken, LogProgress, Progress};

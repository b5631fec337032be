//! Runtime orchestration for the brawler simulation.
//!
//! This crate wraps the pure [`brawl_core::World`] in a frame loop. Consumers
//! build a [`GameSession`] from a [`RuntimeConfig`], feed it one polled
//! [`brawl_core::InputSnapshot`] per frame, and read back a [`TickReport`], the
//! [`Hud`] model and a [`brawl_core::FrameView`] for drawing.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the orchestrator and its status machine
//! - [`config`] holds loop, camera and HUD tunables plus file/env loading
//! - [`camera`] and [`hud`] are the presentation models the session drives
//! - [`observer`] lets outside systems react to game events
pub mod camera;
pub mod config;
pub mod error;
pub mod hud;
pub mod observer;
pub mod session;

pub use camera::Camera;
pub use config::{CameraConfig, HudConfig, RuntimeConfig};
pub use error::{Result, RuntimeError};
pub use hud::{Hud, HudInput};
pub use observer::{ObserverRegistry, SessionObserver};
pub use session::{GameSession, SessionStatus, TickReport};

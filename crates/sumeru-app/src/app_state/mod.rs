//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, renderer, layout engine, and input.

mod core;
mod event_handler;
mod init;
mod pane_bridge;
mod render;
mod shutdown;

pub use core::SumeruApp;

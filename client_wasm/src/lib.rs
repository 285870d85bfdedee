//! Browser client for the paddle rally
//!
//! Canvas 2D rendering driven by `requestAnimationFrame`. All game rules live
//! in `game_core`; this crate only wires the canvas, the pointer and the
//! frame loop to it.

pub mod input;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod client;

#[cfg(target_arch = "wasm32")]
pub use client::init_client;

//! WebAssembly bindings for the cycle6502 core.
//!
//! This module provides a JavaScript-callable wrapper around a `CPU` over
//! flat 64 KiB memory, for stepping programs from a browser.

pub mod api;

pub use api::Emulator6502;

//! Terminal display sink.
//!
//! A small rendering layer in three pieces: a character framebuffer, a
//! crossterm-backed flusher with diff redraws, and the scene view that maps
//! object-space pixels onto grid cells (aspect correction included). The
//! geometry core never touches anything in here.

pub mod fb;
pub mod renderer;
pub mod view;

pub use fb::{Cell, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
pub use view::{SceneView, DEFAULT_CHAR_ASPECT};

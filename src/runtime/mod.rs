//! Runtime module - winit/platform integration
//!
//! - `app` - ApplicationHandler and window management
//! - `input` - Keyboard event to message mapping
//! - `renderer` - softbuffer surface that presents painted frames

pub mod app;
pub mod input;
pub mod renderer;

pub use app::App;

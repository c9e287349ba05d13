//! Sidebar layout - two-pane layout with a resizable, foldable sidebar
//!
//! This crate provides the state machine, geometry, and painting for a side
//! panel next to a scrollable main area, following the Elm Architecture
//! pattern. The binary hosts it in a winit window.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod controller;
pub mod messages;
pub mod model;
pub mod pointer;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::LayoutConfig;
pub use controller::{Anchor, PanelResizeController};
pub use messages::Msg;
pub use model::AppModel;
pub use pointer::{PointerEvent, PointerEvents, PointerSubscription};

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod decode;
pub mod engine;
pub mod error;
pub mod file_handler;
pub mod fonts;
pub mod history;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod settings;
pub mod surface;
pub mod tools;

pub use app::WhiteboardApp;
pub use engine::Whiteboard;
pub use error::{DecodeError, SurfaceError};
pub use fonts::FontBook;
pub use history::History;
pub use input::{InputRouter, PointerEvent, PointerPhase, PointerSource, RawPointerEvent};
pub use renderer::Renderer;
pub use settings::{FontFamily, ToolKind, ToolSettings};
pub use surface::{Snapshot, Surface};
pub use tools::{TextEditBuffer, Tool, ToolAction};

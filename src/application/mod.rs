mod application;
pub mod data;
mod runtime_config;
mod tree_renderer;

pub use application::{Application, ApplicationError};
pub use runtime_config::RuntimeConfig;
pub use tree_renderer::render_tree;

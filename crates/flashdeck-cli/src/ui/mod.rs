//! TUI rendering components.

mod panels;
mod render;
#[cfg(test)]
mod render_tests;
pub mod view;

pub use render::draw;
pub use view::CardView;

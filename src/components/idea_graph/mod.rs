mod camera;
mod component;
mod geometry;
mod interaction;
mod layout;
mod render;
mod state;
mod store;
mod types;

pub use component::IdeaCanvas;
pub use types::{GraphData, IdeaNode};

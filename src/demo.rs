//! Demonstration screen wiring keys to each toast style

mod demo_events;
mod demo_render;
mod demo_state;

pub use demo_events::DemoAction;
pub use demo_state::{DemoApp, DemoController, LOADER_DEMO_DELAY};

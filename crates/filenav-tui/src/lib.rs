pub mod app;
pub mod events;
pub mod theme;
pub mod ui;

pub use app::App;
pub use events::{key_identifier, should_quit, translate, Event, EventHandler};

pub mod config;
pub mod error;
pub mod hub;
pub mod items;
pub mod key;
pub mod navigation;
pub mod result;

pub use config::FilenavConfig;
pub use error::NavError;
pub use hub::{DispatchOutcome, KeyHub, ListenerId, Subscription};
pub use items::{ItemList, SharedItems};
pub use key::{KeyInput, NavKey};
pub use navigation::{Activation, NavigationController};
pub use result::NavResult;

//! Headless key replay: feeds key identifiers through an activated controller
//! and prints one line per selection notification.

use filenav_core::{KeyHub, NavigationController, SharedItems};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

pub fn run<W: Write>(items: Vec<String>, keys: &[String], mut out: W) -> anyhow::Result<()> {
    let hub = KeyHub::new();
    let notifications: Rc<RefCell<Vec<Option<String>>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&notifications);
    let navigation = NavigationController::new(SharedItems::new(items), move |item| {
        sink.borrow_mut().push(item);
    });
    let activation = navigation.activate(&hub)?;

    for key in keys {
        let key = key.trim();
        let outcome = hub.dispatch(key);
        tracing::debug!(key, ?outcome, "replayed key");

        let pending: Vec<Option<String>> = notifications.borrow_mut().drain(..).collect();
        for item in pending {
            match (navigation.index(), item) {
                (Some(index), Some(item)) => writeln!(out, "selected {} {}", index, item)?,
                _ => writeln!(out, "cleared")?,
            }
        }
    }

    activation.deactivate();
    out.flush()?;
    Ok(())
}

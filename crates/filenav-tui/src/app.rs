use crate::events::{key_identifier, should_quit, Event, EventHandler};
use crate::ui;
use crossterm::event::KeyEvent;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use filenav_core::{
    Activation, FilenavConfig, KeyHub, NavResult, NavigationController, SharedItems,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

/// Host view: owns the item list and keeps the navigation controller active
/// while it runs.
pub struct App {
    items: SharedItems<String>,
    hub: KeyHub,
    navigation: NavigationController<SharedItems<String>>,
    last_selection: Rc<RefCell<Option<String>>>,
    config: FilenavConfig,
    should_quit: bool,
}

impl App {
    pub fn new(items: Vec<String>, config: FilenavConfig) -> Self {
        let items = SharedItems::new(items);
        let last_selection = Rc::new(RefCell::new(None));

        let sink = Rc::clone(&last_selection);
        let navigation = NavigationController::new(items.clone(), move |item: Option<String>| {
            tracing::info!("Selection changed: {:?}", item);
            *sink.borrow_mut() = item;
        });

        Self {
            items,
            hub: KeyHub::new(),
            navigation,
            last_selection,
            config,
            should_quit: false,
        }
    }

    pub fn items(&self) -> &SharedItems<String> {
        &self.items
    }

    pub fn config(&self) -> &FilenavConfig {
        &self.config
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.navigation.index()
    }

    /// The item most recently reported by the selection callback.
    pub fn last_selection(&self) -> Option<String> {
        self.last_selection.borrow().clone()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn status_line(&self) -> String {
        match (self.selected_index(), self.last_selection()) {
            (Some(index), Some(item)) => format!("Selected {}: {}", index + 1, item),
            _ => "No selection".to_string(),
        }
    }

    /// Start routing hub keys to the navigation controller.
    pub fn activate(&self) -> NavResult<Activation> {
        let activation = self.navigation.activate(&self.hub)?;
        self.last_selection.borrow_mut().take();
        Ok(activation)
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if should_quit(&key) {
            self.should_quit = true;
            return;
        }
        let Some(identifier) = key_identifier(&key) else {
            return;
        };
        let outcome = self.hub.dispatch(identifier);
        tracing::trace!(?outcome, "key dispatched");
    }

    pub async fn run(&mut self) -> NavResult<()> {
        let activation = self.activate()?;
        let mut terminal = setup_terminal()?;

        let result = self.event_loop(&mut terminal).await;

        activation.deactivate();
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> NavResult<()> {
        let tick_rate = Duration::from_millis(self.config.effective_tick_rate_ms());
        let mut events = EventHandler::new(tick_rate);

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(Event::Key(key)) => self.handle_key_event(key),
                // Redrawn at the top of the loop.
                Some(Event::Resize(..)) | Some(Event::Tick) => {}
                None => break,
            }
        }

        events.stop();
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

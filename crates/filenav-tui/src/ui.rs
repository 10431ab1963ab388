use crate::app::App;
use crate::theme::*;
use filenav_core::ItemList;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.area());

    render_items(app, frame, chunks[0]);
    render_footer(app, frame, chunks[1]);
}

fn render_items(app: &App, frame: &mut Frame, area: Rect) {
    let title = format!("Files ({})", app.items().len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(focused_border());

    if app.items().is_empty() {
        let empty = Paragraph::new(Span::styled(
            app.config().effective_empty_message().to_string(),
            label_text(),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let rows: Vec<ListItem> = app.items().with(|items| {
        items
            .iter()
            .map(|item| ListItem::new(Line::from(Span::styled(item.clone(), normal_text()))))
            .collect()
    });

    let list = List::new(rows)
        .block(block)
        .highlight_style(selected_item())
        .highlight_symbol(app.config().effective_highlight_symbol());

    let mut state = ListState::default().with_selected(app.selected_index());
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(app.status_line(), highlight_text()),
        Span::styled("  |  Up/Down move  Esc clear  q quit", label_text()),
    ]);
    let footer = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

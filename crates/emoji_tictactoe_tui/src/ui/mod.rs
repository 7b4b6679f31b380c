//! UI rendering using ratatui.

mod board;

use crate::app::App;
use emoji_tictactoe::{Player, Snapshot};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub use board::render_board;

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Emoji Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_badges(f, chunks[1], app.snapshot());
    render_board(f, chunks[2], app.snapshot(), app.cursor());

    let status_text = match app.notice() {
        Some(notice) => format!("{}  ({})", app.snapshot().status_message(), notice),
        None => app.snapshot().status_message(),
    };
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[3]);

    let help = Paragraph::new("1-9 or arrows+Enter: move | R: Restart | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[4]);
}

/// Player badges; the active one is highlighted while the game runs.
fn render_badges(f: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let badge = |player: Player, color: Color| {
        let active = snapshot.active_player() == player && !snapshot.is_terminal();
        let style = if active {
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        Span::styled(format!(" {} {} ", player.emoji(), player.label()), style)
    };

    let line = Line::from(vec![
        badge(Player::Cat, Color::Cyan),
        Span::raw("   "),
        badge(Player::Dog, Color::LightYellow),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

//! Stateless UI rendering for word scramble.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use super::app::{Alert, App};
use crate::games::word_scramble::char_count;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word
            Constraint::Length(3), // Input
            Constraint::Min(3),    // Used words
            Constraint::Length(3), // Status
        ])
        .split(area);

    let session = app.session();
    let root = session.map_or("(no root word)", |s| s.root_word().as_str());
    let round = session.map_or(0, |s| s.round());

    let title = Paragraph::new(root)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Word Scramble - round {}", round)),
        );
    frame.render_widget(title, chunks[0]);

    let input = Paragraph::new(app.input().as_str())
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL).title("Enter your word"));
    frame.render_widget(input, chunks[1]);

    let items: Vec<ListItem> = session
        .into_iter()
        .flat_map(|s| s.used_words().iter())
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>3} ", char_count(word)),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(word.to_string()),
            ]))
        })
        .collect();
    let used = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Words ({})", session.map_or(0, |s| s.used_words().len()))),
    );
    frame.render_widget(used, chunks[2]);

    let score = session.map_or(0, |s| s.score().value());
    let status = Paragraph::new(format!(
        "Score: {}  |  {}  |  Enter: submit  Ctrl-N: new word  Esc: quit",
        score,
        app.status()
    ))
    .style(Style::default().fg(Color::Yellow))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    if let Some(alert) = app.alert() {
        draw_alert(frame, area, alert);
    }
}

fn draw_alert(frame: &mut Frame, area: Rect, alert: &Alert) {
    let popup = center_rect(area, 50, 7);
    frame.render_widget(Clear, popup);

    let text = vec![
        Line::from(alert.message().as_str()),
        Line::from(""),
        Line::from(Span::styled("Press Enter", Style::default().fg(Color::DarkGray))),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(alert.title().as_str())
                .style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(paragraph, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::word_scramble::test_support::session_with_root;
    use crate::games::word_scramble::{Language, PendingSession, RootWordProvider, SessionSettings};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_root_word_and_words() {
        let mut app = App::new(session_with_root("silkworm"));
        for c in "silk".chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        app.submit();

        let text = screen_text(&app);
        assert!(text.contains("silkworm"));
        assert!(text.contains("silk"));
        assert!(text.contains("Score: 4"));
    }

    #[test]
    fn test_renders_alert() {
        let mut app = App::new(session_with_root("silkworm"));
        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        app.submit();

        let text = screen_text(&app);
        assert!(text.contains("Word too short"));
    }

    #[test]
    fn test_renders_without_a_round() {
        let pending = PendingSession::with_seed(
            RootWordProvider::new(Default::default(), None),
            |_: &str, _: &Language| true,
            SessionSettings::default(),
            0,
        );
        let app = App::from_start(pending.start());

        let text = screen_text(&app);
        assert!(text.contains("(no root word)"));
        assert!(text.contains("Could not start a round"));
    }
}

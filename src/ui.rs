use ratatui::{
    layout::Alignment,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Step};

/// Main entry point for drawing the prompt screen.
pub fn draw(f: &mut Frame, app: &App) {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Answered questions
                Constraint::Length(6), // Current question
                Constraint::Length(3), // Status
            ]
            .as_ref(),
        )
        .split(f.area());

    let header = Paragraph::new(app.messages.title)
        .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, vertical_chunks[0]);

    draw_history_pane(f, app, vertical_chunks[1]);

    if app.step == Step::BinaryName {
        draw_input_pane(f, app, vertical_chunks[2]);
    } else {
        draw_choice_pane(f, app, vertical_chunks[2]);
    }

    draw_status_pane(f, app, vertical_chunks[3]);
}

fn draw_history_pane(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .history
        .iter()
        .map(|(question, answer)| {
            Line::from(vec![
                Span::styled("✔ ", Style::default().fg(Color::Green)),
                Span::raw(*question),
                Span::raw(" "),
                Span::styled(
                    answer.as_str(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    let history = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(history, area);
}

/// Text field for the binary name.
fn draw_input_pane(f: &mut Frame, app: &App, area: Rect) {
    let input_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let input = Paragraph::new(app.input.as_str()).style(input_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(format!(" {} ", app.question()), Style::default().fg(Color::Yellow)))
            .border_style(input_style),
    );
    f.render_widget(input, area);

    let cursor_x = area.x.saturating_add(1).saturating_add(app.input.chars().count() as u16);
    let max_x = area.x.saturating_add(area.width.saturating_sub(2));
    f.set_cursor_position((cursor_x.min(max_x), area.y + 1));
}

/// Select list for Classic/Custom and the yes/no toggles.
fn draw_choice_pane(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app.choices().into_iter().map(ListItem::new).collect();

    let mut state = ListState::default();
    state.select(Some(app.highlighted_index));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(format!(" {} ", app.question()), Style::default().fg(Color::Yellow)))
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    f.render_stateful_widget(list, area, &mut state);
}

fn draw_status_pane(f: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(err) = app.error {
        Line::from(vec![
            Span::styled(
                " ERROR ",
                Style::default()
                    .bg(Color::Red)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(err, Style::default().fg(Color::LightRed)),
        ])
    } else {
        let hint = if app.step == Step::BinaryName {
            app.messages.text_hint
        } else {
            app.messages.choice_hint
        };
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)))
    };

    let status = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_renders_name_prompt() {
        let app = App::new(Language::English.messages());
        let content = render(&app);
        assert!(content.contains("Enter your binary file name"));
        assert!(content.contains("ENTER to confirm"));
    }

    #[test]
    fn test_renders_error() {
        let mut app = App::new(Language::English.messages());
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        let content = render(&app);
        assert!(content.contains("ERROR"));
    }

    #[test]
    fn test_renders_choices_and_history() {
        let mut app = App::new(Language::French.messages());
        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        let content = render(&app);
        assert!(content.contains("Classique"));
        assert!(content.contains("Personnalisé"));
        assert!(content.contains("Entrez le nom de votre fichier binaire"));
    }
}

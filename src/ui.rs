use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::controller::{App, RequestState};

/// Render the whole screen as a pure function of the app state
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let title = Paragraph::new("RAGOps Product Recommender")
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(title, chunks[0]);

    let input = Paragraph::new(app.query.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Enter your question"),
    );
    f.render_widget(input, chunks[1]);

    // Cursor sits after the typed text, inside the input border
    if app.state != RequestState::Pending {
        let cursor_x = (chunks[1].x + app.query.chars().count() as u16 + 1)
            .min(chunks[1].x + chunks[1].width.saturating_sub(2));
        f.set_cursor(cursor_x, chunks[1].y + 1);
    }

    let results = Paragraph::new(result_lines(app))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Response"));
    f.render_widget(results, chunks[2]);

    let status = if app.state == RequestState::Pending {
        Line::styled("Loading...", Style::default().fg(Color::Yellow))
    } else {
        Line::raw("Enter: Get Answer  |  Ctrl+U: clear  |  Esc: quit")
    };
    f.render_widget(Paragraph::new(status), chunks[3]);
}

fn result_lines(app: &App) -> Vec<Line<'_>> {
    if let Some(error) = &app.error {
        return vec![Line::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        )];
    }

    let mut lines = Vec::new();
    if app.state == RequestState::Succeeded {
        if let Some(rec) = &app.answer {
            lines.push(Line::styled(
                "Answer:",
                Style::default().add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::raw(rec.answer.as_str()));

            if !rec.keywords.is_empty() {
                lines.push(Line::raw(""));
                lines.push(Line::styled(
                    "Keywords:",
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                for (i, keyword) in rec.keywords.iter().enumerate() {
                    lines.push(Line::raw(format!("{}. {}", i + 1, keyword)));
                }
            }

            lines.push(Line::raw(""));
            lines.push(Line::raw(format!(
                "Number of relevant products found: {}",
                rec.num_results
            )));
        }
    }
    lines
}

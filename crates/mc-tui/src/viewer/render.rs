use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};

use super::state::{Notice, ViewerState};

const LEGEND: [(&str, &str); 4] = [("r", "refresh"), ("c", "clear all"), ("s", "save"), ("h/Esc", "hide")];

pub fn draw(frame: &mut Frame<'_>, state: &ViewerState, location: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    render_table(frame, state, location, chunks[0]);
    render_legend(frame, chunks[1]);

    if let Some(notice) = state.notice() {
        render_notice(frame, notice, frame.area());
    }
}

fn render_table(frame: &mut Frame<'_>, state: &ViewerState, location: &str, area: Rect) {
    let header = Row::new(vec!["Slot", "Content"])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows = state.rows().iter().map(|row| {
        let content_style = if row.filled {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Row::new(vec![
            Cell::from(row.number.to_string()),
            Cell::from(row.preview.clone()).style(content_style),
        ])
    });

    let table = Table::new(rows, [Constraint::Length(6), Constraint::Fill(1)])
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" multiclip ")
                .title_bottom(Line::from(format!(" {location} ")).alignment(Alignment::Right))
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(table, area);
}

fn render_legend(frame: &mut Frame<'_>, area: Rect) {
    let mut spans = Vec::with_capacity(LEGEND.len() * 3);
    for (key, action) in LEGEND {
        spans.push(Span::styled(
            format!(" {key} "),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::raw(format!(" {action}")));
        spans.push(Span::raw("   "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_notice(frame: &mut Frame<'_>, notice: &Notice, area: Rect) {
    let overlay = centered_rect(60, 30, area);
    frame.render_widget(Clear, overlay);

    let body = vec![
        Line::from(notice.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(body)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", notice.title))
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    frame.render_widget(paragraph, overlay);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

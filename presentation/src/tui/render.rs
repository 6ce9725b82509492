//! Single-page layout and widgets
//!
//! The page mirrors the session's mutually exclusive phases: one output
//! slot shows exactly one of the summary panel, the pending spinner, or
//! the dismissible error panel.

use super::state::{FocusArea, TuiState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};
use summarizer_domain::{Phase, Session, SummaryLength};

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

pub fn draw(frame: &mut Frame, state: &TuiState, session: &Session) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(6),    // text input
            Constraint::Length(3), // length gauge
            Constraint::Min(6),    // output slot
            Constraint::Length(1), // status bar
        ])
        .split(frame.area());

    draw_header(frame, chunks[0]);
    draw_input(frame, chunks[1], state);
    draw_length(frame, chunks[2], state, session);
    draw_output_slot(frame, chunks[3], state, session);
    draw_status_bar(frame, chunks[4], state, session);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new("The AI Text Summarizer")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn draw_input(frame: &mut Frame, area: Rect, state: &TuiState) {
    let focused = state.focus == FocusArea::Input;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Text to summarize ")
        .border_style(focus_style(focused));

    let paragraph = if state.input.is_empty() {
        Paragraph::new("Paste text here to summarize")
            .style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(state.input.as_str())
    };
    frame.render_widget(paragraph.block(block).wrap(Wrap { trim: false }), area);
}

fn draw_length(frame: &mut Frame, area: Rect, state: &TuiState, session: &Session) {
    let focused = state.focus == FocusArea::Length;
    let length = session.target_length();
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Summary length ")
                .border_style(focus_style(focused)),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(f64::from(length.words()) / f64::from(SummaryLength::MAX))
        .label(format!("{} words", length));
    frame.render_widget(gauge, area);
}

fn draw_output_slot(frame: &mut Frame, area: Rect, state: &TuiState, session: &Session) {
    match session.phase() {
        Phase::Pending => {
            let spinner = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];
            let loading = Paragraph::new(format!("{} Summarizing...", spinner))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(loading, area);
        }
        Phase::Failed => {
            let message = session.error_message().unwrap_or_default();
            let error = Paragraph::new(vec![
                Line::from(Span::styled(
                    message.to_string(),
                    Style::default().fg(Color::Red),
                )),
                Line::default(),
                Line::from(Span::styled(
                    "Press Esc to dismiss",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Error ")
                    .border_style(Style::default().fg(Color::Red)),
            );
            frame.render_widget(error, area);
        }
        Phase::Idle | Phase::Ready => {
            let block = Block::default().borders(Borders::ALL).title(" Summary ");
            let paragraph = match session.summary() {
                Some(summary) => Paragraph::new(summary),
                None => Paragraph::new("See summary here")
                    .style(Style::default().fg(Color::DarkGray)),
            };
            frame.render_widget(paragraph.block(block).wrap(Wrap { trim: false }), area);
        }
    }
}

fn draw_status_bar(frame: &mut Frame, area: Rect, state: &TuiState, session: &Session) {
    let line = if let Some(flash) = state.flash() {
        Line::from(Span::styled(
            flash.to_string(),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        let copy_hint = if session.phase().is_ready() {
            "Ctrl-Y copy | "
        } else {
            ""
        };
        Line::from(Span::styled(
            format!(
                "Tab focus | Ctrl-S summarize | {}Ctrl-L clear | Esc quit",
                copy_hint
            ),
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

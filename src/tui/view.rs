//! Pure rendering: map a Session to frame text and ratatui widgets.
//!
//! [`frame_text`] is the plain-text frame for each state. [`render`] paints
//! the same content with styling, between a title bar and a help line.
//! The only effect is Frame::render_widget() which writes to the terminal
//! buffer.

use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::transform::TRANSFORMS;

use super::state::{MenuState, Session};
use super::theme;

const PROMPT: &str = "Please Enter the string: ";
const FOOTER: &str = "Press q or ctrl+c to quit.";

// ============================================================================
// FRAME TEXT
// ============================================================================

/// The current frame as plain text.
pub fn frame_text(session: &Session) -> String {
    match session.state {
        MenuState::Select => {
            let mut s = String::new();
            for (i, transform) in TRANSFORMS.iter().enumerate() {
                s.push_str(&format!("{} {}\n", cursor_marker(session, i), transform.label()));
            }
            s.push_str(&format!("\n{}\n", FOOTER));
            s
        }
        MenuState::Input => format!("{}\n\n{}{}", session.display, PROMPT, session.input),
        MenuState::Result => session.display.clone(),
    }
}

fn cursor_marker(session: &Session, row: usize) -> &'static str {
    if session.cursor == row { ">" } else { " " }
}

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(session: &Session, frame: &mut Frame) {
    let area = frame.area();

    // Common layout: title bar at top, content in middle, help at bottom
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(session.state), chunks[0]);
    frame.render_widget(render_help(session.state), chunks[2]);

    let body = Paragraph::new(frame_lines(session)).wrap(Wrap { trim: false });
    frame.render_widget(body, chunks[1]);
}

/// Styled lines of the frame body. Same text as [`frame_text`].
pub fn frame_lines(session: &Session) -> Vec<Line<'static>> {
    match session.state {
        MenuState::Select => select_lines(session),
        MenuState::Input => input_lines(session),
        MenuState::Result => result_lines(session),
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title(state: MenuState) -> Paragraph<'static> {
    let title_text = match state {
        MenuState::Select => "codec-menu",
        MenuState::Input => "Input",
        MenuState::Result => "Result",
    };

    Paragraph::new(Line::from(vec![Span::styled(title_text, theme::STYLE_TITLE)]))
}

fn render_help(state: MenuState) -> Paragraph<'static> {
    let help_text = match state {
        MenuState::Select => "[↑/k] up  [↓/m] down  [Enter/Space] choose  [q] quit",
        MenuState::Input => "[Enter/Space] transform  ^C quit",
        MenuState::Result => "[any key] back to menu",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// SCREENS
// ============================================================================

fn select_lines(session: &Session) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = TRANSFORMS
        .iter()
        .enumerate()
        .map(|(i, transform)| {
            let text = format!("{} {}", cursor_marker(session, i), transform.label());
            if session.cursor == i {
                Line::from(Span::styled(text, theme::STYLE_CURSOR))
            } else {
                Line::from(text)
            }
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(FOOTER, theme::STYLE_HELP)));
    lines
}

fn input_lines(session: &Session) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(session.display.clone(), theme::STYLE_IMPORTANT)),
        Line::from(""),
        Line::from(vec![
            Span::styled(PROMPT, theme::STYLE_INTERACTIVE),
            Span::raw(session.input.clone()),
        ]),
    ]
}

fn result_lines(session: &Session) -> Vec<Line<'static>> {
    // Input is still held on the result screen, so a failed decode can be
    // detected again here rather than sniffed from the text.
    let failed = session.chosen().try_apply(&session.input).is_err();
    let body_style = if failed {
        theme::STYLE_DANGER
    } else {
        Style::new()
    };

    session
        .display
        .split('\n')
        .enumerate()
        .map(|(i, line)| {
            let style = if i == 0 { theme::STYLE_IMPORTANT } else { body_style };
            Line::from(Span::styled(line.to_string(), style))
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

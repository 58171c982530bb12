//! Per-hand voice grid widget.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::UiSnapshot;

const FINGER_NAMES: [&str; 4] = ["index", "middle", "ring", "pinky"];
const LEFT_NOTES: [&str; 4] = ["C4", "D4", "E4", "F4"];
const RIGHT_NOTES: [&str; 4] = ["C5", "D5", "E5", "F5"];

pub fn render_hands(frame: &mut Frame, area: Rect, snapshot: &UiSnapshot) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_hand(
        frame,
        halves[0],
        " Left hand ",
        &LEFT_NOTES,
        &snapshot.left_pinched,
        &snapshot.sounding[0..4],
    );
    render_hand(
        frame,
        halves[1],
        " Right hand ",
        &RIGHT_NOTES,
        &snapshot.right_pinched,
        &snapshot.sounding[4..8],
    );
}

fn render_hand(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    notes: &[&str; 4],
    pinched: &[bool; 4],
    sounding: &[bool],
) {
    let block = Block::default().title(title).borders(Borders::ALL);

    let lines: Vec<Line> = (0..4)
        .map(|finger| {
            let (marker, style) = if sounding[finger] {
                ("\u{25cf}", Style::default().fg(Color::Green))
            } else if pinched[finger] {
                // Pinch toggled but voice not (yet) sounding.
                ("\u{25d0}", Style::default().fg(Color::Yellow))
            } else {
                ("\u{25cb}", Style::default().fg(Color::DarkGray))
            };

            Line::from(vec![
                Span::styled(format!(" {marker} "), style),
                Span::styled(format!("{:<7}", FINGER_NAMES[finger]), style),
                Span::styled(notes[finger], style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

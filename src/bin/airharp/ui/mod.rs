//! TUI module for airharp.
//!
//! Status bar, per-hand voice grid, waveform oscilloscope, and FFT spectrum.

mod hands;
pub mod spectrum;
mod state;
mod waveform;

pub use state::{AudioStats, UiSnapshot};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

pub fn render(frame: &mut Frame, snapshot: &UiSnapshot, audio: &[f32], spectrum: &[(f64, f64)]) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Status bar
            Constraint::Length(8),  // Hands / voice grid
            Constraint::Min(8),     // Waveform + spectrum
            Constraint::Length(1),  // Help bar
        ])
        .split(frame.area());

    let stats = AudioStats::from_buffer(audio);
    state::render_status(frame, chunks[0], snapshot, &stats);
    hands::render_hands(frame, chunks[1], snapshot);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    waveform::render_waveform(frame, halves[0], audio);
    spectrum::render_spectrum(frame, halves[1], spectrum);

    let help = Paragraph::new(
        " [A S D F] left pinches  [J K L ;] right pinches  [\u{2191}/\u{2193}] wrists  [Backspace] lift hands  [Q] quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[3]);
}

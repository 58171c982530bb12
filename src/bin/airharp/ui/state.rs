//! Shared UI state and the status bar.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Per-frame snapshot of everything the widgets need (Copy-friendly,
/// assembled on the control thread).
pub struct UiSnapshot {
    pub sample_rate: f32,
    /// Sounding flags in `VoiceKey::index()` order (left hand 0-3, right 4-7).
    pub sounding: [bool; 8],
    pub left_wrist: f32,
    pub right_wrist: f32,
    pub left_pinched: [bool; 4],
    pub right_pinched: [bool; 4],
}

/// Audio statistics for display.
pub struct AudioStats {
    pub peak: f32,
    pub rms: f32,
}

impl AudioStats {
    pub fn from_buffer(buffer: &[f32]) -> Self {
        if buffer.is_empty() {
            return Self {
                peak: 0.0,
                rms: 0.0,
            };
        }
        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        let rms = (buffer.iter().map(|&x| x * x).sum::<f32>() / buffer.len() as f32).sqrt();
        Self { peak, rms }
    }
}

/// Render the status bar.
pub fn render_status(frame: &mut Frame, area: Rect, snapshot: &UiSnapshot, stats: &AudioStats) {
    let block = Block::default().title(" airharp ").borders(Borders::ALL);

    let voices_sounding = snapshot.sounding.iter().filter(|&&s| s).count();
    let sample_rate_khz = snapshot.sample_rate / 1000.0;

    let line = Line::from(vec![
        Span::styled(
            format!(" Voices: {voices_sounding}/8  "),
            Style::default().fg(if voices_sounding > 0 {
                Color::Green
            } else {
                Color::DarkGray
            }),
        ),
        Span::styled(
            format!("Wrists: L {:.2} R {:.2}  ", snapshot.left_wrist, snapshot.right_wrist),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("{sample_rate_khz:.1}kHz  "),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("Peak: {:.2}  RMS: {:.2}", stats.peak, stats.rms),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

//! Airharp - application wiring and event loop.

use std::time::Duration;

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use rtrb::{Consumer, RingBuffer};

use airharp::gesture::Hand;
use airharp::io::LiveSession;
use airharp::synth::engine::EngineConfig;
use airharp::synth::message::VoiceKey;

use crate::hand::SimulatedHand;
use crate::ui::{self, spectrum::SpectrumAnalyzer, UiSnapshot};

/// Audio visualization buffer size (also the FFT size).
const VIS_BUFFER_SIZE: usize = 1024;
/// Tap ring capacity; must absorb a few UI frames of audio.
const TAP_CAPACITY: usize = 1 << 14;

pub struct Airharp {
    session: LiveSession,
    audio_rx: Consumer<f32>,
    audio_buffer: Vec<f32>,
    left: SimulatedHand,
    right: SimulatedHand,
    should_quit: bool,
}

impl Airharp {
    pub fn new() -> Self {
        let (tap_tx, tap_rx) = RingBuffer::new(TAP_CAPACITY);
        let session = LiveSession::new(EngineConfig::default()).with_output_tap(tap_tx);

        Self {
            session,
            audio_rx: tap_rx,
            audio_buffer: vec![0.0; VIS_BUFFER_SIZE],
            left: SimulatedHand::new(Hand::Left),
            right: SimulatedHand::new(Hand::Right),
            should_quit: false,
        }
    }

    pub fn run(mut self) -> EyreResult<()> {
        self.session
            .initialize()
            .wrap_err("could not start the audio output device")?;
        let sample_rate = self.session.sample_rate().unwrap_or(48_000.0);
        let mut spectrum = SpectrumAnalyzer::new(VIS_BUFFER_SIZE, sample_rate);

        let mut terminal = ratatui::init();
        let result = self.event_loop(&mut terminal, &mut spectrum);
        ratatui::restore();
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        spectrum: &mut SpectrumAnalyzer,
    ) -> EyreResult<()> {
        while !self.should_quit {
            // One "camera frame" per hand per loop iteration.
            self.session.process_frame(&self.left.observation())?;
            self.session.process_frame(&self.right.observation())?;

            self.poll_audio();
            spectrum.update(&self.audio_buffer);

            let snapshot = self.snapshot();
            terminal.draw(|frame| {
                ui::render(frame, &snapshot, &self.audio_buffer, spectrum.data())
            })?;

            // Non-blocking keyboard poll, ~60fps.
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Read whatever the audio callback tapped off since last frame,
    /// keeping the most recent VIS_BUFFER_SIZE samples.
    fn poll_audio(&mut self) {
        let mut new_samples = Vec::new();
        while let Ok(sample) = self.audio_rx.pop() {
            new_samples.push(sample);
        }

        if !new_samples.is_empty() {
            self.audio_buffer.extend(new_samples);
            if self.audio_buffer.len() > VIS_BUFFER_SIZE {
                let excess = self.audio_buffer.len() - VIS_BUFFER_SIZE;
                self.audio_buffer.drain(0..excess);
            }
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('a') => self.left.toggle_finger(0),
            KeyCode::Char('s') => self.left.toggle_finger(1),
            KeyCode::Char('d') => self.left.toggle_finger(2),
            KeyCode::Char('f') => self.left.toggle_finger(3),
            KeyCode::Char('j') => self.right.toggle_finger(0),
            KeyCode::Char('k') => self.right.toggle_finger(1),
            KeyCode::Char('l') => self.right.toggle_finger(2),
            KeyCode::Char(';') => self.right.toggle_finger(3),
            KeyCode::Up => {
                self.left.raise();
                self.right.raise();
            }
            KeyCode::Down => {
                self.left.lower();
                self.right.lower();
            }
            KeyCode::Backspace => {
                // Hands leave the frame: open every pinch and silence the
                // engine, like the tracker losing both hands.
                self.left.open_all();
                self.right.open_all();
                self.session.stop_all();
            }
            _ => {}
        }
    }

    fn snapshot(&self) -> UiSnapshot {
        let mut sounding = [false; 8];
        if let Some(engine) = self.session.engine() {
            for key in VoiceKey::all() {
                sounding[key.index()] = engine.key_sounding(key);
            }
        }

        UiSnapshot {
            sample_rate: self.session.sample_rate().unwrap_or(0.0),
            sounding,
            left_wrist: self.left.wrist_y(),
            right_wrist: self.right.wrist_y(),
            left_pinched: *self.left.pinched(),
            right_pinched: *self.right.pinched(),
        }
    }
}

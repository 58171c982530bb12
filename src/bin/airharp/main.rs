//! airharp - play the gesture synth from a terminal
//!
//! The real instrument is driven by a webcam hand tracker; this front-end
//! stands in for it with keyboard-simulated hands so the engine can be
//! played (and heard) without one. Run with: cargo run
//!
//! Keys: `a s d f` toggle left-hand pinches, `j k l ;` the right hand,
//! Up/Down move the wrists, Backspace lifts both hands, `q` quits.

mod app;
mod hand;
mod ui;

use app::Airharp;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    Airharp::new().run()
}

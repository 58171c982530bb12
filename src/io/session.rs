use rtrb::Producer;

use crate::gesture::HandObservation;
use crate::io::output::{DeviceError, OutputStream};
use crate::synth::engine::{EngineConfig, SynthesisEngine};

/// A live playing session: the gesture engine wired to a running output
/// device.
///
/// Nothing is allocated and no device is touched until the first
/// `initialize` (or the first frame, which initializes implicitly). There is
/// no explicit teardown; dropping the session stops audio.
pub struct LiveSession {
    config: EngineConfig,
    tap: Option<Producer<f32>>,
    running: Option<Running>,
}

struct Running {
    engine: SynthesisEngine,
    stream: OutputStream,
}

impl LiveSession {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            tap: None,
            running: None,
        }
    }

    /// Attach a mono visualization tap; samples rendered by the audio
    /// callback are mirrored into it.
    pub fn with_output_tap(mut self, tap: Producer<f32>) -> Self {
        self.tap = Some(tap);
        self
    }

    /// Construct all eight voices and start the output device. Idempotent:
    /// subsequent calls are no-ops.
    pub fn initialize(&mut self) -> Result<(), DeviceError> {
        if self.running.is_some() {
            return Ok(());
        }

        let config = self.config.clone();
        let tap = self.tap.take();
        let (stream, engine) = OutputStream::open(
            |sample_rate| {
                let (engine, pool) = SynthesisEngine::new(&config, sample_rate);
                (pool, engine)
            },
            tap,
        )?;

        self.running = Some(Running { engine, stream });
        Ok(())
    }

    /// Feed one hand's observation for this frame, initializing the session
    /// on first use.
    pub fn process_frame(&mut self, observation: &HandObservation) -> Result<(), DeviceError> {
        self.initialize()?;
        if let Some(running) = self.running.as_mut() {
            running.engine.process_frame(observation);
        }
        Ok(())
    }

    /// Release everything currently sounding. Safe to call before
    /// initialization and repeatedly; silent no-op in both cases.
    pub fn stop_all(&mut self) {
        if let Some(running) = self.running.as_mut() {
            running.engine.stop_all();
        }
    }

    pub fn is_silent(&self) -> bool {
        self.running
            .as_ref()
            .map_or(true, |running| running.engine.is_silent())
    }

    /// Control-side engine view, for UI state. `None` before initialization.
    pub fn engine(&self) -> Option<&SynthesisEngine> {
        self.running.as_ref().map(|running| &running.engine)
    }

    pub fn sample_rate(&self) -> Option<f32> {
        self.running
            .as_ref()
            .map(|running| running.stream.sample_rate())
    }
}

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::{Consumer, Producer};
use thiserror::Error;

use crate::synth::message::SynthMessage;
use crate::synth::pool::VoicePool;
use crate::MAX_BLOCK_SIZE;

#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("no default audio output device available")]
    Unavailable,
    #[error("failed to fetch default output config: {0}")]
    Config(#[from] cpal::DefaultStreamConfigError),
    #[error("failed to build output stream: {0}")]
    Build(#[from] cpal::BuildStreamError),
    #[error("failed to start output stream: {0}")]
    Play(#[from] cpal::PlayStreamError),
}

/// A running cpal output stream rendering a `VoicePool`.
///
/// Dropping the stream stops audio; there is no other teardown.
pub struct OutputStream {
    _stream: cpal::Stream,
    sample_rate: f32,
}

impl OutputStream {
    /// Open the default output device and start rendering.
    ///
    /// The pool is built by `build` once the device's sample rate is known;
    /// whatever else `build` returns (typically the paired control-side
    /// engine) is handed back to the caller. `tap`, when present, receives a
    /// mono copy of the rendered signal for visualization.
    pub fn open<F, T>(build: F, mut tap: Option<Producer<f32>>) -> Result<(Self, T), DeviceError>
    where
        F: FnOnce(f32) -> (VoicePool<Consumer<SynthMessage>>, T),
    {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(DeviceError::Unavailable)?;
        let config = device.default_output_config()?;

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;
        let (mut pool, extra) = build(sample_rate);

        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                let total_frames = data.len() / channels;
                let mut frames_written = 0;

                while frames_written < total_frames {
                    let frames = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                    let block = &mut render_buf[..frames];
                    pool.render_block(block);

                    // Mono bus fanned out to every channel.
                    let out_off = frames_written * channels;
                    for (i, &s) in block.iter().enumerate() {
                        for ch in 0..channels {
                            data[out_off + i * channels + ch] = s;
                        }
                    }

                    if let Some(tap) = tap.as_mut() {
                        for &s in block.iter() {
                            let _ = tap.push(s);
                        }
                    }

                    frames_written += frames;
                }
            },
            |err| eprintln!("audio error: {err}"),
            None,
        )?;

        stream.play()?;

        Ok((
            Self {
                _stream: stream,
                sample_rate,
            },
            extra,
        ))
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }
}

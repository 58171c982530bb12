use crate::MIN_TIME;

/*
Scheduled Gain Ramps
====================

This module implements the gain-control contract the voices are written
against: value changes are *schedule mutations*, never direct sample writes.
The control loop (frame rate) queues linear ramps; the audio loop (sample
rate) evaluates them one sample at a time.

Operations
----------

  set_value(v)            Jump to `v` immediately. Used exactly once per
                          strike, to reset the gain to zero before the
                          attack ramp.

  ramp_to(target, secs)   Queue a linear ramp toward `target`. The ramp
                          starts where the previous queued segment ends (or
                          now, if the queue is empty) and from that segment's
                          target value, so consecutive calls chain into a
                          piecewise-linear trajectory.

  cancel_scheduled()      Drop every queued segment and hold the current
                          value. Required before any new schedule so stale
                          segments never coexist with a newer one.

A strike schedules two segments (attack, decay-to-sustain); a release
schedules one. The queue capacity of four is therefore never reached in
normal operation; an overflowing ramp is dropped.

    gain
     g  ┤    ╱╲
    .7g ┤   ╱  ╲──────────┐
        │  ╱              ╲
     0  └─╱────────────────╲────→ time
          attack  sustain  release

The clock is a sample counter, so two schedules built the same way produce
bit-identical trajectories regardless of callback timing.
*/

const MAX_SEGMENTS: usize = 4;

#[derive(Debug, Clone, Copy, Default)]
struct Segment {
    from: f32,
    target: f32,
    start: u64,
    end: u64,
}

pub struct GainSchedule {
    sample_rate: f32,
    /// Sample counter, advanced once per `next_sample`.
    clock: u64,
    current: f32,
    segments: [Segment; MAX_SEGMENTS],
    len: usize,
}

impl GainSchedule {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            clock: 0,
            current: 0.0,
            segments: [Segment::default(); MAX_SEGMENTS],
            len: 0,
        }
    }

    /// Current gain value, as of the last rendered sample.
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Immediate jump. Only meaningful on an empty queue; callers cancel
    /// first.
    pub fn set_value(&mut self, value: f32) {
        self.current = value;
    }

    /// Drop all queued segments, holding the current value.
    pub fn cancel_scheduled(&mut self) {
        self.len = 0;
    }

    /// Queue a linear ramp to `target`, starting where the schedule ends.
    pub fn ramp_to(&mut self, target: f32, seconds: f32) {
        if self.len == MAX_SEGMENTS {
            return;
        }

        let seconds = seconds.max(MIN_TIME);
        let (start, from) = if self.len == 0 {
            (self.clock, self.current)
        } else {
            let tail = self.segments[self.len - 1];
            (tail.end, tail.target)
        };
        let duration = (seconds * self.sample_rate).round().max(1.0) as u64;

        self.segments[self.len] = Segment {
            from,
            target,
            start,
            end: start + duration,
        };
        self.len += 1;
    }

    /// Evaluate the schedule at the current clock, then advance one sample.
    pub fn next_sample(&mut self) -> f32 {
        while self.len > 0 {
            let segment = self.segments[0];
            if self.clock >= segment.end {
                self.current = segment.target;
                self.pop_front();
                continue;
            }
            if self.clock >= segment.start {
                let span = (segment.end - segment.start) as f32;
                let t = (self.clock - segment.start) as f32 / span;
                self.current = segment.from + (segment.target - segment.from) * t;
            }
            break;
        }

        self.clock += 1;
        self.current
    }

    /// True when nothing is queued and the gain has drained to silence.
    pub fn is_silent(&self) -> bool {
        self.len == 0 && self.current <= 1e-6
    }

    /// Number of queued segments.
    pub fn pending_segments(&self) -> usize {
        self.len
    }

    fn pop_front(&mut self) {
        for i in 1..self.len {
            self.segments[i - 1] = self.segments[i];
        }
        self.len -= 1;
    }
}

//! Real-world scenario benchmarks.
//!
//! These model actual usage: the full eight-voice pool rendering while
//! per-frame gesture traffic arrives on the message queue.

mod pool;

pub use pool::bench_pool;

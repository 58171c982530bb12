// Purpose - audio device output and live session lifecycle.

pub mod output;
pub mod session;

pub use output::{DeviceError, OutputStream};
pub use session::LiveSession;

//! MBROLA diphone synthesizer, driven as an external process.
//!
//! # System Requirements
//!
//! The `mbrola` executable and the voices to render with:
//! - **Linux**: `sudo apt-get install mbrola` or build from <https://github.com/numediart/MBROLA>
//! - **Voices**: <https://github.com/numediart/MBROLA-voices>
//!
//! # Invocation
//!
//! Each item is rendered with
//!
//! ```text
//! mbrola <voices>/<voice> <item>.pho <item>.wav
//! ```
//!
//! and the call blocks until the process exits. A nonzero exit status, or a
//! clean exit that leaves no readable WAV behind, fails the item with the
//! tool's diagnostic output.

pub mod engine;
pub mod voices;

pub use engine::MbrolaSynthesizer;
pub use voices::VoiceStore;

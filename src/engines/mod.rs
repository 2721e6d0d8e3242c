//! Speech synthesis engines.
//!
//! This module contains the external synthesizers the corpus can be rendered with.
//!
//! # Available Engines
//!
//! - `mbrola` - MBROLA diphone synthesis (external `mbrola` binary and voice files required)

pub mod mbrola;

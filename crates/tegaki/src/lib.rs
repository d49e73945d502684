//! `tegaki` - Handwriting sample capture for building a personal font
//!
//! This library provides the core functionality for collecting handwritten
//! character samples: a persistent registry of which alphabet characters have
//! been captured, a freehand drawing surface that rasterizes strokes to PNG
//! files, and the interactive shell that ties the two together.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod alphabet;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod registry;
pub mod shell;
pub mod surface;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use registry::{CharacterRecord, Registry, RegistryStats};
pub use shell::CaptureSession;
pub use surface::Surface;

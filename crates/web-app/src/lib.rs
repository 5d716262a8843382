#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod log;
mod message;
mod service;
mod settings;
mod workspace;

pub use message::*;
pub use service::*;
pub use settings::*;
pub use workspace::*;

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod engine;
mod error;
mod exercise;
mod muscle;
mod name;
mod plan;
mod service;
mod stimulus;
mod stress;
mod volume;

pub use catalog::{default_exercises, default_plan};
pub use engine::*;
pub use error::*;
pub use exercise::*;
pub use muscle::*;
pub use name::*;
pub use plan::*;
pub use service::*;
pub use stimulus::*;
pub use stress::*;
pub use volume::*;

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod dto;
mod export;
mod import;
mod local_storage;
mod memory;
mod repository;
mod store;

pub use export::*;
pub use import::*;
pub use local_storage::*;
pub use memory::*;
pub use repository::*;
pub use store::*;

#[cfg(test)]
mod tests {
    pub mod data;
}

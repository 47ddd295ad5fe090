pub mod assistant;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod model;
pub mod storage;

pub use assistant::{Assistant, Response, ResponseKind};
pub use model::{Task, TaskKind, TaskList};

// File: ./src/model/mod.rs
// Aggregates the split model files
pub mod adapter;
pub mod item;
pub mod list;
pub mod parser;

pub use item::{Task, TaskKind};
pub use list::TaskList;

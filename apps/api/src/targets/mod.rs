pub mod aggregate;
pub mod compatibility;
pub mod compiler;
pub mod evaluator;
pub mod handlers;
pub mod priority;
pub mod report;
pub mod setup;
pub mod tables;

// Application layer: turns parsed CLI commands into library calls.

pub mod runner;

pub use runner::CommandRunner;

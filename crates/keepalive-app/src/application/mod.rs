// Application layer - Use case orchestration
// Wires domain logic to infrastructure implementations

pub mod config;
pub mod services;

/// Module containing particle swarm algorithms
pub mod particles;

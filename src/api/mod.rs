// Serializable views of a minimizer run.

pub mod dto;

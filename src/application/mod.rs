/// Application layer - Use cases, DTOs and read models
///
/// This layer orchestrates the explorer services and coordinates with
/// infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;

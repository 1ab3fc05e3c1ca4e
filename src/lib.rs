//! StudyGate - LLM study-assistant gateway
//!
//! Accepts a chat message plus optional study material, forwards a composed
//! prompt to a hosted generative model, and normalizes the model's free-form
//! reply into a fixed three-variant JSON contract.

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod normalize;
pub mod prompt;
pub mod shared;
pub mod telemetry;

//! # Weather Agent
//!
//! A minimal conversational agent that augments an LLM with a live weather
//! lookup capability.
//!
//! This library provides:
//! - A prompt-driven plan/act/observe agent loop over a JSON protocol
//! - A string-keyed tool registry with one registered tool (current weather)
//! - An OpenAI-compatible chat completion client
//!
//! ## Architecture
//!
//! The agent follows the "tools in a loop" pattern:
//! 1. Read a user line from the console
//! 2. Request a JSON-constrained completion for the full conversation history
//! 3. Parse the completion as a protocol message (plan/action/output)
//! 4. Dispatch actions to the tool registry, feed observations back, repeat
//!    until the model emits an output
//!
//! ## Example
//!
//! ```rust,ignore
//! use weather_agent::{agent::Agent, config::Config};
//!
//! let config = Config::from_env()?;
//! let agent = Agent::new(config);
//! agent.run().await?;
//! ```

pub mod agent;
pub mod config;
pub mod llm;
pub mod tools;

pub use config::Config;

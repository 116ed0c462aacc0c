//! Agent module - the core conversational loop.
//!
//! The agent follows a prompt-driven plan/act/observe pattern:
//! 1. Wrap a user line as a `user` protocol message and append it to history
//! 2. Request a JSON-constrained completion for the full history
//! 3. `plan` messages loop; `action` messages dispatch a registered tool and
//!    feed the observation back; `output` ends the turn
//! 4. Malformed completions and unknown tool names are fatal protocol errors

mod agent_loop;
mod prompt;
mod protocol;

pub use agent_loop::{Agent, AgentError};
pub use prompt::build_system_prompt;
pub use protocol::ProtocolMessage;

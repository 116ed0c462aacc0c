//! Core agent loop implementation.

use std::io::{self, Write};
use std::sync::Arc;

use thiserror::Error;

use crate::config::Config;
use crate::llm::{ChatMessage, LlmClient, LlmError, OpenAiClient, Role};
use crate::tools::{ToolRegistry, WeatherInfo};

use super::prompt::build_system_prompt;
use super::protocol::ProtocolMessage;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("model response is not a valid protocol message: {source} (raw: {raw})")]
    MalformedResponse {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("model requested unregistered tool: {0}")]
    UnknownTool(String),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("no output produced after {0} turns")]
    TurnLimit(usize),
}

/// The conversational agent.
pub struct Agent {
    config: Config,
    llm: Arc<dyn LlmClient>,
    tools: ToolRegistry,
}

impl Agent {
    /// Create a new agent with the given configuration.
    pub fn new(config: Config) -> Self {
        let llm = Arc::new(OpenAiClient::new(
            config.openai_base_url.clone(),
            config.api_key.clone(),
            config.request_timeout,
        ));

        let mut tools = ToolRegistry::new();
        tools.register(WeatherInfo::new(&config));

        Self { config, llm, tools }
    }

    /// Create an agent with a custom completion client and tool set.
    pub fn with_client(config: Config, llm: Arc<dyn LlmClient>, tools: ToolRegistry) -> Self {
        Self { config, llm, tools }
    }

    /// Run the interactive console loop until stdin is exhausted.
    ///
    /// Protocol violations (malformed completions, unknown tool names) abort
    /// the loop and propagate to the caller.
    pub async fn run(&self) -> anyhow::Result<()> {
        let mut history = vec![ChatMessage::new(
            Role::System,
            build_system_prompt(&self.tools),
        )];

        let stdin = io::stdin();
        loop {
            print!(">> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.read_line(&mut line)? == 0 {
                // EOF
                break;
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let answer = self.run_turn(&mut history, line).await?;
            println!("Output: {}", answer);
        }

        Ok(())
    }

    /// Drive one user turn to completion: append the user message, then loop
    /// plan/action/observation cycles until the model emits an output.
    ///
    /// History is append-only and carries over between turns; the model always
    /// sees the complete, ordered conversation.
    pub async fn run_turn(
        &self,
        history: &mut Vec<ChatMessage>,
        user_line: &str,
    ) -> Result<String, AgentError> {
        let request = ProtocolMessage::User {
            user: user_line.to_string(),
        };
        history.push(ChatMessage::new(Role::User, request.to_json()));

        for turn in 0..self.config.max_turns {
            tracing::debug!("agent turn {}", turn + 1);

            let raw = self.llm.complete(&self.config.model, history).await?;
            history.push(ChatMessage::new(Role::Assistant, raw.clone()));
            println!("{}", raw);

            let message = ProtocolMessage::parse(&raw).map_err(|source| {
                AgentError::MalformedResponse {
                    raw: raw.clone(),
                    source,
                }
            })?;

            match message {
                ProtocolMessage::Output { output } => return Ok(output),
                ProtocolMessage::Action { function, input } => {
                    let tool = self
                        .tools
                        .get(&function)
                        .ok_or_else(|| AgentError::UnknownTool(function.clone()))?;

                    let result = match tool.execute(&input).await {
                        Ok(output) => output,
                        Err(e) => format!("Error: {}", e),
                    };

                    let observation = ProtocolMessage::Observation {
                        observation: result,
                    };
                    history.push(ChatMessage::new(Role::Developer, observation.to_json()));
                }
                // Plans and any other non-terminal message only extend history.
                _ => {}
            }
        }

        Err(AgentError::TurnLimit(self.config.max_turns))
    }
}

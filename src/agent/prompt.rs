//! System prompt templates for the agent.

use crate::tools::ToolRegistry;

/// Build the system prompt with tool definitions.
pub fn build_system_prompt(tools: &ToolRegistry) -> String {
    let tool_descriptions = tools
        .iter()
        .map(|t| format!("function {}(input: string): string\n{}", t.name(), t.description()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are an AI assistant with START, PLAN, ACTION, OBSERVATION, and OUTPUT states.
Wait for the user prompt and first PLAN using available tools.
After planning, take an ACTION with the appropriate tool and wait for the OBSERVATION based on the ACTION.
Once you get the OBSERVATION, return the AI response based on the START prompt and OBSERVATIONS.

Strictly respond with a single JSON object in the format shown in the examples.

Available Tools:
{tool_descriptions}

Example:
START
{{"type": "user", "user": "Can you give me the weather details of Fremont and Boston and tell me if it is hot or cold or pleasant?"}}
{{"type": "plan", "plan": "I will call getWeatherInfo for Fremont"}}
{{"type": "action", "function": "getWeatherInfo", "input": "Fremont"}}
{{"type": "observation", "observation": "35 Degree C"}}
{{"type": "plan", "plan": "I will call getWeatherInfo for Boston"}}
{{"type": "action", "function": "getWeatherInfo", "input": "Boston"}}
{{"type": "observation", "observation": "6 Degrees C"}}
{{"type": "output", "output": "Fremont is experiencing hot weather at 35°C, whereas Boston is much colder at 6°C"}}
"#
    )
}

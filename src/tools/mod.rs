//! Tool registry: named capabilities the model can invoke by name.

mod weather;

pub use weather::{describe_weather, WeatherInfo};

use std::collections::HashMap;

use async_trait::async_trait;

/// A capability the agent can invoke with a single string argument.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique tool name, as referenced by the model in `action` messages.
    fn name(&self) -> &str;

    /// One-line description, embedded in the system prompt.
    fn description(&self) -> &str;

    async fn execute(&self, input: &str) -> anyhow::Result<String>;
}

/// String-keyed table of registered tools. Fixed at startup; the agent loop
/// treats a lookup miss as a fatal protocol error rather than skipping it.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T>(&mut self, tool: T)
    where
        T: Tool + 'static,
    {
        self.tools.insert(tool.name().to_string(), Box::new(tool));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// Iterate registered tools (order unspecified), for prompt building.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Tool> {
        self.tools.values().map(|tool| tool.as_ref())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

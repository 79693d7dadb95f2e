//! Hosted-model agent gateway.
//!
//! An agent here is configuration data, not code: a model id, a system
//! preamble, and an optional web-search capability. The three planner
//! agents are all instances of [`AgentSpec`] and differ only in that data.
//! [`PlanModel`] is the seam between the orchestrator and the hosted
//! provider; the production implementation is [`GeminiGateway`].

mod gateway;
pub mod presets;

pub use gateway::GeminiGateway;

use async_trait::async_trait;

use crate::error::AgentError;

/// A named hosted-model configuration.
#[derive(Debug, Clone)]
pub struct AgentSpec {
    /// Identifier used in logs and error messages.
    pub name: &'static str,
    /// Hosted model id, e.g. "gemini-2.0-flash-exp".
    pub model: String,
    /// One-line role description.
    pub description: &'static str,
    /// System instructions, one directive per entry.
    pub instructions: &'static [&'static str],
    /// Whether the model may invoke the web-search tool at its discretion.
    pub web_search: bool,
}

impl AgentSpec {
    /// Render description + instructions as the system preamble.
    pub fn preamble(&self) -> String {
        let mut lines = vec![self.description.to_string()];
        lines.extend(self.instructions.iter().map(|s| (*s).to_string()));
        lines.join("\n")
    }
}

/// A hosted model that can run one agent call.
///
/// Object safe so the orchestrator can hold `Arc<dyn PlanModel>` and tests
/// can substitute a scripted stub.
#[async_trait]
pub trait PlanModel: Send + Sync {
    /// Send `prompt` under `spec`'s configuration, returning the model's
    /// markdown response.
    async fn run(&self, spec: &AgentSpec, prompt: &str) -> Result<String, AgentError>;
}

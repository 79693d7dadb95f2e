//! Gemini-backed implementation of [`PlanModel`] via rig-core.

use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::gemini;
use secrecy::{ExposeSecret, SecretString};

use super::{AgentSpec, PlanModel};
use crate::error::AgentError;
use crate::tools::WebSearch;

/// Turn budget when the agent carries the web-search tool. Each tool call
/// and its follow-up completion consume one turn.
const MAX_TOOL_TURNS: usize = 4;

/// Gateway to the hosted Gemini API.
///
/// Holds the API credential explicitly; nothing is exported to process
/// environment. One gateway serves all three agent configurations.
pub struct GeminiGateway {
    client: gemini::Client,
    http: reqwest::Client,
}

impl GeminiGateway {
    pub fn new(api_key: &SecretString) -> Result<Self, AgentError> {
        let client =
            gemini::Client::new(api_key.expose_secret()).map_err(|e| AgentError::RequestFailed {
                agent: "gateway".to_string(),
                reason: format!("Failed to create Gemini client: {}", e),
            })?;
        Ok(Self {
            client,
            http: reqwest::Client::new(),
        })
    }
}

#[async_trait]
impl PlanModel for GeminiGateway {
    async fn run(&self, spec: &AgentSpec, prompt: &str) -> Result<String, AgentError> {
        tracing::info!(agent = spec.name, model = %spec.model, "Dispatching agent call");
        let preamble = spec.preamble();

        let response = if spec.web_search {
            let agent = self
                .client
                .agent(&spec.model)
                .preamble(&preamble)
                .tool(WebSearch::new(self.http.clone()))
                .build();
            agent.prompt(prompt).max_turns(MAX_TOOL_TURNS).await
        } else {
            let agent = self.client.agent(&spec.model).preamble(&preamble).build();
            agent.prompt(prompt).await
        };

        let text = response.map_err(|e| AgentError::RequestFailed {
            agent: spec.name.to_string(),
            reason: e.to_string(),
        })?;

        if text.trim().is_empty() {
            return Err(AgentError::EmptyResponse {
                agent: spec.name.to_string(),
            });
        }

        tracing::debug!(agent = spec.name, chars = text.len(), "Agent call completed");
        Ok(text)
    }
}

//! Web search tool backed by the DuckDuckGo Instant Answer API.
//!
//! The planner agents carry this tool; whether it gets called on a given
//! prompt is decided entirely by the hosted model, not by this code.

use rig::completion::ToolDefinition;
use rig::tool::Tool;
use serde::Deserialize;
use serde_json::json;

const SEARCH_ENDPOINT: &str = "https://api.duckduckgo.com/";
const MAX_TOPICS: usize = 5;

/// DuckDuckGo search tool.
#[derive(Clone)]
pub struct WebSearch {
    http: reqwest::Client,
}

impl WebSearch {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[derive(Debug, Deserialize)]
pub struct WebSearchArgs {
    pub query: String,
}

#[derive(Debug, thiserror::Error)]
#[error("Web search failed: {0}")]
pub struct WebSearchError(String);

/// Subset of the Instant Answer response we surface to the model.
#[derive(Debug, Default, Deserialize)]
struct InstantAnswer {
    #[serde(default, rename = "Heading")]
    heading: String,
    #[serde(default, rename = "AbstractText")]
    abstract_text: String,
    #[serde(default, rename = "AbstractURL")]
    abstract_url: String,
    #[serde(default, rename = "RelatedTopics")]
    related_topics: Vec<RelatedTopic>,
}

/// Related topics come either as leaf results or named groups of results.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RelatedTopic {
    Topic {
        #[serde(rename = "Text")]
        text: String,
        #[serde(rename = "FirstURL")]
        first_url: String,
    },
    Group {
        #[serde(rename = "Topics")]
        topics: Vec<RelatedTopic>,
    },
    Other(serde_json::Value),
}

/// Flatten an instant answer into a plain-text digest for the model.
fn summarize(answer: &InstantAnswer, max_topics: usize) -> String {
    let mut lines = Vec::new();

    if !answer.abstract_text.is_empty() {
        if answer.heading.is_empty() {
            lines.push(answer.abstract_text.clone());
        } else {
            lines.push(format!("{}: {}", answer.heading, answer.abstract_text));
        }
        if !answer.abstract_url.is_empty() {
            lines.push(format!("Source: {}", answer.abstract_url));
        }
    }

    let mut count = 0;
    let mut stack: Vec<&RelatedTopic> = answer.related_topics.iter().rev().collect();
    while let Some(topic) = stack.pop() {
        if count >= max_topics {
            break;
        }
        match topic {
            RelatedTopic::Topic { text, first_url } => {
                lines.push(format!("- {} ({})", text, first_url));
                count += 1;
            }
            RelatedTopic::Group { topics } => {
                stack.extend(topics.iter().rev());
            }
            RelatedTopic::Other(_) => {}
        }
    }

    if lines.is_empty() {
        "No results found.".to_string()
    } else {
        lines.join("\n")
    }
}

impl Tool for WebSearch {
    const NAME: &'static str = "web_search";

    type Error = WebSearchError;
    type Args = WebSearchArgs;
    type Output = String;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description:
                "Search the web with DuckDuckGo. Use for uncommon ingredients, eating patterns, \
                 or exercise information not in your training data."
                    .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The search query"
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        tracing::debug!(query = %args.query, "Running web search");
        let response = self
            .http
            .get(SEARCH_ENDPOINT)
            .query(&[
                ("q", args.query.as_str()),
                ("format", "json"),
                ("no_html", "1"),
                ("skip_disambig", "1"),
            ])
            .send()
            .await
            .map_err(|e| WebSearchError(e.to_string()))?;

        let answer: InstantAnswer = response
            .json()
            .await
            .map_err(|e| WebSearchError(e.to_string()))?;

        Ok(summarize(&answer, MAX_TOPICS))
    }
}

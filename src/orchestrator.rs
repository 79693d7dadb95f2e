//! Plan orchestrator: sequences the three agent calls into one merged plan.

use std::sync::Arc;

use crate::agent::{AgentSpec, PlanModel, presets};
use crate::error::Result;
use crate::profile::Profile;
use crate::prompts;

/// The three markdown texts produced for one submission. Only `summary` is
/// shown to the user; the intermediate plans are kept for logging and tests.
#[derive(Debug, Clone)]
pub struct HealthPlan {
    pub meal_plan: String,
    pub fitness_plan: String,
    pub summary: String,
}

/// Runs the fixed meal -> fitness -> merge sequence against a [`PlanModel`].
pub struct Orchestrator {
    model: Arc<dyn PlanModel>,
    dietary_planner: AgentSpec,
    fitness_trainer: AgentSpec,
    team_lead: AgentSpec,
}

impl Orchestrator {
    pub fn new(model: Arc<dyn PlanModel>, model_id: &str) -> Self {
        Self {
            model,
            dietary_planner: presets::dietary_planner(model_id),
            fitness_trainer: presets::fitness_trainer(model_id),
            team_lead: presets::team_lead(model_id),
        }
    }

    /// Generate a full health plan for `profile`.
    ///
    /// Validates first, so an invalid profile issues zero external calls.
    /// The two planner calls run sequentially, then the team lead merges
    /// both results. Any failure aborts the sequence; no partial plan is
    /// returned.
    pub async fn generate(&self, profile: &Profile) -> Result<HealthPlan> {
        profile.validate()?;

        tracing::info!(name = %profile.name, goal = %profile.fitness_goal, "Generating health plan");

        let meal_plan = self
            .model
            .run(&self.dietary_planner, &prompts::meal_plan_prompt(profile))
            .await?;

        let fitness_plan = self
            .model
            .run(&self.fitness_trainer, &prompts::fitness_plan_prompt(profile))
            .await?;

        let summary = self
            .model
            .run(
                &self.team_lead,
                &prompts::merge_prompt(profile, &meal_plan, &fitness_plan),
            )
            .await?;

        Ok(HealthPlan {
            meal_plan,
            fitness_plan,
            summary,
        })
    }
}

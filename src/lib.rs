//! FitPlan — personalized health & fitness plan generator.
//!
//! Collects a user profile through a web form, builds three prompts, runs
//! them through hosted generative-model agents (dietary planner, fitness
//! trainer, team lead), and renders the merged markdown plan.

pub mod agent;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod profile;
pub mod prompts;
pub mod tools;
pub mod web;

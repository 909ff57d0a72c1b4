//! SkillSwap Match - AI-assisted partner ranking for the SkillSwap skill-bartering app
//!
//! This library ranks potential skill-swap partners and drafts learning paths
//! with a generative model. Every operation degrades to a deterministic result
//! instead of failing, so callers never have to handle an error.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{Matcher, Outcome, Degradation, DashboardInsights, fallback_rank};
pub use models::{Skill, SkillLevel, UserProfile, SkillMatch, LearningPathStep};
pub use services::{GeminiClient, GenerativeTransport, GenerationRequest, TransportError};

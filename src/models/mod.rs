// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Skill, SkillLevel, ProfileStatus, ProfileSource, UserProfile, SkillMatch, LearningPathStep};
pub use requests::{CandidatesRequest, ImproveBioRequest};
pub use responses::{RankCandidatesResponse, LearningPathResponse, DashboardResponse, ImproveBioResponse, HealthResponse, ErrorResponse};

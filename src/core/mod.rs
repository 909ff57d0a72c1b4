// Core algorithm exports
pub mod decode;
pub mod fallback;
pub mod matcher;
pub mod outcome;
pub mod pool;
pub mod prompts;

pub use decode::{decode_match_records, decode_path_steps, resolve_matches, DecodeError, MatchRecord};
pub use fallback::{fallback_rank, FALLBACK_COMMON_GROUND, FALLBACK_REASON, FALLBACK_SCORE};
pub use matcher::{DashboardInsights, Matcher, DEFAULT_REQUEST_TIMEOUT};
pub use outcome::{Degradation, Outcome};
pub use pool::prepare_pool;

// Skill matching: normalization, pairwise matching, role weights,
// career-path analysis and job match percentages.
// Every function here is synchronous and infallible; degenerate input
// scores 0 instead of erroring.

pub mod career_paths;
pub mod handlers;
pub mod job_match;
pub mod matcher;
pub mod normalizer;
pub mod weights;

//! Ranking: turns per-posting scores into the recommendation list.

use serde::Serialize;

use crate::matching::scoring::MatchScorer;
use crate::models::internship::InternshipPosting;
use crate::models::profile::UserProfile;

/// Below this score a match is considered noise.
pub const INCLUSION_THRESHOLD: u32 = 20;
pub const DEFAULT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation<'a> {
    pub posting: &'a InternshipPosting,
    pub match_score: u32,
}

/// Postings scoring strictly above `threshold`, best first, at most `limit`.
/// Ties keep catalog order.
pub fn recommend<'a>(
    scorer: &dyn MatchScorer,
    profile: &UserProfile,
    catalog: &'a [InternshipPosting],
    limit: usize,
    threshold: u32,
) -> Vec<Recommendation<'a>> {
    let mut ranked: Vec<Recommendation<'a>> = rank_all(scorer, profile, catalog)
        .into_iter()
        .filter(|r| r.match_score > threshold)
        .collect();
    ranked.truncate(limit);
    ranked
}

/// Every posting, best first, with no threshold or limit.
pub fn rank_all<'a>(
    scorer: &dyn MatchScorer,
    profile: &UserProfile,
    catalog: &'a [InternshipPosting],
) -> Vec<Recommendation<'a>> {
    let mut ranked: Vec<Recommendation<'a>> = catalog
        .iter()
        .map(|posting| Recommendation {
            posting,
            match_score: scorer.score(profile, posting),
        })
        .collect();
    // Vec::sort_by is stable
    ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    ranked
}

//! Career path analysis — weighted skill coverage of each role in a taxonomy.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::matcher::find_match;
use crate::matching::normalizer::{normalize_skills, SkillInput};
use crate::matching::weights::WeightCache;

/// One role of the taxonomy with its raw skill list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleSkills {
    pub role: String,
    pub skills: Vec<SkillInput>,
}

impl RoleSkills {
    pub fn new(role: impl Into<String>, skills: Vec<SkillInput>) -> Self {
        Self {
            role: role.into(),
            skills,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPath {
    pub role: String,
    pub match_percentage: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPathAnalysis {
    pub career_paths: Vec<CareerPath>,
    pub top_match: Option<CareerPath>,
}

/// Scores roles against a candidate's skills.
///
/// Owns the role weight cache; clone it freely, clones share the cache.
#[derive(Debug, Clone, Default)]
pub struct CareerPathAnalyzer {
    cache: WeightCache,
}

impl CareerPathAnalyzer {
    pub fn new(cache: WeightCache) -> Self {
        Self { cache }
    }

    /// `user_skills` must already be normalized.
    pub fn analyze(&self, user_skills: &[String], roles: &[RoleSkills]) -> CareerPathAnalysis {
        let mut career_paths: Vec<CareerPath> = roles
            .iter()
            .map(|role| self.score_role(user_skills, role))
            .collect();

        // stable: ties keep taxonomy order
        career_paths.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));

        debug!(
            roles = roles.len(),
            user_skills = user_skills.len(),
            top = career_paths.first().map(|p| p.match_percentage),
            cached_roles = self.cache.len(),
            "career paths analyzed"
        );

        let top_match = career_paths.first().cloned();
        CareerPathAnalysis {
            career_paths,
            top_match,
        }
    }

    fn score_role(&self, user_skills: &[String], role: &RoleSkills) -> CareerPath {
        let skills = normalize_skills(&role.skills);
        let weights = self.cache.get_or_assign(&role.role, &skills);

        let mut weighted_match: u64 = 0;
        let mut total_weight: u64 = 0;
        let mut matched_skills = Vec::new();
        let mut missing_skills = Vec::new();

        for entry in &weights {
            total_weight += u64::from(entry.weight);
            if find_match(&entry.skill, user_skills).is_some() {
                weighted_match += u64::from(entry.weight);
                matched_skills.push(entry.skill.clone());
            } else {
                missing_skills.push(entry.skill.clone());
            }
        }

        let match_percentage = if total_weight == 0 {
            0
        } else {
            ((weighted_match as f64 / total_weight as f64) * 100.0).round() as u32
        };

        CareerPath {
            role: role.role.clone(),
            match_percentage,
            matched_skills,
            missing_skills,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::normalizer::normalize_strings;
    use proptest::prelude::*;

    fn role(name: &str, skills: &[&str]) -> RoleSkills {
        RoleSkills::new(name, skills.iter().map(|s| SkillInput::from(*s)).collect())
    }

    fn taxonomy() -> Vec<RoleSkills> {
        vec![
            role(
                "AI/ML Engineer",
                &["Python", "Machine Learning Frameworks", "Deep Learning", "NLP"],
            ),
            role("Data Analyst", &["SQL", "Excel", "Python", "Tableau"]),
            role("Frontend Developer", &["JavaScript", "React", "CSS"]),
        ]
    }

    #[test]
    fn test_ai_ml_engineer_scores_31() {
        let analyzer = CareerPathAnalyzer::default();
        let user = normalize_strings(&["python", "sql"]);
        let analysis = analyzer.analyze(&user, &taxonomy()[..1]);

        let path = &analysis.career_paths[0];
        assert_eq!(path.role, "AI/ML Engineer");
        assert_eq!(path.match_percentage, 31);
        assert_eq!(path.matched_skills, vec!["python"]);
        assert_eq!(
            path.missing_skills,
            vec!["machine learning frameworks", "deep learning", "nlp"]
        );
    }

    #[test]
    fn test_sorted_descending_with_top_match() {
        let analyzer = CareerPathAnalyzer::default();
        let user = normalize_strings(&["Python", "SQL", "Excel"]);
        let analysis = analyzer.analyze(&user, &taxonomy());

        let percentages: Vec<u32> = analysis
            .career_paths
            .iter()
            .map(|p| p.match_percentage)
            .collect();
        assert!(percentages.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(analysis.top_match.unwrap().role, "Data Analyst");
    }

    #[test]
    fn test_ties_keep_taxonomy_order() {
        let analyzer = CareerPathAnalyzer::default();
        let roles = vec![role("Zeta", &["go"]), role("Alpha", &["rust"])];
        let analysis = analyzer.analyze(&[], &roles);
        let order: Vec<&str> = analysis.career_paths.iter().map(|p| p.role.as_str()).collect();
        assert_eq!(order, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_no_user_skills_scores_zero_everywhere() {
        let analyzer = CareerPathAnalyzer::default();
        let analysis = analyzer.analyze(&[], &taxonomy());
        assert_eq!(analysis.career_paths.len(), 3);
        for path in &analysis.career_paths {
            assert_eq!(path.match_percentage, 0);
            assert!(path.matched_skills.is_empty());
        }
    }

    #[test]
    fn test_empty_taxonomy_has_no_top_match() {
        let analyzer = CareerPathAnalyzer::default();
        let analysis = analyzer.analyze(&normalize_strings(&["rust"]), &[]);
        assert!(analysis.career_paths.is_empty());
        assert!(analysis.top_match.is_none());
    }

    #[test]
    fn test_role_without_skills_is_zero() {
        let analyzer = CareerPathAnalyzer::default();
        let analysis = analyzer.analyze(&normalize_strings(&["rust"]), &[role("Empty", &[])]);
        assert_eq!(analysis.career_paths[0].match_percentage, 0);
    }

    #[test]
    fn test_case_insensitive_matching() {
        let analyzer = CareerPathAnalyzer::default();
        let upper = analyzer.analyze(&normalize_strings(&["PYTHON"]), &taxonomy());
        let lower = analyzer.analyze(&normalize_strings(&["python"]), &taxonomy());
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_analysis_serializes_camel_case() {
        let analyzer = CareerPathAnalyzer::default();
        let analysis = analyzer.analyze(&normalize_strings(&["css"]), &taxonomy()[2..]);
        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json["careerPaths"][0]["matchPercentage"].is_number());
        assert_eq!(json["topMatch"]["role"], "Frontend Developer");
    }

    proptest! {
        #[test]
        fn prop_analysis_is_idempotent_and_sorted(
            user in prop::collection::vec("[a-z]{1,6}", 0..5),
            roles in prop::collection::vec(
                ("[A-Za-z ]{1,12}", prop::collection::vec("[a-z]{1,6}", 0..6)),
                0..5,
            ),
        ) {
            let roles: Vec<RoleSkills> = roles
                .into_iter()
                .map(|(name, skills)| {
                    RoleSkills::new(name, skills.into_iter().map(SkillInput::Plain).collect())
                })
                .collect();
            let analyzer = CareerPathAnalyzer::default();

            let first = analyzer.analyze(&user, &roles);
            let second = analyzer.analyze(&user, &roles);
            prop_assert_eq!(&first, &second);

            prop_assert!(first
                .career_paths
                .windows(2)
                .all(|w| w[0].match_percentage >= w[1].match_percentage));
            prop_assert!(first.career_paths.iter().all(|p| p.match_percentage <= 100));
        }
    }
}

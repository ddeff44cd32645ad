//! Weight assignment for a role's skill list.
//!
//! Skills are bucketed by position (primary, secondary) and by keyword
//! (soft, tools). Categorized skills receive their bucket's template weight
//! as-is, so a bucket with several members contributes several times. Only
//! uncategorized skills share the remaining budget out of 100.

use std::collections::HashSet;
use std::sync::Arc;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

pub const WEIGHT_BUDGET: i64 = 100;

const PRIMARY_SHARE: f64 = 0.3;
const SECONDARY_SHARE: f64 = 0.4;

const MANAGEMENT_MARKERS: [&str; 2] = ["manager", "lead"];
const SOFT_KEYWORDS: [&str; 5] = [
    "communication",
    "teamwork",
    "leadership",
    "problem solving",
    "agile",
];
const TOOL_KEYWORDS: [&str; 4] = ["tool", "platform", "framework", "library"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedSkill {
    pub skill: String,
    pub weight: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleKind {
    Technical,
    Management,
}

impl RoleKind {
    pub fn classify(role: &str) -> Self {
        let role = role.to_lowercase();
        if MANAGEMENT_MARKERS.iter().any(|m| role.contains(m)) {
            RoleKind::Management
        } else {
            RoleKind::Technical
        }
    }
}

/// Iteration order matters: a skill lands in the first bucket that claims it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Primary,
    Secondary,
    Soft,
    Tools,
}

impl Category {
    pub const ORDER: [Category; 4] = [
        Category::Primary,
        Category::Secondary,
        Category::Soft,
        Category::Tools,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightTemplate {
    pub primary: u32,
    /// Management roles call this slot "technical".
    pub secondary: u32,
    pub soft: u32,
    pub tools: u32,
}

impl WeightTemplate {
    pub const TECHNICAL: WeightTemplate = WeightTemplate {
        primary: 25,
        secondary: 15,
        soft: 10,
        tools: 12,
    };

    pub const MANAGEMENT: WeightTemplate = WeightTemplate {
        primary: 20,
        secondary: 15,
        soft: 25,
        tools: 10,
    };

    pub fn for_kind(kind: RoleKind) -> Self {
        match kind {
            RoleKind::Technical => Self::TECHNICAL,
            RoleKind::Management => Self::MANAGEMENT,
        }
    }

    pub fn weight(&self, category: Category) -> u32 {
        match category {
            Category::Primary => self.primary,
            Category::Secondary => self.secondary,
            Category::Soft => self.soft,
            Category::Tools => self.tools,
        }
    }
}

/// Assigns weights to a role's normalized skills.
///
/// Output order: primary, secondary, soft, tools, then uncategorized skills
/// in their original order.
pub fn assign_weights(role: &str, skills: &[String]) -> Vec<WeightedSkill> {
    let template = WeightTemplate::for_kind(RoleKind::classify(role));

    let mut categorized: HashSet<&str> = HashSet::new();
    let mut weighted = Vec::with_capacity(skills.len());
    let mut assigned: i64 = 0;

    for category in Category::ORDER {
        let weight = template.weight(category);
        for skill in category_members(category, skills) {
            if !categorized.insert(skill.as_str()) {
                continue;
            }
            weighted.push(WeightedSkill {
                skill: skill.clone(),
                weight,
            });
            assigned += i64::from(weight);
        }
    }

    let uncategorized: Vec<&String> = skills
        .iter()
        .filter(|s| !categorized.contains(s.as_str()))
        .collect();

    if !uncategorized.is_empty() {
        let remaining = WEIGHT_BUDGET - assigned;
        let count = uncategorized.len() as i64;
        let per_skill = ((remaining as f64) / (count as f64)).floor().max(1.0) as i64;

        for skill in &uncategorized {
            weighted.push(WeightedSkill {
                skill: (*skill).clone(),
                weight: per_skill as u32,
            });
        }

        let leftover = remaining - per_skill * count;
        if leftover > 0 {
            if let Some(first) = weighted.first_mut() {
                first.weight += leftover as u32;
            }
        }
    }

    weighted
}

fn category_members(category: Category, skills: &[String]) -> Vec<&String> {
    let n = skills.len();
    let primary_end = share_len(n, PRIMARY_SHARE).min(n);

    match category {
        Category::Primary => skills[..primary_end].iter().collect(),
        Category::Secondary => {
            let secondary_end = (primary_end + share_len(n, SECONDARY_SHARE)).min(n);
            skills[primary_end..secondary_end].iter().collect()
        }
        Category::Soft => keyword_members(skills, &SOFT_KEYWORDS),
        Category::Tools => keyword_members(skills, &TOOL_KEYWORDS),
    }
}

fn share_len(n: usize, share: f64) -> usize {
    (n as f64 * share).ceil() as usize
}

fn keyword_members<'a>(skills: &'a [String], keywords: &[&str]) -> Vec<&'a String> {
    skills
        .iter()
        .filter(|s| {
            let lower = s.to_lowercase();
            keywords.iter().any(|k| lower.contains(k))
        })
        .collect()
}

/// Per-role weight cache, keyed by role name.
///
/// Entries are never invalidated while the process lives; the skill list is
/// not part of the key.
#[derive(Debug, Clone, Default)]
pub struct WeightCache {
    entries: Arc<DashMap<String, Vec<WeightedSkill>>>,
}

impl WeightCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_assign(&self, role: &str, skills: &[String]) -> Vec<WeightedSkill> {
        if let Some(cached) = self.entries.get(role) {
            trace!(role, "weight cache hit");
            return cached.clone();
        }

        let weights = assign_weights(role, skills);
        self.entries.insert(role.to_string(), weights.clone());
        weights
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn clear(&self) {
        self.entries.clear();
    }
}

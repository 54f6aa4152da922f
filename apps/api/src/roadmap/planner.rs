//! Roadmap Fallback Planner — deterministic week-by-week study plan.
//!
//! Every skill is assumed to cost `HOURS_PER_SKILL` hours. Skills are packed
//! into weeks in caller order, at least one skill per week.

use serde::{Deserialize, Serialize};

use crate::roadmap::resources::{resources_for_skill, Resource};

/// Estimated study time to pick up one skill.
pub const HOURS_PER_SKILL: u32 = 20;

/// Resources attached to each planned week.
const RESOURCES_PER_WEEK: usize = 2;

const ROADMAP_TIPS: &[&str] = &[
    "Practice daily, even 30 minutes helps",
    "Build projects to reinforce learning",
    "Join online communities for support",
    "Track your progress weekly",
];

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub week: u32,
    pub focus_skill: String,
    pub topics: Vec<String>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub milestone: String,
    #[serde(default)]
    pub estimated_hours: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    #[serde(default)]
    pub target_role: String,
    #[serde(default)]
    pub total_weeks: u32,
    pub weekly_plan: Vec<WeekPlan>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl Roadmap {
    /// Highest week number in the plan, 0 when the plan is empty.
    pub fn last_week(&self) -> u32 {
        self.weekly_plan.iter().map(|w| w.week).max().unwrap_or(0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Planner
// ────────────────────────────────────────────────────────────────────────────

/// Builds a roadmap without the model.
///
/// Callers must reject an empty `missing_skills` list first; an empty list
/// still yields a well-formed roadmap with zero weeks.
pub fn plan_roadmap(target_role: &str, missing_skills: &[String], availability_hours: u32) -> Roadmap {
    let skills_per_week = (availability_hours / HOURS_PER_SKILL).max(1) as usize;
    let estimated_hours = availability_hours.min(HOURS_PER_SKILL);

    let weekly_plan: Vec<WeekPlan> = missing_skills
        .iter()
        .enumerate()
        .map(|(i, skill)| WeekPlan {
            week: (i / skills_per_week) as u32 + 1,
            focus_skill: skill.clone(),
            topics: topics_for(skill),
            resources: resources_for_skill(skill)
                .iter()
                .take(RESOURCES_PER_WEEK)
                .map(Resource::from)
                .collect(),
            milestone: format!("Complete 2 practice exercises in {skill}"),
            estimated_hours,
        })
        .collect();

    let total_weeks = weekly_plan.last().map(|w| w.week).unwrap_or(0);

    Roadmap {
        target_role: target_role.to_string(),
        total_weeks,
        summary: format!(
            "Your personalized roadmap to become a {target_role}. Focus on {} skills over {total_weeks} weeks.",
            missing_skills.len()
        ),
        weekly_plan,
        tips: ROADMAP_TIPS.iter().map(|t| t.to_string()).collect(),
    }
}

fn topics_for(skill: &str) -> Vec<String> {
    vec![
        format!("Introduction to {skill}"),
        format!("Core concepts of {skill}"),
        format!("Hands-on practice with {skill}"),
        format!("Build a mini project using {skill}"),
    ]
}

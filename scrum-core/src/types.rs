use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A member of the team the plan is generated for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Story priority as emitted by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStory {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub story_points: u32,
    #[serde(default)]
    pub acceptance_criteria: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintTask {
    pub id: String,
    pub user_story_id: String,
    pub title: String,
    pub description: String,
    pub assigned_to: String,
    pub estimated_hours: f32,
    #[serde(default)]
    pub required_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    pub sprint_number: u32,
    pub goal: String,
    pub duration: String,
    /// Story ids pulled into this sprint.
    #[serde(default)]
    pub user_stories: Vec<String>,
    #[serde(default)]
    pub tasks: Vec<SprintTask>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub total_user_stories: u32,
    pub total_sprints: u32,
    pub total_tasks: u32,
    pub sprint_duration: String,
}

/// Outcome of the document audit, as replied by the gateway.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentAudit {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub suggestions: Vec<FixSuggestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixSuggestion {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
    pub severity: String,
    #[serde(default)]
    pub fixes: Vec<ProposedFix>,
}

/// A concrete rewrite the model proposes for one weakness of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposedFix {
    pub id: String,
    pub title: String,
    pub paragraph: String,
}

/// A fix the caller picked from the audit suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedFix {
    pub id: String,
    pub title: String,
    pub paragraph: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_message: Option<String>,
}

/// Verdict block carried on a returned plan when the document was audited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecValidation {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixSuggestions {
    #[serde(default)]
    pub suggestions: Vec<FixSuggestion>,
}

/// The complete Scrum plan. Plan fields use the camelCase wire names the
/// model is instructed to emit; the validation blocks keep their original
/// snake_case names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrumPlan {
    #[serde(default)]
    pub product_backlog: Vec<UserStory>,
    #[serde(default)]
    pub sprints: Vec<Sprint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<PlanSummary>,
    #[serde(
        default,
        rename = "spec_validation",
        skip_serializing_if = "Option::is_none"
    )]
    pub spec_validation: Option<SpecValidation>,
    #[serde(
        default,
        rename = "spec_fix_suggestions",
        skip_serializing_if = "Option::is_none"
    )]
    pub spec_fix_suggestions: Option<FixSuggestions>,
}

impl ScrumPlan {
    /// Build the plan returned when the audit rejects the document: no
    /// backlog, only the verdict and the proposed fixes.
    pub fn from_audit(audit: DocumentAudit) -> Self {
        Self {
            spec_validation: Some(SpecValidation { ok: audit.ok, message: audit.message }),
            spec_fix_suggestions: Some(FixSuggestions { suggestions: audit.suggestions }),
            ..Default::default()
        }
    }

    /// Story ids referenced by sprints that do not exist in the backlog.
    ///
    /// The plan is trusted as produced by the model; dangling references are
    /// reported for logging, never enforced.
    pub fn unknown_story_refs(&self) -> Vec<String> {
        let known: HashSet<&str> = self.product_backlog.iter().map(|s| s.id.as_str()).collect();
        let mut dangling: HashSet<String> = HashSet::new();

        for sprint in &self.sprints {
            for id in &sprint.user_stories {
                if !known.contains(id.as_str()) {
                    dangling.insert(id.clone());
                }
            }
            for task in &sprint.tasks {
                if !known.contains(task.user_story_id.as_str()) {
                    dangling.insert(task.user_story_id.clone());
                }
            }
        }

        let mut unknown: Vec<String> = dangling.into_iter().collect();
        unknown.sort();
        unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: &str) -> UserStory {
        UserStory {
            id: id.to_string(),
            title: "Login".to_string(),
            description: "As a user I want to log in".to_string(),
            priority: Priority::High,
            story_points: 3,
            acceptance_criteria: vec!["works".to_string()],
        }
    }

    fn task(id: &str, story_id: &str) -> SprintTask {
        SprintTask {
            id: id.to_string(),
            user_story_id: story_id.to_string(),
            title: "Build form".to_string(),
            description: "HTML form".to_string(),
            assigned_to: "alice".to_string(),
            estimated_hours: 4.0,
            required_skills: vec!["frontend".to_string()],
        }
    }

    #[test]
    fn test_plan_wire_names_are_camel_case() {
        let plan = ScrumPlan {
            product_backlog: vec![story("US-001")],
            sprints: vec![Sprint {
                sprint_number: 1,
                goal: "Ship auth".to_string(),
                duration: "2 weeks".to_string(),
                user_stories: vec!["US-001".to_string()],
                tasks: vec![task("T-001", "US-001")],
            }],
            summary: Some(PlanSummary {
                total_user_stories: 1,
                total_sprints: 1,
                total_tasks: 1,
                sprint_duration: "2 weeks".to_string(),
            }),
            spec_validation: None,
            spec_fix_suggestions: None,
        };

        let json = serde_json::to_value(&plan).unwrap();
        assert!(json.get("productBacklog").is_some());
        assert!(json["productBacklog"][0].get("storyPoints").is_some());
        assert!(json["productBacklog"][0].get("acceptanceCriteria").is_some());
        assert!(json["sprints"][0].get("sprintNumber").is_some());
        assert!(json["sprints"][0]["tasks"][0].get("userStoryId").is_some());
        assert!(json["summary"].get("totalUserStories").is_some());
        assert!(json.get("spec_validation").is_none());
    }

    #[test]
    fn test_validation_blocks_keep_snake_case_names() {
        let plan = ScrumPlan::from_audit(DocumentAudit {
            ok: false,
            message: Some("missing scope".to_string()),
            suggestions: vec![FixSuggestion {
                message: "No acceptance criteria".to_string(),
                evidence: None,
                severity: "high".to_string(),
                fixes: vec![ProposedFix {
                    id: "F-1".to_string(),
                    title: "Add criteria".to_string(),
                    paragraph: "Each feature should list...".to_string(),
                }],
            }],
        });

        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["spec_validation"]["ok"], false);
        assert_eq!(
            json["spec_fix_suggestions"]["suggestions"][0]["fixes"][0]["id"],
            "F-1"
        );
        assert_eq!(json["productBacklog"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_priority_wire_format_is_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        let p: Priority = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(p, Priority::Medium);
    }

    #[test]
    fn test_unknown_story_refs_flags_dangling_ids() {
        let plan = ScrumPlan {
            product_backlog: vec![story("US-001")],
            sprints: vec![Sprint {
                sprint_number: 1,
                goal: "g".to_string(),
                duration: "2 weeks".to_string(),
                user_stories: vec!["US-001".to_string(), "US-009".to_string()],
                tasks: vec![task("T-001", "US-001"), task("T-002", "US-404")],
            }],
            ..Default::default()
        };

        assert_eq!(plan.unknown_story_refs(), vec!["US-009", "US-404"]);
    }

    #[test]
    fn test_unknown_story_refs_empty_for_consistent_plan() {
        let plan = ScrumPlan {
            product_backlog: vec![story("US-001"), story("US-002")],
            sprints: vec![Sprint {
                sprint_number: 1,
                goal: "g".to_string(),
                duration: "1 week".to_string(),
                user_stories: vec!["US-001".to_string(), "US-002".to_string()],
                tasks: vec![task("T-001", "US-002")],
            }],
            ..Default::default()
        };

        assert!(plan.unknown_story_refs().is_empty());
    }
}

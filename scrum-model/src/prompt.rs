//! Prompt construction for the gateway operations.

use scrum_core::{SelectedFix, TeamMember};

/// JSON shape the model must emit for a plan. Kept verbatim in the system
/// prompt so the reply parses directly into `ScrumPlan`.
const PLAN_JSON_SHAPE: &str = r#"{
  "productBacklog": [
    {
      "id": "US-001",
      "title": "User story title",
      "description": "As a ... I want ... so that ...",
      "priority": "high" | "medium" | "low",
      "storyPoints": number,
      "acceptanceCriteria": ["criterion 1", "criterion 2"]
    }
  ],
  "sprints": [
    {
      "sprintNumber": 1,
      "goal": "Sprint goal",
      "duration": "2 weeks",
      "userStories": ["US-001", "US-002"],
      "tasks": [
        {
          "id": "T-001",
          "userStoryId": "US-001",
          "title": "Task title",
          "description": "Task description",
          "assignedTo": "Member name",
          "estimatedHours": number,
          "requiredSkills": ["skill1"]
        }
      ]
    }
  ],
  "summary": {
    "totalUserStories": number,
    "totalSprints": number,
    "totalTasks": number,
    "sprintDuration": "2 weeks"
  }
}"#;

const AUDIT_JSON_SHAPE: &str = r#"{
  "ok": boolean,
  "message": "overall verdict in one sentence",
  "suggestions": [
    {
      "message": "what is weak or missing",
      "evidence": "quote from the document",
      "severity": "high" | "medium" | "low",
      "fixes": [
        {
          "id": "F-001",
          "title": "short fix title",
          "paragraph": "replacement or additional paragraph, ready to insert"
        }
      ]
    }
  ]
}"#;

/// One `- name: skill, skill` line per member.
fn team_description(team: &[TeamMember]) -> String {
    team.iter()
        .map(|m| format!("- {}: {}", m.name, m.skills.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// System prompt for plan generation, embedding the roster and the rules.
pub fn plan_system_prompt(team: &[TeamMember], sprint_duration_weeks: u32) -> String {
    format!(
        "You are an expert Scrum Master and Product Owner. You analyze specification \
documents and produce complete Scrum artifacts.\n\n\
You must ALWAYS reply with valid JSON using exactly this structure:\n{shape}\n\n\
Available team:\n{team}\n\n\
Rules:\n\
- Assign tasks according to each member's skills\n\
- Spread the workload evenly across the team\n\
- Each sprint lasts {weeks} week(s)\n\
- Use story points (1, 2, 3, 5, 8, 13)\n\
- Generate between 3 and 8 sprints depending on complexity\n\
- MoSCoW prioritization (Must, Should, Could, Won't)\n\
- IMPORTANT: reply ONLY with the JSON, no markdown, no backticks, no text before or after",
        shape = PLAN_JSON_SHAPE,
        team = team_description(team),
        weeks = sprint_duration_weeks,
    )
}

/// User message carrying the document for plan generation.
pub fn plan_user_message(document: &str) -> String {
    format!("Here is the specification document to analyze:\n\n{document}")
}

/// System prompt for the document audit.
pub fn audit_system_prompt() -> String {
    format!(
        "You are an expert requirements analyst. You audit specification documents \
for completeness, ambiguity and missing acceptance criteria before they are turned \
into a Scrum plan.\n\n\
You must ALWAYS reply with valid JSON using exactly this structure:\n{shape}\n\n\
Set \"ok\" to true only when the document is precise enough to plan from. When it \
is not, list concrete suggestions, each with ready-to-insert fixes.\n\
IMPORTANT: reply ONLY with the JSON, no markdown, no backticks, no text before or after",
        shape = AUDIT_JSON_SHAPE,
    )
}

/// User message carrying the document for the audit.
pub fn audit_user_message(document: &str) -> String {
    format!("Here is the specification document to audit:\n\n{document}")
}

/// System prompt for applying selected fixes to the document.
pub fn fix_system_prompt() -> String {
    "You are an expert requirements analyst. You rewrite a specification document, \
applying ONLY the fixes the user selected while preserving the rest of the document \
verbatim.\n\
IMPORTANT: reply with the enhanced document text only, no markdown fences, no \
commentary before or after"
        .to_string()
}

/// User message listing the selected fixes and the original document.
pub fn fix_user_message(document: &str, fixes: &[SelectedFix]) -> String {
    let fix_list = fixes
        .iter()
        .map(|f| match &f.parent_message {
            Some(parent) => format!("- [{}] {} ({}): {}", f.id, f.title, parent, f.paragraph),
            None => format!("- [{}] {}: {}", f.id, f.title, f.paragraph),
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Selected fixes:\n{fix_list}\n\nOriginal document:\n\n{document}",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, skills: &[&str]) -> TeamMember {
        TeamMember {
            id: name.to_lowercase(),
            name: name.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_plan_prompt_embeds_roster() {
        let team = vec![member("Alice", &["rust", "sql"]), member("Bob", &["frontend"])];
        let prompt = plan_system_prompt(&team, 2);
        assert!(prompt.contains("- Alice: rust, sql"));
        assert!(prompt.contains("- Bob: frontend"));
    }

    #[test]
    fn test_plan_prompt_embeds_sprint_duration_and_shape() {
        let prompt = plan_system_prompt(&[], 3);
        assert!(prompt.contains("lasts 3 week(s)"));
        assert!(prompt.contains("\"productBacklog\""));
        assert!(prompt.contains("\"userStoryId\""));
        assert!(prompt.contains("no markdown"));
    }

    #[test]
    fn test_fix_message_lists_each_fix_once() {
        let fixes = vec![SelectedFix {
            id: "F-001".to_string(),
            title: "Add scope".to_string(),
            paragraph: "The system shall...".to_string(),
            parent_message: Some("Scope unclear".to_string()),
        }];
        let msg = fix_user_message("doc body", &fixes);
        assert!(msg.contains("[F-001] Add scope (Scope unclear): The system shall..."));
        assert!(msg.ends_with("doc body"));
    }
}

//! Scrum board materialization.
//!
//! Turns a generated plan into a repository with labeled issues and a
//! classic project board. Calls are sequential; a failure surfaces the
//! upstream status and body, and nothing already created is rolled back.

use crate::config::{GitHubConfig, USER_AGENT};
use crate::error::{GitHubError, Result};
use async_trait::async_trait;
use reqwest::Client;
use scrum_core::ScrumPlan;
use serde::Serialize;
use serde_json::{Value, json};

const ACCEPT_JSON: &str = "application/vnd.github+json";

/// Classic projects need their preview media type.
const ACCEPT_INERTIA: &str = "application/vnd.github.inertia-preview+json";

/// Priority labels created up front, with the usual GitHub colors.
const PRIORITY_LABELS: [(&str, &str); 3] =
    [("high", "d73a4a"), ("medium", "fbca04"), ("low", "0e8a16")];

/// What the caller gets back after materialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSummary {
    pub repo_url: String,
    pub project_url: String,
    pub issues_created: u32,
}

/// The board materialization seam the HTTP surface depends on.
#[async_trait]
pub trait BoardCreator: Send + Sync {
    async fn create_board(
        &self,
        access_token: &str,
        repo_name: &str,
        plan: &ScrumPlan,
    ) -> Result<BoardSummary>;
}

/// Board client backed by the GitHub REST API.
pub struct BoardClient {
    client: Client,
    config: GitHubConfig,
}

impl BoardClient {
    /// Create a new board client.
    pub fn new(config: GitHubConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GitHubError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.config.effective_api_base().trim_end_matches('/'), path)
    }

    /// POST a JSON body and parse the JSON reply, mapping non-2xx to errors.
    async fn post_json(&self, token: &str, url: &str, accept: &str, body: &Value) -> Result<Value> {
        let reply = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", token))
            .header("Accept", accept)
            .json(body)
            .send()
            .await
            .map_err(|e| GitHubError::Transport(format!("request to {} failed: {}", url, e)))?;

        let status = reply.status();
        if !status.is_success() {
            let body = reply.text().await.unwrap_or_default();
            return Err(GitHubError::Api { status: status.as_u16(), body });
        }

        reply
            .json()
            .await
            .map_err(|e| GitHubError::Transport(format!("failed to read reply from {}: {}", url, e)))
    }

    /// Create the priority labels, tolerating ones that already exist.
    async fn create_labels(&self, token: &str, full_name: &str) -> Result<()> {
        for (name, color) in PRIORITY_LABELS {
            let url = self.api_url(&format!("/repos/{}/labels", full_name));
            match self
                .post_json(token, &url, ACCEPT_JSON, &json!({ "name": name, "color": color }))
                .await
            {
                Ok(_) => {}
                // 422 means the label exists, usually from repo templates
                Err(GitHubError::Api { status: 422, .. }) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

fn story_issue_body(story: &scrum_core::UserStory) -> String {
    let mut body = story.description.clone();
    if !story.acceptance_criteria.is_empty() {
        body.push_str("\n\n### Acceptance criteria\n");
        for criterion in &story.acceptance_criteria {
            body.push_str(&format!("- {}\n", criterion));
        }
    }
    body.push_str(&format!("\nStory points: {}", story.story_points));
    body
}

fn task_issue_body(task: &scrum_core::SprintTask) -> String {
    let mut body = task.description.clone();
    body.push_str(&format!("\n\nStory: {}", task.user_story_id));
    body.push_str(&format!("\nAssigned to: {}", task.assigned_to));
    body.push_str(&format!("\nEstimated hours: {}", task.estimated_hours));
    if !task.required_skills.is_empty() {
        body.push_str(&format!("\nRequired skills: {}", task.required_skills.join(", ")));
    }
    body
}

#[async_trait]
impl BoardCreator for BoardClient {
    async fn create_board(
        &self,
        access_token: &str,
        repo_name: &str,
        plan: &ScrumPlan,
    ) -> Result<BoardSummary> {
        let repo = self
            .post_json(
                access_token,
                &self.api_url("/user/repos"),
                ACCEPT_JSON,
                &json!({
                    "name": repo_name,
                    "description": "Scrum board generated by ScrumAgent",
                    "private": true,
                    "auto_init": true,
                }),
            )
            .await?;

        let full_name = repo["full_name"]
            .as_str()
            .ok_or_else(|| GitHubError::Transport("repo reply missing full_name".to_string()))?
            .to_string();
        let repo_url = repo["html_url"].as_str().unwrap_or_default().to_string();

        self.create_labels(access_token, &full_name).await?;

        let issues_url = self.api_url(&format!("/repos/{}/issues", full_name));
        let mut issues_created = 0u32;

        for story in &plan.product_backlog {
            self.post_json(
                access_token,
                &issues_url,
                ACCEPT_JSON,
                &json!({
                    "title": format!("{}: {}", story.id, story.title),
                    "body": story_issue_body(story),
                    "labels": [story.priority.as_str()],
                }),
            )
            .await?;
            issues_created += 1;
        }

        for sprint in &plan.sprints {
            for task in &sprint.tasks {
                self.post_json(
                    access_token,
                    &issues_url,
                    ACCEPT_JSON,
                    &json!({
                        "title": format!("[Sprint {}] {}: {}", sprint.sprint_number, task.id, task.title),
                        "body": task_issue_body(task),
                    }),
                )
                .await?;
                issues_created += 1;
            }
        }

        let project = self
            .post_json(
                access_token,
                &self.api_url(&format!("/repos/{}/projects", full_name)),
                ACCEPT_INERTIA,
                &json!({
                    "name": repo_name,
                    "body": "Sprint board generated by ScrumAgent",
                }),
            )
            .await?;

        let project_id = project["id"]
            .as_u64()
            .ok_or_else(|| GitHubError::Transport("project reply missing id".to_string()))?;
        let project_url = project["html_url"].as_str().unwrap_or_default().to_string();

        let columns_url = self.api_url(&format!("/projects/{}/columns", project_id));
        self.post_json(access_token, &columns_url, ACCEPT_INERTIA, &json!({ "name": "Backlog" }))
            .await?;
        for sprint in &plan.sprints {
            self.post_json(
                access_token,
                &columns_url,
                ACCEPT_INERTIA,
                &json!({ "name": format!("Sprint {}", sprint.sprint_number) }),
            )
            .await?;
        }

        tracing::info!(repo = %full_name, issues_created, "Scrum board materialized");

        Ok(BoardSummary { repo_url, project_url, issues_created })
    }
}

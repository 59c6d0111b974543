use scrum_core::{Priority, ScrumPlan, Sprint, SprintTask, UserStory};
use scrum_github::{BoardClient, BoardCreator, GitHubConfig, GitHubError};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn plan() -> ScrumPlan {
    ScrumPlan {
        product_backlog: vec![
            UserStory {
                id: "US-001".to_string(),
                title: "Login".to_string(),
                description: "As a user I want to log in".to_string(),
                priority: Priority::High,
                story_points: 3,
                acceptance_criteria: vec!["form validates".to_string()],
            },
            UserStory {
                id: "US-002".to_string(),
                title: "Logout".to_string(),
                description: "As a user I want to log out".to_string(),
                priority: Priority::Low,
                story_points: 1,
                acceptance_criteria: vec![],
            },
        ],
        sprints: vec![Sprint {
            sprint_number: 1,
            goal: "Auth".to_string(),
            duration: "2 weeks".to_string(),
            user_stories: vec!["US-001".to_string(), "US-002".to_string()],
            tasks: vec![SprintTask {
                id: "T-001".to_string(),
                user_story_id: "US-001".to_string(),
                title: "Build login form".to_string(),
                description: "HTML + handler".to_string(),
                assigned_to: "Alice".to_string(),
                estimated_hours: 6.0,
                required_skills: vec!["frontend".to_string()],
            }],
        }],
        ..Default::default()
    }
}

fn client_for(server: &MockServer) -> BoardClient {
    BoardClient::new(GitHubConfig::new("id", "secret").with_api_base(server.uri())).unwrap()
}

async fn mount_happy_path(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/user/repos"))
        .and(body_partial_json(json!({ "name": "shop-board", "private": true })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "full_name": "octocat/shop-board",
            "html_url": "https://github.example/octocat/shop-board",
            "owner": { "login": "octocat" },
        })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/repos/octocat/shop-board/labels"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "name": "x" })))
        .expect(3)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/repos/octocat/shop-board/issues"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "number": 1 })))
        .expect(3)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/repos/octocat/shop-board/projects"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 77,
            "html_url": "https://github.example/orgs/octocat/projects/77",
        })))
        .expect(1)
        .mount(server)
        .await;

    // Backlog column plus one per sprint
    Mock::given(method("POST"))
        .and(path("/projects/77/columns"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 1 })))
        .expect(2)
        .mount(server)
        .await;
}

#[tokio::test]
async fn create_board_materializes_repo_issues_and_columns() {
    let server = MockServer::start().await;
    mount_happy_path(&server).await;

    let summary = client_for(&server).create_board("gho_token", "shop-board", &plan()).await.unwrap();

    assert_eq!(summary.repo_url, "https://github.example/octocat/shop-board");
    assert_eq!(summary.project_url, "https://github.example/orgs/octocat/projects/77");
    // two stories + one task
    assert_eq!(summary.issues_created, 3);
}

#[tokio::test]
async fn create_board_tolerates_existing_labels() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/user/repos"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "full_name": "octocat/empty-board",
            "html_url": "https://github.example/octocat/empty-board",
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/repos/octocat/empty-board/labels"))
        .respond_with(
            ResponseTemplate::new(422).set_body_string("Validation Failed: already_exists"),
        )
        .expect(3)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/repos/octocat/empty-board/projects"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 5,
            "html_url": "https://github.example/projects/5",
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/projects/5/columns"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 1 })))
        .mount(&server)
        .await;

    let empty = ScrumPlan::default();
    let summary = client_for(&server).create_board("gho_token", "empty-board", &empty).await.unwrap();
    assert_eq!(summary.issues_created, 0);
}

#[tokio::test]
async fn create_board_surfaces_repo_creation_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/user/repos"))
        .respond_with(ResponseTemplate::new(422).set_body_string("name already exists"))
        .mount(&server)
        .await;

    let err = client_for(&server).create_board("gho_token", "shop-board", &plan()).await.unwrap_err();
    assert!(matches!(err, GitHubError::Api { status: 422, .. }));
}

//! Model module tests: wire format and draft validation

use chrono::NaiveDate;

use crate::model::{
    DashboardStats, DeadlineState, DeadlineStatus, Project, ProjectDraft, ProjectStatus,
    StatusHistory,
};

const PROJECT_JSON: &str = r#"{
    "id": 1,
    "title": "Test Project 1",
    "description": "Test Description 1",
    "status": "IN_PROGRESS",
    "startDate": "2024-03-01",
    "endDate": "2024-04-01",
    "deadline": "2024-03-15",
    "deadlineStatus": "ON_TRACK",
    "reminderSent": false,
    "owner": {
        "id": 1,
        "username": "testuser",
        "email": "test@example.com",
        "firstName": "Test",
        "lastName": "User"
    }
}"#;

#[test]
fn test_project_deserializes_from_backend_json() {
    let project: Project = serde_json::from_str(PROJECT_JSON).unwrap();

    assert_eq!(project.id, 1);
    assert_eq!(project.title, "Test Project 1");
    assert_eq!(project.status, ProjectStatus::InProgress);
    assert_eq!(
        project.start_date,
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    );
    assert_eq!(project.deadline_status, DeadlineStatus::OnTrack);
    assert_eq!(project.owner.username, "testuser");
    assert!(!project.reminder_sent);
    // timestamps are optional on the wire
    assert!(project.created_at.is_none());
}

#[test]
fn test_project_with_null_deadline() {
    let json = PROJECT_JSON
        .replace(r#""2024-03-15""#, "null")
        .replace(r#""ON_TRACK""#, r#""NO_DEADLINE""#);
    let project: Project = serde_json::from_str(&json).unwrap();

    assert!(project.deadline.is_none());
    assert_eq!(project.deadline_state(), DeadlineState::NoDeadline);
}

#[test]
fn test_deadline_state_is_tagged() {
    let project: Project = serde_json::from_str(PROJECT_JSON).unwrap();
    assert_eq!(
        project.deadline_state(),
        DeadlineState::Tracked {
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            status: DeadlineStatus::OnTrack,
        }
    );
}

#[test]
fn test_status_serializes_as_screaming_snake_case() {
    let value = serde_json::to_value(ProjectStatus::InProgress).unwrap();
    assert_eq!(value, serde_json::json!("IN_PROGRESS"));
    let value = serde_json::to_value(ProjectStatus::OnHold).unwrap();
    assert_eq!(value, serde_json::json!("ON_HOLD"));
}

#[test]
fn test_status_parse_round_trip() {
    for status in ProjectStatus::ALL {
        assert_eq!(ProjectStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(ProjectStatus::parse("in_progress"), Some(ProjectStatus::InProgress));
    assert_eq!(ProjectStatus::parse("bogus"), None);
}

#[test]
fn test_status_from_str_reports_unknown_value() {
    let err = "SOMEDAY".parse::<ProjectStatus>().unwrap_err();
    assert!(err.contains("SOMEDAY"));
}

#[test]
fn test_status_history_deserializes_offsetless_timestamps() {
    let json = r#"{
        "id": 7,
        "projectId": 1,
        "oldStatus": "PENDING",
        "newStatus": "IN_PROGRESS",
        "changedAt": "2024-03-02T09:30:00",
        "changedBy": {
            "id": 1,
            "username": "testuser",
            "email": "test@example.com",
            "firstName": "Test",
            "lastName": "User"
        }
    }"#;
    let history: StatusHistory = serde_json::from_str(json).unwrap();
    assert_eq!(history.project_id, 1);
    assert_eq!(history.old_status, ProjectStatus::Pending);
    assert_eq!(history.new_status, ProjectStatus::InProgress);
}

#[test]
fn test_dashboard_stats_deserialize() {
    let json = r#"{
        "totalUsers": 4,
        "activeProjects": 2,
        "pendingReviews": 0,
        "recentStatusChanges": [{
            "projectId": 1,
            "projectTitle": "Test Project 1",
            "oldStatus": "PENDING",
            "newStatus": "IN_PROGRESS",
            "changedAt": "2024-03-02T09:30:00",
            "changedBy": "testuser"
        }],
        "upcomingDeadlines": [{
            "projectId": 1,
            "projectTitle": "Test Project 1",
            "deadline": "2024-03-15",
            "daysUntilDeadline": 5,
            "status": "APPROACHING"
        }]
    }"#;
    let stats: DashboardStats = serde_json::from_str(json).unwrap();
    assert_eq!(stats.total_users, 4);
    assert_eq!(stats.recent_status_changes.len(), 1);
    assert_eq!(
        stats.upcoming_deadlines[0].status,
        DeadlineStatus::Approaching
    );
}

fn sample_draft() -> ProjectDraft {
    ProjectDraft {
        title: "New Project".to_string(),
        description: "A description".to_string(),
        status: ProjectStatus::Pending,
        start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        deadline: None,
    }
}

#[test]
fn test_draft_validation_accepts_complete_draft() {
    assert!(sample_draft().validate().is_ok());
}

#[test]
fn test_draft_validation_rejects_empty_title() {
    let draft = ProjectDraft {
        title: "   ".to_string(),
        ..sample_draft()
    };
    let err = draft.validate().unwrap_err();
    assert!(err.to_string().contains("title"));
}

#[test]
fn test_draft_validation_rejects_empty_description() {
    let draft = ProjectDraft {
        description: String::new(),
        ..sample_draft()
    };
    let err = draft.validate().unwrap_err();
    assert!(err.to_string().contains("description"));
}

#[test]
fn test_draft_omits_absent_deadline_when_serialized() {
    let value = serde_json::to_value(sample_draft()).unwrap();
    assert!(value.get("deadline").is_none());
    assert_eq!(value["startDate"], serde_json::json!("2024-03-01"));
}

use todolist_core::{Todo, TodoFilter, TodoSort, ViewSettings};
use uuid::Uuid;

#[test]
fn todo_serialization_uses_expected_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let todo = Todo {
        id,
        title: "Buy milk".to_string(),
        completed: true,
        created_at: 1_700_000_000_000,
        updated_at: 1_700_000_360_000,
    };

    let json = serde_json::to_value(&todo).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Buy milk");
    assert_eq!(json["completed"], true);
    assert_eq!(json["created_at"], 1_700_000_000_000_i64);
    assert_eq!(json["updated_at"], 1_700_000_360_000_i64);

    let decoded: Todo = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, todo);
}

#[test]
fn view_settings_serialize_as_snake_case() {
    let view = ViewSettings::new(TodoFilter::IncompleteOnly, TodoSort::ByTitleAscending);

    let json = serde_json::to_value(view).unwrap();
    assert_eq!(json["filter"], "incomplete_only");
    assert_eq!(json["sort"], "by_title_ascending");
}

#[test]
fn filter_predicate_matches_completion_state() {
    let mut todo = Todo {
        id: Uuid::new_v4(),
        title: "x".to_string(),
        completed: false,
        created_at: 0,
        updated_at: 0,
    };
    assert!(TodoFilter::All.matches(&todo));
    assert!(TodoFilter::IncompleteOnly.matches(&todo));

    todo.toggle();
    assert!(TodoFilter::All.matches(&todo));
    assert!(!TodoFilter::IncompleteOnly.matches(&todo));
}

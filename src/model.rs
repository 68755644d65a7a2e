//! Wire and storage shapes for todos.

use serde::{Deserialize, Serialize};

/// A stored todo. Serialized as `{"id", "title", "completed"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

/// Body of `POST /api/todos`. `title` is required.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

/// Body of `PUT /api/todos/:id`. An absent (or null) field leaves the stored value unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_flat_object() {
        let todo = Todo {
            id: "abc".into(),
            title: "Test".into(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json, serde_json::json!({"id": "abc", "title": "Test", "completed": false}));
    }

    #[test]
    fn create_todo_rejects_missing_title() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_todo_rejects_null_title() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"title":null}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_todo_all_fields_optional() {
        let input: UpdateTodo = serde_json::from_str("{}").unwrap();
        assert!(input.title.is_none());
        assert!(input.completed.is_none());
    }

    #[test]
    fn update_todo_distinguishes_false_from_absent() {
        let input: UpdateTodo = serde_json::from_str(r#"{"completed":false}"#).unwrap();
        assert_eq!(input.completed, Some(false));
        assert!(input.title.is_none());
    }
}

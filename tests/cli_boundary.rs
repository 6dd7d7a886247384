#[cfg(test)]
mod tests {
    use mockexam::commands::create::create_from_json;
    use mockexam::commands::{exit_code, EXIT_VALIDATION};
    use mockexam::db::db::Store;
    use mockexam::db::schema::Entity;
    use serde_json::Value;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct CliTestContext {
        _temp_dir: TempDir,
        store: Store,
    }

    impl TestContext for CliTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let store = Store::at(temp_dir.path().join("exam.db")).unwrap();
            CliTestContext { _temp_dir: temp_dir, store }
        }
    }

    fn create(ctx: &CliTestContext, entity: Entity, body: &str) -> Value {
        let stored = create_from_json(&ctx.store, entity, body).unwrap();
        serde_json::from_str(&stored).unwrap()
    }

    #[test_context(CliTestContext)]
    #[test]
    fn test_json_body_gets_identity_and_defaults(ctx: &mut CliTestContext) {
        let user = create(ctx, Entity::Users, r#"{"id": null, "name": "Asha", "email": "a@x.com", "password_hash": "h1"}"#);
        assert_eq!(user["id"], 1);
        assert_eq!(user["name"], "Asha");
        assert!(user["created_at"].is_string());

        let test = create(ctx, Entity::Tests, r#"{"title": "Math I", "duration_min": 30}"#);
        assert_eq!(test["total_marks"], 0);

        let section = create(ctx, Entity::Sections, r#"{"test_id": 1, "name": "Algebra", "order": 2}"#);
        assert_eq!(section["position"], 2);
    }

    #[test_context(CliTestContext)]
    #[test]
    fn test_caller_identity_is_ignored(ctx: &mut CliTestContext) {
        let announcement = create(ctx, Entity::Announcements, r#"{"id": 99, "title": "Hello", "message": "World"}"#);
        assert_eq!(announcement["id"], 1);
    }

    #[test_context(CliTestContext)]
    #[test]
    fn test_bad_input_maps_to_validation_exit_code(ctx: &mut CliTestContext) {
        let malformed = create_from_json(&ctx.store, Entity::Users, "{").unwrap_err();
        assert_eq!(exit_code(&malformed), EXIT_VALIDATION);

        let missing_field = create_from_json(&ctx.store, Entity::Users, r#"{"name": "Asha"}"#).unwrap_err();
        assert_eq!(exit_code(&missing_field), EXIT_VALIDATION);

        let invalid = create_from_json(&ctx.store, Entity::Tests, r#"{"title": "Math I", "duration_min": 0}"#).unwrap_err();
        assert_eq!(exit_code(&invalid), EXIT_VALIDATION);

        let enforcing = Store::open(ctx.store.config().clone().foreign_keys(true)).unwrap();
        let dangling = create_from_json(&enforcing, Entity::Feedback, r#"{"user_id": 5, "message": "Hi"}"#).unwrap_err();
        assert_eq!(exit_code(&dangling), EXIT_VALIDATION);
    }
}

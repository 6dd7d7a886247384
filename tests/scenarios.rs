#[cfg(test)]
mod tests {
    use mockexam::db::db::Store;
    use mockexam::db::exams::{Test, Tests};
    use mockexam::db::questions::{Question, Questions};
    use mockexam::db::sections::{Section, Sections};
    use mockexam::db::test_attempts::{TestAttempt, TestAttempts};
    use mockexam::db::users::{User, Users};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ScenarioTestContext {
        _temp_dir: TempDir,
        store: Store,
    }

    impl TestContext for ScenarioTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let store = Store::at(temp_dir.path().join("exam.db")).unwrap();
            ScenarioTestContext { _temp_dir: temp_dir, store }
        }
    }

    #[test_context(ScenarioTestContext)]
    #[test]
    fn test_user_and_attempt_chain(ctx: &mut ScenarioTestContext) {
        let users: Users = ctx.store.repository();
        let tests: Tests = ctx.store.repository();
        let attempts: TestAttempts = ctx.store.repository();

        let user = users.create(&User::new("Asha", "a@x.com", "h1")).unwrap();
        assert_eq!(user.id, Some(1));
        assert!(user.created_at.is_some());

        let test = tests.create(&Test::new("Math I", 30)).unwrap();
        assert_eq!(test.id, Some(1));
        assert_eq!(test.total_marks, Some(0));

        let attempt = attempts.create(&TestAttempt::new(1, 1)).unwrap();
        assert_eq!(attempt.id, Some(1));
        assert_eq!(attempt.score, Some(0));
        assert!(attempt.started_at.is_some());
        assert_eq!(attempt.ended_at, None);

        let listed = attempts.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].user_id, Some(1));
        assert_eq!(listed[0].test_id, Some(1));
        assert_eq!(listed[0].score, Some(0));
        assert_eq!(listed[0], attempt);
    }

    #[test_context(ScenarioTestContext)]
    #[test]
    fn test_question_with_explicit_correct_option(ctx: &mut ScenarioTestContext) {
        let questions: Questions = ctx.store.repository();
        let question = Question::new(1, "2+2?", ["3", "4", "5", "6"]).with_answer("B");
        let created = questions.create(&question).unwrap();
        assert_eq!(created.id, Some(1));
        assert_eq!(created.section_id, Some(1));

        let listed = questions.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], created);
        assert_eq!(listed[0], Question { id: Some(1), ..question });
        assert_eq!(listed[0].correct_option.as_deref(), Some("B"));
        assert_eq!(listed[0].question_text, "2+2?");
        assert_eq!(
            [&listed[0].option_a, &listed[0].option_b, &listed[0].option_c, &listed[0].option_d],
            ["3", "4", "5", "6"]
        );
    }

    #[test_context(ScenarioTestContext)]
    #[test]
    fn test_section_for_unknown_test_is_stored(ctx: &mut ScenarioTestContext) {
        let sections: Sections = ctx.store.repository();
        let section = sections.create(&Section::new(1, "Arithmetic")).unwrap();
        assert_eq!(section.id, Some(1));
        assert_eq!(section.test_id, Some(1));
        assert_eq!(section.position, Some(1));
        assert_eq!(sections.list().unwrap(), vec![section]);
    }

    #[test_context(ScenarioTestContext)]
    #[test]
    fn test_store_defaults(ctx: &mut ScenarioTestContext) {
        let test = ctx.store.repository::<Test>().create(&Test::new("Physics", 45)).unwrap();
        assert_eq!(test.total_marks, Some(0));

        let section = ctx.store.repository::<Section>().create(&Section::new(test.id.unwrap(), "Optics")).unwrap();
        assert_eq!(section.position, Some(1));

        let user = ctx.store.repository::<User>().create(&User::new("Ravi", "r@x.com", "h2")).unwrap();
        let attempt = ctx
            .store
            .repository::<TestAttempt>()
            .create(&TestAttempt::new(user.id.unwrap(), test.id.unwrap()))
            .unwrap();
        assert_eq!(attempt.score, Some(0));
    }

    #[test_context(ScenarioTestContext)]
    #[test]
    fn test_explicit_values_override_defaults(ctx: &mut ScenarioTestContext) {
        let mut test = Test::new("Chemistry", 60);
        test.total_marks = Some(100);
        test.description = Some("Organic".to_string());
        let test = ctx.store.repository::<Test>().create(&test).unwrap();
        assert_eq!(test.total_marks, Some(100));
        assert_eq!(test.description.as_deref(), Some("Organic"));

        let mut section = Section::new(test.id.unwrap(), "Alkanes");
        section.position = Some(3);
        assert_eq!(ctx.store.repository::<Section>().create(&section).unwrap().position, Some(3));

        // Two sections may claim the same position.
        assert_eq!(ctx.store.repository::<Section>().create(&section).unwrap().position, Some(3));

        let user = ctx.store.repository::<User>().create(&User::new("Mei", "m@x.com", "h3")).unwrap();
        let mut attempt = TestAttempt::new(user.id.unwrap(), test.id.unwrap());
        attempt.score = Some(0);
        assert_eq!(ctx.store.repository::<TestAttempt>().create(&attempt).unwrap().score, Some(0));
        attempt.score = Some(42);
        assert_eq!(ctx.store.repository::<TestAttempt>().create(&attempt).unwrap().score, Some(42));
    }
}

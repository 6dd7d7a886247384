#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mockexam::db::announcements::{Announcement, Announcements};
    use mockexam::db::attempted_questions::{AttemptedQuestion, AttemptedQuestions};
    use mockexam::db::bookmarks::{Bookmark, Bookmarks};
    use mockexam::db::db::Store;
    use mockexam::db::exams::Test;
    use mockexam::db::feedback::{Feedback, Feedbacks};
    use mockexam::db::questions::Question;
    use mockexam::db::sections::Section;
    use mockexam::db::test_attempts::{TestAttempt, TestAttempts};
    use mockexam::db::users::{User, Users};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct RoundTripTestContext {
        _temp_dir: TempDir,
        store: Store,
    }

    impl TestContext for RoundTripTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let store = Store::at(temp_dir.path().join("exam.db")).unwrap();
            RoundTripTestContext { _temp_dir: temp_dir, store }
        }
    }

    /// Creates test → section → question → user → attempt and returns
    /// (user id, question id, attempt id).
    fn seed(store: &Store) -> (i64, i64, i64) {
        let test = store.repository::<Test>().create(&Test::new("Math I", 30)).unwrap();
        let section = store.repository::<Section>().create(&Section::new(test.id.unwrap(), "Algebra")).unwrap();
        let question = store
            .repository::<Question>()
            .create(&Question::new(section.id.unwrap(), "x+1=2, x?", ["0", "1", "2", "3"]).with_answer("B"))
            .unwrap();
        let user = store.repository::<User>().create(&User::new("Asha", "a@x.com", "h1")).unwrap();
        let attempt = store
            .repository::<TestAttempt>()
            .create(&TestAttempt::new(user.id.unwrap(), test.id.unwrap()))
            .unwrap();
        (user.id.unwrap(), question.id.unwrap(), attempt.id.unwrap())
    }

    #[test_context(RoundTripTestContext)]
    #[test]
    fn test_caller_fields_survive_storage(ctx: &mut RoundTripTestContext) {
        let (user_id, question_id, attempt_id) = seed(&ctx.store);

        let answers: AttemptedQuestions = ctx.store.repository();
        let answer = AttemptedQuestion::new(attempt_id, question_id, Some("B"), Some(true));
        let created = answers.create(&answer).unwrap();
        assert_eq!(created.attempt_id, Some(attempt_id));
        assert_eq!(created.selected_option.as_deref(), Some("B"));
        assert_eq!(created.is_correct, Some(true));
        assert_eq!(answers.list().unwrap(), vec![created]);

        let bookmarks: Bookmarks = ctx.store.repository();
        let bookmark = bookmarks.create(&Bookmark::new(user_id, question_id)).unwrap();
        assert_eq!((bookmark.user_id, bookmark.question_id), (Some(user_id), Some(question_id)));
        assert!(bookmark.created_at.is_some());
        assert_eq!(bookmarks.list().unwrap(), vec![bookmark]);

        let announcements: Announcements = ctx.store.repository();
        let announcement = announcements.create(&Announcement::new("Maintenance", "Down at 2am")).unwrap();
        assert_eq!(announcement.title.as_deref(), Some("Maintenance"));
        assert_eq!(announcements.list().unwrap(), vec![announcement]);

        let feedback: Feedbacks = ctx.store.repository();
        let entry = feedback.create(&Feedback::new(user_id, "Great mock test")).unwrap();
        assert_eq!(entry.message, "Great mock test");
        assert_eq!(feedback.list().unwrap(), vec![entry]);
    }

    #[test_context(RoundTripTestContext)]
    #[test]
    fn test_caller_supplied_timestamps_are_kept(ctx: &mut RoundTripTestContext) {
        let day = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

        let mut user = User::new("Asha", "a@x.com", "h1");
        user.created_at = day.and_hms_opt(8, 30, 0);
        let user = ctx.store.repository::<User>().create(&user).unwrap();
        assert_eq!(user.created_at, day.and_hms_opt(8, 30, 0));

        let test = ctx.store.repository::<Test>().create(&Test::new("Math I", 30)).unwrap();
        let mut attempt = TestAttempt::new(user.id.unwrap(), test.id.unwrap());
        attempt.started_at = day.and_hms_opt(9, 0, 0);
        attempt.ended_at = day.and_hms_opt(9, 30, 0);
        attempt.score = Some(18);

        let attempts: TestAttempts = ctx.store.repository();
        let created = attempts.create(&attempt).unwrap();
        assert_eq!(created.started_at, attempt.started_at);
        assert_eq!(created.ended_at, attempt.ended_at);
        assert_eq!(attempts.list().unwrap(), vec![created]);
    }

    #[test_context(RoundTripTestContext)]
    #[test]
    fn test_optional_fields_stay_absent(ctx: &mut RoundTripTestContext) {
        let announcements: Announcements = ctx.store.repository();
        let blank = Announcement {
            id: None,
            title: None,
            message: None,
            created_at: None,
        };
        let created = announcements.create(&blank).unwrap();
        assert_eq!(created.title, None);
        assert_eq!(created.message, None);

        let (_, question_id, attempt_id) = seed(&ctx.store);
        let skipped = ctx
            .store
            .repository::<AttemptedQuestion>()
            .create(&AttemptedQuestion::new(attempt_id, question_id, None, None))
            .unwrap();
        assert_eq!(skipped.selected_option, None);
        assert_eq!(skipped.is_correct, None);
    }

    #[test_context(RoundTripTestContext)]
    #[test]
    fn test_list_is_in_insertion_order(ctx: &mut RoundTripTestContext) {
        let users: Users = ctx.store.repository();
        for name in ["Asha", "Ravi", "Mei", "Tomas"] {
            users.create(&User::new(name, format!("{}@x.com", name.to_lowercase()), "h")).unwrap();
        }

        let names: Vec<String> = users.list().unwrap().into_iter().map(|u| u.name).collect();
        assert_eq!(names, ["Asha", "Ravi", "Mei", "Tomas"]);
    }
}

use crate::db::announcements::Announcement;
use crate::db::attempted_questions::AttemptedQuestion;
use crate::db::bookmarks::Bookmark;
use crate::db::exams::Test;
use crate::db::feedback::Feedback;
use crate::db::questions::Question;
use crate::db::sections::Section;
use crate::db::test_attempts::TestAttempt;
use crate::db::users::User;
use chrono::NaiveDateTime;
use prettytable::{row, Table};
use std::fmt::Display;

/// Renders records as terminal tables.
pub trait TableView {
    fn header() -> Table;
    fn add_to(&self, table: &mut Table);
}

pub struct View {}

impl View {
    pub fn table<R: TableView>(records: &[R]) -> Table {
        let mut table = R::header();
        for record in records {
            record.add_to(&mut table);
        }
        table
    }

    pub fn print<R: TableView>(records: &[R]) {
        Self::table(records).printstd();
    }
}

fn cell<T: Display>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

fn timestamp(value: &Option<NaiveDateTime>) -> String {
    value.map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string()).unwrap_or_default()
}

impl TableView for User {
    fn header() -> Table {
        let mut table = Table::new();
        table.add_row(row!["ID", "NAME", "EMAIL", "CREATED AT"]);
        table
    }

    // The credential is never printed.
    fn add_to(&self, table: &mut Table) {
        table.add_row(row![cell(&self.id), self.name, self.email, timestamp(&self.created_at)]);
    }
}

impl TableView for Test {
    fn header() -> Table {
        let mut table = Table::new();
        table.add_row(row!["ID", "TITLE", "DESCRIPTION", "TOTAL MARKS", "DURATION (MIN)", "CREATED AT"]);
        table
    }

    fn add_to(&self, table: &mut Table) {
        table.add_row(row![
            cell(&self.id),
            self.title,
            cell(&self.description),
            cell(&self.total_marks),
            self.duration_min,
            timestamp(&self.created_at)
        ]);
    }
}

impl TableView for Section {
    fn header() -> Table {
        let mut table = Table::new();
        table.add_row(row!["ID", "TEST ID", "NAME", "POSITION"]);
        table
    }

    fn add_to(&self, table: &mut Table) {
        table.add_row(row![cell(&self.id), cell(&self.test_id), self.name, cell(&self.position)]);
    }
}

impl TableView for Question {
    fn header() -> Table {
        let mut table = Table::new();
        table.add_row(row!["ID", "SECTION ID", "QUESTION", "A", "B", "C", "D", "ANSWER", "DIFFICULTY"]);
        table
    }

    fn add_to(&self, table: &mut Table) {
        table.add_row(row![
            cell(&self.id),
            cell(&self.section_id),
            self.question_text,
            self.option_a,
            self.option_b,
            self.option_c,
            self.option_d,
            cell(&self.correct_option),
            cell(&self.difficulty)
        ]);
    }
}

impl TableView for TestAttempt {
    fn header() -> Table {
        let mut table = Table::new();
        table.add_row(row!["ID", "USER ID", "TEST ID", "STARTED AT", "ENDED AT", "SCORE"]);
        table
    }

    fn add_to(&self, table: &mut Table) {
        table.add_row(row![
            cell(&self.id),
            cell(&self.user_id),
            cell(&self.test_id),
            timestamp(&self.started_at),
            timestamp(&self.ended_at),
            cell(&self.score)
        ]);
    }
}

impl TableView for AttemptedQuestion {
    fn header() -> Table {
        let mut table = Table::new();
        table.add_row(row!["ID", "ATTEMPT ID", "QUESTION ID", "SELECTED", "CORRECT"]);
        table
    }

    fn add_to(&self, table: &mut Table) {
        table.add_row(row![
            cell(&self.id),
            cell(&self.attempt_id),
            cell(&self.question_id),
            cell(&self.selected_option),
            cell(&self.is_correct)
        ]);
    }
}

impl TableView for Bookmark {
    fn header() -> Table {
        let mut table = Table::new();
        table.add_row(row!["ID", "USER ID", "QUESTION ID", "CREATED AT"]);
        table
    }

    fn add_to(&self, table: &mut Table) {
        table.add_row(row![cell(&self.id), cell(&self.user_id), cell(&self.question_id), timestamp(&self.created_at)]);
    }
}

impl TableView for Announcement {
    fn header() -> Table {
        let mut table = Table::new();
        table.add_row(row!["ID", "TITLE", "MESSAGE", "CREATED AT"]);
        table
    }

    fn add_to(&self, table: &mut Table) {
        table.add_row(row![cell(&self.id), cell(&self.title), cell(&self.message), timestamp(&self.created_at)]);
    }
}

impl TableView for Feedback {
    fn header() -> Table {
        let mut table = Table::new();
        table.add_row(row!["ID", "USER ID", "MESSAGE", "CREATED AT"]);
        table
    }

    fn add_to(&self, table: &mut Table) {
        table.add_row(row![cell(&self.id), cell(&self.user_id), self.message, timestamp(&self.created_at)]);
    }
}

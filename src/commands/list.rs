use crate::db::announcements::Announcement;
use crate::db::attempted_questions::AttemptedQuestion;
use crate::db::bookmarks::Bookmark;
use crate::db::db::Store;
use crate::db::exams::Test;
use crate::db::feedback::Feedback;
use crate::db::questions::Question;
use crate::db::repository::Record;
use crate::db::schema::Entity;
use crate::db::sections::Section;
use crate::db::test_attempts::TestAttempt;
use crate::db::users::User;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::{TableView, View};
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Entity to list
    #[arg(value_enum)]
    pub entity: Entity,

    /// Print a table instead of JSON
    #[arg(short, long)]
    pub table: bool,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let store = super::open_store(Config::read()?.store_config())?;
    match args.entity {
        Entity::Users => print::<User>(&store, args.table),
        Entity::Tests => print::<Test>(&store, args.table),
        Entity::Sections => print::<Section>(&store, args.table),
        Entity::Questions => print::<Question>(&store, args.table),
        Entity::TestAttempts => print::<TestAttempt>(&store, args.table),
        Entity::AttemptedQuestions => print::<AttemptedQuestion>(&store, args.table),
        Entity::Bookmarks => print::<Bookmark>(&store, args.table),
        Entity::Announcements => print::<Announcement>(&store, args.table),
        Entity::Feedback => print::<Feedback>(&store, args.table),
    }
}

fn print<R>(store: &Store, table: bool) -> Result<()>
where
    R: Record + Serialize + TableView,
{
    let records = store.repository::<R>().list()?;

    if !table {
        msg_print!(serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        msg_info!(Message::NoRecordsFound(R::ENTITY));
        return Ok(());
    }
    View::print(&records);
    Ok(())
}

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
use crate::{msg_info, msg_print, msg_success};
use anyhow::{Context, Result};
use clap::Args;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{self, Read};

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Entity to create
    #[arg(value_enum)]
    pub entity: Entity,

    /// Record as JSON; read from stdin when omitted. Any `id` is ignored.
    #[arg(short, long)]
    pub data: Option<String>,
}

pub fn cmd(args: CreateArgs) -> Result<()> {
    let body = match args.data {
        Some(data) => data,
        None => {
            msg_info!(Message::ReadingRecordFromStdin(args.entity));
            let mut body = String::new();
            io::stdin().read_to_string(&mut body)?;
            body
        }
    };

    let store = super::open_store(Config::read()?.store_config())?;
    let stored = create_from_json(&store, args.entity, &body)?;
    msg_print!(stored);
    Ok(())
}

/// Parses `body` as a record of `entity`, creates it, and returns the stored
/// record as pretty-printed JSON.
pub fn create_from_json(store: &Store, entity: Entity, body: &str) -> Result<String> {
    match entity {
        Entity::Users => create::<User>(store, body),
        Entity::Tests => create::<Test>(store, body),
        Entity::Sections => create::<Section>(store, body),
        Entity::Questions => create::<Question>(store, body),
        Entity::TestAttempts => create::<TestAttempt>(store, body),
        Entity::AttemptedQuestions => create::<AttemptedQuestion>(store, body),
        Entity::Bookmarks => create::<Bookmark>(store, body),
        Entity::Announcements => create::<Announcement>(store, body),
        Entity::Feedback => create::<Feedback>(store, body),
    }
}

fn create<R>(store: &Store, body: &str) -> Result<String>
where
    R: Record + Serialize + DeserializeOwned,
{
    let record: R = serde_json::from_str(body).with_context(|| format!("invalid {} record", R::ENTITY))?;
    let created = store.repository::<R>().create(&record)?;

    msg_success!(Message::RecordCreated {
        entity: R::ENTITY,
        id: created.id().unwrap_or_default(),
    });
    Ok(serde_json::to_string_pretty(&created)?)
}

use crate::db::{db::Db, schema};
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;

/// Prepares the storage directory, seeds the database file from the bundled
/// template when missing and brings the schema up to date. Safe to run any
/// number of times.
pub fn cmd() -> Result<()> {
    let db = Db::new()?;
    msg_info!(Message::StorageReady(db.path().display().to_string()));

    schema::ensure_schema(&db)?;
    msg_success!(Message::SchemaReady);

    Ok(())
}

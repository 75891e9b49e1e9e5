use crate::db::categories::Categories;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_info;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let categories = Categories::new()?.fetch_all()?;

    if categories.is_empty() {
        msg_info!(Message::NoCategoriesFound);
        return Ok(());
    }

    View::categories(&categories)
}

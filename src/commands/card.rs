use anyhow::Result;
use std::fmt::Write;
use std::path::Path;

use super::read_json;
use crate::models::Collection;
use crate::view::CollectionCard;

pub fn run(path: &Path, community_id: i64, json: bool) -> Result<()> {
    let collection: Collection = read_json(path)?;
    let card = CollectionCard::new(&collection, community_id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&card)?);
    } else {
        print!("{}", format_card(&card)?);
    }
    Ok(())
}

pub fn format_card(card: &CollectionCard) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{}", card.title)?;
    if !card.description.is_empty() {
        writeln!(out, "{}", card.description)?;
    }
    writeln!(out, "Link: {}", card.link)?;
    if let Some(icon) = &card.icon {
        writeln!(out, "Icon: {}", icon)?;
    }
    writeln!(
        out,
        "Resources: {}  Followers: {}",
        card.resource_count, card.follower_count
    )?;
    writeln!(out, "[{}]", card.join.label())?;
    Ok(out)
}

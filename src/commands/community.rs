use anyhow::Result;
use std::fmt::Write;
use std::path::Path;

use super::card::format_card;
use super::read_json;
use crate::models::CommunityQuery;
use crate::view::{
    CollectionsPanel, CommunityPage, DiscussionPanel, PageState, Tab, NO_COLLECTIONS_NOTICE,
};

pub fn run(path: &Path, tab: Option<&str>, json: bool) -> Result<()> {
    let query: CommunityQuery = read_json(path)?;
    let tab = match tab {
        Some(t) => t.parse::<Tab>()?,
        None => Tab::default(),
    };

    let state = match PageState::from_query(&query)? {
        PageState::Ready(page) => PageState::Ready(Box::new((*page).with_tab(tab))),
        other => other,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print!("{}", format_state(&state)?);
    }
    Ok(())
}

pub fn format_state(state: &PageState) -> Result<String> {
    match state {
        PageState::Loading => Ok("Loading...\n".to_string()),
        PageState::Failed { message } => Ok(format!("{}\n", message)),
        PageState::Ready(page) => format_page(page),
    }
}

fn format_page(page: &CommunityPage) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "Communities > {}\n", page.breadcrumb)?;
    writeln!(out, "{}", page.hero.name)?;
    if !page.hero.summary.is_empty() {
        writeln!(out, "{}", page.hero.summary)?;
    }
    writeln!(out, "[{}]\n", page.hero.join.label())?;

    let tabs: Vec<String> = page
        .tabs
        .iter()
        .map(|t| {
            if *t == page.selected_tab {
                format!("*{}*", t)
            } else {
                t.to_string()
            }
        })
        .collect();
    write!(out, "{}", tabs.join(" | "))?;
    if page.editable {
        write!(out, "  [Edit]")?;
    }
    writeln!(out, "\n")?;

    match page.selected_tab {
        Tab::Collections => match &page.collections {
            CollectionsPanel::List { cards, action } => {
                for card in cards {
                    writeln!(out, "{}", format_card(card)?)?;
                }
                writeln!(out, "{}", action.label())?;
            }
            CollectionsPanel::Empty { action } => {
                writeln!(out, "{}", NO_COLLECTIONS_NOTICE)?;
                writeln!(out, "{}", action.label())?;
            }
        },
        Tab::Discussion => match &page.discussion {
            DiscussionPanel::Thread { local_id, .. } => {
                writeln!(out, "Discussion thread for community #{}", local_id)?;
            }
            DiscussionPanel::JoinToDiscuss => {
                writeln!(out, "{}", DiscussionPanel::JOIN_PROMPT)?;
            }
        },
    }
    Ok(out)
}

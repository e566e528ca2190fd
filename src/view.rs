//! View models for collection cards and community pages.
//!
//! These are plain data derived from query records. Drawing them is left to
//! the caller; the `cards` binary prints them as text or JSON.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::{Collection, Community, CommunityQuery};
use crate::summarize::{Summarizer, DESCRIPTION_BUDGET, TITLE_BUDGET};

/// Communities whose page never offers the Edit button.
pub const LOCKED_COMMUNITIES: [i64; 2] = [7, 15];

pub const LOAD_ERROR_MESSAGE: &str = "Error loading collections";
pub const NO_COLLECTIONS_NOTICE: &str = "This community has no collections.";

/// State of a Join/Leave button for a community or collection.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JoinButton {
    pub followed: bool,
    pub local_id: i64,
    pub external_id: String,
}

impl JoinButton {
    pub fn label(&self) -> &'static str {
        if self.followed {
            "Leave"
        } else {
            "Join"
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CollectionCard {
    pub title: String,
    pub description: String,
    pub link: String,
    pub icon: Option<String>,
    pub resource_count: u64,
    pub follower_count: u64,
    pub join: JoinButton,
}

impl CollectionCard {
    pub fn new(collection: &Collection, community_local_id: i64) -> Result<Self> {
        let title = Summarizer::new(TITLE_BUDGET)?.summarize(&collection.name);
        let description = Summarizer::new(DESCRIPTION_BUDGET)?.summarize(&collection.summary);

        Ok(Self {
            title,
            description,
            link: collection_link(community_local_id, collection.local_id),
            icon: collection.icon.clone(),
            resource_count: collection.resources.total_count.unwrap_or(0),
            follower_count: collection.followers_count.unwrap_or(0),
            join: JoinButton {
                followed: collection.followed,
                local_id: collection.local_id,
                external_id: collection.id.clone(),
            },
        })
    }
}

pub fn collection_link(community_local_id: i64, collection_local_id: i64) -> String {
    format!(
        "/communities/{}/collections/{}",
        community_local_id, collection_local_id
    )
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Collections,
    Discussion,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Collections, Tab::Discussion];
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tab::Collections => write!(f, "Collections"),
            Tab::Discussion => write!(f, "Discussion"),
        }
    }
}

impl FromStr for Tab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "collections" => Ok(Tab::Collections),
            "discussion" => Ok(Tab::Discussion),
            _ => Err(Error::InvalidArgument(format!(
                "unknown tab '{}', expected 'collections' or 'discussion'",
                s
            ))),
        }
    }
}

/// What the viewer is offered below the collections list.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CollectionAction {
    CreateCollection,
    CreateFirstCollection,
    JoinToCreate,
}

impl CollectionAction {
    fn for_community(followed: bool, has_collections: bool) -> Self {
        match (followed, has_collections) {
            (false, _) => CollectionAction::JoinToCreate,
            (true, true) => CollectionAction::CreateCollection,
            (true, false) => CollectionAction::CreateFirstCollection,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CollectionAction::CreateCollection => "Create a new collection",
            CollectionAction::CreateFirstCollection => "Create the first collection",
            CollectionAction::JoinToCreate => "Join the community to create a collection",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CollectionsPanel {
    List {
        cards: Vec<CollectionCard>,
        action: CollectionAction,
    },
    Empty {
        action: CollectionAction,
    },
}

impl CollectionsPanel {
    pub fn action(&self) -> CollectionAction {
        match self {
            CollectionsPanel::List { action, .. } | CollectionsPanel::Empty { action } => *action,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiscussionPanel {
    Thread { local_id: i64, external_id: String },
    JoinToDiscuss,
}

impl DiscussionPanel {
    pub const JOIN_PROMPT: &'static str = "Join the community to discuss";
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Hero {
    pub name: String,
    pub summary: String,
    pub icon: Option<String>,
    pub join: JoinButton,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CommunityPage {
    pub breadcrumb: String,
    pub hero: Hero,
    pub tabs: [Tab; 2],
    pub selected_tab: Tab,
    pub collections: CollectionsPanel,
    pub discussion: DiscussionPanel,
    pub editable: bool,
}

impl CommunityPage {
    pub fn new(community: &Community) -> Result<Self> {
        let cards = community
            .collections
            .iter()
            .map(|collection| CollectionCard::new(collection, community.local_id))
            .collect::<Result<Vec<_>>>()?;

        let action = CollectionAction::for_community(community.followed, !cards.is_empty());
        let collections = if cards.is_empty() {
            CollectionsPanel::Empty { action }
        } else {
            CollectionsPanel::List { cards, action }
        };

        let discussion = if community.followed {
            DiscussionPanel::Thread {
                local_id: community.local_id,
                external_id: community.id.clone(),
            }
        } else {
            DiscussionPanel::JoinToDiscuss
        };

        debug!(
            community = community.local_id,
            collections = community.collections.len(),
            "built community page"
        );

        Ok(Self {
            breadcrumb: community.name.clone(),
            hero: Hero {
                name: community.name.clone(),
                summary: community.summary.clone(),
                icon: community.icon.clone(),
                join: JoinButton {
                    followed: community.followed,
                    local_id: community.local_id,
                    external_id: community.id.clone(),
                },
            },
            tabs: Tab::ALL,
            selected_tab: Tab::default(),
            collections,
            discussion,
            editable: !LOCKED_COMMUNITIES.contains(&community.local_id),
        })
    }

    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.selected_tab = tab;
        self
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PageState {
    Loading,
    Failed { message: String },
    Ready(Box<CommunityPage>),
}

impl PageState {
    pub fn from_query(query: &CommunityQuery) -> Result<Self> {
        if let Some(err) = &query.error {
            warn!(error = %err, "community query failed");
            return Ok(PageState::Failed {
                message: LOAD_ERROR_MESSAGE.to_string(),
            });
        }
        if query.loading {
            return Ok(PageState::Loading);
        }
        match &query.community {
            Some(community) => Ok(PageState::Ready(Box::new(CommunityPage::new(community)?))),
            None => Ok(PageState::Loading),
        }
    }
}

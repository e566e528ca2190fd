use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCount {
    #[serde(default)]
    pub total_count: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub local_id: i64,
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub followed: bool,
    #[serde(default)]
    pub followers_count: Option<u64>,
    #[serde(default)]
    pub resources: ResourceCount,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    pub id: String,
    pub local_id: i64,
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub followed: bool,
    #[serde(default)]
    pub followers_count: Option<u64>,
    #[serde(default)]
    pub collections: Vec<Collection>,
}

/// Controls and data of a community query, as handed to the page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommunityQuery {
    #[serde(default)]
    pub loading: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub community: Option<Community>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_collection() -> Collection {
        Collection {
            id: "c-abc".to_string(),
            local_id: 3,
            name: "Open textbooks".to_string(),
            summary: "Free material for first year courses".to_string(),
            icon: Some("https://example.org/icon.png".to_string()),
            followed: true,
            followers_count: Some(12),
            resources: ResourceCount {
                total_count: Some(4),
            },
        }
    }

    // ==================== Collection Tests ====================

    #[test]
    fn test_collection_reads_camel_case() {
        let json = r#"{
            "id": "c-1",
            "localId": 9,
            "name": "Maths",
            "summary": "Algebra and more",
            "followersCount": 5,
            "resources": { "totalCount": 2 }
        }"#;

        let collection: Collection = serde_json::from_str(json).unwrap();

        assert_eq!(collection.local_id, 9);
        assert_eq!(collection.followers_count, Some(5));
        assert_eq!(collection.resources.total_count, Some(2));
        assert!(!collection.followed);
        assert_eq!(collection.icon, None);
    }

    #[test]
    fn test_collection_missing_counts() {
        let json = r#"{ "id": "c-1", "localId": 1, "name": "Bare" }"#;
        let collection: Collection = serde_json::from_str(json).unwrap();

        assert_eq!(collection.summary, "");
        assert_eq!(collection.followers_count, None);
        assert_eq!(collection.resources.total_count, None);
    }

    #[test]
    fn test_collection_serialization_json() {
        let collection = sample_collection();
        let json = serde_json::to_string(&collection).unwrap();

        assert!(json.contains("\"localId\":3"));
        assert!(json.contains("\"followersCount\":12"));

        let deserialized: Collection = serde_json::from_str(&json).unwrap();
        assert_eq!(collection, deserialized);
    }

    #[test]
    fn test_collection_requires_name() {
        let json = r#"{ "id": "c-1", "localId": 1 }"#;
        assert!(serde_json::from_str::<Collection>(json).is_err());
    }

    // ==================== Community Tests ====================

    #[test]
    fn test_community_with_collections() {
        let json = r#"{
            "id": "m-1",
            "localId": 2,
            "name": "Teachers",
            "summary": "A place for teachers",
            "followed": true,
            "collections": [
                { "id": "c-1", "localId": 10, "name": "One" },
                { "id": "c-2", "localId": 11, "name": "Two" }
            ]
        }"#;

        let community: Community = serde_json::from_str(json).unwrap();

        assert!(community.followed);
        assert_eq!(community.collections.len(), 2);
        assert_eq!(community.collections[1].local_id, 11);
    }

    #[test]
    fn test_community_unicode_fields() {
        let json = r#"{ "id": "m-1", "localId": 2, "name": "日本語 🎉", "summary": "Ünïcödé" }"#;
        let community: Community = serde_json::from_str(json).unwrap();

        assert_eq!(community.name, "日本語 🎉");
        assert!(community.collections.is_empty());
    }

    // ==================== Query Tests ====================

    #[test]
    fn test_query_defaults() {
        let query: CommunityQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query, CommunityQuery::default());
        assert!(!query.loading);
    }

    #[test]
    fn test_query_with_error() {
        let query: CommunityQuery =
            serde_json::from_str(r#"{ "error": "network down" }"#).unwrap();
        assert_eq!(query.error.as_deref(), Some("network down"));
        assert!(query.community.is_none());
    }

    proptest! {
        #[test]
        fn prop_collection_json_roundtrip(
            name in "\\PC{1,100}",
            summary in "\\PC{0,400}",
            local_id in any::<i64>(),
            followed in proptest::bool::ANY,
            followers in proptest::option::of(0u64..10_000)
        ) {
            let collection = Collection {
                id: format!("c-{}", local_id),
                local_id,
                name,
                summary,
                icon: None,
                followed,
                followers_count: followers,
                resources: ResourceCount::default(),
            };
            let json = serde_json::to_string(&collection).unwrap();
            let parsed: Collection = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(parsed, collection);
        }
    }
}

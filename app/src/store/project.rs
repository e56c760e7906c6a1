use serde::{Deserialize, Serialize};

/// One portfolio entry. `created_at` is only used by the store to order the
/// collection, it is never displayed.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub cover_image: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Wire representation of a store document: the store-assigned identifier
/// next to an untyped field map.
#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug)]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub fields: serde_json::Value,
}

// The store speaks camelCase.
#[cfg(feature = "ssr")]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Fields {
    title: String,
    description: String,
    category: String,
    cover_image: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(feature = "ssr")]
impl Project {
    /// Merge the store-assigned identifier with a validated view of the
    /// document's field map. A field map that does not carry every expected
    /// field with the expected type is a decode error, not a partial record.
    pub fn decode(document: Document) -> crate::store::Result<Self> {
        let fields: Fields =
            serde_json::from_value(document.fields).map_err(|error| {
                crate::store::Error::Decode {
                    error: error.to_string(),
                    id: document.id.clone(),
                }
            })?;
        Ok(Self {
            id: document.id,
            title: fields.title,
            description: fields.description,
            category: fields.category,
            cover_image: fields.cover_image,
            created_at: fields.created_at,
        })
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn decode_well_formed_document() {
        let document: Document = serde_json::from_value(serde_json::json!({
            "id": "a",
            "fields": {
                "title": "Foo",
                "description": "A thing I made",
                "category": "Web",
                "coverImage": "https://assets.example.net/foo.webp",
                "createdAt": "2025-11-02T09:30:00Z",
            },
        }))
        .unwrap();

        let project = Project::decode(document).unwrap();
        assert_eq!("a", project.id);
        assert_eq!("Foo", project.title);
        assert_eq!("Web", project.category);
        assert_eq!("https://assets.example.net/foo.webp", project.cover_image);
    }

    #[test]
    fn decode_rejects_missing_field() {
        let document: Document = serde_json::from_value(serde_json::json!({
            "id": "b",
            "fields": {
                "description": "No title on this one",
                "category": "Design",
                "coverImage": "https://assets.example.net/bar.webp",
                "createdAt": "2025-11-01T10:00:00Z",
            },
        }))
        .unwrap();

        match Project::decode(document) {
            Err(crate::store::Error::Decode { id, .. }) => assert_eq!("b", id),
            other => panic!("expected a decode error, got {:?}", other),
        }
    }

    #[test]
    fn decode_rejects_ill_typed_timestamp() {
        let document: Document = serde_json::from_value(serde_json::json!({
            "id": "c",
            "fields": {
                "title": "Baz",
                "description": "Timestamp is not RFC 3339",
                "category": "Web",
                "coverImage": "https://assets.example.net/baz.webp",
                "createdAt": "yesterday",
            },
        }))
        .unwrap();

        assert!(Project::decode(document).is_err());
    }
}

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};

/// The three catalogue collections exposed by the upstream API.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    #[default]
    People,
    Planets,
    Vehicles,
}

impl EntityKind {
    /// Every kind, in navigation order.
    pub const ALL: [Self; 3] = [Self::People, Self::Planets, Self::Vehicles];

    /// Path segment used by the upstream API and by the stored favorites.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::People => "people",
            Self::Planets => "planets",
            Self::Vehicles => "vehicles",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "people" => Ok(Self::People),
            "planets" => Ok(Self::Planets),
            "vehicles" => Ok(Self::Vehicles),
            _ => Err("unknown catalogue kind"),
        }
    }
}

/// One entry of a paginated catalogue listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogueItem {
    /// Identifier, unique within its kind.
    pub uid: String,
    /// Display name.
    pub name: String,
    /// Detail endpoint for this item.
    pub url: String,
}

/// A page of catalogue items with its opaque navigation cursors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page {
    /// Items on this page, replaced wholesale on every fetch.
    #[serde(rename = "results", default)]
    pub items: Vec<CatalogueItem>,
    /// Cursor URL of the previous page, if any.
    #[serde(default)]
    pub previous: Option<String>,
    /// Cursor URL of the next page, if any.
    #[serde(default)]
    pub next: Option<String>,
}

impl Page {
    /// Whether a "Previous" control should be enabled.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Whether a "Next" control should be enabled.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Items whose name contains `term`, ignoring case.
    #[must_use]
    pub fn filter_by_name(&self, term: &str) -> Vec<&CatalogueItem> {
        let needle = term.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .collect()
    }
}

/// A single label/value row of a detail view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Property {
    pub label: String,
    pub value: String,
}

/// Flattens a `{"result": {"properties": {...}}}` document into ordered rows.
///
/// Row order follows the key order of the source document. String values are
/// taken verbatim, other scalars use their JSON rendering.
///
/// # Errors
/// Returns an error when the document does not carry a `result.properties` object.
pub fn flatten_properties(document: &Value) -> Result<Vec<Property>, serde_json::Error> {
    let Some(properties) = document
        .get("result")
        .and_then(|result| result.get("properties"))
        .and_then(Value::as_object)
    else {
        return Err(serde::de::Error::custom(
            "missing result.properties object",
        ));
    };

    Ok(properties
        .iter()
        .map(|(label, value)| Property {
            label: label.clone(),
            value: match value {
                Value::String(text) => text.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            },
        })
        .collect())
}

/// A favorited catalogue item. `(uid, kind)` is the identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FavoriteEntry {
    #[serde(deserialize_with = "uid_from_text_or_number")]
    pub uid: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Reads a uid stored as text or as a bare number; `0` reads as empty.
fn uid_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StoredUid {
        Text(String),
        Number(u64),
    }

    Ok(match StoredUid::deserialize(deserializer)? {
        StoredUid::Text(uid) => uid,
        StoredUid::Number(0) => String::new(),
        StoredUid::Number(uid) => uid.to_string(),
    })
}

impl FavoriteEntry {
    /// Builds an entry from a listed item.
    #[must_use]
    pub fn from_item(item: &CatalogueItem, kind: EntityKind) -> Self {
        Self {
            uid: item.uid.clone(),
            kind,
            name: Some(item.name.clone()),
            url: Some(item.url.clone()),
        }
    }

    /// Whether this entry refers to `(uid, kind)`.
    #[must_use]
    pub fn matches(&self, uid: &str, kind: EntityKind) -> bool {
        self.uid == uid && self.kind == kind
    }
}

/// Loosely-typed toggle request as emitted by views.
///
/// Views may emit it without a uid or kind; such payloads are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LikePayload {
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<EntityKind>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl LikePayload {
    /// Payload for a listed item.
    #[must_use]
    pub fn for_item(item: &CatalogueItem, kind: EntityKind) -> Self {
        Self {
            uid: Some(item.uid.clone()),
            kind: Some(kind),
            name: Some(item.name.clone()),
            url: Some(item.url.clone()),
        }
    }

    /// Converts into an entry when both uid and kind are present.
    #[must_use]
    pub fn into_entry(self) -> Option<FavoriteEntry> {
        let uid = self.uid.filter(|uid| !uid.is_empty())?;
        let kind = self.kind?;
        Some(FavoriteEntry {
            uid,
            kind,
            name: self.name,
            url: self.url,
        })
    }
}

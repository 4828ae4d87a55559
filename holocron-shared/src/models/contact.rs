use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Backend-assigned contact identifier.
///
/// The contacts API issues numeric ids, but string ids are accepted so that
/// collections imported from other sources still round-trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum ContactId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<u64> for ContactId {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for ContactId {
    fn from(id: &str) -> Self {
        id.parse().map_or_else(|_| Self::Text(id.to_owned()), Self::Number)
    }
}

/// A contact as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
}

/// Reads a `null` text field as empty.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Contact {
    /// Overwrites every field present in `patch`.
    pub fn merge(&mut self, patch: &ContactPatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(address) = &patch.address {
            self.address.clone_from(address);
        }
        if let Some(phone) = &patch.phone {
            self.phone.clone_from(phone);
        }
        if let Some(email) = &patch.email {
            self.email.clone_from(email);
        }
    }

    /// Whether any of name, email, phone or address contains `term`, ignoring case.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        [&self.name, &self.email, &self.phone, &self.address]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Partial update of a contact, keyed by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactPatch {
    pub id: ContactId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ContactPatch {
    /// A patch carrying only the id.
    #[must_use]
    pub const fn new(id: ContactId) -> Self {
        Self {
            id,
            name: None,
            address: None,
            phone: None,
            email: None,
        }
    }
}

/// Request body for creating or replacing a contact.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl From<&Contact> for ContactForm {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            address: contact.address.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
        }
    }
}

/// What the contact form is currently doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditIntent {
    Create,
    Edit(Contact),
}

impl EditIntent {
    /// HTTP method the form submits with.
    #[must_use]
    pub const fn method(&self) -> &'static str {
        match self {
            Self::Create => "POST",
            Self::Edit(_) => "PUT",
        }
    }

    /// Initial form values.
    #[must_use]
    pub fn form(&self) -> ContactForm {
        match self {
            Self::Create => ContactForm::default(),
            Self::Edit(contact) => ContactForm::from(contact),
        }
    }
}

/// Body returned by `GET /agendas/{user}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Agenda {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

//! Member records served by the members endpoint.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use ustr::Ustr;

/// One row of the members table.
///
/// Ids are interned (`Ustr`) since they are cloned into the selection set and
/// compared on every row render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: Ustr,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Member {
    pub fn new(
        id: impl AsRef<str>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: Ustr::from(id.as_ref()),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Text of every attribute, id first. Search matches against these.
    pub fn attribute_texts(&self) -> [&str; 4] {
        [self.id.as_str(), &self.name, &self.email, &self.role]
    }

    pub fn field(&self, field: MemberField) -> &str {
        match field {
            MemberField::Name => &self.name,
            MemberField::Email => &self.email,
            MemberField::Role => &self.role,
        }
    }

    pub fn field_mut(&mut self, field: MemberField) -> &mut String {
        match field {
            MemberField::Name => &mut self.name,
            MemberField::Email => &mut self.email,
            MemberField::Role => &mut self.role,
        }
    }
}

/// The endpoint serves ids as strings, but numeric ids are accepted too.
fn deserialize_id<'de, D>(deserializer: D) -> Result<Ustr, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => Ustr::from(&text),
        RawId::Number(number) => Ustr::from(&number.to_string()),
    })
}

/// Editable attributes of a member. The id is not editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberField {
    Name,
    Email,
    Role,
}

impl MemberField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Role];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Role => "role",
        }
    }
}

impl fmt::Display for MemberField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

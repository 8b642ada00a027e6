//! A general-purpose record type.
//!
//! `Entry` carries the fields the store needs plus any other frontmatter keys
//! untouched, so it can read and rewrite files written for richer record
//! types without losing data.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::store::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Every other frontmatter field, in file order.
    #[serde(flatten)]
    pub extra: Mapping,

    #[serde(skip)]
    pub body: String,
}

impl Entry {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into(), ..Self::default() }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set an extra frontmatter field.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.extra.insert(Value::String(key.to_string()), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

impl Record for Entry {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn body(&self) -> &str {
        &self.body
    }

    fn set_body(&mut self, body: String) {
        self.body = body;
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;

/// Symbolic key addressing one link inside a keyed group (e.g. `github`).
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkKey(pub String);

impl LinkKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LinkKey {
    fn from(value: &str) -> Self {
        LinkKey(value.to_string())
    }
}

impl fmt::Display for LinkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rendering discriminator carried by every link in the JSON export.
///
/// Unlike open-ended catalog fields there is no catch-all variant: the
/// rendering layer only knows these two elements, so anything else is a
/// parse error.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LinkType {
    /// Client-routed `<nuxt-link>`.
    NuxtLink,
    /// Native `<a>` element.
    ALink,
}

impl LinkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkType::NuxtLink => "nuxtLink",
            LinkType::ALink => "aLink",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "nuxtLink" => Some(LinkType::NuxtLink),
            "aLink" => Some(LinkType::ALink),
            _ => None,
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LinkType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LinkType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).ok_or_else(|| {
            de::Error::unknown_variant(&value, &["nuxtLink", "aLink"])
        })
    }
}

/// Analytics tag attached to a link; consumed by the site's tracking layer.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SegmentData {
    pub action: String,
}

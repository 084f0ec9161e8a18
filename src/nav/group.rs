//! Keyed groups of links (`github`, `terra`, ...).
//!
//! A group keeps entries in declaration order, which is also display order,
//! and offers lookup by key. Ordered lists are derived from a group either
//! wholesale or by selecting keys explicitly.

use crate::nav::identity::LinkKey;
use crate::nav::link::NavLink;
use anyhow::{Result, bail};
use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
/// Ordered key → link mapping.
pub struct LinkGroup {
    entries: Vec<(LinkKey, NavLink)>,
}

impl LinkGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, builder style.
    ///
    /// Duplicate keys are kept so validation can report them; lookups resolve
    /// to the first entry.
    pub fn with(mut self, key: &str, link: impl Into<NavLink>) -> Self {
        self.push(key, link);
        self
    }

    pub fn push(&mut self, key: &str, link: impl Into<NavLink>) {
        self.entries.push((LinkKey::from(key), link.into()));
    }

    pub fn get(&self, key: &str) -> Option<&NavLink> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate.as_str() == key)
            .map(|(_, link)| link)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &LinkKey> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LinkKey, &NavLink)> {
        self.entries.iter().map(|(key, link)| (key, link))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Links in declaration order.
    pub fn ordered(&self) -> Vec<NavLink> {
        self.entries.iter().map(|(_, link)| link.clone()).collect()
    }

    /// Links for `keys`, in the order given.
    ///
    /// Fails on the first key the group does not define so a typo cannot
    /// silently drop a menu entry.
    pub fn select(&self, keys: &[&str]) -> Result<Vec<NavLink>> {
        let mut selected = Vec::with_capacity(keys.len());
        for key in keys {
            match self.get(key) {
                Some(link) => selected.push(link.clone()),
                None => bail!("link group has no entry '{key}'"),
            }
        }
        Ok(selected)
    }
}

impl Serialize for LinkGroup {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, link) in &self.entries {
            map.serialize_entry(key, link)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LinkGroup {
        LinkGroup::new()
            .with("github", NavLink::external("GitHub", "https://github.com/Qiskit"))
            .with("slack", NavLink::external("Slack", "https://qiskit.slack.com/"))
            .with("twitter", NavLink::external("Twitter", "https://twitter.com/Qiskit"))
    }

    #[test]
    fn ordered_follows_declaration_order() {
        let labels: Vec<_> = sample()
            .ordered()
            .iter()
            .map(|link| link.label().to_string())
            .collect();
        assert_eq!(labels, ["GitHub", "Slack", "Twitter"]);
    }

    #[test]
    fn select_respects_requested_order() {
        let picked = sample().select(&["twitter", "github"]).unwrap();
        assert_eq!(picked[0].label(), "Twitter");
        assert_eq!(picked[1].label(), "GitHub");
    }

    #[test]
    fn select_fails_on_unknown_key() {
        let err = sample().select(&["github", "mastodon"]).unwrap_err();
        assert!(err.to_string().contains("mastodon"));
    }

    #[test]
    fn lookup_by_key() {
        let group = sample();
        assert_eq!(
            group.get("slack").map(NavLink::url),
            Some("https://qiskit.slack.com/")
        );
        assert!(group.get("medium").is_none());
        assert_eq!(group.len(), 3);
        assert!(group.contains("github"));
    }

    #[test]
    fn serializes_as_keyed_object_in_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        let github = json.find("\"github\"").unwrap();
        let twitter = json.find("\"twitter\"").unwrap();
        assert!(github < twitter);
    }
}

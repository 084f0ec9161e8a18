//! Registry of keyed link groups, addressable by group name.
//!
//! The CLI and tests resolve individual links as `group/key` (for example
//! `social-media/github`) through this registry rather than reaching for the
//! statics directly.

use crate::nav::data;
use crate::nav::group::LinkGroup;
use crate::nav::link::NavLink;
use std::collections::BTreeMap;

/// Names of the bundled groups, in the order the site declares them.
pub const BUNDLED_GROUP_NAMES: [&str; 6] = [
    "qiskit-elements",
    "social-media",
    "community",
    "education",
    "advocates",
    "experiments",
];

#[derive(Clone, Debug, Default)]
/// In-memory store of link groups keyed by name.
pub struct LinkRepository {
    groups: BTreeMap<String, LinkGroup>,
}

impl LinkRepository {
    /// Repository holding every group the site ships.
    pub fn bundled() -> Self {
        let mut repo = Self::default();
        for name in BUNDLED_GROUP_NAMES {
            if let Some(group) = bundled_group(name) {
                repo.register(name, group.clone());
            }
        }
        repo
    }

    /// Register a group; a later registration under the same name wins.
    pub fn register(&mut self, name: &str, group: LinkGroup) {
        self.groups.insert(name.to_string(), group);
    }

    pub fn get(&self, name: &str) -> Option<&LinkGroup> {
        self.groups.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Resolve a link inside a registered group.
    pub fn find_link(&self, group: &str, key: &str) -> Option<&NavLink> {
        self.get(group)?.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LinkGroup)> {
        self.groups.iter().map(|(name, group)| (name.as_str(), group))
    }
}

/// Look up one of the bundled statics by group name.
pub fn bundled_group(name: &str) -> Option<&'static LinkGroup> {
    let group: &'static LinkGroup = match name {
        "qiskit-elements" => &*data::QISKIT_ELEMENTS,
        "social-media" => &*data::SOCIAL_MEDIA,
        "community" => &*data::COMMUNITY_SUB_LINKS,
        "education" => &*data::QISKIT_EDUCATION,
        "advocates" => &*data::QISKIT_ADVOCATES,
        "experiments" => &*data::QISKIT_EXPERIMENTS,
        _ => return None,
    };
    Some(group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_registers_every_group() {
        let repo = LinkRepository::bundled();
        let mut names: Vec<_> = repo.names().collect();
        names.sort_unstable();
        let mut expected = BUNDLED_GROUP_NAMES.to_vec();
        expected.sort_unstable();
        assert_eq!(names, expected);
    }

    #[test]
    fn resolves_links_by_group_and_key() {
        let repo = LinkRepository::bundled();
        let stack = repo.find_link("social-media", "stack").unwrap();
        assert_eq!(stack.label(), "Stack Exchange");
        assert!(repo.find_link("social-media", "mastodon").is_none());
        assert!(repo.find_link("partners", "github").is_none());
    }

    #[test]
    fn register_replaces_existing_group() {
        let mut repo = LinkRepository::bundled();
        repo.register(
            "advocates",
            LinkGroup::new().with("apply", NavLink::route("Apply", "/advocates#apply")),
        );
        assert!(repo.find_link("advocates", "advocates").is_none());
        assert!(repo.find_link("advocates", "apply").is_some());
    }
}

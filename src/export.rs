//! JSON export of the navigation data for the rendering layer.

use crate::nav::{
    FOOTER_ELEMENTS, FooterStructure, NavLink, ORDERED_COMMUNITY_SUB_LINKS,
    ORDERED_QISKIT_ADVOCATES, ORDERED_QISKIT_EDUCATION, ORDERED_QISKIT_ELEMENTS,
    ORDERED_QISKIT_EXPERIMENTS, ORDERED_SOCIAL_MEDIA,
};
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
/// Everything the site exports, as one document.
pub struct SiteNavigation {
    pub qiskit_elements: Vec<NavLink>,
    pub community_sub_links: Vec<NavLink>,
    pub footer_elements: FooterStructure,
}

impl SiteNavigation {
    /// Snapshot of the bundled data.
    pub fn bundled() -> Self {
        Self {
            qiskit_elements: ORDERED_QISKIT_ELEMENTS.clone(),
            community_sub_links: ORDERED_COMMUNITY_SUB_LINKS.clone(),
            footer_elements: FOOTER_ELEMENTS.clone(),
        }
    }
}

/// Which slice of the data to export.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Collection {
    QiskitElements,
    Community,
    SocialMedia,
    Education,
    Advocates,
    Experiments,
    Footer,
    #[default]
    All,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::QiskitElements => "qiskit-elements",
            Collection::Community => "community",
            Collection::SocialMedia => "social-media",
            Collection::Education => "education",
            Collection::Advocates => "advocates",
            Collection::Experiments => "experiments",
            Collection::Footer => "footer",
            Collection::All => "all",
        }
    }

    /// The ordered list behind a link-list collection; `None` for `footer`
    /// and `all`.
    pub fn links(&self) -> Option<&'static [NavLink]> {
        let links: &'static Vec<NavLink> = match self {
            Collection::QiskitElements => &*ORDERED_QISKIT_ELEMENTS,
            Collection::Community => &*ORDERED_COMMUNITY_SUB_LINKS,
            Collection::SocialMedia => &*ORDERED_SOCIAL_MEDIA,
            Collection::Education => &*ORDERED_QISKIT_EDUCATION,
            Collection::Advocates => &*ORDERED_QISKIT_ADVOCATES,
            Collection::Experiments => &*ORDERED_QISKIT_EXPERIMENTS,
            Collection::Footer | Collection::All => return None,
        };
        Some(links.as_slice())
    }
}

/// JSON value for one collection.
pub fn collection_value(collection: Collection) -> Result<Value> {
    let value = match collection {
        Collection::Footer => serde_json::to_value(&*FOOTER_ELEMENTS),
        Collection::All => serde_json::to_value(SiteNavigation::bundled()),
        other => serde_json::to_value(other.links().unwrap_or_default()),
    };
    value.with_context(|| format!("serializing {}", collection.as_str()))
}

/// Serialized JSON text for one collection.
pub fn render(collection: Collection, pretty: bool) -> Result<String> {
    let value = collection_value(collection)?;
    let text = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    text.with_context(|| format!("rendering {}", collection.as_str()))
}

/// Parse a full export document, as produced by `render(Collection::All, _)`.
pub fn parse_document(input: &str) -> Result<SiteNavigation> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        anyhow::bail!("No navigation document provided");
    }
    serde_json::from_str(trimmed).context("Unable to parse navigation document")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn all_uses_camel_case_keys() {
        let value = collection_value(Collection::All).unwrap();
        let obj = value.as_object().unwrap();
        let keys: Vec<_> = obj.keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 3);
        for key in ["qiskitElements", "communitySubLinks", "footerElements"] {
            assert!(obj.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn social_media_first_entry_matches_rendering_contract() {
        let value = collection_value(Collection::SocialMedia).unwrap();
        assert_eq!(
            value[0],
            json!({
                "label": "GitHub",
                "url": "https://github.com/Qiskit",
                "target": "_blank",
                "rel": "noopener",
                "linkType": "aLink"
            })
        );
    }

    #[test]
    fn rendered_document_parses_back() {
        let text = render(Collection::All, true).unwrap();
        let parsed = parse_document(&text).unwrap();
        assert_eq!(parsed, SiteNavigation::bundled());
    }

    #[test]
    fn parse_rejects_empty_and_unknown_fields() {
        assert!(parse_document("  ").is_err());
        let extra = json!({
            "qiskitElements": [],
            "communitySubLinks": [],
            "footerElements": [],
            "headerElements": []
        });
        assert!(parse_document(&extra.to_string()).is_err());
    }

    #[test]
    fn footer_and_all_have_no_flat_list() {
        assert!(Collection::Footer.links().is_none());
        assert!(Collection::All.links().is_none());
        assert_eq!(Collection::Advocates.links().map(<[_]>::len), Some(1));
    }
}

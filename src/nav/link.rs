//! The `NavLink` record and the URL shapes it can point at.
//!
//! A link is either a client-routed route (`nuxtLink`) or a native anchor
//! (`aLink`). Only anchors carry `target`, `rel`, and `segment`, so a routed
//! link opening in a new tab cannot be built or parsed.

use crate::nav::identity::{LinkType, SegmentData};
use serde::{Deserialize, Serialize};

/// Target value that opens a link in a new browsing context.
pub const TARGET_BLANK: &str = "_blank";
/// Relationship token required on anchors that leave the site.
pub const REL_NOOPENER: &str = "noopener";

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "linkType")]
/// A single navigable menu or footer entry.
pub enum NavLink {
    #[serde(rename = "nuxtLink")]
    Route(RouteLink),
    #[serde(rename = "aLink")]
    Anchor(AnchorLink),
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// Internal, client-routed navigation (no full page reload).
pub struct RouteLink {
    pub label: String,
    pub url: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// Plain `<a>` navigation, possibly opening a new tab.
pub struct AnchorLink {
    pub label: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment: Option<SegmentData>,
}

impl AnchorLink {
    /// Anchor rendered in the current tab with no relationship attributes.
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            target: None,
            rel: None,
            segment: None,
        }
    }

    /// Anchor that opens in a new tab with `rel="noopener"`.
    pub fn new_tab(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            target: Some(TARGET_BLANK.to_string()),
            rel: Some(REL_NOOPENER.to_string()),
            ..Self::new(label, url)
        }
    }
}

impl From<RouteLink> for NavLink {
    fn from(link: RouteLink) -> Self {
        NavLink::Route(link)
    }
}

impl From<AnchorLink> for NavLink {
    fn from(link: AnchorLink) -> Self {
        NavLink::Anchor(link)
    }
}

impl NavLink {
    pub fn route(label: impl Into<String>, url: impl Into<String>) -> Self {
        NavLink::Route(RouteLink {
            label: label.into(),
            url: url.into(),
        })
    }

    pub fn anchor(label: impl Into<String>, url: impl Into<String>) -> Self {
        NavLink::Anchor(AnchorLink::new(label, url))
    }

    /// External anchor opening in a new tab; the shape every off-site link uses.
    pub fn external(label: impl Into<String>, url: impl Into<String>) -> Self {
        NavLink::Anchor(AnchorLink::new_tab(label, url))
    }

    pub fn label(&self) -> &str {
        match self {
            NavLink::Route(link) => &link.label,
            NavLink::Anchor(link) => &link.label,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            NavLink::Route(link) => &link.url,
            NavLink::Anchor(link) => &link.url,
        }
    }

    pub fn link_type(&self) -> LinkType {
        match self {
            NavLink::Route(_) => LinkType::NuxtLink,
            NavLink::Anchor(_) => LinkType::ALink,
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            NavLink::Route(_) => None,
            NavLink::Anchor(link) => link.target.as_deref(),
        }
    }

    pub fn rel(&self) -> Option<&str> {
        match self {
            NavLink::Route(_) => None,
            NavLink::Anchor(link) => link.rel.as_deref(),
        }
    }

    pub fn segment(&self) -> Option<&SegmentData> {
        match self {
            NavLink::Route(_) => None,
            NavLink::Anchor(link) => link.segment.as_ref(),
        }
    }

    /// Whitespace-separated `rel` tokens; empty for routes.
    pub fn rel_tokens(&self) -> impl Iterator<Item = &str> {
        self.rel().unwrap_or_default().split_whitespace()
    }

    pub fn has_rel(&self, token: &str) -> bool {
        self.rel_tokens().any(|candidate| candidate == token)
    }

    pub fn url_kind(&self) -> UrlKind {
        UrlKind::classify(self.url())
    }

    /// True for anchors whose url leaves the site for another host.
    pub fn is_external(&self) -> bool {
        matches!(self, NavLink::Anchor(_)) && self.url_kind() == UrlKind::External
    }
}

/// Coarse shape of a link url, as far as rendering rules care.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UrlKind {
    /// Site-local path, optionally with a fragment (`/advocates#become`).
    Path,
    /// In-page anchor (`#section`).
    Fragment,
    /// `mailto:` address.
    Mailto,
    /// `http(s)://` url on another host.
    External,
    Other,
}

impl UrlKind {
    pub fn classify(url: &str) -> Self {
        let url = url.trim();
        let lower = url.to_ascii_lowercase();
        if lower.starts_with("mailto:") {
            UrlKind::Mailto
        } else if lower.starts_with("https://") || lower.starts_with("http://") {
            UrlKind::External
        } else if url.starts_with("//") {
            // Protocol-relative urls still leave the site.
            UrlKind::External
        } else if url.starts_with('/') {
            UrlKind::Path
        } else if url.starts_with('#') {
            UrlKind::Fragment
        } else {
            UrlKind::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UrlKind::Path => "path",
            UrlKind::Fragment => "fragment",
            UrlKind::Mailto => "mailto",
            UrlKind::External => "external",
            UrlKind::Other => "other",
        }
    }
}

//! Navigation link catalog for the Qiskit site.
//!
//! The crate owns the menu entries, footer layout, and social links that the
//! site's menu and footer components render. Public items here form the
//! contract those consumers depend on: the `NavLink` type, the `ORDERED_*`
//! lists, `FOOTER_ELEMENTS`, plus the JSON export and the checks that keep the
//! exported data well formed.

pub mod export;
pub mod nav;
pub mod schema;
pub mod validation;

pub use export::{Collection, SiteNavigation, collection_value, parse_document, render};
pub use nav::{
    AnchorLink, COMMUNITY_SUB_LINKS, FOOTER_ELEMENTS, FooterColumn, FooterStructure,
    FooterSubsection, LinkGroup, LinkKey, LinkRepository, LinkType, NavLink,
    ORDERED_COMMUNITY_SUB_LINKS, ORDERED_QISKIT_ADVOCATES, ORDERED_QISKIT_EDUCATION,
    ORDERED_QISKIT_ELEMENTS, ORDERED_QISKIT_EXPERIMENTS, ORDERED_SOCIAL_MEDIA, QISKIT_ADVOCATES,
    QISKIT_EDUCATION, QISKIT_ELEMENTS, QISKIT_EXPERIMENTS, RouteLink, SOCIAL_MEDIA, SegmentData,
    UrlKind,
};
pub use schema::NavSchema;
pub use validation::{
    LinkRules, validate_footer, validate_group, validate_link, validate_links, validate_site,
};

/// Split comma- or whitespace-delimited configuration lists into tokens.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .replace(',', " ")
        .split_whitespace()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

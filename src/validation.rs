//! Content checks for navigation data.
//!
//! The type system already rules out malformed shapes; these checks cover the
//! rules it cannot express (non-empty text, new-tab attributes on off-site
//! anchors, known `rel` tokens, unique keys and titles). Every function
//! returns the full list of violations instead of stopping at the first one.

use crate::nav::{
    FOOTER_ELEMENTS, FooterStructure, LinkGroup, LinkRepository, NavLink, REL_NOOPENER,
    TARGET_BLANK, UrlKind,
};
use crate::split_list;
use std::collections::BTreeSet;
use std::env;

/// `rel` tokens accepted without configuration.
const DEFAULT_REL_TOKENS: [&str; 4] = ["nofollow", "noreferrer", "noopener", "me"];
const ENV_ALLOWED_REL_TOKENS: &str = "NAV_ALLOWED_REL_TOKENS";

#[derive(Clone, Debug)]
/// Tunables applied while checking links.
pub struct LinkRules {
    allowed_rel: BTreeSet<String>,
}

impl Default for LinkRules {
    fn default() -> Self {
        Self {
            allowed_rel: DEFAULT_REL_TOKENS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl LinkRules {
    /// Default rules widened by `NAV_ALLOWED_REL_TOKENS`.
    pub fn from_env() -> Self {
        let mut rules = Self::default();
        if let Ok(raw) = env::var(ENV_ALLOWED_REL_TOKENS) {
            rules.allow_rel_tokens(&raw);
        }
        rules
    }

    /// Accept extra comma- or whitespace-separated `rel` tokens.
    pub fn allow_rel_tokens(&mut self, raw: &str) {
        for token in split_list(raw) {
            log::debug!("allowing extra rel token '{token}'");
            self.allowed_rel.insert(token);
        }
    }

    pub fn allows_rel(&self, token: &str) -> bool {
        self.allowed_rel.contains(token)
    }
}

/// Check a single link; `context` prefixes each message.
pub fn validate_link(context: &str, link: &NavLink, rules: &LinkRules) -> Vec<String> {
    let mut errors = Vec::new();
    if link.label().trim().is_empty() {
        errors.push(format!("{context}: label must not be empty"));
    }
    if link.url().trim().is_empty() {
        errors.push(format!("{context}: url must not be empty"));
        return errors;
    }

    let kind = link.url_kind();
    match link {
        NavLink::Route(_) => {
            if !matches!(kind, UrlKind::Path | UrlKind::Fragment) {
                errors.push(format!(
                    "{context}: nuxtLink url '{}' must be a site path, got {}",
                    link.url(),
                    kind.as_str()
                ));
            }
        }
        NavLink::Anchor(anchor) => {
            if kind == UrlKind::External {
                if link.target() != Some(TARGET_BLANK) {
                    errors.push(format!(
                        "{context}: external link '{}' must set target={TARGET_BLANK}",
                        link.url()
                    ));
                }
                if !link.has_rel(REL_NOOPENER) {
                    errors.push(format!(
                        "{context}: external link '{}' must include rel={REL_NOOPENER}",
                        link.url()
                    ));
                }
            }
            if anchor.rel.as_deref().is_some_and(|rel| rel.trim().is_empty()) {
                errors.push(format!("{context}: rel must not be empty when present"));
            }
            for token in link.rel_tokens() {
                if !rules.allows_rel(token) {
                    errors.push(format!("{context}: unknown rel token '{token}'"));
                }
            }
            if anchor.target.as_deref().is_some_and(|t| t.trim().is_empty()) {
                errors.push(format!("{context}: target must not be empty when present"));
            }
            if let Some(segment) = &anchor.segment {
                if segment.action.trim().is_empty() {
                    errors.push(format!("{context}: segment.action must not be empty"));
                }
            }
        }
    }
    errors
}

/// Check an ordered list of links.
pub fn validate_links(context: &str, links: &[NavLink], rules: &LinkRules) -> Vec<String> {
    links
        .iter()
        .enumerate()
        .flat_map(|(idx, link)| validate_link(&format!("{context}[{idx}]"), link, rules))
        .collect()
}

/// Check a keyed group: keys must be non-empty and unique.
pub fn validate_group(name: &str, group: &LinkGroup, rules: &LinkRules) -> Vec<String> {
    let mut errors = Vec::new();
    if group.is_empty() {
        errors.push(format!("{name}: group contains no links"));
    }
    let mut seen = BTreeSet::new();
    for (key, link) in group.iter() {
        if key.as_str().trim().is_empty() {
            errors.push(format!("{name}: encountered link with no key"));
        } else if !seen.insert(key.as_str()) {
            errors.push(format!("{name}: duplicate key '{key}'"));
        }
        errors.extend(validate_link(&format!("{name}/{key}"), link, rules));
    }
    errors
}

/// Check the footer layout and every link in it.
pub fn validate_footer(footer: &FooterStructure, rules: &LinkRules) -> Vec<String> {
    let mut errors = Vec::new();
    if footer.columns().is_empty() {
        errors.push("footer has no columns".to_string());
    }
    let mut titles = BTreeSet::new();
    for (col_idx, column) in footer.columns().iter().enumerate() {
        if column.is_empty() {
            errors.push(format!("footer column {col_idx} has no subsections"));
        }
        for section in column {
            let context = format!("footer column {col_idx} '{}'", section.title);
            if section.title.trim().is_empty() {
                errors.push(format!("footer column {col_idx}: subsection title must not be empty"));
            } else if !titles.insert(section.title.as_str()) {
                errors.push(format!("{context}: duplicate subsection title"));
            }
            if section.elements.is_empty() {
                errors.push(format!("{context}: subsection has no links"));
            }
            errors.extend(validate_links(&context, &section.elements, rules));
        }
    }
    errors
}

/// Check everything the site ships: every bundled group and the footer.
pub fn validate_site(rules: &LinkRules) -> Vec<String> {
    let repo = LinkRepository::bundled();
    let mut errors: Vec<String> = repo
        .iter()
        .flat_map(|(name, group)| validate_group(name, group, rules))
        .collect();
    errors.extend(validate_footer(&FOOTER_ELEMENTS, rules));
    log::debug!("site validation finished with {} violation(s)", errors.len());
    errors
}

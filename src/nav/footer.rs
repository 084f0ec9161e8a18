//! Footer layout: columns of titled subsections of links.

use crate::nav::link::NavLink;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// One titled group of links inside a footer column.
pub struct FooterSubsection {
    pub title: String,
    pub elements: Vec<NavLink>,
}

impl FooterSubsection {
    pub fn new(title: impl Into<String>, elements: Vec<NavLink>) -> Self {
        Self {
            title: title.into(),
            elements,
        }
    }
}

/// One footer column; subsections render top to bottom.
pub type FooterColumn = Vec<FooterSubsection>;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
/// The whole footer, columns left to right.
pub struct FooterStructure(pub Vec<FooterColumn>);

impl FooterStructure {
    pub fn columns(&self) -> &[FooterColumn] {
        &self.0
    }

    pub fn column(&self, index: usize) -> Option<&[FooterSubsection]> {
        self.0.get(index).map(Vec::as_slice)
    }

    pub fn subsections(&self) -> impl Iterator<Item = &FooterSubsection> {
        self.0.iter().flatten()
    }

    pub fn subsection(&self, title: &str) -> Option<&FooterSubsection> {
        self.subsections().find(|section| section.title == title)
    }

    /// Every link in render order: column, then subsection, then element.
    pub fn links(&self) -> impl Iterator<Item = &NavLink> {
        self.subsections().flat_map(|section| section.elements.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> FooterStructure {
        FooterStructure(vec![
            vec![FooterSubsection::new(
                "Qiskit Elements",
                vec![NavLink::route("Terra", "/terra")],
            )],
            vec![
                FooterSubsection::new(
                    "Qiskit Advocates",
                    vec![NavLink::route(
                        "Become an Advocate",
                        "/advocates#become-an-advocate",
                    )],
                ),
                FooterSubsection::new("Empty", Vec::new()),
            ],
        ])
    }

    #[test]
    fn serializes_as_nested_arrays() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value[0][0],
            json!({
                "title": "Qiskit Elements",
                "elements": [{"label": "Terra", "url": "/terra", "linkType": "nuxtLink"}]
            })
        );
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn walks_links_in_render_order() {
        let footer = sample();
        let urls: Vec<_> = footer.links().map(NavLink::url).collect();
        assert_eq!(urls, ["/terra", "/advocates#become-an-advocate"]);
        assert_eq!(footer.subsections().count(), 3);
    }

    #[test]
    fn finds_subsection_by_title() {
        let footer = sample();
        assert_eq!(
            footer.subsection("Qiskit Advocates").map(|s| s.elements.len()),
            Some(1)
        );
        assert!(footer.subsection("Social Media").is_none());
        assert_eq!(footer.column(1).map(<[_]>::len), Some(2));
        assert!(footer.column(2).is_none());
    }
}

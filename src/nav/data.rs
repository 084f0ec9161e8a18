//! The site's navigation content.
//!
//! Each keyed group is paired with a `*_ORDER` key list giving its display
//! order. The `ORDERED_*` lists are selected from the groups by those keys,
//! and the footer is assembled from the lists, on first access; neither
//! changes afterwards.

use crate::nav::footer::{FooterStructure, FooterSubsection};
use crate::nav::group::LinkGroup;
use crate::nav::link::{AnchorLink, NavLink};
use std::sync::LazyLock;

pub const QISKIT_ELEMENTS_ORDER: [&str; 5] = ["terra", "aer", "aqua", "ignis", "ibmQAccount"];
pub const SOCIAL_MEDIA_ORDER: [&str; 6] =
    ["github", "slack", "twitter", "medium", "youtube", "stack"];
pub const COMMUNITY_SUB_LINKS_ORDER: [&str; 3] = ["education", "advocates", "experiments"];
pub const QISKIT_EDUCATION_ORDER: [&str; 3] = ["textbook", "youtube", "hostEvent"];
pub const QISKIT_ADVOCATES_ORDER: [&str; 1] = ["advocates"];
pub const QISKIT_EXPERIMENTS_ORDER: [&str; 1] = ["experiments"];

// A key missing from its group is a data bug; keep the declared order rather
// than drop links from the page.
fn in_display_order(name: &str, group: &LinkGroup, order: &[&str]) -> Vec<NavLink> {
    group.select(order).unwrap_or_else(|err| {
        log::error!("{name}: {err:#}; falling back to declaration order");
        group.ordered()
    })
}

pub static QISKIT_ELEMENTS: LazyLock<LinkGroup> = LazyLock::new(|| {
    LinkGroup::new()
        .with("terra", NavLink::route("Terra", "/terra"))
        .with("aer", NavLink::route("Aer", "/aer"))
        .with("aqua", NavLink::route("Aqua", "/aqua"))
        .with("ignis", NavLink::route("Ignis", "/ignis"))
        .with("ibmQAccount", NavLink::route("IBM Q Account", "/ibmqaccount"))
});

pub static ORDERED_QISKIT_ELEMENTS: LazyLock<Vec<NavLink>> =
    LazyLock::new(|| in_display_order("qiskit-elements", &QISKIT_ELEMENTS, &QISKIT_ELEMENTS_ORDER));

pub static SOCIAL_MEDIA: LazyLock<LinkGroup> = LazyLock::new(|| {
    LinkGroup::new()
        .with("github", NavLink::external("GitHub", "https://github.com/Qiskit"))
        .with("slack", NavLink::external("Slack", "https://qiskit.slack.com/"))
        .with("twitter", NavLink::external("Twitter", "https://twitter.com/Qiskit"))
        .with("medium", NavLink::external("Medium", "https://medium.com/Qiskit"))
        .with(
            "youtube",
            NavLink::external("YouTube", "https://www.youtube.com/Qiskit"),
        )
        .with(
            "stack",
            NavLink::external(
                "Stack Exchange",
                "https://quantumcomputing.stackexchange.com/questions/tagged/qiskit",
            ),
        )
});

pub static ORDERED_SOCIAL_MEDIA: LazyLock<Vec<NavLink>> =
    LazyLock::new(|| in_display_order("social-media", &SOCIAL_MEDIA, &SOCIAL_MEDIA_ORDER));

pub static COMMUNITY_SUB_LINKS: LazyLock<LinkGroup> = LazyLock::new(|| {
    LinkGroup::new()
        .with("education", NavLink::route("Education", "/education"))
        .with("advocates", NavLink::route("Advocates", "/advocates"))
        .with("experiments", NavLink::route("Experiments", "/experiments"))
});

pub static ORDERED_COMMUNITY_SUB_LINKS: LazyLock<Vec<NavLink>> =
    LazyLock::new(|| in_display_order("community", &COMMUNITY_SUB_LINKS, &COMMUNITY_SUB_LINKS_ORDER));

pub static QISKIT_EDUCATION: LazyLock<LinkGroup> = LazyLock::new(|| {
    LinkGroup::new()
        // Local path served outside the Nuxt router.
        .with("textbook", AnchorLink::new("Textbook", "/textbook"))
        .with(
            "youtube",
            NavLink::external(
                "Coding With Qiskit",
                "https://www.youtube.com/playlist?list=PLOFEBzvs-Vvp2xg9-POLJhQwtVktlYGbY",
            ),
        )
        .with(
            "hostEvent",
            NavLink::external("Host an Event", "mailto:hello@qiskit.camp"),
        )
});

pub static ORDERED_QISKIT_EDUCATION: LazyLock<Vec<NavLink>> =
    LazyLock::new(|| in_display_order("education", &QISKIT_EDUCATION, &QISKIT_EDUCATION_ORDER));

pub static QISKIT_ADVOCATES: LazyLock<LinkGroup> = LazyLock::new(|| {
    LinkGroup::new().with(
        "advocates",
        NavLink::route("Become an Advocate", "/advocates#become-an-advocate"),
    )
});

pub static ORDERED_QISKIT_ADVOCATES: LazyLock<Vec<NavLink>> =
    LazyLock::new(|| in_display_order("advocates", &QISKIT_ADVOCATES, &QISKIT_ADVOCATES_ORDER));

pub static QISKIT_EXPERIMENTS: LazyLock<LinkGroup> = LazyLock::new(|| {
    LinkGroup::new().with(
        "experiments",
        NavLink::route("Browse the experiments", "/experiments#browse-the-experiments"),
    )
});

pub static ORDERED_QISKIT_EXPERIMENTS: LazyLock<Vec<NavLink>> =
    LazyLock::new(|| in_display_order("experiments", &QISKIT_EXPERIMENTS, &QISKIT_EXPERIMENTS_ORDER));

pub static FOOTER_ELEMENTS: LazyLock<FooterStructure> = LazyLock::new(|| {
    log::debug!("assembling footer structure");
    FooterStructure(vec![
        vec![FooterSubsection::new(
            "Qiskit Elements",
            ORDERED_QISKIT_ELEMENTS.clone(),
        )],
        vec![
            FooterSubsection::new("Qiskit for Educators", ORDERED_QISKIT_EDUCATION.clone()),
            FooterSubsection::new("Qiskit Advocates", ORDERED_QISKIT_ADVOCATES.clone()),
            FooterSubsection::new("Qiskit Experiments", ORDERED_QISKIT_EXPERIMENTS.clone()),
        ],
        vec![FooterSubsection::new(
            "Social Media",
            ORDERED_SOCIAL_MEDIA.clone(),
        )],
    ])
});

//! Navigation link catalog.
//!
//! Types here mirror the JSON the rendering layer consumes: `NavLink` records,
//! keyed `LinkGroup`s used to address individual entries, and the footer's
//! column/subsection layout. The site's actual content lives in `data`;
//! callers use `LinkRepository` when they need lookup by group name.

pub mod data;
pub mod footer;
pub mod group;
pub mod identity;
pub mod link;
pub mod repository;

pub use data::{
    COMMUNITY_SUB_LINKS, COMMUNITY_SUB_LINKS_ORDER, FOOTER_ELEMENTS, ORDERED_COMMUNITY_SUB_LINKS,
    ORDERED_QISKIT_ADVOCATES, ORDERED_QISKIT_EDUCATION, ORDERED_QISKIT_ELEMENTS,
    ORDERED_QISKIT_EXPERIMENTS, ORDERED_SOCIAL_MEDIA, QISKIT_ADVOCATES, QISKIT_ADVOCATES_ORDER,
    QISKIT_EDUCATION, QISKIT_EDUCATION_ORDER, QISKIT_ELEMENTS, QISKIT_ELEMENTS_ORDER,
    QISKIT_EXPERIMENTS, QISKIT_EXPERIMENTS_ORDER, SOCIAL_MEDIA, SOCIAL_MEDIA_ORDER,
};
pub use footer::{FooterColumn, FooterStructure, FooterSubsection};
pub use group::LinkGroup;
pub use identity::{LinkKey, LinkType, SegmentData};
pub use link::{AnchorLink, NavLink, REL_NOOPENER, RouteLink, TARGET_BLANK, UrlKind};
pub use repository::{BUNDLED_GROUP_NAMES, LinkRepository, bundled_group};

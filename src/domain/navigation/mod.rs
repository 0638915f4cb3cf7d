//! View routing and the page metadata it drives.

pub mod metadata;
pub mod router;
pub mod view;

pub use metadata::{metadata_for, PageMetadata};
pub use router::{EntryAction, ViewRouter};
pub use view::{LegalSection, View, NAV_LINKS};

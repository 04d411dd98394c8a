//! Two-sided dental marketplace core: the access gate that controls which
//! screen a session can reach, the per-role profile workspace with its
//! completion checklists, the read-only job/candidate catalogs with the filter
//! engine, saved filters, and the text-suggestion collaborator.

pub mod catalog;
pub mod domain;
pub mod profile;
mod router;
mod service;
pub mod session;
pub mod suggestions;

#[cfg(test)]
mod tests;

pub use router::marketplace_router;
pub use service::{
    ClinicProfileUpdate, DentistProfileUpdate, JobDraft, MarketplaceError, MarketplaceService,
    PublishAck,
};

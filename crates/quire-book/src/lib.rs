//! Book manifest loading for Quire.
//!
//! Reads a YAML or JSON manifest describing a book's chapters and pages and
//! turns it into the [`Section`](quire_nav::Section) tree consumed by
//! `quire-nav`.
//!
//! # Manifest Format
//!
//! ```yaml
//! title: Handbook
//! path: ""              # identity of the overview page (default: "")
//! chapters:
//!   - title: Basics
//!     path: basics
//!     weight: 1
//!     pages:
//!       - title: Basics
//!         path: basics/_index
//!         weight: 0
//!         front_matter: true
//!         headings: [Overview, { title: Scope, anchor: scope }]
//!       - title: Install
//!         path: basics/install
//!         weight: 1
//! ```
//!
//! Headings given as plain text get a GitHub-style anchor slug.

mod error;
mod manifest;

pub use error::ManifestError;
pub use manifest::{ManifestFormat, load_manifest, parse_manifest};

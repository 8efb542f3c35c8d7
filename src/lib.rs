//! Folio - the state layer of a personal portfolio site.
//!
//! Three independent state containers back the site's UI. Each one owns its
//! data, exposes derived views recomputed on every access, and offers
//! mutation actions; none of them knows about the others.
//!
//! | Store               | Owns                                              | Persisted |
//! |---------------------|---------------------------------------------------|-----------|
//! | [`ContentStore`]    | projects, blog posts, submissions, site metadata, page views | all fields |
//! | [`CounterStore`]    | showcase dataset, demo counters, UI flags         | nothing   |
//! | [`PreferencesStore`]| theme, user session, favorites, site settings     | all fields |
//!
//! Persisted stores write their state as a single JSON blob to an injected
//! [`Storage`] collaborator after every mutation and rehydrate it once at
//! construction. A missing, unreadable, or foreign blob is never fatal: the
//! store logs the problem and starts from its seed data.
//!
//! # Example
//!
//! ```
//! use folio::content::ProjectDraft;
//! use folio::{ContentStore, MemoryStorage};
//!
//! let mut content = ContentStore::with_defaults(Box::new(MemoryStorage::new()));
//!
//! let id = content.add_project(ProjectDraft {
//!     title: "Link Shortener".into(),
//!     tags: vec!["Rust".into()],
//!     ..Default::default()
//! });
//!
//! assert!(content.update_project(id, folio::content::ProjectPatch {
//!     is_featured: Some(true),
//!     ..Default::default()
//! }));
//! assert_eq!(content.featured_projects().last().map(|p| p.id), Some(id));
//! ```

pub mod content;
pub mod counter;
pub mod logger;
pub mod preferences;
pub mod storage;
pub mod theme;
pub mod utils;

pub use content::ContentStore;
pub use counter::CounterStore;
pub use preferences::PreferencesStore;
pub use storage::{JsonFileStorage, MemoryStorage, Storage};
pub use theme::Theme;

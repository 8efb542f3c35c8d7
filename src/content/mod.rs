//! The content store: canonical collections behind the public site.
//!
//! Owns projects, blog posts, contact submissions, the site metadata
//! singleton, and per-path page-view counters. Every field belongs to the
//! persisted subset: the whole state is written as one JSON blob under the
//! `"content"` key after each mutation and read back once at construction.
//!
//! | Collection            | Id scheme                            |
//! |-----------------------|--------------------------------------|
//! | `projects`            | monotonic counter, seeded max(id)+1  |
//! | `blog_posts`          | monotonic counter, seeded max(id)+1  |
//! | `contact_submissions` | epoch millis, forced strictly rising |
//!
//! Derived views are recomputed from current state on every access and
//! never cached.

pub mod defaults;
mod types;

pub use types::{
    BlogPost, BlogPostDraft, Comment, CompanyInfo, ContactSubmission, Project, ProjectDraft,
    ProjectPatch, SiteLink, SocialLinks, SubmissionDraft, WebInfo, WebInfoPatch,
};

use crate::storage::{self, Storage};
use crate::utils::date;
use educe::Educe;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Storage key and log prefix for this store.
const STORE_KEY: &str = "content";

/// Persisted state of the content store.
///
/// `Default` yields the built-in sample site; the serde `default`
/// attributes make a partially populated blob rehydrate field-by-field
/// against the same literals.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContentState {
    #[serde(default = "defaults::projects")]
    #[educe(Default = defaults::projects())]
    pub projects: Vec<Project>,

    #[serde(default = "defaults::blog_posts")]
    #[educe(Default = defaults::blog_posts())]
    pub blog_posts: Vec<BlogPost>,

    #[serde(default)]
    pub contact_submissions: Vec<ContactSubmission>,

    #[serde(default = "defaults::web_info")]
    #[educe(Default = defaults::web_info())]
    pub web_info: WebInfo,

    /// Path → visit count; paths appear on first visit.
    #[serde(default)]
    pub page_views: BTreeMap<String, u64>,
}

/// State container for the site's content collections.
pub struct ContentStore {
    state: ContentState,
    next_project_id: u64,
    next_post_id: u64,
    last_submission_id: i64,
    storage: Box<dyn Storage>,
}

impl ContentStore {
    /// Construct from `seed`, rehydrating any previously persisted blob.
    ///
    /// A persisted blob wins over the seed; a missing or unreadable blob
    /// leaves the seed in place. Id counters resume above the highest id
    /// found, so ids are never reused within a process lifetime.
    pub fn new(seed: ContentState, storage: Box<dyn Storage>) -> Self {
        let state = storage::load_or(storage.as_ref(), STORE_KEY, seed);
        let next_project_id = next_id(state.projects.iter().map(|p| p.id));
        let next_post_id = next_id(state.blog_posts.iter().map(|p| p.id));
        let last_submission_id = state
            .contact_submissions
            .iter()
            .map(|s| s.id)
            .max()
            .unwrap_or(0);

        Self {
            state,
            next_project_id,
            next_post_id,
            last_submission_id,
            storage,
        }
    }

    /// Construct with the built-in sample site.
    pub fn with_defaults(storage: Box<dyn Storage>) -> Self {
        Self::new(ContentState::default(), storage)
    }

    fn persist(&mut self) {
        storage::persist(self.storage.as_mut(), STORE_KEY, &self.state);
    }

    // ------------------------------------------------------------------------
    // State accessors
    // ------------------------------------------------------------------------

    pub fn projects(&self) -> &[Project] {
        &self.state.projects
    }

    pub fn blog_posts(&self) -> &[BlogPost] {
        &self.state.blog_posts
    }

    pub fn contact_submissions(&self) -> &[ContactSubmission] {
        &self.state.contact_submissions
    }

    pub fn web_info(&self) -> &WebInfo {
        &self.state.web_info
    }

    pub fn page_views(&self) -> &BTreeMap<String, u64> {
        &self.state.page_views
    }

    // ------------------------------------------------------------------------
    // Project actions
    // ------------------------------------------------------------------------

    /// Add a project and return its assigned id.
    ///
    /// The store stamps today's date and starts the view counter at zero;
    /// the draft's content is stored as supplied.
    pub fn add_project(&mut self, draft: ProjectDraft) -> u64 {
        let id = self.next_project_id;
        self.next_project_id += 1;

        self.state.projects.push(Project {
            id,
            title: draft.title,
            description: draft.description,
            image: draft.image,
            date: date::today(),
            tags: draft.tags,
            category: draft.category,
            features: draft.features,
            github_link: draft.github_link,
            demo_link: draft.demo_link,
            is_featured: draft.is_featured,
            view_count: 0,
        });

        self.persist();
        id
    }

    /// Apply a partial update to the project with `id`.
    ///
    /// Returns `false` and leaves the collection untouched when the id is
    /// unknown.
    pub fn update_project(&mut self, id: u64, patch: ProjectPatch) -> bool {
        let Some(project) = self.state.projects.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        patch.apply(project);
        self.persist();
        true
    }

    /// Remove the project with `id`; `false` when the id is unknown.
    pub fn remove_project(&mut self, id: u64) -> bool {
        let Some(index) = self.state.projects.iter().position(|p| p.id == id) else {
            return false;
        };
        self.state.projects.remove(index);
        self.persist();
        true
    }

    /// Count one view on the project with `id`; silent no-op otherwise.
    pub fn increment_project_view(&mut self, id: u64) {
        if let Some(project) = self.state.projects.iter_mut().find(|p| p.id == id) {
            project.view_count += 1;
            self.persist();
        }
    }

    // ------------------------------------------------------------------------
    // Blog / contact / metadata actions
    // ------------------------------------------------------------------------

    /// Add a blog post and return its assigned id.
    pub fn add_blog_post(&mut self, draft: BlogPostDraft) -> u64 {
        let id = self.next_post_id;
        self.next_post_id += 1;

        self.state.blog_posts.push(BlogPost {
            id,
            title: draft.title,
            content: draft.content,
            excerpt: draft.excerpt,
            date: date::today(),
            author: draft.author,
            tags: draft.tags,
            image_url: draft.image_url,
            published: draft.published,
            comments: Vec::new(),
        });

        self.persist();
        id
    }

    /// Store a contact-form submission and return the full stored record.
    ///
    /// The id is the submission instant in epoch milliseconds, bumped past
    /// the previous id when two submissions share a millisecond.
    pub fn add_contact_submission(&mut self, draft: SubmissionDraft) -> ContactSubmission {
        let id = date::now_millis().max(self.last_submission_id + 1);
        self.last_submission_id = id;

        let submission = ContactSubmission {
            id,
            name: draft.name,
            email: draft.email,
            message: draft.message,
            subject: draft.subject,
            phone: draft.phone,
            preferred_contact: draft.preferred_contact,
            date: date::now_iso(),
            status: "new".into(),
        };

        self.state.contact_submissions.push(submission.clone());
        self.persist();
        submission
    }

    /// Count one visit on `path`, starting the counter at zero on first sight.
    pub fn update_page_view(&mut self, path: &str) {
        *self.state.page_views.entry(path.to_owned()).or_insert(0) += 1;
        self.persist();
    }

    /// Apply a partial update to the site metadata.
    ///
    /// `last_updated` is refreshed unconditionally, even for an empty patch.
    pub fn update_web_info(&mut self, patch: WebInfoPatch) {
        patch.apply(&mut self.state.web_info);
        self.state.web_info.last_updated = date::now_iso();
        self.persist();
    }

    // ------------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------------

    /// Projects flagged as featured, in collection order.
    pub fn featured_projects(&self) -> Vec<&Project> {
        self.state
            .projects
            .iter()
            .filter(|p| p.is_featured)
            .collect()
    }

    /// Deduplicated project categories, first-seen order.
    pub fn project_categories(&self) -> Vec<String> {
        let mut seen = FxHashSet::default();
        self.state
            .projects
            .iter()
            .filter(|p| seen.insert(p.category.as_str()))
            .map(|p| p.category.clone())
            .collect()
    }

    /// Deduplicated union of every project's tags, first-seen order.
    pub fn project_tags(&self) -> Vec<String> {
        let mut seen = FxHashSet::default();
        let mut tags = Vec::new();
        for project in &self.state.projects {
            for tag in &project.tags {
                if seen.insert(tag.as_str()) {
                    tags.push(tag.clone());
                }
            }
        }
        tags
    }

    /// Blog posts flagged as published, in collection order.
    pub fn published_blog_posts(&self) -> Vec<&BlogPost> {
        self.state
            .blog_posts
            .iter()
            .filter(|p| p.published)
            .collect()
    }

    /// Sum of all page-view counters.
    pub fn total_page_views(&self) -> u64 {
        self.state.page_views.values().sum()
    }
}

/// Next id for a max-seeded monotonic counter: 1 on an empty collection.
fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn empty_state() -> ContentState {
        ContentState {
            projects: Vec::new(),
            blog_posts: Vec::new(),
            contact_submissions: Vec::new(),
            web_info: WebInfo::default(),
            page_views: BTreeMap::new(),
        }
    }

    fn empty_store() -> ContentStore {
        ContentStore::new(empty_state(), Box::new(MemoryStorage::new()))
    }

    fn draft(title: &str) -> ProjectDraft {
        ProjectDraft {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_add_project_on_empty_collection_assigns_id_1() {
        let mut store = empty_store();
        assert_eq!(store.add_project(draft("First")), 1);
    }

    #[test]
    fn test_add_project_assigns_max_plus_one() {
        let mut store = ContentStore::with_defaults(Box::new(MemoryStorage::new()));
        // Sample site seeds ids 1..=3
        assert_eq!(store.add_project(draft("Fourth")), 4);
        assert_eq!(store.add_project(draft("Fifth")), 5);
    }

    #[test]
    fn test_add_project_stamps_date_and_zero_views() {
        let mut store = empty_store();
        let id = store.add_project(ProjectDraft {
            title: "Stamped".to_string(),
            is_featured: true,
            ..Default::default()
        });

        let project = store.projects().iter().find(|p| p.id == id).unwrap();
        assert_eq!(project.date, date::today());
        assert_eq!(project.view_count, 0);
        assert!(project.is_featured);
    }

    #[test]
    fn test_ids_not_reused_after_removing_newest() {
        let mut store = empty_store();
        store.add_project(draft("a"));
        let b = store.add_project(draft("b"));

        assert!(store.remove_project(b));
        // Counter keeps climbing instead of re-issuing 2.
        assert_eq!(store.add_project(draft("c")), 3);
    }

    #[test]
    fn test_update_project_changes_only_patched_fields() {
        let mut store = ContentStore::with_defaults(Box::new(MemoryStorage::new()));
        let before = store.projects()[0].clone();

        let updated = store.update_project(
            before.id,
            ProjectPatch {
                title: Some("X".to_string()),
                ..Default::default()
            },
        );
        assert!(updated);

        let after = &store.projects()[0];
        assert_eq!(after.title, "X");
        assert_eq!(after.id, before.id);
        assert_eq!(after.description, before.description);
        assert_eq!(after.date, before.date);
        assert_eq!(after.tags, before.tags);
        assert_eq!(after.view_count, before.view_count);
    }

    #[test]
    fn test_update_project_unknown_id_leaves_collection_unchanged() {
        let mut store = ContentStore::with_defaults(Box::new(MemoryStorage::new()));
        let before: Vec<Project> = store.projects().to_vec();

        let updated = store.update_project(
            999,
            ProjectPatch {
                title: Some("X".to_string()),
                ..Default::default()
            },
        );

        assert!(!updated);
        assert_eq!(store.projects(), &before[..]);
    }

    #[test]
    fn test_remove_project_then_lookup_fails() {
        let mut store = ContentStore::with_defaults(Box::new(MemoryStorage::new()));
        assert!(store.remove_project(2));
        assert!(store.projects().iter().all(|p| p.id != 2));
        assert!(!store.remove_project(2));
    }

    #[test]
    fn test_increment_project_view_counts_by_one() {
        let mut store = ContentStore::with_defaults(Box::new(MemoryStorage::new()));
        store.increment_project_view(1);
        store.increment_project_view(1);
        assert_eq!(store.projects()[0].view_count, 2);
    }

    #[test]
    fn test_increment_project_view_unknown_id_is_noop() {
        let mut store = ContentStore::with_defaults(Box::new(MemoryStorage::new()));
        let before: Vec<Project> = store.projects().to_vec();
        store.increment_project_view(999);
        assert_eq!(store.projects(), &before[..]);
    }

    #[test]
    fn test_featured_projects_track_mutations_in_order() {
        let mut store = ContentStore::with_defaults(Box::new(MemoryStorage::new()));
        assert_eq!(
            store.featured_projects().iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 2]
        );

        store.update_project(
            3,
            ProjectPatch {
                is_featured: Some(true),
                ..Default::default()
            },
        );
        store.update_project(
            1,
            ProjectPatch {
                is_featured: Some(false),
                ..Default::default()
            },
        );

        assert_eq!(
            store.featured_projects().iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![2, 3]
        );
    }

    #[test]
    fn test_project_categories_dedup() {
        let mut store = empty_store();
        for category in ["Web", "Tools", "Web"] {
            store.add_project(ProjectDraft {
                category: category.to_string(),
                ..Default::default()
            });
        }
        assert_eq!(store.project_categories(), vec!["Web", "Tools"]);
    }

    #[test]
    fn test_project_tags_union_dedup() {
        let store = ContentStore::with_defaults(Box::new(MemoryStorage::new()));
        let tags = store.project_tags();

        assert!(tags.contains(&"Vue.js".to_string()));
        // "Vue.js" appears on all three seed projects but only once here.
        assert_eq!(tags.iter().filter(|t| *t == "Vue.js").count(), 1);
    }

    #[test]
    fn test_add_blog_post_initializes_comments_and_date() {
        let mut store = empty_store();
        let id = store.add_blog_post(BlogPostDraft {
            title: "Hello".to_string(),
            published: true,
            ..Default::default()
        });

        assert_eq!(id, 1);
        let post = &store.blog_posts()[0];
        assert!(post.comments.is_empty());
        assert_eq!(post.date, date::today());
    }

    #[test]
    fn test_published_blog_posts_filters_drafts() {
        let mut store = empty_store();
        store.add_blog_post(BlogPostDraft {
            title: "live".to_string(),
            published: true,
            ..Default::default()
        });
        store.add_blog_post(BlogPostDraft {
            title: "draft".to_string(),
            published: false,
            ..Default::default()
        });

        let published = store.published_blog_posts();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].title, "live");
    }

    #[test]
    fn test_add_contact_submission_returns_stored_record() {
        let mut store = empty_store();
        let stored = store.add_contact_submission(SubmissionDraft {
            name: "Sarah Johnson".to_string(),
            email: "sarah@example.com".to_string(),
            message: "Hi".to_string(),
            ..Default::default()
        });

        assert_eq!(stored.status, "new");
        assert!(stored.id > 0);
        assert_eq!(store.contact_submissions(), &[stored]);
    }

    #[test]
    fn test_contact_submission_ids_strictly_increase() {
        let mut store = empty_store();
        // Back-to-back calls can land in the same millisecond; ids must
        // still come out distinct and ascending.
        let a = store.add_contact_submission(SubmissionDraft::default());
        let b = store.add_contact_submission(SubmissionDraft::default());
        let c = store.add_contact_submission(SubmissionDraft::default());

        assert!(a.id < b.id);
        assert!(b.id < c.id);
    }

    #[test]
    fn test_update_page_view_counts_and_totals() {
        let mut store = empty_store();
        store.update_page_view("/about");
        store.update_page_view("/about");
        store.update_page_view("/about");
        store.update_page_view("/");

        assert_eq!(store.page_views()["/about"], 3);
        assert_eq!(store.total_page_views(), 4);
    }

    #[test]
    fn test_update_web_info_merges_and_restamps() {
        let mut seed = empty_state();
        seed.web_info.title = "Old Title".to_string();
        seed.web_info.last_updated = "2020-01-01T00:00:00.000Z".to_string();
        let mut store = ContentStore::new(seed, Box::new(MemoryStorage::new()));

        store.update_web_info(WebInfoPatch {
            description: Some("Fresh".to_string()),
            ..Default::default()
        });

        assert_eq!(store.web_info().title, "Old Title");
        assert_eq!(store.web_info().description, "Fresh");
        assert_ne!(store.web_info().last_updated, "2020-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_empty_web_info_patch_still_restamps() {
        let mut seed = empty_state();
        seed.web_info.last_updated = "2020-01-01T00:00:00.000Z".to_string();
        let mut store = ContentStore::new(seed, Box::new(MemoryStorage::new()));

        store.update_web_info(WebInfoPatch::default());
        assert_ne!(store.web_info().last_updated, "2020-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_state_survives_restart_via_shared_storage() {
        let storage = MemoryStorage::new();

        let mut store = ContentStore::with_defaults(Box::new(storage.clone()));
        let id = store.add_project(ProjectDraft {
            title: "Persisted".to_string(),
            ..Default::default()
        });
        store.update_page_view("/projects");
        drop(store);

        let revived = ContentStore::with_defaults(Box::new(storage));
        assert!(revived.projects().iter().any(|p| p.id == id && p.title == "Persisted"));
        assert_eq!(revived.page_views()["/projects"], 1);
    }

    #[test]
    fn test_state_survives_restart_via_file_storage() {
        use crate::storage::JsonFileStorage;

        let dir = tempfile::tempdir().unwrap();

        let mut store = ContentStore::with_defaults(Box::new(JsonFileStorage::new(dir.path())));
        let id = store.add_project(draft("On Disk"));
        store.update_page_view("/about");
        drop(store);

        let revived = ContentStore::with_defaults(Box::new(JsonFileStorage::new(dir.path())));
        assert!(revived.projects().iter().any(|p| p.id == id && p.title == "On Disk"));
        assert_eq!(revived.page_views()["/about"], 1);
    }

    #[test]
    fn test_restart_resumes_id_counter_above_persisted_max() {
        let storage = MemoryStorage::new();

        let mut store = ContentStore::with_defaults(Box::new(storage.clone()));
        store.add_project(draft("Fourth")); // id 4
        drop(store);

        let mut revived = ContentStore::with_defaults(Box::new(storage));
        assert_eq!(revived.add_project(draft("Fifth")), 5);
    }

    #[test]
    fn test_corrupt_blob_falls_back_to_seed() {
        let mut storage = MemoryStorage::new();
        storage.save("content", "{definitely not json").unwrap();

        let store = ContentStore::with_defaults(Box::new(storage));
        assert_eq!(store.projects().len(), 3);
    }

    #[test]
    fn test_blob_with_unknown_field_falls_back_to_seed() {
        let mut storage = MemoryStorage::new();
        storage
            .save("content", r#"{"projects": [], "intruder": true}"#)
            .unwrap();

        let store = ContentStore::with_defaults(Box::new(storage));
        assert_eq!(store.projects().len(), 3);
    }

    #[test]
    fn test_partial_blob_rehydrates_missing_fields_from_defaults() {
        let mut storage = MemoryStorage::new();
        storage
            .save("content", r#"{"page_views": {"/about": 7}}"#)
            .unwrap();

        let store = ContentStore::with_defaults(Box::new(storage));
        assert_eq!(store.page_views()["/about"], 7);
        // Missing fields come from the seed literals.
        assert_eq!(store.projects().len(), 3);
        assert_eq!(store.web_info().title, "Vue Portfolio");
    }
}

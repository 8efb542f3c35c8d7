//! The counter store: demo counters, UI flags, and the showcase dataset.
//!
//! A playground sibling of the content store. It owns its own project,
//! contact, skill, testimonial, and blog-preview collections plus a pair
//! of plain counters and two UI flags. Nothing here is persisted - every
//! construction starts from the injected seed.

pub mod defaults;
mod types;

pub use types::{BlogPost, Contact, ContactDraft, Project, Skill, Testimonial};

use crate::theme::Theme;
use crate::utils::date;
use educe::Educe;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

/// Full state of the counter store. `Default` is the built-in showcase
/// dataset with all counters at zero.
#[derive(Debug, Clone, Educe)]
#[educe(Default)]
pub struct CounterState {
    pub count: u64,
    pub visitors: u64,
    pub show_message: bool,
    pub theme: Theme,

    #[educe(Default = defaults::projects())]
    pub projects: Vec<Project>,

    #[educe(Default = defaults::contacts())]
    pub contacts: Vec<Contact>,

    #[educe(Default = defaults::skills())]
    pub skills: Vec<Skill>,

    #[educe(Default = defaults::testimonials())]
    pub testimonials: Vec<Testimonial>,

    #[educe(Default = defaults::blog_posts())]
    pub blog_posts: Vec<BlogPost>,
}

/// State container for demo counters and the showcase dataset.
pub struct CounterStore {
    state: CounterState,
    next_contact_id: u64,
}

impl CounterStore {
    /// Construct from `seed`. The contact-id counter resumes above the
    /// highest seeded id so ids stay unique for the process lifetime.
    pub fn new(seed: CounterState) -> Self {
        let next_contact_id = seed.contacts.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        Self {
            state: seed,
            next_contact_id,
        }
    }

    /// Construct with the built-in showcase dataset.
    pub fn with_defaults() -> Self {
        Self::new(CounterState::default())
    }

    // ------------------------------------------------------------------------
    // State accessors
    // ------------------------------------------------------------------------

    pub fn count(&self) -> u64 {
        self.state.count
    }

    pub fn visitors(&self) -> u64 {
        self.state.visitors
    }

    pub fn show_message(&self) -> bool {
        self.state.show_message
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    pub fn projects(&self) -> &[Project] {
        &self.state.projects
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.state.contacts
    }

    pub fn skills(&self) -> &[Skill] {
        &self.state.skills
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.state.testimonials
    }

    pub fn blog_posts(&self) -> &[BlogPost] {
        &self.state.blog_posts
    }

    // ------------------------------------------------------------------------
    // Counter and flag actions
    // ------------------------------------------------------------------------

    pub fn increment_count(&mut self) {
        self.state.count += 1;
    }

    pub fn reset_count(&mut self) {
        self.state.count = 0;
    }

    pub fn register_visitor(&mut self) {
        self.state.visitors += 1;
    }

    pub fn toggle_message(&mut self) {
        self.state.show_message = !self.state.show_message;
    }

    pub fn toggle_theme(&mut self) {
        self.state.theme = self.state.theme.toggled();
    }

    // ------------------------------------------------------------------------
    // Contact actions
    // ------------------------------------------------------------------------

    /// Store a contact and return the full stored record.
    pub fn add_contact(&mut self, draft: ContactDraft) -> Contact {
        let id = self.next_contact_id;
        self.next_contact_id += 1;

        let contact = Contact {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            subject: draft.subject,
            message: draft.message,
            preferred_contact: draft.preferred_contact,
            date: date::now_iso(),
        };

        self.state.contacts.push(contact.clone());
        contact
    }

    // ------------------------------------------------------------------------
    // Lookups and derived views
    // ------------------------------------------------------------------------

    /// Find a showcase project by id; `None` when absent.
    pub fn project_by_id(&self, id: u64) -> Option<&Project> {
        self.state.projects.iter().find(|p| p.id == id)
    }

    /// Projects sharing at least one tag with `tags`, in collection order.
    ///
    /// An empty tag list means no filter: the whole collection comes back.
    pub fn filter_projects_by_tags(&self, tags: &[String]) -> Vec<&Project> {
        if tags.is_empty() {
            return self.state.projects.iter().collect();
        }
        self.state
            .projects
            .iter()
            .filter(|p| p.tags.iter().any(|tag| tags.contains(tag)))
            .collect()
    }

    /// Projects flagged as featured, in collection order.
    pub fn featured_projects(&self) -> Vec<&Project> {
        self.state
            .projects
            .iter()
            .filter(|p| p.is_featured)
            .collect()
    }

    /// Projects grouped by category. Groups come out in category order;
    /// projects within a group keep collection order.
    pub fn projects_by_category(&self) -> BTreeMap<&str, Vec<&Project>> {
        let mut categories: BTreeMap<&str, Vec<&Project>> = BTreeMap::new();
        for project in &self.state.projects {
            categories
                .entry(project.category.as_str())
                .or_default()
                .push(project);
        }
        categories
    }

    /// Deduplicated union of every project's tags, first-seen order.
    pub fn all_tags(&self) -> Vec<String> {
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
}

//! Record types for the showcase dataset.
//!
//! This is a separate namespace from `content`: the demo collections look
//! similar but share no identity with the canonical ones, so the types are
//! deliberately not unified. Nothing here carries serde derives - the
//! counter store is never persisted.

// ============================================================================
// Showcase projects
// ============================================================================

/// A showcase project entry. Unlike the canonical content record it has no
/// view counter.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub image: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub tags: Vec<String>,
    pub category: String,
    pub features: Vec<String>,
    pub github_link: String,
    pub demo_link: String,
    pub is_featured: bool,
}

// ============================================================================
// Contacts
// ============================================================================

/// A demo contact entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    /// Unique within this collection; assigned by the store.
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    /// How the sender prefers to be reached ("email", "phone", ...).
    pub preferred_contact: String,
    /// RFC 3339 timestamp.
    pub date: String,
}

/// Caller-supplied fields for a new contact; the store assigns `id` and
/// stamps `date`.
#[derive(Debug, Clone, Default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub preferred_contact: String,
}

// ============================================================================
// Skills and testimonials
// ============================================================================

/// A skill shown on the about page.
#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub id: u64,
    pub name: String,
    /// Emoji or icon glyph shown next to the name.
    pub icon: String,
    pub category: String,
    pub description: String,
    /// Self-assessed proficiency, 0-100.
    pub level: u8,
}

/// A client testimonial.
#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub id: u64,
    pub name: String,
    pub role: String,
    pub content: String,
    /// `YYYY-MM-DD`.
    pub date: String,
}

// ============================================================================
// Blog previews
// ============================================================================

/// A lean blog preview for listing pages: no body, author, or comments.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: u64,
    pub title: String,
    pub excerpt: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub tags: Vec<String>,
    pub image_url: String,
}

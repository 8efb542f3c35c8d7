//! Record types for the canonical content collections.
//!
//! Everything here is a plain data record. The store owns the only copy,
//! hands out references, and relies on the serde derives for the JSON
//! round trip through the persistence blob. `deny_unknown_fields` keeps a
//! foreign or hand-edited blob from smuggling fields in: such a blob
//! fails to load as a whole and the store falls back to its seed data.

use serde::{Deserialize, Serialize};

// ============================================================================
// Projects
// ============================================================================

/// A portfolio project entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// Unique within this collection; assigned by the store, never by callers.
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Image path under the site's asset root.
    pub image: String,
    /// Creation date, `YYYY-MM-DD`; stamped when the project is added.
    pub date: String,
    pub tags: Vec<String>,
    pub category: String,
    /// Bullet-point feature list shown on the project page.
    pub features: Vec<String>,
    pub github_link: String,
    pub demo_link: String,
    pub is_featured: bool,
    pub view_count: u64,
}

/// Caller-supplied fields for a new project.
///
/// The store assigns `id`, stamps `date`, and starts `view_count` at zero.
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub category: String,
    pub features: Vec<String>,
    pub github_link: String,
    pub demo_link: String,
    pub is_featured: bool,
}

/// Partial update for a [`Project`].
///
/// Only fields set to `Some` are applied. `id` is deliberately not part of
/// the patch, so an update can never move a record's identity; `view_count`
/// has its own action (`increment_project_view`).
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub date: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
    pub features: Option<Vec<String>>,
    pub github_link: Option<String>,
    pub demo_link: Option<String>,
    pub is_featured: Option<bool>,
}

impl ProjectPatch {
    pub(crate) fn apply(self, project: &mut Project) {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(image) = self.image {
            project.image = image;
        }
        if let Some(date) = self.date {
            project.date = date;
        }
        if let Some(tags) = self.tags {
            project.tags = tags;
        }
        if let Some(category) = self.category {
            project.category = category;
        }
        if let Some(features) = self.features {
            project.features = features;
        }
        if let Some(github_link) = self.github_link {
            project.github_link = github_link;
        }
        if let Some(demo_link) = self.demo_link {
            project.demo_link = demo_link;
        }
        if let Some(is_featured) = self.is_featured {
            project.is_featured = is_featured;
        }
    }
}

// ============================================================================
// Blog posts
// ============================================================================

/// A full blog post, including body text and reader comments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlogPost {
    pub id: u64,
    pub title: String,
    /// Full body text.
    pub content: String,
    /// Short teaser shown in listings.
    pub excerpt: String,
    /// Publication date, `YYYY-MM-DD`; stamped when the post is added.
    pub date: String,
    pub author: String,
    pub tags: Vec<String>,
    pub image_url: String,
    pub published: bool,
    /// Starts empty for new posts.
    pub comments: Vec<Comment>,
}

/// A reader comment on a blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Comment {
    pub author: String,
    pub message: String,
    /// RFC 3339 timestamp.
    pub date: String,
}

/// Caller-supplied fields for a new blog post.
///
/// The store assigns `id`, stamps `date`, and starts `comments` empty.
#[derive(Debug, Clone, Default)]
pub struct BlogPostDraft {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub tags: Vec<String>,
    pub image_url: String,
    pub published: bool,
}

// ============================================================================
// Contact submissions
// ============================================================================

/// A stored contact-form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactSubmission {
    /// Epoch milliseconds at submission time, kept strictly increasing by
    /// the store when two submissions land in the same millisecond.
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_contact: Option<String>,
    /// RFC 3339 timestamp, stamped at submission.
    pub date: String,
    /// Triage status; every submission starts as `"new"`.
    pub status: String,
}

/// Caller-supplied fields of a contact-form submission.
#[derive(Debug, Clone, Default)]
pub struct SubmissionDraft {
    pub name: String,
    pub email: String,
    pub message: String,
    pub subject: Option<String>,
    pub phone: Option<String>,
    pub preferred_contact: Option<String>,
}

// ============================================================================
// Site metadata
// ============================================================================

/// Singleton record of site-wide metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebInfo {
    /// Site title shown in the browser tab and headers.
    pub title: String,
    /// Site description for SEO meta tags.
    pub description: String,
    pub author: String,
    pub copyright_year: i32,
    pub social_links: SocialLinks,
    pub logo_url: String,
    /// Main navigation entries, in display order.
    pub nav_links: Vec<SiteLink>,
    /// Footer entries, in display order.
    pub footer_links: Vec<SiteLink>,
    pub company_info: CompanyInfo,
    /// RFC 3339 timestamp; refreshed on every `update_web_info`.
    pub last_updated: String,
}

/// Social profile URLs for the site footer and contact page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
    pub email: String,
}

/// A single navigation or footer entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteLink {
    pub name: String,
    pub path: String,
}

impl SiteLink {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Imprint-style company details.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompanyInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// Partial update for [`WebInfo`].
///
/// A top-level merge in the shallow sense: nested records (`social_links`,
/// `company_info`, the link lists) are replaced wholesale when present.
/// `last_updated` is not patchable; the store re-stamps it on every update.
#[derive(Debug, Clone, Default)]
pub struct WebInfoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub copyright_year: Option<i32>,
    pub social_links: Option<SocialLinks>,
    pub logo_url: Option<String>,
    pub nav_links: Option<Vec<SiteLink>>,
    pub footer_links: Option<Vec<SiteLink>>,
    pub company_info: Option<CompanyInfo>,
}

impl WebInfoPatch {
    pub(crate) fn apply(self, info: &mut WebInfo) {
        if let Some(title) = self.title {
            info.title = title;
        }
        if let Some(description) = self.description {
            info.description = description;
        }
        if let Some(author) = self.author {
            info.author = author;
        }
        if let Some(copyright_year) = self.copyright_year {
            info.copyright_year = copyright_year;
        }
        if let Some(social_links) = self.social_links {
            info.social_links = social_links;
        }
        if let Some(logo_url) = self.logo_url {
            info.logo_url = logo_url;
        }
        if let Some(nav_links) = self.nav_links {
            info.nav_links = nav_links;
        }
        if let Some(footer_links) = self.footer_links {
            info.footer_links = footer_links;
        }
        if let Some(company_info) = self.company_info {
            info.company_info = company_info;
        }
    }
}

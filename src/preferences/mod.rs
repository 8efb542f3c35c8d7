//! The preferences store: theme, user session, favorites, site settings.
//!
//! A per-visitor singleton. Every field belongs to the persisted subset:
//! the whole state is written as one JSON blob under the `"preferences"`
//! key after each mutation and read back once at construction.
//!
//! Two contracts here are deliberately asymmetric and kept that way:
//!
//! - [`PreferencesStore::logout`] clears the login flag only; the user's
//!   name, email, last-login timestamp, and visit count stay in place.
//! - [`PreferencesStore::reset_preferences`] restores theme and site
//!   settings to their defaults but does not touch login, user, or
//!   favorite state.

pub mod defaults;

use crate::storage::{self, Storage};
use crate::theme::Theme;
use crate::utils::{date, text};
use educe::Educe;
use serde::{Deserialize, Serialize};

/// Storage key and log prefix for this store.
const STORE_KEY: &str = "preferences";

/// Persisted state of the preferences store.
#[derive(Debug, Clone, PartialEq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PreferenceState {
    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub user_name: String,

    #[serde(default)]
    pub user_email: String,

    #[serde(default)]
    pub is_logged_in: bool,

    /// RFC 3339 timestamp of the most recent login, if any.
    #[serde(default)]
    pub last_login: Option<String>,

    /// Counted per login, not per page view.
    #[serde(default)]
    pub visits_count: u64,

    /// Favorited project ids. An array with set semantics: membership is
    /// toggled, never duplicated through the store's own actions.
    #[serde(default)]
    pub favorite_projects: Vec<u64>,

    #[serde(default)]
    pub site_settings: SiteSettings,
}

/// Site-wide user-tunable settings.
#[derive(Debug, Clone, PartialEq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteSettings {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable_notifications: bool,

    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub show_featured_on_home: bool,

    /// Category filter preselected on the projects page; `"all"` disables
    /// filtering.
    #[serde(default = "defaults::settings::default_category")]
    #[educe(Default = defaults::settings::default_category())]
    pub default_category: String,

    #[serde(default)]
    pub font_size: FontSize,

    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub remember_last_page: bool,
}

/// UI font scale. Serialized in lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Login input: the identity fields copied into the store.
#[derive(Debug, Clone, Default)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

/// Partial update for [`SiteSettings`]. Only fields set to `Some` are
/// applied.
#[derive(Debug, Clone, Default)]
pub struct SiteSettingsPatch {
    pub enable_notifications: Option<bool>,
    pub show_featured_on_home: Option<bool>,
    pub default_category: Option<String>,
    pub font_size: Option<FontSize>,
    pub remember_last_page: Option<bool>,
}

impl SiteSettingsPatch {
    fn apply(self, settings: &mut SiteSettings) {
        if let Some(enable_notifications) = self.enable_notifications {
            settings.enable_notifications = enable_notifications;
        }
        if let Some(show_featured_on_home) = self.show_featured_on_home {
            settings.show_featured_on_home = show_featured_on_home;
        }
        if let Some(default_category) = self.default_category {
            settings.default_category = default_category;
        }
        if let Some(font_size) = self.font_size {
            settings.font_size = font_size;
        }
        if let Some(remember_last_page) = self.remember_last_page {
            settings.remember_last_page = remember_last_page;
        }
    }
}

/// State container for per-visitor preferences and session flags.
pub struct PreferencesStore {
    state: PreferenceState,
    storage: Box<dyn Storage>,
}

impl PreferencesStore {
    /// Construct from `seed`, rehydrating any previously persisted blob.
    pub fn new(seed: PreferenceState, storage: Box<dyn Storage>) -> Self {
        let state = storage::load_or(storage.as_ref(), STORE_KEY, seed);
        Self { state, storage }
    }

    /// Construct with guest defaults.
    pub fn with_defaults(storage: Box<dyn Storage>) -> Self {
        Self::new(PreferenceState::default(), storage)
    }

    fn persist(&mut self) {
        storage::persist(self.storage.as_mut(), STORE_KEY, &self.state);
    }

    // ------------------------------------------------------------------------
    // State accessors
    // ------------------------------------------------------------------------

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    pub fn user_name(&self) -> &str {
        &self.state.user_name
    }

    pub fn user_email(&self) -> &str {
        &self.state.user_email
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.is_logged_in
    }

    pub fn last_login(&self) -> Option<&str> {
        self.state.last_login.as_deref()
    }

    pub fn visits_count(&self) -> u64 {
        self.state.visits_count
    }

    pub fn favorite_projects(&self) -> &[u64] {
        &self.state.favorite_projects
    }

    pub fn site_settings(&self) -> &SiteSettings {
        &self.state.site_settings
    }

    // ------------------------------------------------------------------------
    // Theme actions
    // ------------------------------------------------------------------------

    pub fn toggle_theme(&mut self) {
        self.state.theme = self.state.theme.toggled();
        self.persist();
    }

    /// Set the theme from a user-supplied name.
    ///
    /// Accepts exactly `"light"` and `"dark"`; anything else is silently
    /// ignored.
    pub fn set_theme(&mut self, value: &str) {
        if let Some(theme) = Theme::parse(value) {
            self.state.theme = theme;
            self.persist();
        }
    }

    // ------------------------------------------------------------------------
    // Session actions
    // ------------------------------------------------------------------------

    /// Record a login: copy the identity fields, raise the flag, stamp the
    /// login time, and count the visit. No credential check happens here -
    /// this is a local state transition only.
    pub fn login(&mut self, user: UserProfile) {
        self.state.user_name = user.name;
        self.state.user_email = user.email;
        self.state.is_logged_in = true;
        self.state.last_login = Some(date::now_iso());
        self.state.visits_count += 1;
        self.persist();
    }

    /// Clear the login flag. Name, email, and session history remain.
    pub fn logout(&mut self) {
        self.state.is_logged_in = false;
        self.persist();
    }

    /// Toggle `id` in the favorites list: absent → appended, present →
    /// removed.
    pub fn toggle_favorite_project(&mut self, id: u64) {
        match self.state.favorite_projects.iter().position(|&fav| fav == id) {
            Some(index) => {
                self.state.favorite_projects.remove(index);
            }
            None => self.state.favorite_projects.push(id),
        }
        self.persist();
    }

    /// Apply a partial update to the site settings.
    pub fn update_site_settings(&mut self, patch: SiteSettingsPatch) {
        patch.apply(&mut self.state.site_settings);
        self.persist();
    }

    /// Restore theme and site settings to their defaults.
    ///
    /// Login state, user identity, and favorites are left untouched.
    pub fn reset_preferences(&mut self) {
        self.state.theme = Theme::default();
        self.state.site_settings = SiteSettings::default();
        self.persist();
    }

    // ------------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------------

    /// True when the dark theme is active.
    pub fn is_dark_mode(&self) -> bool {
        self.state.theme == Theme::Dark
    }

    /// Initials of the display name, `"G"` (guest) when no name is set.
    pub fn user_initials(&self) -> String {
        if self.state.user_name.is_empty() {
            return "G".to_owned();
        }
        text::initials(&self.state.user_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn store() -> PreferencesStore {
        PreferencesStore::with_defaults(Box::new(MemoryStorage::new()))
    }

    #[test]
    fn test_defaults_are_guest_state() {
        let store = store();
        assert_eq!(store.theme(), Theme::Light);
        assert!(!store.is_logged_in());
        assert_eq!(store.visits_count(), 0);
        assert!(store.favorite_projects().is_empty());
        assert!(store.site_settings().enable_notifications);
        assert_eq!(store.site_settings().default_category, "all");
        assert_eq!(store.site_settings().font_size, FontSize::Medium);
    }

    #[test]
    fn test_set_theme_accepts_known_names_only() {
        let mut store = store();

        store.set_theme("dark");
        assert_eq!(store.theme(), Theme::Dark);
        assert!(store.is_dark_mode());

        store.set_theme("blue");
        assert_eq!(store.theme(), Theme::Dark);

        store.set_theme("light");
        assert!(!store.is_dark_mode());
    }

    #[test]
    fn test_toggle_theme_round_trip() {
        let mut store = store();
        store.toggle_theme();
        assert!(store.is_dark_mode());
        store.toggle_theme();
        assert!(!store.is_dark_mode());
    }

    #[test]
    fn test_login_copies_identity_and_counts_visit() {
        let mut store = store();
        store.login(UserProfile {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        });

        assert!(store.is_logged_in());
        assert_eq!(store.user_name(), "John Doe");
        assert_eq!(store.user_email(), "john@example.com");
        assert!(store.last_login().is_some());
        assert_eq!(store.visits_count(), 1);

        store.login(UserProfile {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        });
        assert_eq!(store.visits_count(), 2);
    }

    #[test]
    fn test_logout_clears_flag_only() {
        let mut store = store();
        store.login(UserProfile {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        });
        let last_login = store.last_login().map(str::to_owned);

        store.logout();

        assert!(!store.is_logged_in());
        assert_eq!(store.user_name(), "John Doe");
        assert_eq!(store.user_email(), "john@example.com");
        assert_eq!(store.last_login(), last_login.as_deref());
        assert_eq!(store.visits_count(), 1);
    }

    #[test]
    fn test_toggle_favorite_twice_is_identity() {
        let mut store = store();
        store.toggle_favorite_project(5);
        assert_eq!(store.favorite_projects(), &[5]);

        store.toggle_favorite_project(5);
        assert!(store.favorite_projects().is_empty());
    }

    #[test]
    fn test_toggle_favorite_keeps_order_of_others() {
        let mut store = store();
        store.toggle_favorite_project(1);
        store.toggle_favorite_project(2);
        store.toggle_favorite_project(3);
        store.toggle_favorite_project(2);
        assert_eq!(store.favorite_projects(), &[1, 3]);
    }

    #[test]
    fn test_update_site_settings_merges_only_set_fields() {
        let mut store = store();
        store.update_site_settings(SiteSettingsPatch {
            font_size: Some(FontSize::Large),
            enable_notifications: Some(false),
            ..Default::default()
        });

        let settings = store.site_settings();
        assert_eq!(settings.font_size, FontSize::Large);
        assert!(!settings.enable_notifications);
        // Untouched fields keep their defaults.
        assert!(settings.show_featured_on_home);
        assert_eq!(settings.default_category, "all");
    }

    #[test]
    fn test_reset_preferences_is_asymmetric() {
        let mut store = store();
        store.set_theme("dark");
        store.update_site_settings(SiteSettingsPatch {
            default_category: Some("Web Development".to_string()),
            ..Default::default()
        });
        store.login(UserProfile {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        });
        store.toggle_favorite_project(2);

        store.reset_preferences();

        // Theme and settings reset...
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(store.site_settings(), &SiteSettings::default());
        // ...while session and favorites survive.
        assert!(store.is_logged_in());
        assert_eq!(store.user_name(), "John Doe");
        assert_eq!(store.favorite_projects(), &[2]);
    }

    #[test]
    fn test_user_initials() {
        let mut store = store();
        assert_eq!(store.user_initials(), "G");

        store.login(UserProfile {
            name: "John Doe".to_string(),
            email: String::new(),
        });
        assert_eq!(store.user_initials(), "JD");

        store.login(UserProfile {
            name: "ada".to_string(),
            email: String::new(),
        });
        assert_eq!(store.user_initials(), "A");
    }

    #[test]
    fn test_state_survives_restart_via_shared_storage() {
        let storage = MemoryStorage::new();

        let mut store = PreferencesStore::with_defaults(Box::new(storage.clone()));
        store.set_theme("dark");
        store.toggle_favorite_project(4);
        store.login(UserProfile {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        });
        let expected = store.state.clone();
        drop(store);

        let revived = PreferencesStore::with_defaults(Box::new(storage));
        assert_eq!(revived.state, expected);
    }

    #[test]
    fn test_corrupt_blob_falls_back_to_defaults() {
        let mut storage = MemoryStorage::new();
        storage.save("preferences", "][").unwrap();

        let store = PreferencesStore::with_defaults(Box::new(storage));
        assert_eq!(store.state, PreferenceState::default());
    }

    #[test]
    fn test_partial_blob_rehydrates_missing_fields_from_defaults() {
        let mut storage = MemoryStorage::new();
        storage
            .save("preferences", r#"{"theme": "dark", "visits_count": 12}"#)
            .unwrap();

        let store = PreferencesStore::with_defaults(Box::new(storage));
        assert!(store.is_dark_mode());
        assert_eq!(store.visits_count(), 12);
        assert_eq!(store.site_settings(), &SiteSettings::default());
    }
}

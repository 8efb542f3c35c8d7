//! Default values for preference fields.
//!
//! These functions feed both serde `default` attributes and the `Default`
//! derives, so a fresh store and a partially rehydrated blob agree.

pub fn r#true() -> bool {
    true
}

pub mod settings {
    pub fn default_category() -> String {
        "all".into()
    }
}

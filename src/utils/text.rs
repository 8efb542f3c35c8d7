//! Small text helpers.

/// Build initials from a display name.
///
/// Takes the first letter of each whitespace-separated word, uppercased
/// and joined: `"John Doe"` → `"JD"`, `"ada"` → `"A"`, `""` → `""`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

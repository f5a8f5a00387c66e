//! Slug generation for entities that derive a URL identifier from their name.

use sea_orm::ActiveValue;
use unicode_normalization::UnicodeNormalization;

/// Convert a display name into a lowercase, hyphenated slug.
///
/// The name is NFKD-decomposed first and anything left outside ASCII is
/// dropped, so accented letters fold to their base letter. Letters, digits
/// and underscores are kept. Runs of whitespace and hyphens collapse into a
/// single `-`. Other characters are dropped and leading or trailing `-`/`_`
/// are trimmed.
///
/// ```
/// assert_eq!(entity::slug::slugify("Summer Sale -- 2024!"), "summer-sale-2024");
/// assert_eq!(entity::slug::slugify("Café Crème"), "cafe-creme");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for ch in name.nfkd().filter(char::is_ascii) {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else if ch == '-' || ch.is_whitespace() {
            pending_separator = true;
        }
    }

    slug.trim_matches(|c| c == '-' || c == '_').to_string()
}

/// Fill an empty slug from the name before the row is saved.
///
/// On insert an unset slug counts as empty. On update an unset slug means the
/// column is left alone, so only an explicitly empty slug is regenerated.
pub(crate) fn fill_slug(slug: &mut ActiveValue<String>, name: &ActiveValue<String>, insert: bool) {
    let needs_slug = match slug {
        ActiveValue::Set(value) | ActiveValue::Unchanged(value) => value.is_empty(),
        ActiveValue::NotSet => insert,
    };

    if !needs_slug {
        return;
    }

    if let ActiveValue::Set(name) | ActiveValue::Unchanged(name) = name {
        *slug = ActiveValue::Set(slugify(name));
    }
}

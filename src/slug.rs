/// Splits an `org/name` slug at the first `/`.
///
/// Returns `None` when the slug has no `/`.
pub fn split_slug(slug: &str) -> Option<(String, String)> {
    slug.split_once('/')
        .map(|(org_id, name)| (org_id.to_string(), name.to_string()))
}

//! Category + search term filtering over the endpoint catalog

use crate::types::{CategoryKey, Endpoint};

/// Endpoints of `category` whose path or description contains `term`,
/// ignoring case. Keeps catalog order; an empty term matches everything.
pub fn filter_endpoints<'a>(
    endpoints: &'a [Endpoint],
    category: CategoryKey,
    term: &str,
) -> Vec<&'a Endpoint> {
    let needle = term.to_lowercase();

    endpoints
        .iter()
        .filter(|e| e.category == category)
        .filter(|e| contains_lowercase(e, &needle))
        .collect()
}

fn contains_lowercase(endpoint: &Endpoint, needle: &str) -> bool {
    needle.is_empty()
        || endpoint.path.to_lowercase().contains(needle)
        || endpoint.description.to_lowercase().contains(needle)
}

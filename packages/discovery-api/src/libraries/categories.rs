/// Fixed mapping from a search category to the upstream segment id.
///
/// Unknown categories return `None` and are dropped from the upstream
/// request rather than rejected.
pub fn segment_id(category: &str) -> Option<&'static str> {
    match category {
        "music" => Some("KZFzniwnSyZfZ7v7nJ"),
        "sports" => Some("KZFzniwnSyZfZ7v7nE"),
        "arts" => Some("KZFzniwnSyZfZ7v7na"),
        "film" => Some("KZFzniwnSyZfZ7v7nn"),
        "miscellaneous" => Some("KZFzniwnSyZfZ7v7n1"),
        _ => None,
    }
}

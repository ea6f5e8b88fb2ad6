/// Trimmed (lat, lon) pair, or `None` when either half is missing
pub fn coordinate_pair(lat: &str, lon: &str) -> Option<(String, String)> {
    let lat = lat.trim();
    let lon = lon.trim();
    if lat.is_empty() || lon.is_empty() {
        return None;
    }
    Some((lat.to_string(), lon.to_string()))
}

/// True when the element at `index` shares its complete coordinate pair
/// with some sibling
///
/// `pairs` holds one slot per sibling, in collection order; elements
/// without a complete pair never collide.
pub fn is_duplicate_location(index: usize, pairs: &[Option<(String, String)>]) -> bool {
    let Some(Some(own)) = pairs.get(index) else {
        return false;
    };
    pairs
        .iter()
        .enumerate()
        .any(|(i, pair)| i != index && pair.as_ref() == Some(own))
}

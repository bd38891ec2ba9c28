//! Subject extraction and YouTube link selection.

/// Extracts the Twitch username from a page path.
///
/// Only a single path segment of `[A-Za-z0-9_]+` counts as a channel page
/// (`/somestreamer`); directory pages, video paths and settings paths are
/// ignored. The result is lowercased to match the server's subject key.
pub fn extract_subject(path: &str) -> Option<String> {
    let segment = path.strip_prefix('/')?;
    if segment.is_empty()
        || !segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return None;
    }
    Some(segment.to_lowercase())
}

/// Picks the most likely matching YouTube link:
/// 1. a link whose path contains `/<subject>` verbatim,
/// 2. a link containing the subject anywhere,
/// 3. the first link found.
pub fn pick_best_link<'a>(links: &'a [String], subject: &str) -> Option<&'a str> {
    let needle = subject.to_lowercase();
    let path_needle = format!("/{}", needle);

    if let Some(exact) = links
        .iter()
        .find(|l| l.to_lowercase().contains(&path_needle))
    {
        return Some(exact);
    }
    if let Some(partial) = links.iter().find(|l| l.to_lowercase().contains(&needle)) {
        return Some(partial);
    }
    links.first().map(String::as_str)
}

/// Strips query and fragment before the link goes to the lookup service.
pub fn normalize_link(link: &str) -> String {
    match url::Url::parse(link) {
        Ok(mut parsed) => {
            parsed.set_query(None);
            parsed.set_fragment(None);
            parsed.to_string()
        }
        // Not parseable as a URL: fall back to cutting at the delimiters.
        Err(_) => link
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    }
}

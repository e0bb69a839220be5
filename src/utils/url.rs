//! URL and route helpers.
//!
//! Routes are the site-relative page addresses the link checker compares:
//! always with a leading slash, no `.md`/`.html` suffix, no trailing `index`
//! and no trailing slash (except the root `/`).

/// Check if a link is external (has a URL scheme like http:, mailto:, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
///
/// # Examples
/// ```
/// use quire::utils::url::is_external_link;
/// assert!(is_external_link("https://example.com"));
/// assert!(is_external_link("mailto:user@example.com"));
/// assert!(!is_external_link("/guide/"));
/// assert!(!is_external_link("./json.md"));
/// ```
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Check whether a URL points at a loopback host.
///
/// Such endpoints only exist on a developer machine and are unreachable
/// from a CI build.
pub fn is_localhost_url(link: &str) -> bool {
    let Ok(parsed) = url::Url::parse(link) else {
        return false;
    };
    match parsed.host() {
        Some(url::Host::Domain(domain)) => {
            domain == "localhost" || domain.ends_with(".localhost")
        }
        Some(url::Host::Ipv4(ip)) => ip.is_loopback() || ip.is_unspecified(),
        Some(url::Host::Ipv6(ip)) => ip.is_loopback() || ip.is_unspecified(),
        None => false,
    }
}

/// Strip the site `base` from a link when present.
///
/// Links written in content usually omit the base, so a link without
/// the prefix is returned unchanged.
pub fn strip_base<'a>(link: &'a str, base: &str) -> &'a str {
    let prefix = base.trim_end_matches('/');
    if prefix.is_empty() {
        return link;
    }
    match link.strip_prefix(prefix) {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => link,
    }
}

/// Normalize a site path to its route form.
///
/// # Examples
/// ```
/// use quire::utils::url::normalize_route;
/// assert_eq!(normalize_route("/guide/stubs/json.html"), "/guide/stubs/json");
/// assert_eq!(normalize_route("guide/index.md"), "/guide");
/// assert_eq!(normalize_route("/index.html"), "/");
/// ```
pub fn normalize_route(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = path
        .strip_suffix(".md")
        .or_else(|| path.strip_suffix(".html"))
        .unwrap_or(path);
    let path = match path.strip_suffix("index") {
        Some(rest) if rest.is_empty() || rest.ends_with('/') => rest,
        _ => path,
    };
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Resolve a file-relative link against the page it appears in.
///
/// `from` is the source file path with a leading slash (`/guide/stubs/json.md`);
/// the link is resolved against its directory.
pub fn resolve_relative(from: &str, link: &str) -> String {
    let dir = match from.rfind('/') {
        Some(pos) => &from[..pos],
        None => "",
    };

    let mut segments: Vec<&str> = dir.split('/').filter(|s| !s.is_empty()).collect();
    for segment in link.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    let mut resolved = format!("/{}", segments.join("/"));
    if link.ends_with('/') && resolved.len() > 1 {
        resolved.push('/');
    }
    resolved
}

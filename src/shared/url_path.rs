//! Path segment escaping for GitLab API URLs.

/// Percent-encodes a single URL path segment.
///
/// Everything outside the unreserved set is encoded, so `/` becomes `%2F`
/// and a namespaced project path stays one segment. Dots are encoded as
/// `%2E` as well: GitLab would otherwise treat a trailing `.json`-like
/// suffix in a project path as a format extension.
pub fn path_escape(segment: &str) -> String {
    urlencoding::encode(segment).replace('.', "%2E")
}

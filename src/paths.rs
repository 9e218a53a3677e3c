//! Lexical path normalization to forward-slash form.
//!
//! Embedded Studio accepts forward slashes on every host, so the redirected
//! intermediate directory is always written in forward-slash form no matter
//! which separator convention the generated project used.

/// Normalize a path lexically and convert separators to `/`.
///
/// Collapses empty and `.` segments, resolves interior `..` pairs, and
/// keeps leading `..` runs. Both `/` and `\` are accepted as input
/// separators. Purely lexical; the filesystem is never consulted.
pub fn unix_path(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    let absolute = normalized.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for segment in normalized.split('/') {
        match segment {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                // A leading ".." above the root of an absolute path
                // collapses to the root itself.
                _ if absolute => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    if absolute {
        format!("/{}", joined)
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Join `leaf` onto `base` and normalize the result with [`unix_path`].
pub fn unix_join(base: &str, leaf: &str) -> String {
    if base.is_empty() {
        unix_path(leaf)
    } else {
        unix_path(&format!("{}/{}", base, leaf))
    }
}

/// Characters a route parser leaves on symbol names (`:id`, `*path`).
pub const DECORATIONS: [char; 2] = ['*', ':'];

/// Remove every `*` and `:` from a placeholder name.
///
/// # Examples
/// ```
/// use routeplate_core::utils::strip_decorations;
/// assert_eq!(strip_decorations(":id"), "id");
/// assert_eq!(strip_decorations("*path"), "path");
/// assert_eq!(strip_decorations("plain"), "plain");
/// ```
pub fn strip_decorations(name: &str) -> String {
    name.chars().filter(|c| !DECORATIONS.contains(c)).collect()
}

pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274c}";

/// Renders one error per line as a bulleted list.
pub(crate) fn bulleted<T: std::fmt::Display>(items: &[T]) -> String {
    items.iter()
        .map(|item| format!("  * {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

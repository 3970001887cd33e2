/// Display first name from a `"Last, First [Middle]"` full name.
///
/// Names that don't follow that convention come back unchanged.
pub fn first_name(full_name: &str) -> &str {
    full_name
        .split_once(", ")
        .and_then(|(_, given)| {
            // Only the segment between the first and second ", " counts.
            let given = given.split(", ").next().unwrap_or(given);
            given.split_whitespace().next()
        })
        .unwrap_or(full_name)
}

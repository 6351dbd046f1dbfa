/// Normalize a game name for loose comparison.
///
/// Lowercases, turns every run of non-alphanumeric characters into a single
/// space, and trims. `"Half-Life 2: Episode One"` becomes
/// `"half life 2 episode one"`.
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_space = false;
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }
    out
}

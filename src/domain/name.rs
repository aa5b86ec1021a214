/// Normalizes a branch or repository name into a lowercase slug.
///
/// Every `_`, `.`, `/` and whitespace character becomes `-`, one for one. Runs
/// are not collapsed, so `"a__b"` becomes `"a--b"`. The result is a single path
/// segment, so `owner/repo` names flatten to `owner-repo`.
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| {
            if c == '_' || c == '.' || c == '/' || c.is_whitespace() {
                '-'
            } else {
                c
            }
        })
        .collect()
}

/// Resolve the reference recorded for an entry found in `file_path`.
///
/// With a `base_dir` hint such as `"project"`, everything up to and including
/// the first `/project/` segment is dropped:
/// `/Users/x/project/js/code.js` becomes `js/code.js`. Without a hint, or when
/// the segment is not in the path, the path is returned unchanged.
pub fn resolve_reference(file_path: &str, base_dir: Option<&str>) -> String {
    if let Some(raw) = base_dir.filter(|dir| !dir.is_empty()) {
        let segment = format!("/{}/", raw.replacen('/', "", 1));
        if let Some(index) = file_path.find(&segment) {
            return file_path[index + segment.len()..].to_string();
        }
    }

    file_path.to_string()
}

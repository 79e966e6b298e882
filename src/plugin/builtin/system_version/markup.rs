//! Meta tag rendering and insertion into emitted HTML

const HEAD_OPEN: &str = "<head>";

/// `<meta name="version" content="...">` for the given display version
pub fn meta_tag(display_version: &str) -> String {
    format!("<meta name=\"version\" content=\"{}\">", display_version)
}

/// Insert `tag` right after the first literal `<head>`.
///
/// Returns false, leaving `html` untouched, when there is no `<head>`.
pub fn insert_meta_tag(html: &mut String, tag: &str) -> bool {
    match html.find(HEAD_OPEN) {
        Some(position) => {
            html.insert_str(position + HEAD_OPEN.len(), tag);
            true
        }
        None => false,
    }
}

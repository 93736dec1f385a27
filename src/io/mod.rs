//! Writing finished documents to disk.

use crate::errors::WriteError;
use std::path::Path;

/// First line of every generated file.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Inserts `<!-- text -->` on its own line directly after the first line of `document`.
///
/// A document without a line break gets the comment appended after it.
///
/// ```
/// # use airframe_svg::io::insert_attribution;
/// let out = insert_attribution("<?xml?>\n<svg/>\n", "hello");
/// assert_eq!(out, "<?xml?>\n<!-- hello -->\n<svg/>\n");
/// ```
pub fn insert_attribution(document: &str, text: &str) -> String {
    let comment = format!("<!-- {text} -->\n");
    let mut out = String::with_capacity(document.len() + comment.len() + 1);
    match document.split_once('\n') {
        Some((first, rest)) => {
            out.push_str(first);
            out.push('\n');
            out.push_str(&comment);
            out.push_str(rest);
        },
        None => {
            out.push_str(document);
            out.push('\n');
            out.push_str(&comment);
        },
    }
    out
}

/// Writes `contents` to `path` in one go, replacing any existing file.
pub fn write_svg(path: &Path, contents: &str) -> Result<(), WriteError> {
    std::fs::write(path, contents).map_err(|source| WriteError {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribution_goes_after_first_line_only() {
        let doc = "a\nb\nc\n";
        let out = insert_attribution(doc, "x");
        assert_eq!(out, "a\n<!-- x -->\nb\nc\n");
        assert_eq!(out.matches("<!--").count(), 1);
    }

    #[test]
    fn attribution_for_single_line_document() {
        assert_eq!(insert_attribution("<svg/>", "x"), "<svg/>\n<!-- x -->\n");
    }

    #[test]
    fn write_into_missing_directory_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.svg");
        let err = write_svg(&path, "<svg/>").unwrap_err();
        assert_eq!(err.path, path);
        assert!(err.to_string().contains("out.svg"));
    }
}

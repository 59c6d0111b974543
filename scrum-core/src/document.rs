//! Helpers for the uploaded specification document.

/// Titles longer than this are cut at a char boundary.
const MAX_TITLE_LEN: usize = 80;

/// Derive a project title from the document: the first markdown heading,
/// else the first non-empty line, else a fixed fallback.
pub fn extract_project_title(document: &str) -> String {
    if let Some(heading) = document
        .lines()
        .map(str::trim)
        .find(|l| l.starts_with('#'))
    {
        let title = heading.trim_start_matches('#').trim();
        if !title.is_empty() {
            return truncate(title);
        }
    }

    document
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(truncate)
        .unwrap_or_else(|| "Untitled project".to_string())
}

fn truncate(title: &str) -> String {
    if title.chars().count() <= MAX_TITLE_LEN {
        return title.to_string();
    }
    title.chars().take(MAX_TITLE_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_heading() {
        let doc = "Some preamble\n\n## Billing Portal\n\nDetails follow.";
        assert_eq!(extract_project_title(doc), "Billing Portal");
    }

    #[test]
    fn test_title_from_first_line_without_heading() {
        let doc = "\n  Billing Portal v2  \nMore text";
        assert_eq!(extract_project_title(doc), "Billing Portal v2");
    }

    #[test]
    fn test_title_fallback_for_empty_document() {
        assert_eq!(extract_project_title("   \n\n  "), "Untitled project");
    }

    #[test]
    fn test_bare_hashes_fall_through_to_first_line() {
        let doc = "###\nActual title";
        assert_eq!(extract_project_title(doc), "Actual title");
    }

    #[test]
    fn test_long_title_is_truncated() {
        let doc = format!("# {}", "x".repeat(200));
        assert_eq!(extract_project_title(&doc).chars().count(), MAX_TITLE_LEN);
    }
}

//! Markdown rendering of search results and documentation.
//!
//! Both renderers return the full report as a `String` ending in a newline;
//! printing is left to the command handlers.

use crate::constants;
use crate::models::{DocsRequest, LibraryRecord};

/// Renders the library search report.
///
/// Server order is kept. At most ten records are shown, followed by a count
/// note when more were returned. An empty list yields the "no libraries"
/// notice, which is not an error.
#[must_use]
pub fn render_search(library_name: &str, records: &[LibraryRecord]) -> String {
    if records.is_empty() {
        return finish(&[
            format!("No libraries found matching '{library_name}'."),
            constants::MSG_NO_LIBRARIES_HINT.to_string(),
        ]);
    }

    let mut lines = vec![format!("## Libraries matching '{library_name}'"), String::new()];

    for record in records.iter().take(constants::MAX_SEARCH_RESULTS) {
        push_library(&mut lines, record);
    }

    if records.len() > constants::MAX_SEARCH_RESULTS {
        lines.push(format!(
            "_Showing {} of {} results._",
            constants::MAX_SEARCH_RESULTS,
            records.len()
        ));
    }

    finish(&lines)
}

fn push_library(lines: &mut Vec<String>, record: &LibraryRecord) {
    lines.push(format!("### {}", record.display_name()));
    lines.push(format!("- **ID:** `{}`", record.display_id()));
    lines.push(format!(
        "- **Description:** {}",
        truncate_description(record.display_description())
    ));
    lines.push(format!(
        "- **Documentation snippets:** {}",
        record.display_snippets()
    ));
    lines.push(format!("- **Trust score:** {}", record.display_trust_score()));

    let versions: Vec<&str> = record
        .version_strings()
        .take(constants::MAX_VERSIONS_SHOWN)
        .collect();
    if !versions.is_empty() {
        lines.push(format!("- **Versions:** {}", versions.join(", ")));
    }
    lines.push(String::new());
}

/// Joins report lines, each terminated by a newline.
fn finish(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Cuts a description to 200 characters, appending `...` only if something was cut.
#[must_use]
pub fn truncate_description(description: &str) -> String {
    match description.char_indices().nth(constants::MAX_DESCRIPTION_CHARS) {
        Some((cut, _)) => format!("{}{}", &description[..cut], constants::ELLIPSIS),
        None => description.to_string(),
    }
}

/// Renders fetched documentation. Content is printed whole, never truncated.
#[must_use]
pub fn render_docs(request: &DocsRequest, content: &str) -> String {
    let content = content.trim();

    if content.is_empty() {
        return finish(&[
            format!(
                "No documentation found for query '{}' in {}.",
                request.query, request.library_id
            ),
            constants::MSG_NO_DOCS_HINT.to_string(),
        ]);
    }

    finish(&[
        format!("## Documentation: {}", request.library_id),
        format!("**Query:** {}", request.query),
        String::new(),
        content.to_string(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: &str) -> LibraryRecord {
        serde_json::from_value(json!({
            "id": id,
            "title": format!("Library {id}"),
            "description": "A library",
            "totalSnippets": 10,
            "trustScore": 7,
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_results_notice() {
        let out = render_search("reactt", &[]);
        assert_eq!(
            out,
            "No libraries found matching 'reactt'.\nTry a different name or check spelling.\n"
        );
    }

    #[test]
    fn test_single_record_layout() {
        let lib: LibraryRecord = serde_json::from_value(json!({
            "id": "/facebook/react",
            "title": "React",
            "description": "The library for web and native user interfaces",
            "totalSnippets": 3210,
            "trustScore": 9.2,
            "versions": ["v19.1.0", "v18.3.1"]
        }))
        .unwrap();

        let out = render_search("react", &[lib]);
        let expected = "## Libraries matching 'react'\n\
                        \n\
                        ### React\n\
                        - **ID:** `/facebook/react`\n\
                        - **Description:** The library for web and native user interfaces\n\
                        - **Documentation snippets:** 3210\n\
                        - **Trust score:** 9.2\n\
                        - **Versions:** v19.1.0, v18.3.1\n\
                        \n";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_versions_line_omitted_when_empty() {
        let out = render_search("x", &[record("/a/b")]);
        assert!(!out.contains("Versions"));
    }

    #[test]
    fn test_versions_capped_at_five() {
        let lib: LibraryRecord = serde_json::from_value(json!({
            "versions": ["1", "2", "3", "4", "5", "6", "7"]
        }))
        .unwrap();
        let out = render_search("x", &[lib]);
        assert!(out.contains("- **Versions:** 1, 2, 3, 4, 5\n"));
    }

    #[test]
    fn test_more_than_ten_records() {
        let records: Vec<LibraryRecord> = (0..13).map(|i| record(&format!("/lib/{i}"))).collect();
        let out = render_search("lib", &records);

        assert_eq!(out.matches("### ").count(), 10);
        assert!(out.contains("`/lib/9`"));
        assert!(!out.contains("`/lib/10`"));
        assert!(out.ends_with("_Showing 10 of 13 results._\n"));
    }

    #[test]
    fn test_exactly_ten_records_has_no_count_note() {
        let records: Vec<LibraryRecord> = (0..10).map(|i| record(&format!("/lib/{i}"))).collect();
        let out = render_search("lib", &records);
        assert_eq!(out.matches("### ").count(), 10);
        assert!(!out.contains("Showing"));
    }

    #[test]
    fn test_server_order_preserved() {
        let records = vec![record("/z/z"), record("/a/a"), record("/m/m")];
        let out = render_search("x", &records);
        let z = out.find("/z/z").unwrap();
        let a = out.find("/a/a").unwrap();
        let m = out.find("/m/m").unwrap();
        assert!(z < a && a < m);
    }

    #[test]
    fn test_truncate_description_boundary() {
        let exact = "a".repeat(200);
        assert_eq!(truncate_description(&exact), exact);

        let long = "b".repeat(201);
        let truncated = truncate_description(&long);
        assert_eq!(truncated, format!("{}...", "b".repeat(200)));
    }

    #[test]
    fn test_truncate_description_counts_chars() {
        let long = "é".repeat(250);
        let truncated = truncate_description(&long);
        assert_eq!(truncated.chars().count(), 203);
        assert!(truncated.ends_with("é..."));
    }

    #[test]
    fn test_docs_render() {
        let request = DocsRequest::new("/vercel/next.js", "server components");
        let out = render_docs(&request, "\n  TITLE: Server Components\nbody text\n\n");
        assert_eq!(
            out,
            "## Documentation: /vercel/next.js\n**Query:** server components\n\nTITLE: Server Components\nbody text\n"
        );
    }

    #[test]
    fn test_records_separated_by_blank_line() {
        let out = render_search("x", &[record("/a/a"), record("/b/b")]);
        assert!(out.contains("- **Trust score:** 7\n\n### Library /b/b\n"));
        assert!(out.ends_with("- **Trust score:** 7\n\n"));
    }

    #[test]
    fn test_docs_render_is_not_truncated() {
        let request = DocsRequest::new("/a/b", "q");
        let content = "x".repeat(50_000);
        let out = render_docs(&request, &content);
        assert!(out.contains(&content));
    }

    #[test]
    fn test_docs_empty_content_notice() {
        let request = DocsRequest::new("/a/b", "nothing here");
        for content in ["", "   \n\t  "] {
            assert_eq!(
                render_docs(&request, content),
                "No documentation found for query 'nothing here' in /a/b.\nTry a more specific or different query.\n"
            );
        }
    }
}

//! Flattening per-file results into one diagnostic sequence.

use crate::paths::PathResolver;
use crate::types::{Diagnostic, FileResult};
use log::debug;

/// Merge every file's diagnostics into one list, in input order.
///
/// Each diagnostic is copied with its file's path attached; when `resolver`
/// is given the path is made absolute first. Files without diagnostics
/// contribute nothing and no diagnostic is dropped.
pub fn flatten_results(results: &[FileResult], resolver: Option<&dyn PathResolver>) -> Vec<Diagnostic> {
    let mut flat = Vec::new();

    for result in results {
        let diagnostics = result.diagnostics();
        if diagnostics.is_empty() {
            continue;
        }
        let path = match resolver {
            Some(resolver) => resolver.absolutize(&result.file_path),
            None => result.file_path.clone(),
        };
        flat.extend(diagnostics.iter().map(|d| d.with_file_path(&path)));
    }

    debug!("Flattened {} files into {} diagnostics", results.len(), flat.len());
    flat
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::BaseDirResolver;

    fn sample() -> Vec<FileResult> {
        vec![
            FileResult::new("b.js", vec![Diagnostic::new(2, Some("semi"), "one").at(1, 1)]),
            FileResult::new("empty.js", vec![]),
            FileResult { file_path: "none.js".to_string(), messages: None },
            FileResult::new(
                "a.js",
                vec![Diagnostic::new(1, Some("quotes"), "two"), Diagnostic::new(1, None, "three")],
            ),
        ]
    }

    #[test]
    fn test_flatten_keeps_order_and_attaches_paths() {
        let flat = flatten_results(&sample(), None);
        let paths: Vec<&str> = flat.iter().map(|d| d.file_path.as_str()).collect();
        let messages: Vec<&str> = flat.iter().map(|d| d.message.as_str()).collect();

        assert_eq!(paths, vec!["b.js", "a.js", "a.js"]);
        assert_eq!(messages, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_flatten_does_not_touch_input() {
        let input = sample();
        let _ = flatten_results(&input, None);
        assert!(input[0].diagnostics()[0].file_path.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_flatten_absolutizes_with_resolver() {
        let resolver = BaseDirResolver::new("/repo");
        let flat = flatten_results(&sample(), Some(&resolver));

        assert_eq!(flat[0].file_path, "/repo/b.js");
        assert_eq!(flat[1].file_path, "/repo/a.js");
        assert_eq!(flat[1].message, "two");
    }
}

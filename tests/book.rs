use std::fs::{self};

use calcyard::compute;
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, expression) in extract_expressions(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = compute(&expression) {
                panic!("Expression {} in {:?} failed:\n{}\nError: {}",
                       i + 1,
                       path,
                       expression,
                       e);
            }
        }
    }

    assert!(count > 0, "No expressions found in book/src");
}

/// Collects every non-empty line of every ```calcyard fenced block.
fn extract_expressions(content: &str) -> Vec<String> {
    let mut expressions = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("```calcyard") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && !trimmed.is_empty() {
            expressions.push(trimmed.to_string());
        }
    }

    expressions
}

//! Built-in sample snippets for the example picker
//!
//! The catalog is static: snippets are compiled into the binary from `snippets/` and
//! never change at runtime. Lookups are linear scans; there are only a handful of entries.

use nucleo::pattern::{CaseMatching, Normalization, Pattern};
use nucleo::{Config, Matcher, Utf32Str};

use crate::models::CodeExample;

/// Pseudo-category that selects every example
pub const ALL_CATEGORY: &str = "All";

static EXAMPLES: &[CodeExample] = &[
    CodeExample {
        id: "permutation",
        name: "Permutations (backtracking)",
        language: "cpp",
        category: "Backtracking",
        code: include_str!("snippets/permutation.cpp"),
    },
    CodeExample {
        id: "quicksort",
        name: "Quicksort",
        language: "python",
        category: "Sorting",
        code: include_str!("snippets/quicksort.py"),
    },
    CodeExample {
        id: "fibonacci",
        name: "Fibonacci (dynamic programming)",
        language: "javascript",
        category: "Dynamic Programming",
        code: include_str!("snippets/fibonacci.js"),
    },
    CodeExample {
        id: "binary-search",
        name: "Binary search",
        language: "java",
        category: "Searching",
        code: include_str!("snippets/binary_search.java"),
    },
    CodeExample {
        id: "tree-traversal",
        name: "Binary tree traversal (recursive)",
        language: "cpp",
        category: "Trees",
        code: include_str!("snippets/tree_traversal.cpp"),
    },
    CodeExample {
        id: "dijkstra",
        name: "Dijkstra shortest path",
        language: "python",
        category: "Graphs",
        code: include_str!("snippets/dijkstra.py"),
    },
    CodeExample {
        id: "two-sum",
        name: "Two sum (hash map)",
        language: "javascript",
        category: "Hash Tables",
        code: include_str!("snippets/two_sum.js"),
    },
    CodeExample {
        id: "lru-cache",
        name: "LRU cache",
        language: "go",
        category: "Data Structures",
        code: include_str!("snippets/lru_cache.go"),
    },
];

pub fn all() -> &'static [CodeExample] {
    EXAMPLES
}

pub fn find(id: &str) -> Option<&'static CodeExample> {
    EXAMPLES.iter().find(|ex| ex.id == id)
}

/// [`ALL_CATEGORY`] followed by each distinct category in catalog order
pub fn categories() -> Vec<&'static str> {
    let mut categories = vec![ALL_CATEGORY];
    for example in EXAMPLES {
        if !categories[1..].contains(&example.category) {
            categories.push(example.category);
        }
    }
    categories
}

pub fn by_category(category: &str) -> Vec<&'static CodeExample> {
    if category == ALL_CATEGORY {
        return EXAMPLES.iter().collect();
    }
    EXAMPLES.iter().filter(|ex| ex.category == category).collect()
}

/// Examples for a language tag, ignoring case
pub fn by_language(language: &str) -> Vec<&'static CodeExample> {
    EXAMPLES.iter().filter(|ex| ex.language.eq_ignore_ascii_case(language)).collect()
}

/// Fuzzy-match examples by name, id and category, best match first
///
/// Ties keep catalog order. A blank query returns the whole catalog.
pub fn search(query: &str) -> Vec<&'static CodeExample> {
    if query.trim().is_empty() {
        return EXAMPLES.iter().collect();
    }

    let pattern = Pattern::parse(query, CaseMatching::Smart, Normalization::Smart);
    let mut matcher = Matcher::new(Config::DEFAULT);
    let mut buf = Vec::new();

    let mut scored: Vec<(u32, &'static CodeExample)> = EXAMPLES
        .iter()
        .filter_map(|ex| {
            let haystack = format!("{} {} {}", ex.name, ex.id, ex.category);
            pattern.score(Utf32Str::new(&haystack, &mut buf), &mut matcher).map(|s| (s, ex))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, ex)| ex).collect()
}

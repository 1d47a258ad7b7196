//! Label search over the ordered item sequence.

use nucleo_matcher::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::hierarchy::Hierarchy;
use crate::item::Item;

/// Case-insensitive substring matcher for item labels.
///
/// The query is used literally: no fuzzy matching, no special syntax, and
/// no Unicode normalization (an `e` does not match an `é`).
pub struct LabelMatcher {
    atom: Atom,
    matcher: Matcher,
    buf: Vec<char>,
}

impl std::fmt::Debug for LabelMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelMatcher").finish_non_exhaustive()
    }
}

impl LabelMatcher {
    /// Create a matcher for `query`.
    pub fn new(query: &str) -> Self {
        Self {
            atom: Atom::new(
                query,
                CaseMatching::Ignore,
                Normalization::Never,
                AtomKind::Substring,
                false,
            ),
            matcher: Matcher::new(Config::DEFAULT),
            buf: Vec::new(),
        }
    }

    /// Returns `true` if `label` contains the query.
    pub fn matches(&mut self, label: &str) -> bool {
        let haystack = Utf32Str::new(label, &mut self.buf);
        self.atom.score(haystack, &mut self.matcher).is_some()
    }
}

/// Filter the ordered sequence down to rows whose label contains `query`.
///
/// Every ancestor of a matching row that is not already shown is inserted
/// right before that row, outermost first, so a match is never displayed
/// without its section. An empty query keeps the full order.
///
/// Returns item indices in display order.
pub fn filter_indices(items: &[Item], hierarchy: &Hierarchy, query: &str) -> Vec<usize> {
    if query.is_empty() {
        return hierarchy.order().to_vec();
    }

    let mut matcher = LabelMatcher::new(query);
    let mut included = vec![false; items.len()];
    let mut results = Vec::new();

    for &index in hierarchy.order() {
        if included[index] || !matcher.matches(&items[index].label) {
            continue;
        }

        included[index] = true;
        let mut ancestors = Vec::new();
        let mut current = hierarchy.parent_of(index);
        while let Some(parent) = current {
            if included[parent] {
                break;
            }
            included[parent] = true;
            ancestors.push(parent);
            current = hierarchy.parent_of(parent);
        }

        results.extend(ancestors.into_iter().rev());
        results.push(index);
    }

    log::trace!(
        "[search] query {:?} kept {} of {} rows",
        query,
        results.len(),
        hierarchy.len()
    );

    results
}

/// Items cloned in filtered display order.
pub fn filter_items(items: &[Item], hierarchy: &Hierarchy, query: &str) -> Vec<Item> {
    filter_indices(items, hierarchy, query)
        .into_iter()
        .map(|i| items[i].clone())
        .collect()
}

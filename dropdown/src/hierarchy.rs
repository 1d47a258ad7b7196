//! Parent-then-children ordering of a flat item list.
//!
//! Items arrive flat, with children pointing at their parent through the
//! parent's value. [`Hierarchy::build`] produces the display order:
//!
//! - roots keep their original relative order,
//! - each child goes right after its parent's subtree (after the last sibling
//!   already placed, and that sibling's own descendants),
//! - a child listed before its parent waits until the parent is placed,
//! - a child whose parent cannot be resolved stays at its original position
//!   relative to the roots.
//!
//! The order is a list of indices into the source slice, so the source is
//! never copied or reordered.

use crate::item::Item;

/// Display order and parent links for an item collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hierarchy {
    /// Item indices in display order.
    order: Vec<usize>,
    /// Index of each item's parent, when the parent key resolves.
    links: Vec<Option<usize>>,
    /// Depth of each item (0 = root).
    depths: Vec<u16>,
}

impl Hierarchy {
    /// Build the display order for `items`.
    pub fn build(items: &[Item]) -> Self {
        let links = parent_links(items);
        let depths = (0..items.len()).map(|i| depth_of(items, &links, i)).collect();

        let mut order: Vec<usize> = Vec::with_capacity(items.len());
        let mut top_level = vec![false; items.len()];

        for (index, item) in items.iter().enumerate() {
            if item.is_root() {
                order.push(index);
                top_level[index] = true;
            }
        }

        let mut pending: Vec<usize> = (0..items.len()).filter(|&i| !items[i].is_root()).collect();

        while !pending.is_empty() {
            let mut deferred = Vec::new();
            let before = pending.len();

            for child in pending {
                let Some(key) = items[child].parent.as_ref() else {
                    continue;
                };

                let anchor = order.iter().rposition(|&placed| {
                    links[child] == Some(placed) || items[placed].has_parent(key)
                });

                match anchor {
                    Some(position) => {
                        let at = subtree_end(&order, &links, position);
                        order.insert(at, child);
                    }
                    // Parent exists but has not been placed yet.
                    None if links[child].is_some() => deferred.push(child),
                    None => {
                        place_at_root_level(&mut order, &top_level, child);
                        top_level[child] = true;
                    }
                }
            }

            if deferred.len() == before {
                // Parent cycle: nothing can anchor, fall back to root level.
                log::debug!(
                    "[hierarchy] {} items in a parent cycle, kept at root level",
                    deferred.len()
                );
                for child in deferred {
                    place_at_root_level(&mut order, &top_level, child);
                    top_level[child] = true;
                }
                break;
            }
            pending = deferred;
        }

        log::trace!("[hierarchy] ordered {} items", order.len());

        Self {
            order,
            links,
            depths,
        }
    }

    /// Item indices in display order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Index of the parent of item `index`, if its parent key resolves.
    pub fn parent_of(&self, index: usize) -> Option<usize> {
        self.links.get(index).copied().flatten()
    }

    /// Depth of item `index` (0 for roots).
    ///
    /// A child with an unresolved parent has depth 1.
    pub fn depth(&self, index: usize) -> u16 {
        self.depths.get(index).copied().unwrap_or(0)
    }

    /// Number of ordered items.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if there are no items.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns `true` if `ancestor` is reachable from `index` through parent
    /// links.
    pub fn is_descendant(&self, index: usize, ancestor: usize) -> bool {
        is_descendant(&self.links, index, ancestor)
    }
}

/// Items cloned into display order.
pub fn sort_items(items: &[Item]) -> Vec<Item> {
    Hierarchy::build(items)
        .order()
        .iter()
        .map(|&i| items[i].clone())
        .collect()
}

/// Resolve each item's parent key to the index of the first item carrying
/// that value. Self-references do not resolve.
///
/// Each lookup scans the whole slice, so this is quadratic in the item count.
/// `Value` holds floats and has no `Hash`, which rules out a keyed index.
fn parent_links(items: &[Item]) -> Vec<Option<usize>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let key = item.parent.as_ref()?;
            items
                .iter()
                .position(|candidate| candidate.has_value(key))
                .filter(|&parent| parent != index)
        })
        .collect()
}

fn depth_of(items: &[Item], links: &[Option<usize>], index: usize) -> u16 {
    let mut depth: u16 = 0;
    let mut current = index;
    // Bounded by the item count so a cycle cannot loop forever.
    for _ in 0..items.len() {
        if items[current].is_root() {
            break;
        }
        depth = depth.saturating_add(1);
        match links[current] {
            Some(parent) => current = parent,
            None => break,
        }
    }
    depth
}

fn is_descendant(links: &[Option<usize>], index: usize, ancestor: usize) -> bool {
    let mut current = links.get(index).copied().flatten();
    for _ in 0..links.len() {
        match current {
            Some(parent) if parent == ancestor => return true,
            Some(parent) => current = links[parent],
            None => return false,
        }
    }
    false
}

/// Position just past the entry at `position` and all its placed descendants.
fn subtree_end(order: &[usize], links: &[Option<usize>], position: usize) -> usize {
    let anchor = order[position];
    let mut end = position + 1;
    while end < order.len() && is_descendant(links, order[end], anchor) {
        end += 1;
    }
    end
}

/// Insert `child` before the first top-level entry that came after it in the
/// source list.
fn place_at_root_level(order: &mut Vec<usize>, top_level: &[bool], child: usize) {
    let at = order
        .iter()
        .position(|&placed| top_level[placed] && placed > child)
        .unwrap_or(order.len());
    order.insert(at, child);
}

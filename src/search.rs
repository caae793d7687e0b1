//! # Toggle Search
//!
//! Fewest button presses between two light configurations. The configuration
//! graph has an edge `c -> c ^ t` for every button `t`, all of unit cost, so a
//! breadth-first search with a visited set is exact and terminates after at
//! most `2^n` configurations.
//!
//! Panels of up to 64 lights are searched as packed `u64` words; wider panels
//! fall back to [`Lights`] itself.

use crate::lights::{Button, Lights};
use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("{target} is unreachable from {initial} ({explored} configurations explored)")]
    Unreachable {
        initial: Lights,
        target: Lights,
        explored: usize,
    },
    #[error("expected {expected} lights, but {what} has {found}")]
    WidthMismatch {
        what: String,
        expected: usize,
        found: usize,
    },
}

/// A configuration the search can hash and toggle.
trait Panel: Clone + Eq + Hash {
    fn toggled(&self, toggle: &Self) -> Self;
}

impl Panel for u64 {
    fn toggled(&self, toggle: &u64) -> u64 {
        self ^ toggle
    }
}

impl Panel for Lights {
    fn toggled(&self, toggle: &Lights) -> Lights {
        self.apply(toggle)
    }
}

/// The search ran out of configurations after visiting `explored` of them.
struct Exhausted {
    explored: usize,
}

/// Returns the minimum number of presses that turns `initial` into `target`.
///
/// Buttons may repeat; each entry is a separate button. Fails with
/// [`SearchError::Unreachable`] once every configuration reachable from
/// `initial` has been visited without meeting `target`.
pub fn minimum_toggles(
    initial: &Lights,
    toggles: &[Button],
    target: &Lights,
) -> Result<usize, SearchError> {
    check_widths(initial, toggles, target)?;
    let found = match pack(initial, toggles, target) {
        Some((initial, toggles, target)) => level_search(initial, &toggles, &target),
        None => level_search(initial.clone(), &unpack(toggles), target),
    };
    found.map_err(|e| unreachable_error(initial, target, e))
}

/// Like [`minimum_toggles`], but returns the button indices of one optimal
/// press sequence.
pub fn shortest_presses(
    initial: &Lights,
    toggles: &[Button],
    target: &Lights,
) -> Result<Vec<usize>, SearchError> {
    check_widths(initial, toggles, target)?;
    let found = match pack(initial, toggles, target) {
        Some((initial, toggles, target)) => path_search(initial, &toggles, &target),
        None => path_search(initial.clone(), &unpack(toggles), target),
    };
    found.map_err(|e| unreachable_error(initial, target, e))
}

/// Replays `presses` from `initial` and reports whether they end on `target`.
pub fn check_presses(
    initial: &Lights,
    toggles: &[Button],
    presses: &[usize],
    target: &Lights,
) -> bool {
    let mut config = initial.clone();
    for &b in presses {
        let Some(button) = toggles.get(b) else {
            return false;
        };
        if button.width() != config.width() {
            return false;
        }
        config ^= button.flips();
    }
    config == *target
}

fn check_widths(initial: &Lights, toggles: &[Button], target: &Lights) -> Result<(), SearchError> {
    let expected = initial.width();
    if target.width() != expected {
        return Err(SearchError::WidthMismatch {
            what: "target".to_string(),
            expected,
            found: target.width(),
        });
    }
    if let Some((i, button)) = toggles.iter().find_position(|b| b.width() != expected) {
        return Err(SearchError::WidthMismatch {
            what: format!("button {}", i),
            expected,
            found: button.width(),
        });
    }
    Ok(())
}

fn pack(initial: &Lights, toggles: &[Button], target: &Lights) -> Option<(u64, Vec<u64>, u64)> {
    let toggles = toggles
        .iter()
        .map(|b| b.flips().as_u64())
        .collect::<Option<Vec<_>>>()?;
    Some((initial.as_u64()?, toggles, target.as_u64()?))
}

fn unpack(toggles: &[Button]) -> Vec<Lights> {
    toggles.iter().map(|b| b.flips().clone()).collect()
}

fn unreachable_error(initial: &Lights, target: &Lights, e: Exhausted) -> SearchError {
    SearchError::Unreachable {
        initial: initial.clone(),
        target: target.clone(),
        explored: e.explored,
    }
}

// Expands one press count at a time; `frontier` holds the configurations
// first reached with exactly `presses` presses.
fn level_search<P: Panel>(initial: P, toggles: &[P], target: &P) -> Result<usize, Exhausted> {
    if initial == *target {
        return Ok(0);
    }
    let mut visited = FxHashSet::default();
    visited.insert(initial.clone());
    let mut frontier = vec![initial];
    let mut presses = 0;
    while !frontier.is_empty() {
        presses += 1;
        let mut next = vec![];
        for config in &frontier {
            for toggle in toggles {
                let moved = config.toggled(toggle);
                if moved == *target {
                    return Ok(presses);
                }
                if visited.insert(moved.clone()) {
                    next.push(moved);
                }
            }
        }
        frontier = next;
    }
    Err(Exhausted {
        explored: visited.len(),
    })
}

fn path_search<P: Panel>(initial: P, toggles: &[P], target: &P) -> Result<Vec<usize>, Exhausted> {
    if initial == *target {
        return Ok(vec![]);
    }
    // configuration -> (previous configuration, button pressed); `None` marks the start.
    let mut parent: FxHashMap<P, Option<(P, usize)>> = FxHashMap::default();
    parent.insert(initial.clone(), None);
    let mut queue = VecDeque::from([initial]);
    while let Some(config) = queue.pop_front() {
        for (b, toggle) in toggles.iter().enumerate() {
            let moved = config.toggled(toggle);
            if parent.contains_key(&moved) {
                continue;
            }
            parent.insert(moved.clone(), Some((config.clone(), b)));
            if moved == *target {
                return Ok(trace_back(&parent, moved));
            }
            queue.push_back(moved);
        }
    }
    Err(Exhausted {
        explored: parent.len(),
    })
}

fn trace_back<P: Panel>(parent: &FxHashMap<P, Option<(P, usize)>>, mut config: P) -> Vec<usize> {
    let mut presses = vec![];
    while let Some(Some((prev, b))) = parent.get(&config) {
        presses.push(*b);
        config = prev.clone();
    }
    presses.reverse();
    presses
}

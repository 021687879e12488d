//! Collection helpers for aggregating query results

use crate::utils::error::{PolicyError, Result};
use std::collections::HashMap;

/// Reduce result maps to the values surviving in `accumulator`.
///
/// With exactly one data map, the accumulator is replaced wholesale by that
/// map and its present values are returned.
///
/// Otherwise this is *not* a symmetric intersection: the key set of the
/// accumulator drives the pass. For every non-empty data map, each
/// accumulator key missing from it is marked `None`. Keys that appear only in
/// data maps are never added, and empty data maps are skipped. The remaining
/// `Some` values are returned in map iteration order.
///
/// An accumulator is required unless exactly one data map is given.
pub fn get_intersection<V: Clone>(
    data_maps: &[HashMap<String, Option<V>>],
    accumulator: Option<&mut HashMap<String, Option<V>>>,
) -> Result<Vec<V>> {
    if let [single] = data_maps {
        if let Some(accumulator) = accumulator {
            *accumulator = single.clone();
        }
        return Ok(present_values(single));
    }

    let accumulator = accumulator.ok_or_else(|| {
        PolicyError::precondition(format!(
            "get_intersection needs an accumulator for {} data maps",
            data_maps.len()
        ))
    })?;

    for data in data_maps.iter().filter(|data| !data.is_empty()) {
        for (key, value) in accumulator.iter_mut() {
            if !data.contains_key(key) {
                *value = None;
            }
        }
    }

    Ok(present_values(accumulator))
}

fn present_values<V: Clone>(map: &HashMap<String, Option<V>>) -> Vec<V> {
    map.values().filter_map(|value| value.clone()).collect()
}

//! Search and ranking over a borrowed slice of drivers. Nothing here mutates
//! the roster; callers get references in a new order, the collection keeps
//! its own.

use crate::model::Driver;

/// Drivers whose name or team contains `query`, ignoring case, lazily and in
/// collection order.
pub fn matching<'a>(drivers: &'a [Driver], query: &str) -> impl Iterator<Item = &'a Driver> + 'a {
    let needle = query.to_lowercase();
    drivers.iter().filter(move |d| {
        d.name.to_lowercase().contains(&needle) || d.team.to_lowercase().contains(&needle)
    })
}

/// The top `n` drivers by current-season points, highest first.
///
/// The sort is stable: drivers on equal points stay in collection order.
pub fn standings(drivers: &[Driver], n: usize) -> Vec<&Driver> {
    let mut ranked: Vec<&Driver> = drivers.iter().collect();
    ranked.sort_by(|a, b| b.season_points.total_cmp(&a.season_points));
    ranked.truncate(n);
    ranked
}

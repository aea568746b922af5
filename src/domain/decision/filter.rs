//! Cuisine filtering and ranking of restaurants.

use crate::domain::dining::{CuisineTag, Restaurant};

use super::selection::CuisineSelection;

/// Every cuisine offered by at least one restaurant, in first-appearance
/// order across the list. This is what the cuisine picker renders.
pub fn available_cuisines(restaurants: &[Restaurant]) -> Vec<CuisineTag> {
    let mut cuisines: Vec<CuisineTag> = Vec::new();
    for restaurant in restaurants {
        for tag in restaurant.cuisines().iter() {
            if !cuisines.contains(tag) {
                cuisines.push(tag.clone());
            }
        }
    }
    cuisines
}

/// Filters and ranks restaurants by preferred cuisines.
///
/// An empty selection acts as no filter and returns the input order
/// unchanged. Otherwise only restaurants offering at least one selected
/// cuisine are kept, ordered by descending match count; restaurants
/// with equal match counts keep their input order.
pub fn rank_by_preference(
    restaurants: &[Restaurant],
    selection: &CuisineSelection,
) -> Vec<Restaurant> {
    if selection.is_empty() {
        return restaurants.to_vec();
    }

    let mut matched: Vec<(usize, Restaurant)> = restaurants
        .iter()
        .filter_map(|restaurant| {
            let count = restaurant.cuisines().match_count(selection.as_slice());
            (count > 0).then(|| (count, restaurant.clone()))
        })
        .collect();

    // sort_by is stable, so equal counts keep their input order
    matched.sort_by(|a, b| b.0.cmp(&a.0));
    matched.into_iter().map(|(_, restaurant)| restaurant).collect()
}

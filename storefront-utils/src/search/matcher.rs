//! Substring-or-initials matching and suggestion ranking.

use storefront_catalog::Product;

use super::normalize::{compact_query, name_initials, normalize_query};

/// Whether a product satisfies an already-normalized query.
///
/// `query` is the output of [`normalize_query`] and `compact` the output of
/// [`compact_query`] for the same raw input. Empty names never match.
pub fn matches_query(product: &Product, query: &str, compact: &str) -> bool {
    if product.name.trim().is_empty() {
        return false;
    }

    if normalize_query(&product.name).contains(query) {
        return true;
    }

    !compact.is_empty() && name_initials(&product.name).contains(compact)
}

/// Catalog indices of the products matching `raw_query`, in catalog order.
///
/// An empty or whitespace-only query selects every product.
pub fn filter_positions(products: &[Product], raw_query: &str) -> Vec<usize> {
    let query = normalize_query(raw_query);
    if query.is_empty() {
        return (0..products.len()).collect();
    }

    let compact = compact_query(raw_query);
    products
        .iter()
        .enumerate()
        .filter(|(_, product)| matches_query(product, &query, &compact))
        .map(|(index, _)| index)
        .collect()
}

/// Products matching `raw_query`, in catalog order.
pub fn filter<'a>(products: &'a [Product], raw_query: &str) -> Vec<&'a Product> {
    filter_positions(products, raw_query)
        .into_iter()
        .map(|index| &products[index])
        .collect()
}

/// Ranked suggestions for `raw_query`, at most `limit` entries.
///
/// Only substring containment counts here. Names starting with the query rank
/// ahead of names that merely contain it; catalog order is kept inside each
/// group. An empty query yields no suggestions.
pub fn suggest<'a>(products: &'a [Product], raw_query: &str, limit: usize) -> Vec<&'a Product> {
    let query = normalize_query(raw_query);
    if query.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<(bool, &Product)> = products
        .iter()
        .filter(|product| !product.name.trim().is_empty())
        .filter_map(|product| {
            let name = normalize_query(&product.name);
            name.contains(&query)
                .then(|| (!name.starts_with(&query), product))
        })
        .collect();

    // `sort_by_key` is stable, so catalog order survives within each group.
    ranked.sort_by_key(|(contains_only, _)| *contains_only);
    ranked.truncate(limit);
    ranked.into_iter().map(|(_, product)| product).collect()
}

//! Top-N product ranking

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::app::models::RankedProduct;

/// Rank products by accumulated revenue, descending
///
/// Products with equal revenue are ordered by product name ascending, so
/// repeated runs over the same input produce an identical ranking. The
/// result is truncated to `top_n` entries; when fewer distinct products
/// exist, all of them are returned. An empty map yields an empty ranking.
pub fn rank_products(
    product_revenue: &HashMap<String, Decimal>,
    top_n: usize,
) -> Vec<RankedProduct> {
    let mut ranking: Vec<RankedProduct> = product_revenue
        .iter()
        .map(|(product, revenue)| RankedProduct {
            product: product.clone(),
            revenue: *revenue,
        })
        .collect();

    ranking.sort_by(|a, b| {
        b.revenue
            .cmp(&a.revenue)
            .then_with(|| a.product.cmp(&b.product))
    });
    ranking.truncate(top_n);

    ranking
}

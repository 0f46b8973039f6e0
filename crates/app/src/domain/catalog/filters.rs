//! Local product filtering and ordering.

use crate::domain::catalog::models::Product;

/// Price ordering for [`sort_by_price`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceOrder {
    Ascending,
    Descending,
}

/// Products whose title contains `query`, ignoring case.
///
/// A blank query matches everything.
pub fn search<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();

    products
        .iter()
        .filter(|product| needle.is_empty() || product.title.to_lowercase().contains(&needle))
        .collect()
}

/// Products belonging to `category`.
pub fn in_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| product.category == category)
        .collect()
}

/// Stable sort by price.
pub fn sort_by_price(products: &mut [Product], order: PriceOrder) {
    match order {
        PriceOrder::Ascending => products.sort_by(|a, b| a.price.cmp(&b.price)),
        PriceOrder::Descending => products.sort_by(|a, b| b.price.cmp(&a.price)),
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::{domain::catalog::models::ProductId, test::product};

    use super::*;

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Backpack", dec!(109.95)),
            product(2, "Slim Fit T-Shirt", dec!(22.30)),
            product(3, "Cotton Jacket", dec!(55.99)),
            product(4, "Slim Jeans", dec!(22.30)),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<u64> {
        products.iter().map(|product| product.id.0).collect()
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let products = catalog();

        assert_eq!(ids(&search(&products, "SLIM")), vec![2, 4]);
        assert_eq!(ids(&search(&products, "jacket")), vec![3]);
        assert!(search(&products, "shoes").is_empty());
    }

    #[test]
    fn blank_search_returns_everything() {
        let products = catalog();

        assert_eq!(search(&products, "   ").len(), products.len());
    }

    #[test]
    fn filters_by_exact_category() {
        let mut products = catalog();

        if let Some(first) = products.first_mut() {
            first.category = "electronics".to_string();
        }

        assert_eq!(ids(&in_category(&products, "electronics")), vec![1]);
    }

    #[test]
    fn sorts_by_price_keeping_ties_in_order() {
        let mut products = catalog();

        sort_by_price(&mut products, PriceOrder::Ascending);

        let ordered: Vec<ProductId> = products.iter().map(|p| p.id).collect();
        assert_eq!(
            ordered,
            vec![ProductId(2), ProductId(4), ProductId(3), ProductId(1)]
        );

        sort_by_price(&mut products, PriceOrder::Descending);

        let prices: Vec<Decimal> = products.iter().map(|p| p.price).collect();
        assert_eq!(
            prices,
            vec![dec!(109.95), dec!(55.99), dec!(22.30), dec!(22.30)]
        );
    }
}

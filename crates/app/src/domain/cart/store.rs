//! Cart store.
//!
//! The cart lives on the device: every mutation is written through to
//! [`LocalStorage`] under [`CART_STORAGE_KEY`] before the call returns, so a
//! restarted process sees the same lines. When the write fails the in-memory
//! lines are left as they were.

use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    domain::{
        cart::{
            errors::CartError,
            models::{CartItem, CartState, PersistedCart},
        },
        catalog::models::{Product, ProductId},
        orders::models::OrderLine,
    },
    storage::LocalStorage,
};

/// Storage namespace holding the cart.
pub const CART_STORAGE_KEY: &str = "cart-storage";

const CART_STATE_VERSION: u32 = 0;

/// The shopping cart, written through to `S` on every change.
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    state: CartState,
}

impl<S: LocalStorage> CartStore<S> {
    /// Load the cart persisted in `storage`, or start empty.
    ///
    /// # Errors
    ///
    /// Returns an error when storage cannot be read or holds an unreadable cart.
    pub fn load(storage: S) -> Result<Self, CartError> {
        let state = match storage.get_item(CART_STORAGE_KEY)? {
            Some(raw) => {
                serde_json::from_str::<PersistedCart>(&raw)
                    .map_err(CartError::Corrupt)?
                    .state
            }
            None => CartState::default(),
        };

        Ok(Self { storage, state })
    }

    /// Hand back the underlying storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.state.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.items.is_empty()
    }

    /// Add `quantity` of `product`, merging with an existing line for the same
    /// product id.
    ///
    /// # Errors
    ///
    /// Returns an error when the merged quantity does not fit a line, or the
    /// new cart cannot be persisted.
    pub fn add(&mut self, product: Product, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Ok(());
        }

        let mut items = self.state.items.clone();

        if let Some(existing) = items.iter_mut().find(|item| item.product.id == product.id) {
            existing.quantity = existing.quantity.checked_add(quantity).ok_or_else(|| {
                CartError::QuantityTooLarge(i64::from(existing.quantity) + i64::from(quantity))
            })?;
        } else {
            items.push(CartItem { product, quantity });
        }

        self.commit(items)
    }

    /// Drop the line for `product`. Unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error when the new cart cannot be persisted.
    pub fn remove(&mut self, product: ProductId) -> Result<(), CartError> {
        if !self.contains(product) {
            return Ok(());
        }

        let items = self
            .state
            .items
            .iter()
            .filter(|item| item.product.id != product)
            .cloned()
            .collect();

        self.commit(items)
    }

    /// Set the quantity for `product`; zero or less removes the line.
    ///
    /// # Errors
    ///
    /// Returns an error when `quantity` does not fit a line, or the new cart
    /// cannot be persisted.
    pub fn update_quantity(&mut self, product: ProductId, quantity: i64) -> Result<(), CartError> {
        if quantity <= 0 {
            return self.remove(product);
        }

        let quantity =
            u32::try_from(quantity).map_err(|_error| CartError::QuantityTooLarge(quantity))?;

        if !self.contains(product) {
            return Ok(());
        }

        let items = self
            .state
            .items
            .iter()
            .map(|item| {
                if item.product.id == product {
                    CartItem {
                        product: item.product.clone(),
                        quantity,
                    }
                } else {
                    item.clone()
                }
            })
            .collect();

        self.commit(items)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error when the new cart cannot be persisted.
    pub fn clear(&mut self) -> Result<(), CartError> {
        self.commit(Vec::new())
    }

    /// Sum of price × quantity over every line.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.state.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over every line.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.state
            .items
            .iter()
            .map(|item| u64::from(item.quantity))
            .sum()
    }

    /// Order lines for the current cart contents.
    #[must_use]
    pub fn snapshot(&self) -> Vec<OrderLine> {
        self.state.items.iter().map(OrderLine::from).collect()
    }

    fn contains(&self, product: ProductId) -> bool {
        self.state
            .items
            .iter()
            .any(|item| item.product.id == product)
    }

    fn commit(&mut self, items: Vec<CartItem>) -> Result<(), CartError> {
        let next = CartState { items };

        let raw = serde_json::to_string(&PersistedCart {
            state: next.clone(),
            version: CART_STATE_VERSION,
        })
        .map_err(CartError::Serialize)?;

        self.storage.set_item(CART_STORAGE_KEY, &raw)?;
        self.state = next;

        debug!(
            lines = self.state.items.len(),
            count = self.item_count(),
            "cart persisted"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use crate::{
        storage::{MemoryStorage, StorageError},
        test::product,
    };

    use super::*;

    fn empty_cart() -> Result<CartStore<MemoryStorage>, CartError> {
        CartStore::load(MemoryStorage::new())
    }

    #[test]
    fn adding_same_product_twice_accumulates_quantity() -> TestResult {
        let mut cart = empty_cart()?;
        let backpack = product(1, "Backpack", dec!(109.95));

        cart.add(backpack.clone(), 1)?;
        cart.add(backpack, 2)?;

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items().first().map(|item| item.quantity), Some(3));
        assert_eq!(cart.item_count(), 3);

        Ok(())
    }

    #[test]
    fn adding_zero_is_a_no_op() -> TestResult {
        let mut cart = empty_cart()?;

        cart.add(product(1, "Backpack", dec!(109.95)), 0)?;

        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn lines_keep_insertion_order() -> TestResult {
        let mut cart = empty_cart()?;

        cart.add(product(3, "Jacket", dec!(55.99)), 1)?;
        cart.add(product(1, "Backpack", dec!(109.95)), 1)?;
        cart.add(product(3, "Jacket", dec!(55.99)), 1)?;

        let ids: Vec<u64> = cart.items().iter().map(|item| item.product.id.0).collect();

        assert_eq!(ids, vec![3, 1]);

        Ok(())
    }

    #[test]
    fn update_to_zero_or_below_removes_the_line() -> TestResult {
        let mut cart = empty_cart()?;

        cart.add(product(1, "Backpack", dec!(109.95)), 2)?;
        cart.add(product(2, "T-Shirt", dec!(22.30)), 1)?;

        cart.update_quantity(ProductId(1), 0)?;
        cart.update_quantity(ProductId(2), -4)?;

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);

        Ok(())
    }

    #[test]
    fn update_sets_quantity() -> TestResult {
        let mut cart = empty_cart()?;

        cart.add(product(1, "Backpack", dec!(109.95)), 2)?;
        cart.update_quantity(ProductId(1), 5)?;

        assert_eq!(cart.item_count(), 5);

        Ok(())
    }

    #[test]
    fn update_for_unknown_product_is_a_no_op() -> TestResult {
        let mut cart = empty_cart()?;

        cart.update_quantity(ProductId(42), 3)?;

        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn oversized_quantities_are_rejected_and_cart_is_unchanged() -> TestResult {
        let mut cart = empty_cart()?;

        cart.add(product(1, "Backpack", dec!(109.95)), 2)?;

        let too_many = i64::from(u32::MAX) + 1;
        let result = cart.update_quantity(ProductId(1), too_many);

        assert!(
            matches!(result, Err(CartError::QuantityTooLarge(quantity)) if quantity == too_many),
            "expected quantity error, got {result:?}"
        );

        let result = cart.add(product(1, "Backpack", dec!(109.95)), u32::MAX);

        assert!(
            matches!(result, Err(CartError::QuantityTooLarge(_))),
            "expected quantity error on merge, got {result:?}"
        );
        assert_eq!(cart.item_count(), 2);

        Ok(())
    }

    #[test]
    fn removing_nonexistent_id_is_a_no_op() -> TestResult {
        let mut cart = empty_cart()?;

        cart.add(product(1, "Backpack", dec!(109.95)), 1)?;
        cart.remove(ProductId(99))?;

        assert_eq!(cart.items().len(), 1);

        cart.remove(ProductId(1))?;

        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn total_price_sums_price_times_quantity() -> TestResult {
        let mut cart = empty_cart()?;

        assert_eq!(cart.total_price(), Decimal::ZERO);

        cart.add(product(1, "Backpack", dec!(109.95)), 2)?;
        cart.add(product(2, "T-Shirt", dec!(22.30)), 3)?;

        assert_eq!(cart.total_price(), dec!(286.80));

        Ok(())
    }

    #[test]
    fn clear_leaves_no_items() -> TestResult {
        let mut cart = empty_cart()?;

        cart.add(product(1, "Backpack", dec!(109.95)), 2)?;
        cart.clear()?;

        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total_price(), Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn cart_survives_reload_from_storage() -> TestResult {
        let mut cart = empty_cart()?;

        cart.add(product(1, "Backpack", dec!(109.95)), 2)?;

        let reloaded = CartStore::load(cart.into_storage())?;

        assert_eq!(reloaded.item_count(), 2);
        assert_eq!(reloaded.total_price(), dec!(219.90));

        Ok(())
    }

    #[test]
    fn corrupt_storage_is_reported() -> TestResult {
        let mut storage = MemoryStorage::new();
        storage.set_item(CART_STORAGE_KEY, "not json")?;

        let result = CartStore::load(storage);

        assert!(
            matches!(result, Err(CartError::Corrupt(_))),
            "expected Corrupt, got {result:?}"
        );

        Ok(())
    }

    #[derive(Debug, Default)]
    struct ReadOnlyStorage;

    impl LocalStorage for ReadOnlyStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set_item(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::InvalidKey(key.to_string()))
        }

        fn remove_item(&mut self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn failed_write_keeps_previous_state() -> TestResult {
        let mut cart = CartStore::load(ReadOnlyStorage)?;

        let result = cart.add(product(1, "Backpack", dec!(109.95)), 1);

        assert!(
            matches!(result, Err(CartError::Storage(_))),
            "expected Storage error, got {result:?}"
        );
        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn snapshot_copies_line_details() -> TestResult {
        let mut cart = empty_cart()?;

        cart.add(product(2, "T-Shirt", dec!(22.30)), 3)?;

        let lines = cart.snapshot();

        assert_eq!(
            lines,
            vec![OrderLine {
                product_id: ProductId(2),
                title: "T-Shirt".to_string(),
                price: dec!(22.30),
                quantity: 3,
                image: "https://fakestoreapi.com/img/2.jpg".to_string(),
            }]
        );

        Ok(())
    }
}

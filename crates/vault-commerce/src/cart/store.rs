//! Session cart store.
//!
//! Owns the authoritative line-item collection for a session, persists it
//! on every mutation, and notifies subscribers of effective changes.

use crate::cart::LineItem;
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use tracing::{debug, warn};
use vault_kv::{KeyValueStore, StoreError};

/// Storage key the cart is persisted under.
pub const CART_STORAGE_KEY: &str = "techvault_cart";

/// Durable storage seam for the cart store.
///
/// The store treats the backend as reliable-but-best-effort: a failed
/// `load` yields an empty cart, a failed `save` is swallowed and the
/// in-memory state stays authoritative.
pub trait CartStorage {
    /// Load the persisted line items, or `None` if nothing was persisted.
    fn load(&self) -> Result<Option<Vec<LineItem>>, StoreError>;

    /// Replace the persisted line items.
    fn save(&self, items: &[LineItem]) -> Result<(), StoreError>;
}

/// [`CartStorage`] over any key/value backend, serialized as JSON under
/// [`CART_STORAGE_KEY`].
pub struct KvCartStorage<S> {
    kv: S,
}

impl<S: KeyValueStore> KvCartStorage<S> {
    /// Wrap a key/value backend.
    pub fn new(kv: S) -> Self {
        Self { kv }
    }
}

impl<S: KeyValueStore> CartStorage for KvCartStorage<S> {
    fn load(&self) -> Result<Option<Vec<LineItem>>, StoreError> {
        self.kv.get(CART_STORAGE_KEY)
    }

    fn save(&self, items: &[LineItem]) -> Result<(), StoreError> {
        self.kv.set(CART_STORAGE_KEY, items)
    }
}

/// Notification emitted to subscribers after an effective mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    /// A new line item was inserted. Carries the inserted quantity.
    ItemAdded {
        product_id: ProductId,
        quantity: i64,
    },
    /// A line item was removed.
    ItemRemoved { product_id: ProductId },
    /// A line item's quantity changed. Carries the resulting quantity.
    QuantityChanged {
        product_id: ProductId,
        quantity: i64,
    },
    /// The cart was emptied.
    Cleared,
}

/// Handle returned by [`CartStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn Fn(&CartEvent)>;

/// The session's shopping cart.
///
/// Holds the authoritative [`LineItem`] collection, serializes it to the
/// injected storage backend on every mutation, and rehydrates from it at
/// construction. Single-session, single-threaded: operations run
/// synchronously and two stores sharing one backend converge
/// last-writer-wins.
pub struct CartStore {
    items: Vec<LineItem>,
    storage: Box<dyn CartStorage>,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_subscriber: u64,
}

impl CartStore {
    /// Open a cart backed by the given storage, rehydrating any persisted
    /// items. Absent or unreadable storage yields an empty cart.
    pub fn open(storage: impl CartStorage + 'static) -> Self {
        let items = match storage.load() {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "failed to load persisted cart, starting empty");
                Vec::new()
            }
        };

        Self {
            items,
            storage: Box::new(storage),
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    /// Add a product to the cart.
    ///
    /// If a line item for the product already exists its quantity is
    /// incremented; otherwise a new item is inserted snapshotting the
    /// product. Quantities are not clamped to stock here; that is the
    /// display layer's concern. Non-positive quantities are ignored.
    pub fn add_item(&mut self, product: &Product, quantity: i64) {
        if quantity <= 0 {
            return;
        }

        let event = match self.items.iter_mut().find(|i| i.product_id == product.id) {
            Some(existing) => {
                existing.quantity += quantity;
                CartEvent::QuantityChanged {
                    product_id: existing.product_id.clone(),
                    quantity: existing.quantity,
                }
            }
            None => {
                self.items.push(LineItem::new(product.clone(), quantity));
                CartEvent::ItemAdded {
                    product_id: product.id.clone(),
                    quantity,
                }
            }
        };

        debug!(product_id = %product.id, quantity, "cart item added");
        self.persist();
        self.notify(&event);
    }

    /// Remove a line item. Absent ids are a silent no-op.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        let before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        if self.items.len() == before {
            return;
        }

        debug!(product_id = %product_id, "cart item removed");
        self.persist();
        self.notify(&CartEvent::ItemRemoved {
            product_id: product_id.clone(),
        });
    }

    /// Replace the quantity on a line item.
    ///
    /// A quantity of zero or less removes the item. Absent ids are a
    /// silent no-op. The item's `added_at` is untouched.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| &i.product_id == product_id) {
            item.quantity = quantity;
            debug!(product_id = %product_id, quantity, "cart quantity set");
            self.persist();
            self.notify(&CartEvent::QuantityChanged {
                product_id: product_id.clone(),
                quantity,
            });
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
        debug!("cart cleared");
        self.persist();
        self.notify(&CartEvent::Cleared);
    }

    /// Sum of unit price times quantity over all items.
    pub fn total_value(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Sum of quantities over all items.
    pub fn total_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Check if a product is in the cart.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|i| &i.product_id == product_id)
    }

    /// Look up a line item by product id.
    pub fn find(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }

    /// The line items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Register a callback invoked after every effective mutation.
    pub fn subscribe(&mut self, callback: impl Fn(&CartEvent) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() < before
    }

    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.items) {
            warn!(error = %e, "failed to persist cart, keeping in-memory state");
        }
    }

    fn notify(&self, event: &CartEvent) {
        for (_, callback) in &self.subscribers {
            callback(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::Arc;
    use vault_kv::MemoryStore;

    fn product(id: u64, price: f64) -> Product {
        let mut p = Product::new(id, format!("Product {}", id), Money::from_dollars(price));
        p.stock_count = 10;
        p
    }

    fn memory_cart() -> CartStore {
        CartStore::open(KvCartStorage::new(MemoryStore::new()))
    }

    #[test]
    fn test_starts_empty_without_persisted_state() {
        let cart = memory_cart();
        assert!(cart.is_empty());
        assert_eq!(cart.total_count(), 0);
        assert_eq!(cart.total_value(), Money::zero());
    }

    #[test]
    fn test_repeated_adds_merge_into_one_row() {
        let mut cart = memory_cart();
        let p = product(1, 10.0);

        for _ in 0..5 {
            cart.add_item(&p, 1);
        }

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.find(&p.id).unwrap().quantity, 5);
    }

    #[test]
    fn test_added_at_survives_quantity_updates() {
        let mut cart = memory_cart();
        let p = product(1, 10.0);

        cart.add_item(&p, 1);
        let added_at = cart.find(&p.id).unwrap().added_at;

        cart.add_item(&p, 2);
        cart.set_quantity(&p.id, 7);
        assert_eq!(cart.find(&p.id).unwrap().added_at, added_at);
    }

    #[test]
    fn test_non_positive_add_is_ignored() {
        let mut cart = memory_cart();
        let p = product(1, 10.0);

        cart.add_item(&p, 0);
        cart.add_item(&p, -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_zero_and_negative_quantity_remove() {
        let mut cart = memory_cart();
        let a = product(1, 10.0);
        let b = product(2, 20.0);

        cart.add_item(&a, 2);
        cart.add_item(&b, 1);

        cart.set_quantity(&a.id, 0);
        assert!(!cart.contains(&a.id));

        cart.set_quantity(&b.id, -5);
        assert!(!cart.contains(&b.id));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = memory_cart();
        cart.remove_item(&ProductId::from(99u64));
        cart.set_quantity(&ProductId::from(99u64), 3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_derived_totals() {
        let mut cart = memory_cart();
        cart.add_item(&product(1, 100.0), 2);
        cart.add_item(&product(2, 50.0), 1);

        assert_eq!(cart.total_value(), Money::from_dollars(250.0));
        assert_eq!(cart.total_count(), 3);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = memory_cart();
        cart.add_item(&product(3, 1.0), 1);
        cart.add_item(&product(1, 1.0), 1);
        cart.add_item(&product(2, 1.0), 1);

        let ids: Vec<&str> = cart.items().iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_rehydrates_from_shared_backend() {
        let kv = Arc::new(MemoryStore::new());

        let mut cart = CartStore::open(KvCartStorage::new(Arc::clone(&kv)));
        cart.add_item(&product(1, 49.99), 3);
        cart.add_item(&product(2, 15.0), 1);
        let items = cart.items().to_vec();
        drop(cart);

        let rehydrated = CartStore::open(KvCartStorage::new(kv));
        assert_eq!(rehydrated.items(), items.as_slice());
    }

    #[test]
    fn test_malformed_persisted_state_yields_empty_cart() {
        let kv = Arc::new(MemoryStore::new());
        kv.set_raw(CART_STORAGE_KEY, b"{{ not json").unwrap();

        let cart = CartStore::open(KvCartStorage::new(kv));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_every_mutation_persists() {
        struct CountingStorage {
            saves: Rc<Cell<usize>>,
        }

        impl CartStorage for CountingStorage {
            fn load(&self) -> Result<Option<Vec<LineItem>>, StoreError> {
                Ok(None)
            }

            fn save(&self, _items: &[LineItem]) -> Result<(), StoreError> {
                self.saves.set(self.saves.get() + 1);
                Ok(())
            }
        }

        let saves = Rc::new(Cell::new(0));
        let mut cart = CartStore::open(CountingStorage {
            saves: Rc::clone(&saves),
        });

        let p = product(1, 10.0);
        cart.add_item(&p, 1);
        cart.set_quantity(&p.id, 4);
        cart.remove_item(&p.id);
        cart.clear();
        assert_eq!(saves.get(), 4);

        // No-ops do not persist
        cart.remove_item(&p.id);
        cart.add_item(&p, 0);
        assert_eq!(saves.get(), 4);
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        struct FailingStorage;

        impl CartStorage for FailingStorage {
            fn load(&self) -> Result<Option<Vec<LineItem>>, StoreError> {
                Ok(None)
            }

            fn save(&self, _items: &[LineItem]) -> Result<(), StoreError> {
                Err(StoreError::Backend("disk full".to_string()))
            }
        }

        let mut cart = CartStore::open(FailingStorage);
        let p = product(1, 10.0);
        cart.add_item(&p, 2);

        assert_eq!(cart.total_count(), 2);
        assert!(cart.contains(&p.id));
    }

    #[test]
    fn test_subscribers_observe_mutations() {
        let events = Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);

        let mut cart = memory_cart();
        cart.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        let p = product(1, 10.0);
        cart.add_item(&p, 2);
        cart.add_item(&p, 1);
        cart.set_quantity(&p.id, 5);
        cart.remove_item(&p.id);
        cart.clear();

        assert_eq!(
            events.borrow().as_slice(),
            &[
                CartEvent::ItemAdded {
                    product_id: p.id.clone(),
                    quantity: 2
                },
                CartEvent::QuantityChanged {
                    product_id: p.id.clone(),
                    quantity: 3
                },
                CartEvent::QuantityChanged {
                    product_id: p.id.clone(),
                    quantity: 5
                },
                CartEvent::ItemRemoved {
                    product_id: p.id.clone()
                },
                CartEvent::Cleared,
            ]
        );
    }

    #[test]
    fn test_noops_do_not_notify() {
        let events = Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);

        let mut cart = memory_cart();
        cart.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        cart.remove_item(&ProductId::from(1u64));
        cart.set_quantity(&ProductId::from(1u64), 3);
        cart.add_item(&product(1, 10.0), 0);

        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);

        let mut cart = memory_cart();
        let sub = cart.subscribe(move |_| sink.set(sink.get() + 1));

        cart.add_item(&product(1, 10.0), 1);
        assert_eq!(count.get(), 1);

        assert!(cart.unsubscribe(sub));
        cart.clear();
        assert_eq!(count.get(), 1);

        assert!(!cart.unsubscribe(sub));
    }
}

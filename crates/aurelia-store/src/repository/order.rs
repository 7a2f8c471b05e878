//! # Order Repository
//!
//! Order data access for the back-office order manager.
//!
//! ## Key Operations
//! - List and look up orders
//! - Search by order reference or customer name
//! - Advance fulfilment status

use chrono::NaiveDate;
use tracing::debug;

use aurelia_core::types::{Order, OrderStatus, PaymentMethod};

/// Read and status-update access to customer orders.
pub trait OrderRepository {
    /// All orders, most recent first.
    fn list(&self) -> Vec<Order>;

    /// Looks up a single order by its reference (e.g. "#ORD-001").
    fn get(&self, id: &str) -> Option<Order>;

    /// Case-insensitive substring search across reference and customer name.
    /// An empty or whitespace query returns all orders.
    fn search(&self, query: &str) -> Vec<Order>;

    /// Sets an order's fulfilment status. Returns the updated order, or
    /// `None` when the reference is unknown.
    fn set_status(&mut self, id: &str, status: OrderStatus) -> Option<Order>;
}

/// Seeded in-memory order book.
#[derive(Debug, Clone)]
pub struct InMemoryOrderRepository {
    orders: Vec<Order>,
}

impl InMemoryOrderRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        InMemoryOrderRepository { orders: Vec::new() }
    }

    /// Creates a repository pre-loaded with the reference order book.
    pub fn seeded() -> Self {
        let repo = InMemoryOrderRepository {
            orders: seed_orders(),
        };
        debug!(count = repo.orders.len(), "seeded order book");
        repo
    }

    /// Adds an order. Replaces any existing order with the same reference.
    pub fn insert(&mut self, order: Order) {
        match self.orders.iter_mut().find(|o| o.id == order.id) {
            Some(slot) => *slot = order,
            None => self.orders.push(order),
        }
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn list(&self) -> Vec<Order> {
        self.orders.clone()
    }

    fn get(&self, id: &str) -> Option<Order> {
        self.orders.iter().find(|o| o.id == id).cloned()
    }

    fn search(&self, query: &str) -> Vec<Order> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.list();
        }

        self.orders
            .iter()
            .filter(|o| {
                o.id.to_lowercase().contains(&query)
                    || o.customer.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }

    fn set_status(&mut self, id: &str, status: OrderStatus) -> Option<Order> {
        let order = self.orders.iter_mut().find(|o| o.id == id)?;
        order.status = status;
        debug!(id = %order.id, status = ?status, "order status updated");
        Some(order.clone())
    }
}

// =============================================================================
// Reference Order Book
// =============================================================================

fn seed_orders() -> Vec<Order> {
    vec![
        order(
            "#ORD-001",
            "Rahul Sharma",
            (2023, 4, 7),
            24500.0,
            OrderStatus::Processing,
            PaymentMethod::CreditCard,
        ),
        order(
            "#ORD-002",
            "Priya Patel",
            (2023, 4, 6),
            18200.0,
            OrderStatus::Shipped,
            PaymentMethod::Upi,
        ),
        order(
            "#ORD-003",
            "Amit Singh",
            (2023, 4, 5),
            35000.0,
            OrderStatus::Delivered,
            PaymentMethod::CreditCard,
        ),
        order(
            "#ORD-004",
            "Neha Gupta",
            (2023, 4, 4),
            42600.0,
            OrderStatus::Processing,
            PaymentMethod::BankTransfer,
        ),
        order(
            "#ORD-005",
            "Vikram Khanna",
            (2023, 4, 3),
            2800.0,
            OrderStatus::Cancelled,
            PaymentMethod::Upi,
        ),
    ]
}

fn order(
    id: &str,
    customer: &str,
    (y, m, d): (i32, u32, u32),
    total: f64,
    status: OrderStatus,
    payment_method: PaymentMethod,
) -> Order {
    Order {
        id: id.to_string(),
        customer: customer.to_string(),
        // Seed dates are compile-time constants, so this cannot fail.
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        total,
        status,
        payment_method,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_order_book() {
        let repo = InMemoryOrderRepository::seeded();
        assert_eq!(repo.list().len(), 5);

        let first = repo.get("#ORD-001").unwrap();
        assert_eq!(first.customer, "Rahul Sharma");
        assert_eq!(first.status, OrderStatus::Processing);
        assert_eq!(first.total, 24500.0);
    }

    #[test]
    fn test_search_by_reference_and_customer() {
        let repo = InMemoryOrderRepository::seeded();

        let by_ref = repo.search("ord-003");
        assert_eq!(by_ref.len(), 1);
        assert_eq!(by_ref[0].customer, "Amit Singh");

        let by_customer = repo.search("priya");
        assert_eq!(by_customer.len(), 1);
        assert_eq!(by_customer[0].id, "#ORD-002");

        assert!(repo.search("nobody").is_empty());
    }

    #[test]
    fn test_set_status() {
        let mut repo = InMemoryOrderRepository::seeded();

        let updated = repo.set_status("#ORD-001", OrderStatus::Shipped).unwrap();
        assert_eq!(updated.status, OrderStatus::Shipped);
        assert_eq!(repo.get("#ORD-001").unwrap().status, OrderStatus::Shipped);

        assert!(repo.set_status("#ORD-999", OrderStatus::Shipped).is_none());
    }

    #[test]
    fn test_insert_replaces_by_reference() {
        let mut repo = InMemoryOrderRepository::seeded();
        let mut replacement = repo.get("#ORD-005").unwrap();
        replacement.total = 3100.0;

        repo.insert(replacement);

        assert_eq!(repo.list().len(), 5);
        assert_eq!(repo.get("#ORD-005").unwrap().total, 3100.0);
    }
}

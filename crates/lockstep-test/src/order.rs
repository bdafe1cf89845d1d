//! Order-line fixtures with decimal prices.
//!
//! # Example
//!
//! ```
//! use lockstep_test::order::sample_orders;
//!
//! let orders = sample_orders();
//! assert_eq!(orders.len(), 4);
//! assert!(orders.iter().any(|o| o.discount.is_none()));
//! ```

use rust_decimal::Decimal;

/// A single order line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Order {
    pub id: u32,
    pub quantity: i64,
    pub price: Decimal,
    pub discount: Option<i64>,
}

impl Order {
    /// Creates an order with no discount.
    pub fn new(id: u32, quantity: i64, price: Decimal) -> Self {
        Self {
            id,
            quantity,
            price,
            discount: None,
        }
    }

    /// Sets the discount.
    pub fn with_discount(mut self, discount: i64) -> Self {
        self.discount = Some(discount);
        self
    }

    /// Price multiplied by quantity.
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Four orders: quantities 2, 5, 1, 4; prices 1.10, 0.25, 10.00, 2.50;
/// discounts on orders 1 and 3 only.
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order::new(1, 2, Decimal::new(110, 2)).with_discount(5),
        Order::new(2, 5, Decimal::new(25, 2)),
        Order::new(3, 1, Decimal::new(1000, 2)).with_discount(3),
        Order::new(4, 4, Decimal::new(250, 2)),
    ]
}

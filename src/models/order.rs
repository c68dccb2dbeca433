entity! {
    /// Order header. Health for this resource mirrors the order's own status.
    pub struct Order {
        table = "orders",
        id = order_id,
        health = EntityStatus,
        fields = { order_id, status },
    }
}

entity! {
    /// Line of an order, keyed by product.
    pub struct OrderItem {
        table = "order_items",
        id = product_id,
        health = Presence,
        fields = { product_id, quantity, unit_price },
    }
}

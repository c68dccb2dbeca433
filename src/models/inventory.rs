entity! {
    /// Inventory row. The table's only declared column is also its key.
    pub struct InventoryItem {
        table = "inventory",
        id = stock_quantity,
        health = Presence,
        fields = { stock_quantity },
    }
}

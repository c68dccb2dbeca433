entity! {
    pub struct Payment {
        table = "payments",
        id = payment_id,
        health = Presence,
        fields = { payment_id, status },
    }
}

entity! {
    /// Payment as seen by the processing service.
    pub struct PaymentTransaction {
        table = "payments",
        id = payment_id,
        health = Presence,
        fields = {
            amount,
            order_id,
            payment_date,
            payment_id,
            payment_method,
            payment_status,
        },
    }
}

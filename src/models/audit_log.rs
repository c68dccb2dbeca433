entity! {
    /// A row of the customer service's `audit_logs` table.
    pub struct AuditLog {
        table = "audit_logs",
        id = record_id,
        health = Presence,
        fields = { operation, record_id, table_name, timestamp, user_id },
    }
}

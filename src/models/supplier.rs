entity! {
    pub struct Supplier {
        table = "suppliers",
        id = contact_email,
        health = Presence,
        fields = { contact_email, supplier_name },
    }
}

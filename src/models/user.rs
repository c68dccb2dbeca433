entity! {
    /// User account. Health mirrors the account status, like [`super::Order`].
    pub struct UserAccount {
        table = "users",
        id = user_id,
        health = EntityStatus,
        fields = { status, user_id },
    }
}

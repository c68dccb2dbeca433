/// How `derive_health` turns an optional entity into a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthRule {
    /// `"UP"` when an entity is supplied, `"UNKNOWN"` otherwise.
    Presence,
    /// Copy the entity's own `status` column; `"UNKNOWN"` when absent or unset.
    EntityStatus,
}

/// A typed table row whose columns are all optional text.
///
/// `FIELDS` is the declared column set in alphabetical order; it doubles as the
/// key order of every record produced from the entity. `ID_FIELD` must be one of
/// `FIELDS`.
pub trait Entity: Default + Clone + Send + Sync + 'static {
    const TABLE: &'static str;
    const ID_FIELD: &'static str;
    const FIELDS: &'static [&'static str];
    const HEALTH_RULE: HealthRule;

    /// Value of a declared column, `None` when unset or not declared.
    fn field(&self, name: &str) -> Option<&str>;

    /// Assign a declared column. Returns `false` for undeclared names.
    fn set_field(&mut self, name: &str, value: Option<String>) -> bool;

    fn id(&self) -> Option<&str> {
        self.field(Self::ID_FIELD)
    }

    fn set_id(&mut self, id: String) {
        self.set_field(Self::ID_FIELD, Some(id));
    }
}

/// Declares an entity struct with one `Option<String>` per column and its
/// [`Entity`] impl. List columns alphabetically.
macro_rules! entity {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            table = $table:literal,
            id = $id:ident,
            health = $rule:ident,
            fields = { $($field:ident),+ $(,)? } $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            $(pub $field: Option<String>,)+
        }

        impl $crate::models::Entity for $name {
            const TABLE: &'static str = $table;
            const ID_FIELD: &'static str = stringify!($id);
            const FIELDS: &'static [&'static str] = &[$(stringify!($field)),+];
            const HEALTH_RULE: $crate::models::HealthRule = $crate::models::HealthRule::$rule;

            fn field(&self, name: &str) -> Option<&str> {
                match name {
                    $(stringify!($field) => self.$field.as_deref(),)+
                    _ => None,
                }
            }

            fn set_field(&mut self, name: &str, value: Option<String>) -> bool {
                match name {
                    $(stringify!($field) => {
                        self.$field = value;
                        true
                    })+
                    _ => false,
                }
            }
        }
    };
}

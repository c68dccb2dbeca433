use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use tracing::debug;
use uuid::Uuid;

use super::Store;
use crate::error::AppResult;
use crate::models::Entity;

/// Postgres-backed table. Every declared field is a nullable `TEXT` column.
pub struct PgStore<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> PgStore<E> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

fn quote(ident: &str) -> String {
    format!("\"{}\"", ident)
}

fn column_list<E: Entity>() -> String {
    E::FIELDS
        .iter()
        .map(|f| quote(f))
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn select_sql<E: Entity>() -> String {
    format!("SELECT {} FROM {}", column_list::<E>(), quote(E::TABLE))
}

/// Single-statement upsert keyed on the identifier column, returning the row.
pub(crate) fn upsert_sql<E: Entity>() -> String {
    let columns = column_list::<E>();
    let placeholders = (1..=E::FIELDS.len())
        .map(|i| format!("${}", i))
        .collect::<Vec<_>>()
        .join(", ");
    let assignments = E::FIELDS
        .iter()
        .map(|f| format!("{0} = EXCLUDED.{0}", quote(f)))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "INSERT INTO {table} ({columns}) VALUES ({placeholders}) \
         ON CONFLICT ({id}) DO UPDATE SET {assignments} \
         RETURNING {columns}",
        table = quote(E::TABLE),
        id = quote(E::ID_FIELD),
    )
}

fn entity_from_row<E: Entity>(row: &PgRow) -> Result<E, sqlx::Error> {
    let mut entity = E::default();
    for &name in E::FIELDS {
        let value: Option<String> = row.try_get(name)?;
        entity.set_field(name, value);
    }
    Ok(entity)
}

#[async_trait]
impl<E: Entity> Store<E> for PgStore<E> {
    async fn save(&self, mut entity: E) -> AppResult<E> {
        if entity.id().is_none() {
            entity.set_id(Uuid::new_v4().to_string());
        }

        let sql = upsert_sql::<E>();
        let mut query = sqlx::query(&sql);
        for &name in E::FIELDS {
            query = query.bind(entity.field(name).map(str::to_string));
        }

        let row = query.fetch_one(&self.pool).await?;
        let saved = entity_from_row::<E>(&row)?;
        debug!(table = E::TABLE, id = ?saved.id(), "Upserted row");
        Ok(saved)
    }

    async fn find_all(&self) -> AppResult<Vec<E>> {
        let rows = sqlx::query(&select_sql::<E>())
            .fetch_all(&self.pool)
            .await?;
        debug!(table = E::TABLE, count = rows.len(), "Fetched rows");

        let entities = rows
            .iter()
            .map(entity_from_row::<E>)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entities)
    }
}

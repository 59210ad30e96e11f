//! `PostgreSQL` repository implementation for label catalog storage.

use super::{
    models::{LabelRow, NewLabelRow},
    schema::labels,
};
use crate::label::{
    domain::{Label, LabelColor, LabelId, LabelName, PersistedLabelData},
    ports::{LabelRepository, LabelRepositoryError, LabelRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by label adapters.
pub type LabelPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed label repository.
#[derive(Debug, Clone)]
pub struct PostgresLabelRepository {
    pool: LabelPgPool,
}

impl PostgresLabelRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: LabelPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> LabelRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> LabelRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(LabelRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(LabelRepositoryError::persistence)?
    }
}

#[async_trait]
impl LabelRepository for PostgresLabelRepository {
    async fn store(&self, label: &Label) -> LabelRepositoryResult<()> {
        let new_row = to_new_row(label);
        let name = label.name().clone();

        self.run_blocking(move |connection| {
            diesel::insert_into(labels::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| map_unique_violation(err, &name))?;
            Ok(())
        })
        .await
    }

    async fn update(&self, label: &Label) -> LabelRepositoryResult<()> {
        let id = label.id();
        let name = label.name().clone();
        let color = label.color().as_str().to_owned();
        let updated_at = label.updated_at();

        self.run_blocking(move |connection| {
            let affected = diesel::update(labels::table.find(id.into_inner()))
                .set((
                    labels::name.eq(name.as_str()),
                    labels::color.eq(&color),
                    labels::updated_at.eq(updated_at),
                ))
                .execute(connection)
                .map_err(|err| map_unique_violation(err, &name))?;

            if affected == 0 {
                return Err(LabelRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: LabelId) -> LabelRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(labels::table.find(id.into_inner()))
                .execute(connection)
                .map_err(LabelRepositoryError::persistence)?;

            if affected == 0 {
                return Err(LabelRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: LabelId) -> LabelRepositoryResult<Option<Label>> {
        self.run_blocking(move |connection| {
            let row = labels::table
                .find(id.into_inner())
                .select(LabelRow::as_select())
                .first::<LabelRow>(connection)
                .optional()
                .map_err(LabelRepositoryError::persistence)?;
            row.map(row_to_label).transpose()
        })
        .await
    }

    async fn find_by_name(&self, name: &LabelName) -> LabelRepositoryResult<Option<Label>> {
        let lookup = name.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = labels::table
                .filter(labels::name.eq(&lookup))
                .select(LabelRow::as_select())
                .first::<LabelRow>(connection)
                .optional()
                .map_err(LabelRepositoryError::persistence)?;
            row.map(row_to_label).transpose()
        })
        .await
    }

    async fn list(&self, skip: u32, limit: u32) -> LabelRepositoryResult<Vec<Label>> {
        self.run_blocking(move |connection| {
            let rows = labels::table
                .order(labels::created_at.asc())
                .offset(i64::from(skip))
                .limit(i64::from(limit))
                .select(LabelRow::as_select())
                .load::<LabelRow>(connection)
                .map_err(LabelRepositoryError::persistence)?;
            rows.into_iter().map(row_to_label).collect()
        })
        .await
    }

    async fn list_all(&self) -> LabelRepositoryResult<Vec<Label>> {
        self.run_blocking(move |connection| {
            let rows = labels::table
                .order(labels::created_at.asc())
                .select(LabelRow::as_select())
                .load::<LabelRow>(connection)
                .map_err(LabelRepositoryError::persistence)?;
            rows.into_iter().map(row_to_label).collect()
        })
        .await
    }
}

fn to_new_row(label: &Label) -> NewLabelRow {
    NewLabelRow {
        id: label.id().into_inner(),
        name: label.name().as_str().to_owned(),
        color: label.color().as_str().to_owned(),
        created_at: label.created_at(),
        updated_at: label.updated_at(),
    }
}

fn row_to_label(row: LabelRow) -> LabelRepositoryResult<Label> {
    let name = LabelName::new(row.name).map_err(LabelRepositoryError::persistence)?;
    let color = LabelColor::new(row.color).map_err(LabelRepositoryError::persistence)?;

    Ok(Label::from_persisted(PersistedLabelData {
        id: LabelId::from_uuid(row.id),
        name,
        color,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}

/// Maps a unique-constraint violation on the name column to the typed
/// duplicate error; the name index is the only non-key unique constraint.
fn map_unique_violation(err: DieselError, name: &LabelName) -> LabelRepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            LabelRepositoryError::DuplicateLabelName(name.clone())
        }
        _ => LabelRepositoryError::persistence(err),
    }
}

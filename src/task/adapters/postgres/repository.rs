//! `PostgreSQL` repository implementation for task storage.
//!
//! The aggregate's participant and label sets are persisted as
//! composite-keyed edge rows; store, update, and delete run the task row
//! and its edges inside one transaction.

use super::{
    models::{NewTaskLabelRow, NewTaskParticipantRow, NewTaskRow, TaskRow},
    schema::{task_labels, task_participants, tasks},
};
use crate::label::domain::LabelId;
use crate::task::{
    domain::{PersistedTaskData, Progress, Task, TaskId, TaskStatus, TaskTitle},
    ports::{Page, TaskListFilter, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use crate::user::domain::UserId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::collections::{BTreeSet, HashMap};
use uuid::Uuid;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl From<DieselError> for TaskRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);
        let participant_rows = participant_rows(task);
        let label_rows = label_rows(task);

        self.run_blocking(move |connection| {
            connection.transaction::<_, TaskRepositoryError, _>(|conn| {
                diesel::insert_into(tasks::table)
                    .values(&new_row)
                    .execute(conn)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            TaskRepositoryError::DuplicateTask(task_id)
                        }
                        _ => TaskRepositoryError::persistence(err),
                    })?;

                insert_edges(conn, &participant_rows, &label_rows)?;
                Ok(())
            })
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let row = to_new_row(task);
        let participant_rows = participant_rows(task);
        let label_rows = label_rows(task);

        self.run_blocking(move |connection| {
            connection.transaction::<_, TaskRepositoryError, _>(|conn| {
                let affected = diesel::update(tasks::table.find(task_id.into_inner()))
                    .set((
                        tasks::title.eq(&row.title),
                        tasks::description.eq(&row.description),
                        tasks::status.eq(&row.status),
                        tasks::progress.eq(row.progress),
                        tasks::is_active.eq(row.is_active),
                        tasks::due_date.eq(row.due_date),
                        tasks::updated_at.eq(row.updated_at),
                    ))
                    .execute(conn)?;

                if affected == 0 {
                    return Err(TaskRepositoryError::NotFound(task_id));
                }

                delete_edges(conn, task_id)?;
                insert_edges(conn, &participant_rows, &label_rows)?;
                Ok(())
            })
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            connection.transaction::<_, TaskRepositoryError, _>(|conn| {
                delete_edges(conn, id)?;
                let affected =
                    diesel::delete(tasks::table.find(id.into_inner())).execute(conn)?;

                if affected == 0 {
                    return Err(TaskRepositoryError::NotFound(id));
                }
                Ok(())
            })
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.into_inner())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()?;

            let Some(row) = row else {
                return Ok(None);
            };

            let mut edges = load_edges(connection, &[row.id])?;
            let (participants, labels) = edges.remove(&row.id).unwrap_or_default();
            row_to_task(row, participants, labels).map(Some)
        })
        .await
    }

    async fn list_visible(
        &self,
        actor: UserId,
        filter: TaskListFilter,
        page: Page,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let actor_id = actor.into_inner();

        self.run_blocking(move |connection| {
            let participating = task_participants::table
                .filter(task_participants::user_id.eq(actor_id))
                .select(task_participants::task_id);

            let mut query = tasks::table
                .filter(
                    tasks::owner_id
                        .eq(actor_id)
                        .or(tasks::id.eq_any(participating)),
                )
                .filter(tasks::is_active.eq(filter.is_active))
                .select(TaskRow::as_select())
                .into_boxed();

            if let Some(status) = filter.status {
                query = query.filter(tasks::status.eq(status.as_str()));
            }

            let rows = query
                .order(tasks::created_at.asc())
                .offset(i64::from(page.skip))
                .limit(i64::from(page.limit))
                .load::<TaskRow>(connection)?;

            let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
            let mut edges = load_edges(connection, &ids)?;

            rows.into_iter()
                .map(|row| {
                    let (participants, labels) = edges.remove(&row.id).unwrap_or_default();
                    row_to_task(row, participants, labels)
                })
                .collect()
        })
        .await
    }

    async fn count_label_usage(&self) -> TaskRepositoryResult<Vec<(LabelId, u64)>> {
        self.run_blocking(move |connection| {
            let counts = task_labels::table
                .group_by(task_labels::label_id)
                .select((task_labels::label_id, diesel::dsl::count_star()))
                .load::<(Uuid, i64)>(connection)?;

            Ok(counts
                .into_iter()
                .map(|(label_id, count)| {
                    (
                        LabelId::from_uuid(label_id),
                        u64::try_from(count).unwrap_or_default(),
                    )
                })
                .collect())
        })
        .await
    }

    async fn purge_label(&self, label: LabelId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            diesel::delete(
                task_labels::table.filter(task_labels::label_id.eq(label.into_inner())),
            )
            .execute(connection)?;
            Ok(())
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        title: task.title().as_str().to_owned(),
        description: task.description().map(ToOwned::to_owned),
        status: task.status().as_str().to_owned(),
        progress: task.progress().into(),
        is_active: task.is_active(),
        due_date: task.due_date(),
        owner_id: task.owner().into_inner(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn participant_rows(task: &Task) -> Vec<NewTaskParticipantRow> {
    task.participants()
        .iter()
        .map(|user| NewTaskParticipantRow {
            task_id: task.id().into_inner(),
            user_id: user.into_inner(),
        })
        .collect()
}

fn label_rows(task: &Task) -> Vec<NewTaskLabelRow> {
    task.labels()
        .iter()
        .map(|label| NewTaskLabelRow {
            task_id: task.id().into_inner(),
            label_id: label.into_inner(),
        })
        .collect()
}

fn insert_edges(
    conn: &mut PgConnection,
    participants: &[NewTaskParticipantRow],
    labels: &[NewTaskLabelRow],
) -> TaskRepositoryResult<()> {
    if !participants.is_empty() {
        diesel::insert_into(task_participants::table)
            .values(participants)
            .execute(conn)?;
    }
    if !labels.is_empty() {
        diesel::insert_into(task_labels::table)
            .values(labels)
            .execute(conn)?;
    }
    Ok(())
}

fn delete_edges(conn: &mut PgConnection, task_id: TaskId) -> TaskRepositoryResult<()> {
    diesel::delete(
        task_participants::table.filter(task_participants::task_id.eq(task_id.into_inner())),
    )
    .execute(conn)?;
    diesel::delete(task_labels::table.filter(task_labels::task_id.eq(task_id.into_inner())))
        .execute(conn)?;
    Ok(())
}

type EdgeSets = (BTreeSet<UserId>, BTreeSet<LabelId>);

/// Batch-loads participant and label edges for the given task rows.
fn load_edges(
    conn: &mut PgConnection,
    task_ids: &[Uuid],
) -> TaskRepositoryResult<HashMap<Uuid, EdgeSets>> {
    let mut edges: HashMap<Uuid, EdgeSets> = HashMap::new();

    if task_ids.is_empty() {
        return Ok(edges);
    }

    let participant_edges: Vec<(Uuid, Uuid)> = task_participants::table
        .filter(task_participants::task_id.eq_any(task_ids))
        .select((task_participants::task_id, task_participants::user_id))
        .load(conn)?;
    for (task_id, user_id) in participant_edges {
        edges
            .entry(task_id)
            .or_default()
            .0
            .insert(UserId::from_uuid(user_id));
    }

    let label_edges: Vec<(Uuid, Uuid)> = task_labels::table
        .filter(task_labels::task_id.eq_any(task_ids))
        .select((task_labels::task_id, task_labels::label_id))
        .load(conn)?;
    for (task_id, label_id) in label_edges {
        edges
            .entry(task_id)
            .or_default()
            .1
            .insert(LabelId::from_uuid(label_id));
    }

    Ok(edges)
}

fn row_to_task(
    row: TaskRow,
    participants: BTreeSet<UserId>,
    labels: BTreeSet<LabelId>,
) -> TaskRepositoryResult<Task> {
    let title = TaskTitle::new(row.title).map_err(TaskRepositoryError::persistence)?;
    let status =
        TaskStatus::try_from(row.status.as_str()).map_err(TaskRepositoryError::persistence)?;
    let progress = Progress::try_from(row.progress).map_err(TaskRepositoryError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(row.id),
        title,
        description: row.description,
        status,
        progress,
        is_active: row.is_active,
        due_date: row.due_date,
        owner: UserId::from_uuid(row.owner_id),
        participants,
        labels,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}

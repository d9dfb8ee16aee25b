//! `PostgreSQL` repository implementation for category storage.

use super::{
    models::{CategoryChangeset, CategoryRow, NewCategoryRow},
    schema::categories,
};
use crate::category::{
    domain::{Category, CategoryId, CategoryName, PersistedCategoryData},
    ports::{CategoryRepository, CategoryRepositoryError, CategoryRepositoryResult},
};
use crate::task::ports::{CategoryLookup, ReferenceLookupError, ReferenceLookupResult};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by category adapters.
pub type CategoryPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed category repository.
#[derive(Debug, Clone)]
pub struct PostgresCategoryRepository {
    pool: CategoryPgPool,
}

impl PostgresCategoryRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: CategoryPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> CategoryRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> CategoryRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(CategoryRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(CategoryRepositoryError::persistence)?
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn store(&self, category: &Category) -> CategoryRepositoryResult<()> {
        let category_id = category.id();
        let name = category.name().clone();
        let new_row = to_new_row(category);

        self.run_blocking(move |connection| {
            diesel::insert_into(categories::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| map_unique_violation(err, category_id, &name))?;
            Ok(())
        })
        .await
    }

    async fn update(&self, category: &Category) -> CategoryRepositoryResult<()> {
        let category_id = category.id();
        let name = category.name().clone();
        let changeset = CategoryChangeset {
            name: category.name().as_str().to_owned(),
            name_key: category.name().normalized(),
            description: category.description().map(ToOwned::to_owned),
            updated_at: category.updated_at(),
        };

        self.run_blocking(move |connection| {
            let updated = diesel::update(
                categories::table.filter(categories::id.eq(category_id.into_inner())),
            )
            .set(&changeset)
            .execute(connection)
            .map_err(|err| map_unique_violation(err, category_id, &name))?;
            if updated == 0 {
                return Err(CategoryRepositoryError::NotFound(category_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: CategoryId) -> CategoryRepositoryResult<Option<Category>> {
        self.run_blocking(move |connection| {
            let row = categories::table
                .filter(categories::id.eq(id.into_inner()))
                .select(CategoryRow::as_select())
                .first::<CategoryRow>(connection)
                .optional()
                .map_err(CategoryRepositoryError::persistence)?;
            row.map(row_to_category).transpose()
        })
        .await
    }

    async fn list(&self) -> CategoryRepositoryResult<Vec<Category>> {
        self.run_blocking(move |connection| {
            let rows = categories::table
                .order(categories::created_at.desc())
                .select(CategoryRow::as_select())
                .load::<CategoryRow>(connection)
                .map_err(CategoryRepositoryError::persistence)?;
            rows.into_iter().map(row_to_category).collect()
        })
        .await
    }

    async fn delete(&self, id: CategoryId) -> CategoryRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted =
                diesel::delete(categories::table.filter(categories::id.eq(id.into_inner())))
                    .execute(connection)
                    .map_err(CategoryRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(CategoryRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl CategoryLookup for PostgresCategoryRepository {
    async fn category_exists(&self, id: CategoryId) -> ReferenceLookupResult<bool> {
        let found = CategoryRepository::find_by_id(self, id)
            .await
            .map_err(ReferenceLookupError::persistence)?;
        Ok(found.is_some())
    }
}

fn to_new_row(category: &Category) -> NewCategoryRow {
    NewCategoryRow {
        id: category.id().into_inner(),
        name: category.name().as_str().to_owned(),
        name_key: category.name().normalized(),
        description: category.description().map(ToOwned::to_owned),
        created_at: category.created_at(),
        updated_at: category.updated_at(),
    }
}

fn row_to_category(row: CategoryRow) -> CategoryRepositoryResult<Category> {
    let CategoryRow {
        id,
        name,
        description,
        created_at,
        updated_at,
        ..
    } = row;

    let data = PersistedCategoryData {
        id: CategoryId::from_uuid(id),
        name: CategoryName::new(name).map_err(CategoryRepositoryError::persistence)?,
        description,
        created_at,
        updated_at,
    };
    Ok(Category::from_persisted(data))
}

fn map_unique_violation(
    err: DieselError,
    category_id: CategoryId,
    name: &CategoryName,
) -> CategoryRepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
            if is_name_unique_violation(info.as_ref()) =>
        {
            CategoryRepositoryError::DuplicateName(name.clone())
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            CategoryRepositoryError::DuplicateCategory(category_id)
        }
        _ => CategoryRepositoryError::persistence(err),
    }
}

fn is_name_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "idx_categories_name_key_unique")
}

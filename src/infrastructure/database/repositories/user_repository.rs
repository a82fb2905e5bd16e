use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::{
    AccountState, DomainError, DomainResult, NewUser, UserAccount, UserChanges, UserListFilter,
    UserStore,
};
use crate::infrastructure::database::entities::user;

/// SeaORM-backed [`UserStore`].
pub struct SeaOrmUserStore {
    db: DatabaseConnection,
}

impl SeaOrmUserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(model: user::Model) -> UserAccount {
    UserAccount {
        id: model.id,
        email: model.email,
        first_name: model.first_name,
        last_name: model.last_name,
        password_hash: model.password_hash,
        is_admin: model.is_admin,
        should_change_password: model.should_change_password,
        profile_image_path: model.profile_image_path,
        created_at: model.created_at,
        state: match model.deleted_at {
            Some(at) => AccountState::Deleted { at },
            None => AccountState::Active,
        },
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

/// Writes that can trip the UNIQUE index on `email` map to the same
/// error callers get from the duplicate pre-check.
fn write_err(e: sea_orm::DbErr) -> DomainError {
    if e.to_string().contains("UNIQUE") || e.to_string().contains("duplicate") {
        DomainError::BadRequest("email is already in use".to_string())
    } else {
        db_err(e)
    }
}

// ── Store implementation ────────────────────────────────────────

#[async_trait]
impl UserStore for SeaOrmUserStore {
    async fn get(&self, id: &str, include_deleted: bool) -> DomainResult<Option<UserAccount>> {
        let mut query = user::Entity::find_by_id(id);
        if !include_deleted {
            query = query.filter(user::Column::DeletedAt.is_null());
        }
        let model = query.one(&self.db).await.map_err(db_err)?;

        Ok(model.map(model_to_domain))
    }

    async fn get_by_email(&self, email: &str) -> DomainResult<Option<UserAccount>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .filter(user::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(model_to_domain))
    }

    async fn get_list(&self, filter: &UserListFilter) -> DomainResult<Vec<UserAccount>> {
        let mut query = user::Entity::find();

        if !filter.include_deleted {
            query = query.filter(user::Column::DeletedAt.is_null());
        }
        if let Some(ref exclude_id) = filter.exclude_id {
            query = query.filter(user::Column::Id.ne(exclude_id));
        }
        if filter.admins_only {
            query = query.filter(user::Column::IsAdmin.eq(true));
        }

        let models = query
            .order_by_asc(user::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn get_admin(&self) -> DomainResult<Option<UserAccount>> {
        let model = user::Entity::find()
            .filter(user::Column::IsAdmin.eq(true))
            .filter(user::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(model_to_domain))
    }

    async fn update(&self, id: &str, changes: UserChanges) -> DomainResult<UserAccount> {
        let existing = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound(format!("user {} not found", id)));
        };

        let mut active: user::ActiveModel = existing.into();

        if let Some(email) = changes.email {
            active.email = Set(email);
        }
        if let Some(first_name) = changes.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(password_hash) = changes.password_hash {
            active.password_hash = Set(password_hash);
        }
        if let Some(is_admin) = changes.is_admin {
            active.is_admin = Set(is_admin);
        }
        if let Some(flag) = changes.should_change_password {
            active.should_change_password = Set(flag);
        }
        if let Some(path) = changes.profile_image_path {
            active.profile_image_path = Set(Some(path));
        }
        if let Some(state) = changes.state {
            active.deleted_at = Set(state.deleted_at());
        }

        let updated = active.update(&self.db).await.map_err(write_err)?;
        Ok(model_to_domain(updated))
    }

    async fn create(&self, new_user: NewUser) -> DomainResult<UserAccount> {
        let new_account = user::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            email: Set(new_user.email),
            first_name: Set(new_user.first_name),
            last_name: Set(new_user.last_name),
            password_hash: Set(new_user.password_hash),
            is_admin: Set(new_user.is_admin),
            should_change_password: Set(new_user.should_change_password),
            profile_image_path: Set(None),
            created_at: Set(Utc::now()),
            deleted_at: Set(None),
        };

        let inserted = new_account.insert(&self.db).await.map_err(write_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let existing = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound(format!("user {} not found", id)));
        };

        let mut active: user::ActiveModel = existing.into();
        active.deleted_at = Set(Some(Utc::now()));
        active.update(&self.db).await.map_err(db_err)?;

        Ok(())
    }
}

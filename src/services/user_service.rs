use uuid::Uuid;

use crate::{
    common::{
        error::AppError,
        pagination::{PaginatedResponse, PaginationParams},
        policy::{UserAction, authorize},
    },
    db::UserRepository,
    models::user::{CreateUserPayload, UpdateUserPayload, User},
    services::auth::hash_password,
};

// Chave de busca polimórfica: as rotas /users/{id} e /users/email/{email}
// caem nos mesmos métodos.
#[derive(Debug, Clone)]
pub enum UserKey {
    Id(Uuid),
    Email(String),
}

#[derive(Clone)]
pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    async fn lookup(&self, key: &UserKey) -> Result<User, AppError> {
        let maybe_user = match key {
            UserKey::Id(id) => self.repo.find_by_id(*id).await?,
            UserKey::Email(email) => self.repo.find_by_email(email).await?,
        };
        maybe_user.ok_or(AppError::UserNotFound)
    }

    pub async fn create(
        &self,
        principal: &User,
        payload: &CreateUserPayload,
    ) -> Result<User, AppError> {
        authorize(principal, None, UserAction::Create)?;

        let hashed_password = hash_password(payload.password.clone()).await?;
        self.repo.insert(payload, &hashed_password).await
    }

    pub async fn find_all(
        &self,
        principal: &User,
        params: &PaginationParams,
    ) -> Result<PaginatedResponse<User>, AppError> {
        authorize(principal, None, UserAction::List)?;

        let (total, data) = self.repo.list(params).await?;
        Ok(PaginatedResponse::new(total, params, data))
    }

    pub async fn find_one(&self, principal: &User, key: &UserKey) -> Result<User, AppError> {
        let user = self.lookup(key).await?;
        authorize(principal, Some(user.id), UserAction::Read)?;
        Ok(user)
    }

    pub async fn update(
        &self,
        principal: &User,
        key: &UserKey,
        payload: &UpdateUserPayload,
    ) -> Result<User, AppError> {
        let user = self.lookup(key).await?;
        authorize(
            principal,
            Some(user.id),
            UserAction::Update {
                changes_role: payload.role.is_some(),
            },
        )?;

        let hashed_password = match &payload.password {
            Some(password) => Some(hash_password(password.clone()).await?),
            None => None,
        };

        self.repo
            .update(user.id, payload, hashed_password.as_deref())
            .await
    }

    pub async fn remove(&self, principal: &User, key: &UserKey) -> Result<User, AppError> {
        let user = self.lookup(key).await?;
        authorize(principal, Some(user.id), UserAction::Delete)?;
        self.repo.delete(user.id).await
    }
}

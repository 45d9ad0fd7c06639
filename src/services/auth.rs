use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{AdminRepository, UserRepository},
    models::{
        admin::{Admin, RegisterAdminPayload},
        auth::{Claims, TokenResponse},
        user::{Role, User},
    },
};

// O hashing do bcrypt é caro de propósito; roda fora do executor async.
pub(crate) async fn hash_password(password: String) -> Result<String, AppError> {
    let hashed = tokio::task::spawn_blocking(move || hash(&password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

    Ok(hashed)
}

pub fn create_token(jwt_secret: &str, sub: Uuid, role: Role) -> Result<String, AppError> {
    let now = Utc::now();
    let expires_at = now + chrono::Duration::days(7);

    let claims = Claims {
        sub,
        role,
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_ref()),
    )?)
}

pub fn decode_token(jwt_secret: &str, token: &str) -> Result<Claims, AppError> {
    let validation = Validation::default();
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_ref()),
        &validation,
    )
    .map_err(|_| AppError::InvalidToken)?;

    Ok(token_data.claims)
}

#[derive(Clone)]
pub struct AuthService {
    admin_repo: AdminRepository,
    user_repo: UserRepository,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(admin_repo: AdminRepository, user_repo: UserRepository, jwt_secret: String) -> Self {
        Self {
            admin_repo,
            user_repo,
            jwt_secret,
        }
    }

    // Cria o tenant raiz. O e-mail duplicado vem do banco como conflito.
    pub async fn register_admin(&self, payload: &RegisterAdminPayload) -> Result<Admin, AppError> {
        let hashed_password = hash_password(payload.password.clone()).await?;

        self.admin_repo
            .insert(&payload.email, &payload.name, &hashed_password)
            .await
    }

    pub async fn login_admin(&self, email: &str, password: &str) -> Result<TokenResponse, AppError> {
        let admin = self
            .admin_repo
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        verify_or_reject(password, &admin.password).await?;

        let access_token = create_token(&self.jwt_secret, admin.id, Role::Admin)?;
        Ok(TokenResponse {
            access_token,
            email: admin.email,
            id: admin.id,
        })
    }

    pub async fn login_user(&self, email: &str, password: &str) -> Result<TokenResponse, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        verify_or_reject(password, &user.password).await?;

        let access_token = create_token(&self.jwt_secret, user.id, user.role)?;
        Ok(TokenResponse {
            access_token,
            email: user.email,
            id: user.id,
        })
    }

    // Token de admin: o `sub` vira o tenant de todas as consultas.
    pub async fn validate_admin_token(&self, token: &str) -> Result<Admin, AppError> {
        let claims = decode_token(&self.jwt_secret, token)?;

        self.admin_repo
            .find_by_id(claims.sub)
            .await?
            .ok_or(AppError::InvalidToken)
    }

    // Token de usuário: o `sub` identifica a própria conta.
    pub async fn validate_user_token(&self, token: &str) -> Result<User, AppError> {
        let claims = decode_token(&self.jwt_secret, token)?;

        self.user_repo
            .find_by_id(claims.sub)
            .await?
            .ok_or(AppError::InvalidToken)
    }
}

async fn verify_or_reject(password: &str, password_hash: &str) -> Result<(), AppError> {
    let password = password.to_owned();
    let password_hash = password_hash.to_owned();

    // Executa a verificação em um thread separado
    let is_valid = tokio::task::spawn_blocking(move || verify(&password, &password_hash))
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

    if !is_valid {
        return Err(AppError::InvalidCredentials);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "segredo-de-teste-nao-usar-em-producao";

    #[test]
    fn token_criado_eh_decodificado() {
        let sub = Uuid::new_v4();
        let token = create_token(SECRET, sub, Role::Admin).unwrap();

        let claims = decode_token(SECRET, &token).unwrap();
        assert_eq!(claims.sub, sub);
        assert_eq!(claims.role, Role::Admin);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn segredo_errado_rejeita() {
        let token = create_token(SECRET, Uuid::new_v4(), Role::User).unwrap();

        let result = decode_token("outro-segredo", &token);
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn token_adulterado_rejeita() {
        let token = create_token(SECRET, Uuid::new_v4(), Role::User).unwrap();
        let mut adulterado = token.clone();
        adulterado.push('x');

        assert!(matches!(
            decode_token(SECRET, &adulterado),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn lixo_nao_eh_token() {
        assert!(matches!(
            decode_token(SECRET, "nao.eh.jwt"),
            Err(AppError::InvalidToken)
        ));
    }
}

use schoolrun_auth::{Claims, TokenService};
use schoolrun_core::{AppError, hash_password, verify_password};
use schoolrun_models::{AccountStatus, AuthResponse, NewUser, User, UserRole};
use tracing::{info, instrument, warn};

use crate::store::UserStore;

use super::model::{LoginRequest, RegisterRequest};

pub struct AuthService;

impl AuthService {
    pub async fn check_account(store: &dyn UserStore) -> Result<AccountStatus, AppError> {
        let count = store.count_users().await?;
        Ok(AccountStatus {
            has_account: count > 0,
        })
    }

    /// Creates an account and signs the caller in.
    #[instrument(skip(store, tokens))]
    pub async fn register(
        store: &dyn UserStore,
        tokens: &TokenService,
        dto: RegisterRequest,
    ) -> Result<AuthResponse, AppError> {
        let role: UserRole = dto
            .role
            .parse()
            .map_err(|_| AppError::bad_request("Invalid role"))?;

        if dto.name.is_empty() || dto.email.is_empty() || dto.password.is_empty() {
            return Err(AppError::bad_request("Missing required fields"));
        }

        if store.find_by_email(&dto.email).await?.is_some() {
            return Err(AppError::bad_request("Email already exists"));
        }

        let password_hash = hash_password(&dto.password)?;
        let user = store
            .insert(NewUser {
                role,
                name: dto.name,
                email: dto.email,
                password_hash,
            })
            .await?;

        info!(email = %user.email, role = %user.role, "User registered");
        Self::auth_response(tokens, &user, "Registration successful")
    }

    #[instrument(skip(store, tokens))]
    pub async fn login(
        store: &dyn UserStore,
        tokens: &TokenService,
        dto: LoginRequest,
    ) -> Result<AuthResponse, AppError> {
        let user = match store.find_by_email(&dto.email).await? {
            Some(user) if verify_password(&dto.password, &user.password_hash)? => user,
            _ => {
                warn!(email = %dto.email, "Failed login attempt");
                return Err(AppError::unauthorized("Invalid credentials"));
            }
        };

        info!(email = %user.email, role = %user.role, "User logged in");
        Self::auth_response(tokens, &user, "Login successful")
    }

    fn auth_response(
        tokens: &TokenService,
        user: &User,
        message: &str,
    ) -> Result<AuthResponse, AppError> {
        let token = tokens.issue(Claims::new(user.uuid.to_string(), user.role.as_str()))?;
        Ok(AuthResponse {
            message: message.to_string(),
            token,
            role: user.role,
        })
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::{error, info, instrument};

use crate::dto::user_dto::{AuthResponse, SignupRequest, UpdateProfileRequest, UserResponse};
use crate::model::user::{User, ROLE_MEMBER, STATUS_ACTIVE};
use crate::repository::user_repo::UserRepository;
use crate::util::error::ServiceError;
use crate::util::jwt::{JwtTokenUtils, JwtTokenUtilsImpl};
use crate::util::locations;
use crate::util::password::{PasswordUtils, PasswordUtilsImpl};

#[async_trait]
pub trait UserService: Send + Sync {
    async fn register(&self, request: SignupRequest) -> Result<AuthResponse, ServiceError>;
    async fn login(&self, email: String, password: String) -> Result<AuthResponse, ServiceError>;
    async fn get_user(&self, id: &ObjectId) -> Result<UserResponse, ServiceError>;
    async fn update_profile(
        &self,
        id: &ObjectId,
        request: UpdateProfileRequest,
    ) -> Result<UserResponse, ServiceError>;
}

pub struct UserServiceImpl {
    pub user_repo: Arc<dyn UserRepository>,
    pub jwt_utils: Arc<JwtTokenUtilsImpl>,
}

impl UserServiceImpl {
    pub fn new(user_repo: Arc<dyn UserRepository>, jwt_utils: Arc<JwtTokenUtilsImpl>) -> Self {
        Self {
            user_repo,
            jwt_utils,
        }
    }

    fn issue_token(&self, user: &User) -> Result<String, ServiceError> {
        self.jwt_utils
            .generate_token(
                &user.id.as_ref().map(|id| id.to_hex()).unwrap_or_default(),
                &user.email,
                &user.role,
            )
            .map_err(|e| ServiceError::InternalError(format!("JWT error: {}", e)))
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    #[instrument(skip(self, request), fields(email = %request.email))]
    async fn register(&self, request: SignupRequest) -> Result<AuthResponse, ServiceError> {
        info!("Registering new user");

        if !locations::is_valid_location(&request.location) {
            return Err(ServiceError::InvalidInput(format!(
                "Location must be one of the listed Michigan cities, got '{}'",
                request.location
            )));
        }

        if self.user_repo.find_by_email(&request.email).await?.is_some() {
            return Err(ServiceError::Conflict(
                "An account with this email already exists".to_string(),
            ));
        }

        let password_hash = PasswordUtilsImpl::hash_password(&request.password)
            .map_err(|e| ServiceError::InternalError(format!("Password hash error: {}", e)))?;

        let user = User {
            id: None,
            email: request.email,
            password_hash,
            name: request.name,
            role: ROLE_MEMBER.to_string(),
            location: request.location,
            bio: None,
            profile_pic: None,
            status: STATUS_ACTIVE.to_string(),
            created_at: None,
            updated_at: None,
        };

        let inserted = self.user_repo.insert(user).await;
        match &inserted {
            Ok(_) => info!("User registered successfully"),
            Err(e) => error!("Failed to insert user: {e}"),
        }
        let inserted = inserted?;

        let token = self.issue_token(&inserted)?;
        Ok(AuthResponse {
            user: UserResponse::from(inserted),
            token,
        })
    }

    #[instrument(skip(self, password), fields(email = %email))]
    async fn login(&self, email: String, password: String) -> Result<AuthResponse, ServiceError> {
        info!("User login attempt");

        // Unknown email and wrong password fall through to the same error so
        // the response never reveals whether an account exists.
        let generic = || ServiceError::Unauthorized("Invalid email or password".to_string());

        let user = match self.user_repo.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                info!("Login rejected");
                return Err(generic());
            }
        };

        let valid = PasswordUtilsImpl::verify_password(&password, &user.password_hash)
            .map_err(|e| ServiceError::InternalError(format!("Password verify error: {}", e)))?;
        if !valid {
            info!("Login rejected");
            return Err(generic());
        }

        let token = self.issue_token(&user)?;
        info!("User logged in successfully");
        Ok(AuthResponse {
            user: UserResponse::from(user),
            token,
        })
    }

    async fn get_user(&self, id: &ObjectId) -> Result<UserResponse, ServiceError> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))?;
        Ok(UserResponse::from(user))
    }

    #[instrument(skip(self, request), fields(user_id = %id))]
    async fn update_profile(
        &self,
        id: &ObjectId,
        request: UpdateProfileRequest,
    ) -> Result<UserResponse, ServiceError> {
        let mut user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))?;

        if let Some(location) = request.location {
            if !locations::is_valid_location(&location) {
                return Err(ServiceError::InvalidInput(format!(
                    "Location must be one of the listed Michigan cities, got '{}'",
                    location
                )));
            }
            user.location = location;
        }
        if let Some(name) = request.name {
            user.name = name;
        }
        if let Some(bio) = request.bio {
            user.bio = Some(bio);
        }
        if let Some(profile_pic) = request.profile_pic {
            user.profile_pic = Some(profile_pic);
        }

        let updated = self.user_repo.update(*id, user).await?;
        info!("Profile updated");
        Ok(UserResponse::from(updated))
    }
}

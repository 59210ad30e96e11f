//! Service layer for account registration and credential verification.

use crate::errors::ErrorKind;
use crate::user::{
    domain::{EmailAddress, User, UserDomainError, UserId},
    ports::{PasswordHasher, UserRepository, UserRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for registering a new account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    email: String,
    first_name: String,
    last_name: String,
    password: String,
}

impl RegisterUserRequest {
    /// Creates a request with all registration fields.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            password: password.into(),
        }
    }
}

/// Service-level errors for account operations.
#[derive(Debug, Error)]
pub enum UserAccountError {
    /// The email/password pair did not match a registered account.
    ///
    /// Deliberately does not reveal whether the email exists.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] UserDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

impl UserAccountError {
    /// Returns the boundary-facing failure kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCredentials => ErrorKind::Forbidden,
            Self::Domain(_) => ErrorKind::Invalid,
            Self::Repository(
                UserRepositoryError::DuplicateEmail(_) | UserRepositoryError::DuplicateUser(_),
            ) => ErrorKind::Conflict,
            Self::Repository(UserRepositoryError::Persistence(_)) => ErrorKind::Internal,
        }
    }
}

/// Result type for account service operations.
pub type UserAccountResult<T> = Result<T, UserAccountError>;

/// Account registration and credential verification service.
#[derive(Clone)]
pub struct UserAccountService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R, H> UserAccountService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    /// Creates a new account service.
    #[must_use]
    pub const fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns [`UserAccountError::Domain`] when the email is malformed, or
    /// [`UserAccountError::Repository`] with a duplicate-email conflict when
    /// the address is already registered.
    pub async fn register(&self, request: RegisterUserRequest) -> UserAccountResult<User> {
        let RegisterUserRequest {
            email,
            first_name,
            last_name,
            password,
        } = request;

        let address = EmailAddress::new(email)?;
        let password_hash = self.hasher.hash(&password);
        let user = User::new(address, first_name, last_name, password_hash);
        self.repository.store(&user).await?;
        Ok(user)
    }

    /// Verifies an email/password pair and returns the matching account.
    ///
    /// # Errors
    ///
    /// Returns [`UserAccountError::InvalidCredentials`] when the email is
    /// unknown or the password does not match; the two cases are not
    /// distinguished.
    pub async fn authenticate(&self, email: &str, password: &str) -> UserAccountResult<User> {
        let address =
            EmailAddress::new(email).map_err(|_| UserAccountError::InvalidCredentials)?;

        let user = self
            .repository
            .find_by_email(&address)
            .await?
            .ok_or(UserAccountError::InvalidCredentials)?;

        if !self.hasher.verify(password, user.password_hash()) {
            return Err(UserAccountError::InvalidCredentials);
        }
        Ok(user)
    }

    /// Finds an account by internal identifier.
    ///
    /// Returns `Ok(None)` when no account has the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`UserAccountError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_id(&self, id: UserId) -> UserAccountResult<Option<User>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Finds an account by email address.
    ///
    /// Returns `Ok(None)` when no account has the given address.
    ///
    /// # Errors
    ///
    /// Returns [`UserAccountError::Domain`] when the email is malformed, or
    /// [`UserAccountError::Repository`] when persistence lookup fails.
    pub async fn find_by_email(&self, email: &str) -> UserAccountResult<Option<User>> {
        let address = EmailAddress::new(email)?;
        Ok(self.repository.find_by_email(&address).await?)
    }
}

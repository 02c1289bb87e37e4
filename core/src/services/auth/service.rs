//! Main authentication service implementation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use fk_shared::config::AdminBootstrapConfig;
use fk_shared::types::UserRole;
use fk_shared::utils::phone::{is_valid_pk_mobile, mask_phone};

use crate::domain::entities::{AccessToken, Account};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::AccountRepository;
use crate::services::credential::PasswordHasher;
use crate::services::notification::Notifier;
use crate::services::otp::OtpService;
use crate::services::token::TokenService;

/// Minimum password length accepted at registration
const MIN_PASSWORD_LENGTH: usize = 6;

/// Orchestrates the registration, login and logout flows over the
/// credential store, OTP service and token service.
pub struct AuthService<R: AccountRepository, N: Notifier> {
    accounts: Arc<R>,
    hasher: PasswordHasher,
    tokens: Arc<TokenService>,
    otp: Arc<OtpService<N>>,
    admin_bootstrap: AdminBootstrapConfig,
}

impl<R: AccountRepository, N: Notifier> AuthService<R, N> {
    pub fn new(
        accounts: Arc<R>,
        hasher: PasswordHasher,
        tokens: Arc<TokenService>,
        otp: Arc<OtpService<N>>,
        admin_bootstrap: AdminBootstrapConfig,
    ) -> Self {
        Self {
            accounts,
            hasher,
            tokens,
            otp,
            admin_bootstrap,
        }
    }

    /// Send a registration verification code.
    ///
    /// # Returns
    ///
    /// The expiry timestamp of the issued challenge.
    ///
    /// # Errors
    ///
    /// * `Conflict` - The phone number is already registered
    /// * `Invalid` - The phone number is malformed
    /// * `Unavailable` - SMS dispatch failed and strict errors are on
    pub async fn send_registration_code(&self, phone: &str) -> DomainResult<DateTime<Utc>> {
        if self.accounts.exists(phone).await? {
            return Err(AuthError::AlreadyRegistered {
                identifier: mask_phone(phone),
            }
            .into());
        }
        self.otp.request_code(phone).await
    }

    /// Verify a registration code. Success consumes the challenge.
    pub async fn verify_registration_code(&self, phone: &str, code: &str) -> DomainResult<()> {
        if self.otp.verify_code(phone, code).await {
            Ok(())
        } else {
            Err(DomainError::Invalid {
                message: "invalid or expired verification code".to_string(),
            })
        }
    }

    /// Complete registration and log the new account in.
    ///
    /// The credential record is immutable once stored; the returned token
    /// makes the fresh account usable without a second login round-trip.
    pub async fn complete_registration(
        &self,
        phone: &str,
        password: &str,
    ) -> DomainResult<AccessToken> {
        if !is_valid_pk_mobile(phone) {
            return Err(DomainError::Invalid {
                message: "invalid phone number".to_string(),
            });
        }
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::Invalid {
                message: format!("password must be at least {MIN_PASSWORD_LENGTH} characters"),
            });
        }
        if self.accounts.exists(phone).await? {
            return Err(AuthError::AlreadyRegistered {
                identifier: mask_phone(phone),
            }
            .into());
        }

        let password_hash = self.hasher.hash(password)?;
        let account = self
            .accounts
            .insert(Account::new_user(phone, password_hash))
            .await?;

        tracing::info!(
            account_id = %account.id,
            phone = %mask_phone(phone),
            event = "registration_completed",
            "customer account registered"
        );

        let token = self
            .tokens
            .issue(&account.id.to_string(), account.role, None)?;
        Ok(AccessToken::new(token))
    }

    /// Customer login with phone number and password.
    pub async fn login(&self, phone: &str, password: &str) -> DomainResult<AccessToken> {
        self.login_as(phone, password, UserRole::User).await
    }

    /// Administrator login with email and password.
    pub async fn admin_login(&self, email: &str, password: &str) -> DomainResult<AccessToken> {
        self.login_as(email, password, UserRole::Admin).await
    }

    /// Log out by revoking the presented token.
    ///
    /// The token must still decode (a junk or already-dead token is an
    /// unauthorized request); revocation itself is an idempotent insert.
    pub async fn logout(&self, token: &str) -> DomainResult<()> {
        self.tokens.decode(token).await?;
        self.tokens.revoke(token).await;
        Ok(())
    }

    /// Register a new administrator account.
    pub async fn register_admin(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> DomainResult<Account> {
        if !email.contains('@') {
            return Err(DomainError::Invalid {
                message: "invalid email address".to_string(),
            });
        }
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::Invalid {
                message: format!("password must be at least {MIN_PASSWORD_LENGTH} characters"),
            });
        }
        if self.accounts.exists(email).await? {
            return Err(AuthError::AlreadyRegistered {
                identifier: email.to_string(),
            }
            .into());
        }

        let password_hash = self.hasher.hash(password)?;
        let account = self
            .accounts
            .insert(Account::new_admin(email, password_hash, full_name))
            .await?;

        tracing::info!(
            account_id = %account.id,
            event = "admin_registered",
            "administrator account created"
        );
        Ok(account)
    }

    /// Ensure the default administrator from configuration exists.
    ///
    /// Called once at startup; a no-op when the account is already present.
    pub async fn bootstrap_admin(&self) -> DomainResult<()> {
        if self.accounts.exists(&self.admin_bootstrap.email).await? {
            tracing::debug!(
                event = "bootstrap_admin_present",
                "default administrator already exists"
            );
            return Ok(());
        }

        let password_hash = self.hasher.hash(&self.admin_bootstrap.password)?;
        let account = Account::new_admin(
            self.admin_bootstrap.email.clone(),
            password_hash,
            self.admin_bootstrap.full_name.clone(),
        );
        self.accounts.insert(account).await?;

        tracing::info!(
            email = %self.admin_bootstrap.email,
            event = "bootstrap_admin_created",
            "default administrator created"
        );
        Ok(())
    }

    /// Shared login path for both roles.
    ///
    /// Unknown identifier, wrong password, wrong role and inactive account
    /// all collapse into one `Unauthorized` answer so the response does not
    /// reveal which half of the credential failed.
    async fn login_as(
        &self,
        identifier: &str,
        password: &str,
        role: UserRole,
    ) -> DomainResult<AccessToken> {
        let account = self
            .accounts
            .find_by_identifier(identifier)
            .await?
            .ok_or(DomainError::Auth(AuthError::InvalidCredentials))?;

        if account.role != role
            || !account.is_active
            || !self.hasher.verify(password, &account.password_hash)
        {
            tracing::info!(
                account_id = %account.id,
                event = "login_rejected",
                "credential verification failed"
            );
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self
            .tokens
            .issue(&account.id.to_string(), account.role, None)?;

        tracing::info!(
            account_id = %account.id,
            role = %account.role,
            event = "login",
            "account logged in"
        );
        Ok(AccessToken::new(token))
    }
}

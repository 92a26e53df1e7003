//! Authentication gate contracts
//!
//! The catalog site gates content behind login/registration handled by an
//! external user system. This module holds the parts that are pure and
//! testable: the email-domain allow-list policy and the login/registration
//! validation with its distinct outcome taxonomy. The user store itself is
//! a collaborator behind the [`UserDirectory`] trait, injected explicitly.

use thiserror::Error;

/// Minimum accepted password length for registration
pub const MIN_PASSWORD_LEN: usize = 8;

/// Login failure outcomes
///
/// Each variant maps to a distinct message in the front end; callers must
/// not collapse them into a generic error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LoginError {
    /// Email or password missing
    #[error("Email and password are required")]
    EmptyFields,
    /// The email address is not well-formed
    #[error("Invalid email address")]
    InvalidEmail,
    /// No account matches the email/password pair
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Registration failure outcomes
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegisterError {
    /// A required field is missing
    #[error("All fields are required")]
    EmptyFields,
    /// The email address is not well-formed
    #[error("Invalid email address")]
    InvalidEmail,
    /// An account with this email already exists
    #[error("An account with this email already exists")]
    EmailExists,
    /// Password and confirmation do not match
    #[error("Passwords do not match")]
    PasswordMismatch,
    /// Password is shorter than the minimum
    #[error("Password must be at least {MIN_PASSWORD_LEN} characters")]
    WeakPassword,
    /// The email's domain is not on the allow-list
    #[error("Registration is not open to this email domain")]
    DomainNotAllowed,
}

/// Registration form input
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

/// External user store seam
///
/// Implemented by whatever holds the accounts; tests use an in-memory map.
pub trait UserDirectory {
    /// Whether an account with this email exists
    fn email_exists(&self, email: &str) -> bool;

    /// Whether the email/password pair identifies an account
    fn verify_credentials(&self, email: &str, password: &str) -> bool;
}

/// Email-domain allow-list
///
/// Configured domains are normalized on construction: trimmed, lower-cased,
/// a leading `@` stripped, empties dropped. An empty list allows every
/// domain.
#[derive(Debug, Clone, Default)]
pub struct DomainPolicy {
    allowed: Vec<String>,
}

impl DomainPolicy {
    /// Build a policy from configured domain entries
    #[must_use]
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed = domains
            .into_iter()
            .filter_map(|raw| {
                let domain = raw
                    .as_ref()
                    .trim()
                    .trim_start_matches('@')
                    .to_ascii_lowercase();
                if domain.is_empty() { None } else { Some(domain) }
            })
            .collect();
        Self { allowed }
    }

    /// A policy with no restriction
    #[must_use]
    pub fn allow_all() -> Self {
        Self::default()
    }

    /// The normalized allow-list
    #[must_use]
    pub fn domains(&self) -> &[String] {
        &self.allowed
    }

    /// Whether an email's domain is allowed to register
    ///
    /// Comparison is case-insensitive. An address without exactly one `@`
    /// or with an empty domain part is denied (unless the list is empty,
    /// which allows all).
    #[must_use]
    pub fn allows(&self, email: &str) -> bool {
        if self.allowed.is_empty() {
            return true;
        }
        match email_domain(email) {
            Some(domain) => self.allowed.iter().any(|allowed| allowed == &domain),
            None => false,
        }
    }
}

/// Extract the domain part of an email, lower-cased
///
/// Requires exactly one `@` with non-empty parts on both sides.
fn email_domain(email: &str) -> Option<String> {
    let mut parts = email.split('@');
    let local = parts.next()?;
    let domain = parts.next()?;
    if parts.next().is_some() || local.is_empty() || domain.is_empty() {
        return None;
    }
    Some(domain.to_ascii_lowercase())
}

/// Whether an email address is well-formed enough to process
///
/// Deliberately lax: one `@`, non-empty local part, and a domain containing
/// a dot. Real validation belongs to the external user system.
#[must_use]
pub fn is_well_formed_email(email: &str) -> bool {
    email_domain(email).is_some_and(|domain| domain.contains('.'))
}

/// Login/registration gate over an injected user directory
pub struct AuthGate<D> {
    directory: D,
    policy: DomainPolicy,
}

impl<D: UserDirectory> AuthGate<D> {
    /// Create a gate from a user directory and a domain policy
    pub fn new(directory: D, policy: DomainPolicy) -> Self {
        Self { directory, policy }
    }

    /// The active domain policy
    #[must_use]
    pub fn policy(&self) -> &DomainPolicy {
        &self.policy
    }

    /// Validate a login attempt
    ///
    /// # Errors
    ///
    /// Returns a distinct `LoginError` per failure mode so the caller can
    /// render a specific message.
    pub fn login(&self, email: &str, password: &str) -> Result<(), LoginError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(LoginError::EmptyFields);
        }
        if !is_well_formed_email(email) {
            return Err(LoginError::InvalidEmail);
        }
        if !self.directory.verify_credentials(email, password) {
            return Err(LoginError::InvalidCredentials);
        }
        Ok(())
    }

    /// Validate a registration attempt
    ///
    /// Checks run in a fixed order (empty fields, email shape, existing
    /// account, password match, password strength, domain gate) so the
    /// first failure reported is deterministic.
    ///
    /// # Errors
    ///
    /// Returns a distinct `RegisterError` per failure mode.
    pub fn register(&self, registration: &Registration) -> Result<(), RegisterError> {
        if registration.name.trim().is_empty()
            || registration.email.trim().is_empty()
            || registration.password.is_empty()
            || registration.password_confirm.is_empty()
        {
            return Err(RegisterError::EmptyFields);
        }
        if !is_well_formed_email(&registration.email) {
            return Err(RegisterError::InvalidEmail);
        }
        if self.directory.email_exists(&registration.email) {
            return Err(RegisterError::EmailExists);
        }
        if registration.password != registration.password_confirm {
            return Err(RegisterError::PasswordMismatch);
        }
        if registration.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(RegisterError::WeakPassword);
        }
        if !self.policy.allows(&registration.email) {
            return Err(RegisterError::DomainNotAllowed);
        }
        Ok(())
    }
}

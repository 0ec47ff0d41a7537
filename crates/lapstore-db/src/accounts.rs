//! # Account Credential Store
//!
//! The account specialization of the generic record store: it owns the
//! password lifecycle and the username lookup used for sign-in.
//!
//! ## Password State Machine
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Plaintext ──(insert / update)──► Hashed                     │
//! │                                                              │
//! │  One-way. A value already carrying the hash prefix passes    │
//! │  through update unchanged; anything else is hashed with a    │
//! │  fresh random salt. Hashing the same plaintext twice yields  │
//! │  different strings, so verification re-derives the check     │
//! │  against the stored hash instead of comparing hashes.        │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! `verify` never reveals whether a failure was "no such user" or "wrong
//! password": both are `false`.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use sqlx::SqlitePool;
use tracing::debug;

use lapstore_core::{validation, Account};

use crate::error::{DbError, DbResult};
use crate::store::RecordStore;

/// Serialized hashes start with this fixed prefix (argon2 PHC format).
///
/// This prefix is the *sole* signal distinguishing an already-hashed value
/// from plaintext on update. A plaintext password that happens to start
/// with it would be stored verbatim; that quirk is preserved deliberately
/// and covered by a test.
pub const PASSWORD_HASH_PREFIX: &str = "$argon2";

/// Store for user accounts.
///
/// Wraps the generic [`RecordStore`] and overrides the write path to keep
/// the hash invariant: a stored account never holds plaintext.
#[derive(Clone)]
pub struct AccountStore {
    pool: SqlitePool,
    records: RecordStore<Account>,
}

impl AccountStore {
    /// Creates an account store backed by the shared pool.
    pub fn new(pool: SqlitePool) -> Self {
        AccountStore {
            records: RecordStore::new(pool.clone()),
            pool,
        }
    }

    /// Lists every account. Stored password fields are hashes.
    pub async fn list_all(&self) -> DbResult<Vec<Account>> {
        self.records.list_all().await
    }

    /// Fetches an account by its business code.
    pub async fn get_by_key(&self, code: &str) -> DbResult<Option<Account>> {
        self.records.get_by_key(&code.to_string()).await
    }

    /// Exact-match lookup on the unique username column.
    pub async fn get_by_username(&self, username: &str) -> DbResult<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT code, employee_code, username, password, role_code \
             FROM accounts WHERE username = ?",
        )
        .bind(username.to_string())
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    /// Inserts a new account, hashing the plaintext password first.
    ///
    /// ## Returns
    /// * `Ok(true)` - account stored with a salted hash
    /// * `Err(DbError::DuplicateCredential)` - the store reported an
    ///   integrity violation (duplicate username/employee code, or a
    ///   dangling employee/role reference)
    pub async fn insert(&self, account: &Account) -> DbResult<bool> {
        validation::validate_account(account)?;

        debug!(code = %account.code, username = %account.username, "Inserting account");

        let mut stored = account.clone();
        stored.password = hash_password(&account.password)?;

        match self.records.insert(&stored).await {
            Err(err) if err.is_integrity_violation() => Err(DbError::DuplicateCredential),
            other => other,
        }
    }

    /// Full-row update; the password is re-hashed only when it is plaintext.
    ///
    /// A value already carrying [`PASSWORD_HASH_PREFIX`] passes through
    /// unchanged, so re-saving a fetched account does not churn the hash.
    /// Any other value gets a fresh salt.
    pub async fn update(&self, account: &Account) -> DbResult<bool> {
        validation::validate_account(account)?;

        debug!(code = %account.code, "Updating account");

        let mut stored = account.clone();
        if !stored.password.starts_with(PASSWORD_HASH_PREFIX) {
            stored.password = hash_password(&account.password)?;
        }

        self.records.update(&stored).await
    }

    /// Deletes an account by its business code.
    pub async fn delete(&self, code: &str) -> DbResult<bool> {
        self.records.delete(&code.to_string()).await
    }

    /// Checks a candidate password for a username.
    ///
    /// ## Returns
    /// `Ok(false)` for an unknown user *and* for a wrong password; the two
    /// are indistinguishable to the caller.
    pub async fn verify(&self, username: &str, candidate: &str) -> DbResult<bool> {
        match self.get_by_username(username).await? {
            Some(account) => Ok(verify_password(candidate, &account.password)),
            None => Ok(false),
        }
    }
}

// =============================================================================
// Hashing Helpers
// =============================================================================

/// Hashes a plaintext password with a freshly generated random salt.
fn hash_password(password: &str) -> DbResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| DbError::Internal(format!("Failed to hash password: {e}")))?;

    Ok(hash.to_string())
}

/// Verifies a candidate against a stored hash.
///
/// An unparseable stored value (e.g. the prefix-passthrough quirk) simply
/// fails verification.
fn verify_password(candidate: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => return false,
    };

    Argon2::default()
        .verify_password(candidate.as_bytes(), &parsed_hash)
        .is_ok()
}

// =============================================================================
// Unit Tests
// =============================================================================

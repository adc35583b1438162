use crate::error::{AppError, AppResult};

/// bcrypt work factor used when none is configured.
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// bcrypt reads at most this many bytes of input.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// One-way password hasher backed by bcrypt.
///
/// Hashing is CPU-bound, so both operations run on tokio's blocking pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Creates a hasher with the given bcrypt cost (valid range 4..=31).
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password.
    ///
    /// Passwords longer than [`MAX_PASSWORD_BYTES`] are rejected rather than
    /// truncated.
    ///
    /// # Example
    /// ```ignore
    /// let hashed = PasswordHasher::default().hash("my_secure_password").await?;
    /// ```
    pub async fn hash(&self, password: &str) -> AppResult<String> {
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(AppError::BadRequest {
                message: format!("Password must be at most {MAX_PASSWORD_BYTES} bytes"),
            });
        }
        let password = password.to_string();
        let cost = self.cost;
        let hashed =
            tokio::task::spawn_blocking(move || bcrypt::non_truncating_hash(password, cost))
                .await??;
        Ok(hashed)
    }

    /// Verify a plaintext password against a stored hash.
    ///
    /// An over-long password never matches.
    pub async fn verify(&self, password: &str, password_hash: &str) -> AppResult<bool> {
        if password.len() > MAX_PASSWORD_BYTES {
            return Ok(false);
        }
        let password = password.to_string();
        let password_hash = password_hash.to_string();
        let valid =
            tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash)).await??;
        Ok(valid)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

use bcrypt::DEFAULT_COST;

use crate::utils::errors::AppError;

/// Password hashing capability, passed explicitly into every service that
/// needs it rather than imported as a process-wide default. The cost is
/// configurable so the test suite can run at the bcrypt minimum.
#[derive(Clone, Debug)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to hash password: {}", e)))
    }

    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        bcrypt::verify(password, hash)
            .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to verify password: {}", e)))
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

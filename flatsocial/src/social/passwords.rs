use crate::errors::RepoError;

/// Hash a password using bcrypt
pub fn hash_password(password: &str, cost: u32) -> Result<String, RepoError> {
    bcrypt::hash(password, cost).map_err(|err| RepoError::other(format!("password hashing failed: {err}")))
}

/// bcrypt output is 60 characters starting with a `$2a$`, `$2b$` or `$2y$` prefix.
pub fn is_hashed(stored: &str) -> bool {
    stored.len() == 60 && ["$2a$", "$2b$", "$2x$", "$2y$"].iter().any(|prefix| stored.starts_with(prefix))
}

/// Result of checking a password against what is stored for an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordCheck {
    Mismatch,
    Match,
    /// Matched a cleartext value left by an older writer; the caller should re-hash it.
    LegacyMatch,
}

pub fn check_password(candidate: &str, stored: &str) -> Result<PasswordCheck, RepoError> {
    if !is_hashed(stored) {
        return Ok(if candidate == stored {
            PasswordCheck::LegacyMatch
        } else {
            PasswordCheck::Mismatch
        });
    }
    let matched = bcrypt::verify(candidate, stored)
        .map_err(|err| RepoError::other(format!("password verification failed: {err}")))?;
    Ok(if matched {
        PasswordCheck::Match
    } else {
        PasswordCheck::Mismatch
    })
}

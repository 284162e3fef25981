//! Status gate run before any social-app operation on behalf of a user.

use log::debug;

use crate::{
    client::Client,
    errors::RepoError,
    models::{Status, User},
    store::CollectionStore,
    validators::parse_id,
};

/// Which roles may pass the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GatePolicy {
    /// Social-app pages: admins are sent to the admin panel instead (`admin_redirect`).
    #[default]
    Members,
    /// Any active account, admins included.
    Any,
}

/// Check `raw_user_id` against an already loaded user list.
///
/// Refusal codes, in evaluation order: `invalid_user`, `user_not_found`,
/// `account_blocked`, `account_pending`, then `admin_redirect` under [`GatePolicy::Members`].
pub fn check_user(users: &[User], raw_user_id: &str, policy: GatePolicy) -> Result<User, RepoError> {
    let user_id = parse_id(raw_user_id).ok_or_else(|| RepoError::access("invalid_user"))?;
    let user = users
        .iter()
        .find(|user| user.id == user_id)
        .ok_or_else(RepoError::user_not_found)?;

    match user.status {
        Status::Blocked => return Err(RepoError::access("account_blocked")),
        Status::Pending => return Err(RepoError::access("account_pending")),
        Status::Active => {}
    }
    if policy == GatePolicy::Members && user.is_admin() {
        return Err(RepoError::access("admin_redirect"));
    }
    Ok(user.clone())
}

impl<S> Client<S>
where
    S: CollectionStore,
{
    /// Resolve the acting user from a raw id and admit them only if their account allows it.
    pub async fn authorize(&self, raw_user_id: &str, policy: GatePolicy) -> Result<User, RepoError> {
        let users: Vec<User> = self.load().await;
        let user = check_user(&users, raw_user_id, policy)?;
        debug!("gate admitted user {}", user.id);
        Ok(user)
    }
}

//! Registration, login, profiles and the admin user directory.

use log::{info, warn};
use serde::Serialize;

use crate::{
    client::Client,
    errors::{RepoError, ValidationError, ValidationIssue},
    id::next_id,
    keys::collections,
    models::{Friendship, Role, Status, User},
    social::{
        passwords::{PasswordCheck, check_password, hash_password},
        relations::friends_of,
    },
    store::CollectionStore,
    types::Timestamp,
    validators::is_valid_email,
};

/// Where a freshly logged-in user should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    AdminPanel,
    News,
}

impl Destination {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdminPanel => "admin_panel",
            Self::News => "news",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginOutcome {
    pub user: User,
    pub destination: Destination,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user: User,
    pub friends: Vec<User>,
    pub friends_count: usize,
}

/// Admin edit of a user. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub status: Option<Status>,
    pub birth_date: Option<String>,
}

fn email_in_use(users: &[User], email: &str, except: Option<u64>) -> bool {
    users
        .iter()
        .any(|user| Some(user.id) != except && user.email.eq_ignore_ascii_case(email))
}

fn invalid(field: &str, code: &str, message: &str) -> RepoError {
    ValidationError::single(field, code, message).into()
}

impl<S> Client<S>
where
    S: CollectionStore,
{
    /// Create an active account with role `user`.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, RepoError> {
        let name = name.trim();
        let email = email.trim();
        let missing: Vec<ValidationIssue> = [("name", name), ("email", email), ("password", password)]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| ValidationIssue::new(field, "missing_fields", format!("{field} is required")))
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::new(missing).into());
        }

        let settings = &self.config().accounts;
        if password.chars().count() < settings.min_password_len {
            return Err(invalid(
                "password",
                "password_too_short",
                "password is shorter than the configured minimum",
            ));
        }
        if !is_valid_email(email) {
            return Err(invalid("email", "invalid_email", "email address is not valid"));
        }

        let _guard = self.lock(&[collections::USERS]).await;
        let mut users: Vec<User> = self.try_load().await?;
        if email_in_use(&users, email, None) {
            return Err(invalid("email", "email_taken", "email is already registered"));
        }

        let now = Timestamp::now();
        let user = User {
            id: next_id(&users),
            name: name.to_string(),
            email: email.to_string(),
            password: hash_password(password, settings.bcrypt_cost)?,
            birth_date: None,
            avatar: settings.default_avatar.clone(),
            role: Role::User,
            status: Status::Active,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        self.persist(&users).await?;
        info!("registered user {} <{}>", user.id, user.email);
        Ok(user)
    }

    /// Check credentials and account status. Email matching ignores case.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, RepoError> {
        let email = email.trim();
        let users: Vec<User> = self.load().await;
        let user = users
            .into_iter()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .ok_or_else(|| RepoError::access("invalid_credentials"))?;

        let check = check_password(password, &user.password)?;
        if check == PasswordCheck::Mismatch {
            return Err(RepoError::access("invalid_credentials"));
        }
        match user.status {
            Status::Blocked => return Err(RepoError::access("account_blocked")),
            Status::Pending => return Err(RepoError::access("account_pending")),
            Status::Active => {}
        }

        let user = if check == PasswordCheck::LegacyMatch {
            self.upgrade_password(user, password).await?
        } else {
            user
        };
        let destination = if user.is_admin() {
            Destination::AdminPanel
        } else {
            Destination::News
        };
        info!("user {} logged in", user.id);
        Ok(LoginOutcome { user, destination })
    }

    async fn upgrade_password(&self, user: User, password: &str) -> Result<User, RepoError> {
        let hash = hash_password(password, self.config().accounts.bcrypt_cost)?;

        let _guard = self.lock(&[collections::USERS]).await;
        let mut users: Vec<User> = self.try_load().await?;
        let Some(stored) = users.iter_mut().find(|stored| stored.id == user.id) else {
            warn!("user {} vanished before their password could be re-hashed", user.id);
            return Ok(user);
        };
        stored.password = hash;
        let upgraded = stored.clone();
        self.persist(&users).await?;
        info!("re-hashed legacy password for user {}", upgraded.id);
        Ok(upgraded)
    }

    pub async fn profile(&self, user_id: u64) -> Result<Profile, RepoError> {
        let users: Vec<User> = self.load().await;
        let friendships: Vec<Friendship> = self.load().await;
        let user = users
            .iter()
            .find(|user| user.id == user_id)
            .cloned()
            .ok_or_else(RepoError::user_not_found)?;
        let friends = friends_of(user_id, &users, &friendships);

        Ok(Profile {
            friends_count: friends.len(),
            friends,
            user,
        })
    }

    pub async fn list_users(&self) -> Vec<User> {
        self.load().await
    }

    pub async fn get_user(&self, user_id: u64) -> Result<User, RepoError> {
        self.load::<User>()
            .await
            .into_iter()
            .find(|user| user.id == user_id)
            .ok_or_else(|| RepoError::not_found("user"))
    }

    /// Apply an admin edit and stamp `updated_at`.
    pub async fn update_user(&self, user_id: u64, update: UserUpdate) -> Result<User, RepoError> {
        if update.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(invalid("name", "missing_fields", "name is required"));
        }
        let email = update.email.as_deref().map(str::trim);
        if email.is_some_and(|email| !is_valid_email(email)) {
            return Err(invalid("email", "invalid_email", "email address is not valid"));
        }

        let _guard = self.lock(&[collections::USERS]).await;
        let mut users: Vec<User> = self.try_load().await?;
        if email.is_some_and(|email| email_in_use(&users, email, Some(user_id))) {
            return Err(invalid("email", "email_taken", "email is already registered"));
        }
        let user = users
            .iter_mut()
            .find(|user| user.id == user_id)
            .ok_or_else(|| RepoError::not_found("user"))?;

        if let Some(name) = update.name.as_deref() {
            user.name = name.trim().to_string();
        }
        if let Some(email) = email {
            user.email = email.to_string();
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(status) = update.status {
            user.status = status;
        }
        if let Some(birth_date) = update.birth_date {
            user.birth_date = Some(birth_date);
        }
        user.updated_at = Timestamp::now();
        let updated = user.clone();

        self.persist(&users).await?;
        info!("updated user {user_id}");
        Ok(updated)
    }
}

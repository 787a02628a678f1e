use crate::shared::infrastructure::identity_provider::{
    Identity, IdentityError, IdentityProvider, NewStaffUser, UserRole,
};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Default)]
pub struct InMemoryIdentityProvider {
    tokens: RwLock<HashMap<String, Identity>>,
    users: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Registers an already signed-in session, as the provider would after sign-in.
    pub async fn issue_token(&self, token: impl Into<String>, identity: Identity) {
        self.users
            .write()
            .await
            .insert(identity.email.clone(), identity.user_id.clone());
        self.tokens.write().await.insert(token.into(), identity);
    }

    pub async fn has_user(&self, email: &str) -> bool {
        self.users.read().await.contains_key(email)
    }

    fn ensure_online(&self) -> Result<(), IdentityError> {
        if self.is_offline {
            return Err(IdentityError::Backend("Identity provider offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn verify_access_token(&self, token: &str) -> Result<Identity, IdentityError> {
        self.ensure_online()?;
        self.tokens
            .read()
            .await
            .get(token)
            .cloned()
            .ok_or(IdentityError::InvalidToken)
    }

    async fn create_staff_user(&self, user: NewStaffUser) -> Result<String, IdentityError> {
        self.ensure_online()?;
        if user.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(IdentityError::Refused(format!(
                "password should be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(IdentityError::UserAlreadyExists(user.email));
        }
        let subject = Uuid::now_v7().to_string();
        users.insert(user.email, subject.clone());
        Ok(subject)
    }

    async fn delete_user(&self, email: &str) -> Result<(), IdentityError> {
        self.ensure_online()?;
        let subject = self
            .users
            .write()
            .await
            .remove(email)
            .ok_or_else(|| IdentityError::UserNotFound(email.to_string()))?;
        self.tokens
            .write()
            .await
            .retain(|_, identity| identity.user_id != subject);
        Ok(())
    }
}

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::user::models::Login;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Process-local user store with the same contract as the Postgres adapter.
///
/// IDs start at 1 and increase by one per insert. The uniqueness check
/// and the insert happen under one write lock.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    state: RwLock<State>,
}

#[derive(Debug)]
struct State {
    users: HashMap<Login, User>,
    next_id: i64,
}

impl Default for State {
    fn default() -> Self {
        Self {
            users: HashMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub async fn count(&self) -> usize {
        self.state.read().await.users.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut state = self.state.write().await;

        if state.users.contains_key(&user.login) {
            return Err(UserError::LoginAlreadyExists(user.login.to_string()));
        }

        let created = User {
            id: UserId(state.next_id),
            login: user.login,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        state.next_id += 1;
        state.users.insert(created.login.clone(), created.clone());

        Ok(created)
    }

    async fn exists_by_login(&self, login: &Login) -> Result<bool, UserError> {
        Ok(self.state.read().await.users.contains_key(login))
    }

    async fn find_by_login(&self, login: &Login) -> Result<Option<User>, UserError> {
        Ok(self.state.read().await.users.get(login).cloned())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn new_user(login: &str) -> NewUser {
        NewUser {
            login: Login::new(login.to_string()).unwrap(),
            password_hash: "$argon2id$hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repository = InMemoryUserRepository::new();

        let first = repository.create(new_user("alice")).await.unwrap();
        let second = repository.create(new_user("bob")).await.unwrap();

        assert_eq!(first.id, UserId(1));
        assert_eq!(second.id, UserId(2));
        assert_eq!(repository.count().await, 2);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_login() {
        let repository = InMemoryUserRepository::new();
        repository.create(new_user("alice")).await.unwrap();

        let result = repository.create(new_user("alice")).await;

        assert!(matches!(result, Err(UserError::LoginAlreadyExists(_))));
        assert_eq!(repository.count().await, 1);
    }

    #[tokio::test]
    async fn test_logins_are_case_sensitive() {
        let repository = InMemoryUserRepository::new();
        repository.create(new_user("alice")).await.unwrap();

        assert!(repository.create(new_user("Alice")).await.is_ok());
    }

    #[tokio::test]
    async fn test_exists_and_find_by_login() {
        let repository = InMemoryUserRepository::new();
        let login = Login::new("alice".to_string()).unwrap();

        assert!(!repository.exists_by_login(&login).await.unwrap());
        assert!(repository.find_by_login(&login).await.unwrap().is_none());

        let created = repository.create(new_user("alice")).await.unwrap();

        assert!(repository.exists_by_login(&login).await.unwrap());
        let found = repository.find_by_login(&login).await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.password_hash, "$argon2id$hash");
    }

    #[tokio::test]
    async fn test_concurrent_creates_single_winner() {
        let repository = Arc::new(InMemoryUserRepository::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let repository = Arc::clone(&repository);
                tokio::spawn(async move { repository.create(new_user("racer")).await })
            })
            .collect();

        let mut created = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => created += 1,
                Err(UserError::LoginAlreadyExists(_)) => conflicts += 1,
                Err(e) => panic!("unexpected error: {}", e),
            }
        }

        assert_eq!(created, 1);
        assert_eq!(conflicts, 7);
        assert_eq!(repository.count().await, 1);
    }
}

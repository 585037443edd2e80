use std::collections::HashMap;

use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use crate::clients::UserClient;
use crate::domain::{User, UserCreate};
use crate::error::UserError;
use crate::messages::{ServiceResponse, UserRequest};

/// Identity store actor. Owns the user map; registration mints the opaque
/// identifier each record is keyed by.
pub struct UserStore {
    receiver: mpsc::Receiver<UserRequest>,
    users: HashMap<String, User>,
}

impl UserStore {
    pub fn new(buffer_size: usize) -> (Self, UserClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = Self {
            receiver,
            users: HashMap::new(),
        };
        let client = UserClient::new(sender);
        (store, client)
    }

    #[instrument(name = "user_store", skip(self))]
    pub async fn run(mut self) {
        info!("UserStore starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                UserRequest::Register {
                    payload,
                    respond_to,
                } => {
                    self.handle_register(payload, respond_to);
                }
                UserRequest::Login {
                    email,
                    pass,
                    respond_to,
                } => {
                    self.handle_login(email, pass, respond_to);
                }
                UserRequest::GetProfile { id, respond_to } => {
                    self.handle_get_profile(id, respond_to);
                }
                UserRequest::Shutdown => {
                    info!("UserStore shutting down");
                    break;
                }
                #[cfg(test)]
                UserRequest::Count { respond_to } => {
                    let _ = respond_to.send(Ok(self.users.len()));
                }
            }
        }

        info!("UserStore stopped");
    }

    #[instrument(fields(user_name = %payload.name, user_email = %payload.email), skip(self, payload, respond_to))]
    fn handle_register(
        &mut self,
        payload: UserCreate,
        respond_to: ServiceResponse<String, UserError>,
    ) {
        debug!("Processing register request");

        let result = if self.users.values().any(|u| u.email == payload.email) {
            error!("Email already registered");
            Err(UserError::AlreadyRegistered(payload.email))
        } else {
            let id = Uuid::new_v4().to_string();
            let user = User {
                id: id.clone(),
                name: payload.name,
                email: payload.email,
                pass: payload.pass,
            };
            self.users.insert(id.clone(), user);

            info!(user_id = %id, "User registered");
            Ok(id)
        };

        let _ = respond_to.send(result);
    }

    /// Resolves credentials to the stable user id.
    ///
    /// Linear scan over all users, O(n) in user count; fine at this scale and
    /// avoids maintaining an email index.
    #[instrument(fields(user_email = %email), skip(self, email, pass, respond_to))]
    fn handle_login(
        &self,
        email: String,
        pass: String,
        respond_to: ServiceResponse<String, UserError>,
    ) {
        debug!("Processing login request");

        let result = match self.users.values().find(|u| u.email == email) {
            // TODO: hash passwords (argon2) at registration; this still
            // compares plaintext.
            Some(user) if user.pass == pass => {
                info!(user_id = %user.id, "Login completed");
                Ok(user.id.clone())
            }
            Some(_) => {
                error!("Password mismatch");
                Err(UserError::InvalidCredentials)
            }
            None => {
                debug!("No user with that email");
                Err(UserError::NotFound)
            }
        };

        let _ = respond_to.send(result);
    }

    #[instrument(fields(user_id = %id), skip(self, respond_to))]
    fn handle_get_profile(&self, id: String, respond_to: ServiceResponse<User, UserError>) {
        debug!("Processing get_profile request");

        let result = match self.users.get(&id) {
            Some(user) => {
                info!(user_name = %user.name, "User found");
                Ok(user.clone())
            }
            None => {
                debug!("User not found");
                Err(UserError::NotFound)
            }
        };

        let _ = respond_to.send(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_store() -> UserClient {
        let (store, client) = UserStore::new(10);
        tokio::spawn(store.run());
        client
    }

    #[tokio::test]
    async fn register_then_login_returns_stable_id() {
        let client = spawn_store();

        let id = client
            .register(UserCreate {
                name: "Alice".into(),
                email: "alice@example.com".into(),
                pass: "secret".into(),
            })
            .await
            .unwrap();

        let first = client
            .login("alice@example.com".into(), "secret".into())
            .await
            .unwrap();
        let second = client
            .login("alice@example.com".into(), "secret".into())
            .await
            .unwrap();

        assert_eq!(first, id);
        assert_eq!(second, id);
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials_not_not_found() {
        let client = spawn_store();

        client
            .register(UserCreate {
                name: "Bob".into(),
                email: "bob@example.com".into(),
                pass: "hunter2".into(),
            })
            .await
            .unwrap();

        let err = client
            .login("bob@example.com".into(), "wrong".into())
            .await
            .unwrap_err();
        assert_eq!(err, UserError::InvalidCredentials);
    }

    #[tokio::test]
    async fn unknown_email_is_not_found() {
        let client = spawn_store();

        let err = client
            .login("nobody@example.com".into(), "whatever".into())
            .await
            .unwrap_err();
        assert_eq!(err, UserError::NotFound);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let client = spawn_store();

        let payload = UserCreate {
            name: "Carol".into(),
            email: "carol@example.com".into(),
            pass: "pw".into(),
        };
        client.register(payload.clone()).await.unwrap();

        let err = client.register(payload).await.unwrap_err();
        assert_eq!(
            err,
            UserError::AlreadyRegistered("carol@example.com".into())
        );

        let count = client.count().await.unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn profile_lookup_by_id() {
        let client = spawn_store();

        let id = client
            .register(UserCreate {
                name: "Dave".into(),
                email: "dave@example.com".into(),
                pass: "pw".into(),
            })
            .await
            .unwrap();

        let user = client.get_profile(id.clone()).await.unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.name, "Dave");

        let err = client.get_profile("missing".into()).await.unwrap_err();
        assert_eq!(err, UserError::NotFound);
    }
}

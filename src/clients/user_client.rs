use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::domain::{User, UserCreate};
use crate::error::UserError;
use crate::messages::UserRequest;

/// Client for the identity store actor.
#[derive(Clone)]
pub struct UserClient {
    sender: mpsc::Sender<UserRequest>,
}

impl UserClient {
    pub fn new(sender: mpsc::Sender<UserRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), UserError> {
        debug!("Sending shutdown request");
        self.sender
            .send(UserRequest::Shutdown)
            .await
            .map_err(|_| UserError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(UserClient => fn register(payload: UserCreate) -> String as UserRequest::Register, Error = UserError);
client_method!(UserClient => fn login(email: String, pass: String) -> String as UserRequest::Login, Error = UserError);
client_method!(UserClient => fn get_profile(id: String) -> User as UserRequest::GetProfile, Error = UserError);

// Test-only method for inspecting actor state from the outside.
#[cfg(test)]
client_method!(UserClient => fn count() -> usize as UserRequest::Count, Error = UserError);

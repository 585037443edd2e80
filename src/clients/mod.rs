//! Cloneable handles for talking to the store actors.
//!
//! Each client wraps an mpsc sender; methods are generated by
//! [`client_method!`], which handles the oneshot response plumbing and maps
//! channel failures onto the store's `ActorCommunicationError`.

/// Generate client methods with oneshot channel boilerplate and automatic
/// tracing.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}

pub mod catalog_client;
pub mod purchase_client;
pub mod user_client;

pub use catalog_client::*;
pub use purchase_client::*;
pub use user_client::*;

use crate::{
    lifecycle::{Dispatcher, Lifecycle, decode, run},
    models::{AuthPayload, Credentials},
    request::{RequestError, RequestOptions, Transport, request},
    store::SessionAction,
};
use reqwest::Method;
use std::cell::Cell;

use super::endpoint;

/// Login, signup and logout against the auth API.
#[derive(Debug)]
pub struct AuthClient<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> AuthClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    /// Signs in with `credentials`. `Ok(false)` means the server refused them.
    ///
    /// # Errors
    /// Returns an error on a transport fault.
    pub async fn login<D>(&self, dispatcher: &D, credentials: &Credentials) -> Result<bool, RequestError>
    where
        D: Dispatcher<SessionAction> + ?Sized,
    {
        let lifecycle = Lifecycle::new(SessionAction::Rejected, "Error logging in")
            .on_success(SessionAction::Login);
        self.authenticate(dispatcher, "api/login", credentials, lifecycle)
            .await
    }

    /// Registers a new user and signs them in.
    ///
    /// # Errors
    /// Returns an error on a transport fault.
    pub async fn signup<D>(&self, dispatcher: &D, credentials: &Credentials) -> Result<bool, RequestError>
    where
        D: Dispatcher<SessionAction> + ?Sized,
    {
        let lifecycle = Lifecycle::new(SessionAction::Rejected, "Error signing up")
            .on_success(SessionAction::Signup);
        self.authenticate(dispatcher, "api/users", credentials, lifecycle)
            .await
    }

    pub fn logout<D>(&self, dispatcher: &D)
    where
        D: Dispatcher<SessionAction> + ?Sized,
    {
        dispatcher.dispatch(SessionAction::Logout);
    }

    async fn authenticate<D>(
        &self,
        dispatcher: &D,
        path: &str,
        credentials: &Credentials,
        lifecycle: Lifecycle<SessionAction, AuthPayload>,
    ) -> Result<bool, RequestError>
    where
        D: Dispatcher<SessionAction> + ?Sized,
    {
        let accepted = Cell::new(false);
        let url = endpoint(&self.base_url, path);
        let call = request(
            &self.transport,
            Method::POST,
            &url,
            RequestOptions::json(credentials)?,
        );

        let result = run(dispatcher, call, lifecycle, |data| {
            let payload = decode::<AuthPayload>(data)?;
            accepted.set(true);
            Ok(payload)
        })
        .await?;
        Ok(result.is_ok() && accepted.get())
    }
}

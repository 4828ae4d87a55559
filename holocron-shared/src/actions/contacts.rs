use crate::{
    lifecycle::{Dispatcher, Lifecycle, decode, run},
    models::{Agenda, Contact, ContactForm, ContactId, ContactPatch},
    request::{RequestOptions, RequestOutcome, Transport, request},
    store::ContactsAction,
};
use reqwest::Method;
use tracing::info;

use super::endpoint;

/// CRUD actions over one user's contact collection.
#[derive(Debug)]
pub struct ContactsClient<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> ContactsClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    fn collection_url(&self, user: &str) -> String {
        endpoint(&self.base_url, &format!("agendas/{user}"))
    }

    fn contact_url(&self, user: &str, id: &ContactId) -> String {
        endpoint(&self.base_url, &format!("agendas/{user}/contacts/{id}"))
    }

    /// Loads the whole collection of `user`, replacing the stored one.
    ///
    /// # Errors
    /// Returns an error on a transport fault.
    pub async fn fetch_contacts<D>(&self, dispatcher: &D, user: &str) -> RequestOutcome
    where
        D: Dispatcher<ContactsAction> + ?Sized,
    {
        let lifecycle = Lifecycle::new(ContactsAction::FetchFailed, "Error fetching contacts")
            .starting_with(ContactsAction::FetchStarted)
            .on_success(ContactsAction::Loaded);
        let options =
            RequestOptions::not_found(format!("User {user} does not exist, please create a new user"));

        let url = self.collection_url(user);
        let call = request(&self.transport, Method::GET, &url, options);
        run(dispatcher, call, lifecycle, |data| {
            decode::<Agenda>(data).map(|agenda| agenda.contacts)
        })
        .await
    }

    /// Creates an empty collection for `user`.
    ///
    /// # Errors
    /// Returns an error on a transport fault.
    pub async fn create_collection<D>(&self, dispatcher: &D, user: &str) -> RequestOutcome
    where
        D: Dispatcher<ContactsAction> + ?Sized,
    {
        let lifecycle: Lifecycle<_, ()> =
            Lifecycle::new(ContactsAction::FetchFailed, format!("Error creating contacts of {user}"));
        let url = self.collection_url(user);
        let call = request(&self.transport, Method::POST, &url, RequestOptions::default());
        run(dispatcher, call, lifecycle, |_| Ok(())).await
    }

    /// Fetches the collection, creating it once when the user is unknown.
    ///
    /// A 404 triggers one create and exactly one more fetch. If the create is
    /// refused, or the second fetch fails too, that failure is final.
    ///
    /// # Errors
    /// Returns an error on a transport fault.
    pub async fn fetch_or_create<D>(&self, dispatcher: &D, user: &str) -> RequestOutcome
    where
        D: Dispatcher<ContactsAction> + ?Sized,
    {
        let first = self.fetch_contacts(dispatcher, user).await?;
        if !first.is_not_found() {
            return Ok(first);
        }

        info!(user, "contact collection missing, creating it");
        let created = self.create_collection(dispatcher, user).await?;
        if !created.is_ok() {
            return Ok(created);
        }
        self.fetch_contacts(dispatcher, user).await
    }

    /// # Errors
    /// Returns an error on a transport fault or if `form` cannot be encoded.
    pub async fn create_contact<D>(
        &self,
        dispatcher: &D,
        user: &str,
        form: &ContactForm,
    ) -> RequestOutcome
    where
        D: Dispatcher<ContactsAction> + ?Sized,
    {
        let lifecycle = Lifecycle::new(ContactsAction::MutationFailed, "Error creating contact")
            .on_success(ContactsAction::Added);
        let url = endpoint(&self.base_url, &format!("agendas/{user}/contacts"));

        let call = request(&self.transport, Method::POST, &url, RequestOptions::json(form)?);
        run(dispatcher, call, lifecycle, decode::<Contact>).await
    }

    /// Replaces the fields of contact `id` with `form`.
    ///
    /// The stored contact is merged with the server's echo, or with `form`
    /// itself when the response has no body.
    ///
    /// # Errors
    /// Returns an error on a transport fault or if `form` cannot be encoded.
    pub async fn update_contact<D>(
        &self,
        dispatcher: &D,
        user: &str,
        id: ContactId,
        form: &ContactForm,
    ) -> RequestOutcome
    where
        D: Dispatcher<ContactsAction> + ?Sized,
    {
        let lifecycle = Lifecycle::new(ContactsAction::MutationFailed, "Error updating contact")
            .on_success(ContactsAction::Updated);
        let url = self.contact_url(user, &id);

        let call = request(&self.transport, Method::PUT, &url, RequestOptions::json(form)?);
        run(dispatcher, call, lifecycle, |data| match data {
            Some(body) => serde_json::from_value::<ContactPatch>(body),
            None => Ok(ContactPatch {
                name: Some(form.name.clone()),
                address: Some(form.address.clone()),
                phone: Some(form.phone.clone()),
                email: Some(form.email.clone()),
                ..ContactPatch::new(id)
            }),
        })
        .await
    }

    /// # Errors
    /// Returns an error on a transport fault.
    pub async fn delete_contact<D>(&self, dispatcher: &D, user: &str, id: ContactId) -> RequestOutcome
    where
        D: Dispatcher<ContactsAction> + ?Sized,
    {
        let lifecycle = Lifecycle::new(ContactsAction::MutationFailed, "Error deleting contact")
            .on_success(ContactsAction::Deleted);
        let url = self.contact_url(user, &id);

        let call = request(&self.transport, Method::DELETE, &url, RequestOptions::default());
        run(dispatcher, call, lifecycle, move |_| Ok(id)).await
    }
}

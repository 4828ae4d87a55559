use crate::{
    lifecycle::{Dispatcher, Lifecycle, decode, run},
    models::{EntityKind, LikePayload, Page, flatten_properties},
    request::{RequestOptions, RequestOutcome, Transport, request},
    store::{CatalogueAction, RequestId},
};
use reqwest::Method;
use serde_json::Value;
use std::cell::Cell;

use super::endpoint;

/// Hands out increasing request ids, starting at 1.
#[derive(Debug, Default)]
pub struct RequestSequence {
    last: Cell<RequestId>,
}

impl RequestSequence {
    /// The next id; never repeats for the lifetime of the sequence.
    pub fn next(&self) -> RequestId {
        let next = self.last.get() + 1;
        self.last.set(next);
        next
    }
}

/// Catalogue listing, detail and favorites actions.
#[derive(Debug)]
pub struct CatalogueClient<T> {
    transport: T,
    base_url: String,
    sequence: RequestSequence,
}

impl<T: Transport> CatalogueClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            sequence: RequestSequence::default(),
        }
    }

    #[must_use]
    pub fn first_page_url(&self, kind: EntityKind) -> String {
        endpoint(&self.base_url, kind.as_str())
    }

    #[must_use]
    pub fn detail_url(&self, kind: EntityKind, uid: &str) -> String {
        endpoint(&self.base_url, &format!("{kind}/{uid}"))
    }

    /// Fetches one listing page of `kind` from `url`, usually a cursor.
    ///
    /// # Errors
    /// Returns an error on a transport fault.
    pub async fn fetch_page<D>(&self, dispatcher: &D, kind: EntityKind, url: &str) -> RequestOutcome
    where
        D: Dispatcher<CatalogueAction> + ?Sized,
    {
        let request = self.sequence.next();
        let lifecycle = Lifecycle::new(
            move |message| CatalogueAction::FetchFailed {
                kind,
                request,
                message,
            },
            format!("Error fetching {kind}"),
        )
        .starting_with(CatalogueAction::FetchStarted { kind, request })
        .on_success(move |page| CatalogueAction::PageLoaded {
            kind,
            request,
            page,
        });

        let call = request_json(&self.transport, url);
        run(dispatcher, call, lifecycle, decode::<Page>).await
    }

    /// Fetches the first listing page of `kind`.
    ///
    /// # Errors
    /// Returns an error on a transport fault.
    pub async fn fetch_first_page<D>(&self, dispatcher: &D, kind: EntityKind) -> RequestOutcome
    where
        D: Dispatcher<CatalogueAction> + ?Sized,
    {
        let url = self.first_page_url(kind);
        self.fetch_page(dispatcher, kind, &url).await
    }

    /// Fetches a detail document and flattens its properties.
    ///
    /// # Errors
    /// Returns an error on a transport fault.
    pub async fn fetch_detail<D>(&self, dispatcher: &D, url: &str) -> RequestOutcome
    where
        D: Dispatcher<CatalogueAction> + ?Sized,
    {
        let request = self.sequence.next();
        let lifecycle = Lifecycle::new(
            move |message| CatalogueAction::DetailFailed { request, message },
            "Error fetching detail",
        )
        .starting_with(CatalogueAction::DetailStarted { request })
        .on_success(move |properties| CatalogueAction::DetailLoaded {
            request,
            properties,
        });

        let call = request_json(&self.transport, url);
        run(dispatcher, call, lifecycle, |data| {
            flatten_properties(&data.unwrap_or(Value::Null))
        })
        .await
    }

    /// # Errors
    /// Returns an error on a transport fault.
    pub async fn fetch_detail_of<D>(
        &self,
        dispatcher: &D,
        kind: EntityKind,
        uid: &str,
    ) -> RequestOutcome
    where
        D: Dispatcher<CatalogueAction> + ?Sized,
    {
        let url = self.detail_url(kind, uid);
        self.fetch_detail(dispatcher, &url).await
    }

    /// Toggles a favorite. Purely local, nothing is sent.
    pub fn toggle_like<D>(&self, dispatcher: &D, payload: LikePayload)
    where
        D: Dispatcher<CatalogueAction> + ?Sized,
    {
        dispatcher.dispatch(CatalogueAction::ToggleLike(payload));
    }
}

async fn request_json<T: Transport + ?Sized>(transport: &T, url: &str) -> RequestOutcome {
    request(transport, Method::GET, url, RequestOptions::default()).await
}

use crate::config::client_config;
use once_cell::unsync::OnceCell;
use shared::{actions::Clients, request::ReqwestTransport};
use std::rc::Rc;

thread_local! {
    static SHARED_CLIENTS: OnceCell<Rc<Clients<ReqwestTransport>>> = const { OnceCell::new() };
}

/// The action clients of this tab, built once from the baked-in configuration.
pub fn shared() -> Rc<Clients<ReqwestTransport>> {
    SHARED_CLIENTS.with(|cell| {
        cell.get_or_init(|| {
            Rc::new(Clients::from_config(
                &client_config(),
                ReqwestTransport::new(),
            ))
        })
        .clone()
    })
}

/// Logs a transport fault to the browser console.
pub fn report(context: &str, error: &shared::request::RequestError) {
    web_sys::console::error_1(&format!("{context}: {error}").into());
}

use crate::{
    api,
    models::app_state::{SessionStore, reducer},
    routes::MainRoute,
};
use shared::models::Credentials;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_dispatch;

/// Text typed into the login/signup form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct LoginForm {
    first_name: String,
    email: String,
    password: String,
}

impl LoginForm {
    fn credentials(&self, signing_in: bool) -> Credentials {
        Credentials {
            first_name: (!signing_in && !self.first_name.is_empty())
                .then(|| self.first_name.clone()),
            ..Credentials::new(self.email.clone(), self.password.clone())
        }
    }

    /// The cleared form and the message shown after the server refused it.
    fn rejected(signing_in: bool) -> (Self, &'static str) {
        let message = if signing_in {
            "Invalid credentials"
        } else {
            "Sign up failed"
        };
        (Self::default(), message)
    }
}

fn field_setter(
    form: &UseStateHandle<LoginForm>,
    apply: fn(&mut LoginForm, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        }
    })
}

/// Login and signup forms behind one toggle.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let is_login = use_state(|| true);
    let form = use_state(LoginForm::default);
    let show_password = use_state(|| false);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let dispatch = use_dispatch::<SessionStore>();

    let onsubmit = {
        let is_login = is_login.clone();
        let form = form.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let signing_in = *is_login;
            let credentials = form.credentials(signing_in);
            loading_handle.set(true);
            error_handle.set(None);

            let dispatcher = reducer(&dispatch);
            let navigator = navigator.clone();
            let error_ref = error_handle.clone();
            let loading_ref = loading_handle.clone();
            let form_ref = form.clone();
            spawn_local(async move {
                let clients = api::shared();
                let auth = &clients.auth;
                let outcome = if signing_in {
                    auth.login(&dispatcher, &credentials).await
                } else {
                    auth.signup(&dispatcher, &credentials).await
                };
                match outcome {
                    Ok(true) => {
                        if let Some(nav) = navigator {
                            nav.push(&MainRoute::Contacts);
                        }
                    }
                    Ok(false) => {
                        let (cleared, message) = LoginForm::rejected(signing_in);
                        form_ref.set(cleared);
                        error_ref.set(Some(message.to_string()));
                    }
                    Err(err) => {
                        api::report("Authentication failed", &err);
                        error_ref.set(Some("Unable to connect to server".to_string()));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let toggle = |value: bool| {
        let is_login = is_login.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            is_login.set(value);
            error.set(None);
        })
    };
    let on_toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    let is_busy = *loading;
    let disable_submit = form.email.is_empty() || form.password.is_empty() || is_busy;
    let (subtitle, submit_label) = match (*is_login, is_busy) {
        (true, false) => ("Access The Galaxy", "Login"),
        (true, true) => ("Access The Galaxy", "Signing in..."),
        (false, false) => ("Join The Force", "Sign Up"),
        (false, true) => ("Join The Force", "Signing up..."),
    };

    html! {
        <div class="flex items-center justify-center py-10">
            <div class="card w-full max-w-md shadow-lg bg-base-200">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl justify-center">{"STAR WARS"}</h2>
                    <p class="text-center text-base-content/70">{subtitle}</p>
                    <div class="join w-full my-2">
                        <button type="button" class={classes!("btn", "join-item", "flex-1", (*is_login).then_some("btn-active"))} onclick={toggle(true)}>
                            {"Login"}
                        </button>
                        <button type="button" class={classes!("btn", "join-item", "flex-1", (!*is_login).then_some("btn-active"))} onclick={toggle(false)}>
                            {"Sign Up"}
                        </button>
                    </div>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    if !*is_login {
                        <div class="form-control">
                            <label class="label" for="first_name">
                                <span class="label-text">{"First name"}</span>
                            </label>
                            <input
                                id="first_name"
                                class="input input-bordered"
                                value={form.first_name.clone()}
                                oninput={field_setter(&form, |form, value| form.first_name = value)}
                            />
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email Address"}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            required=true
                            value={form.email.clone()}
                            oninput={field_setter(&form, |form, value| form.email = value)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type={if *show_password { "text" } else { "password" }}
                            required=true
                            value={form.password.clone()}
                            oninput={field_setter(&form, |form, value| form.password = value)}
                        />
                        <button type="button" class="btn btn-link btn-sm self-start" onclick={on_toggle_password}>
                            {if *show_password { "Hide Password" } else { "Show Password" }}
                        </button>
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {submit_label}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

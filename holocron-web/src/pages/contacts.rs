use crate::{
    api,
    components::{ContactFormView, Loading},
    models::app_state::{ContactsStore, SearchTerm, reducer},
};
use shared::models::{ContactForm, EditIntent, Load};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::{use_selector, use_store};

/// Contact list of the configured user with create/edit/delete.
#[function_component(ContactsPage)]
pub fn contacts_page() -> Html {
    let (contacts, dispatch) = use_store::<ContactsStore>();
    let search = use_selector(|term: &SearchTerm| term.0.clone());
    let intent = use_state(|| None::<EditIntent>);

    {
        let dispatcher = reducer(&dispatch);
        use_effect_with((), move |_| {
            spawn_local(async move {
                let clients = api::shared();
                if let Err(error) = clients
                    .contacts
                    .fetch_or_create(&dispatcher, &clients.contacts_user)
                    .await
                {
                    api::report("Error fetching contacts", &error);
                }
            });
            || ()
        });
    }

    let on_submit = {
        let dispatch = dispatch.clone();
        let intent = intent.clone();
        Callback::from(move |form: ContactForm| {
            let Some(current) = (*intent).clone() else {
                return;
            };
            intent.set(None);
            let dispatcher = reducer(&dispatch);
            spawn_local(async move {
                let clients = api::shared();
                let user = &clients.contacts_user;
                let outcome = match current {
                    EditIntent::Create => {
                        clients.contacts.create_contact(&dispatcher, user, &form).await
                    }
                    EditIntent::Edit(contact) => {
                        clients
                            .contacts
                            .update_contact(&dispatcher, user, contact.id, &form)
                            .await
                    }
                };
                if let Err(error) = outcome {
                    api::report("Error saving contact", &error);
                }
            });
        })
    };

    let on_cancel = {
        let intent = intent.clone();
        Callback::from(move |()| intent.set(None))
    };

    let on_add = {
        let intent = intent.clone();
        Callback::from(move |_: MouseEvent| intent.set(Some(EditIntent::Create)))
    };

    let body = match &contacts.collection {
        Load::Idle | Load::Loading => html! {
            <Loading
                title="Loading contacts"
                fun_fact="Did you know? The Millennium Falcon made the Kessel Run in less than 12 parsecs!"
            />
        },
        Load::Failed(message) => html! {
            <div class="text-center py-10">
                <Icon icon_id={IconId::HeroiconsOutlineExclamationTriangle} class="w-12 h-12 mx-auto mb-3" />
                <h3 class="text-xl">{"Something went wrong"}</h3>
                <p>{"We couldn't retrieve your contacts from the galaxy."}</p>
                <p>{"Error: "}<strong>{message.clone()}</strong></p>
            </div>
        },
        Load::Loaded(_) => {
            let rows = contacts.search(&search);
            if rows.is_empty() {
                html! {
                    <div class="text-center py-10">
                        <h3 class="text-xl">{"No contacts found"}</h3>
                        <p>{"Try adjusting your search term"}</p>
                    </div>
                }
            } else {
                html! {
                    <ul class="flex flex-col gap-3">
                        { for rows.into_iter().map(|contact| {
                            let on_edit = {
                                let intent = intent.clone();
                                let contact = contact.clone();
                                Callback::from(move |_: MouseEvent| {
                                    intent.set(Some(EditIntent::Edit(contact.clone())));
                                })
                            };
                            let on_delete = {
                                let dispatch = dispatch.clone();
                                let id = contact.id.clone();
                                Callback::from(move |_: MouseEvent| {
                                    let dispatcher = reducer(&dispatch);
                                    let id = id.clone();
                                    spawn_local(async move {
                                        let clients = api::shared();
                                        if let Err(error) = clients
                                            .contacts
                                            .delete_contact(&dispatcher, &clients.contacts_user, id)
                                            .await
                                        {
                                            api::report("Error deleting contact", &error);
                                        }
                                    });
                                })
                            };
                            html! {
                                <li key={contact.id.to_string()} class="card bg-base-200 shadow">
                                    <div class="card-body flex-row items-center justify-between">
                                        <div>
                                            <h4 class="font-semibold">{contact.name.clone()}</h4>
                                            <p class="text-sm">{contact.address.clone()}</p>
                                            <p class="text-sm">{contact.phone.clone()}</p>
                                            <p class="text-sm">{contact.email.clone()}</p>
                                        </div>
                                        <div class="flex gap-2">
                                            <button class="btn btn-ghost btn-sm" title="Edit" onclick={on_edit}>
                                                <Icon icon_id={IconId::HeroiconsOutlinePencilSquare} class="w-5 h-5" />
                                            </button>
                                            <button class="btn btn-ghost btn-sm text-error" title="Delete" onclick={on_delete}>
                                                <Icon icon_id={IconId::HeroiconsOutlineTrash} class="w-5 h-5" />
                                            </button>
                                        </div>
                                    </div>
                                </li>
                            }
                        }) }
                    </ul>
                }
            }
        }
    };

    html! {
        <div class="py-6">
            <div class="text-center mb-8">
                <h2 class="text-3xl font-bold tracking-widest">{"CONTACT LIST"}</h2>
                <p class="text-base-content/70">{"Your Galaxy Network"}</p>
            </div>
            <button class="btn btn-primary mb-4 gap-2" onclick={on_add}>
                <Icon icon_id={IconId::HeroiconsOutlineUserPlus} class="w-5 h-5" />
                {"Add new Contact"}
            </button>
            if let Some(notice) = &contacts.notice {
                <div class="alert alert-warning mb-4"><span>{notice.clone()}</span></div>
            }
            if let Some(current) = &*intent {
                <ContactFormView intent={current.clone()} {on_submit} {on_cancel} />
            }
            {body}
        </div>
    }
}

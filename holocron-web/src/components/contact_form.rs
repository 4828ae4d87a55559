use shared::models::{ContactForm, EditIntent};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub intent: EditIntent,
    pub on_submit: Callback<ContactForm>,
    pub on_cancel: Callback<()>,
}

fn field_setter(
    form: &UseStateHandle<ContactForm>,
    apply: fn(&mut ContactForm, String),
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

/// Create/edit form for a contact.
#[function_component(ContactFormView)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form = use_state(|| props.intent.form());

    {
        let form = form.clone();
        use_effect_with(props.intent.clone(), move |intent| {
            form.set(intent.form());
            || ()
        });
    }

    let onsubmit = {
        let form = form.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit((*form).clone());
        })
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let (title, submit_label) = match &props.intent {
        EditIntent::Create => ("Add new contact", "Create"),
        EditIntent::Edit(_) => ("Edit contact", "Save"),
    };
    let disable_submit = form.name.trim().is_empty();

    html! {
        <form class="card bg-base-200 shadow-md mb-6" onsubmit={onsubmit}>
            <div class="card-body gap-3">
                <h3 class="card-title">{title}</h3>
                <input
                    class="input input-bordered"
                    placeholder="Full name"
                    value={form.name.clone()}
                    oninput={field_setter(&form, |form, value| form.name = value)}
                />
                <input
                    class="input input-bordered"
                    type="email"
                    placeholder="Email"
                    value={form.email.clone()}
                    oninput={field_setter(&form, |form, value| form.email = value)}
                />
                <input
                    class="input input-bordered"
                    placeholder="Phone"
                    value={form.phone.clone()}
                    oninput={field_setter(&form, |form, value| form.phone = value)}
                />
                <input
                    class="input input-bordered"
                    placeholder="Address"
                    value={form.address.clone()}
                    oninput={field_setter(&form, |form, value| form.address = value)}
                />
                <div class="card-actions justify-end">
                    <button type="button" class="btn btn-ghost" onclick={on_cancel}>{"Cancel"}</button>
                    <button type="submit" class="btn btn-primary" disabled={disable_submit}>
                        {submit_label}
                    </button>
                </div>
            </div>
        </form>
    }
}

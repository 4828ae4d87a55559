use crate::{
    api,
    components::Loading,
    models::app_state::{CatalogueStore, reducer},
    routes::MainRoute,
};
use shared::models::{EntityKind, LikePayload, Load};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq)]
pub struct DetailPageProps {
    pub kind: EntityKind,
    pub uid: String,
}

/// Property sheet of one catalogue item.
#[function_component(DetailPage)]
pub fn detail_page(props: &DetailPageProps) -> Html {
    let (catalogue, dispatch) = use_store::<CatalogueStore>();
    let kind = props.kind;

    {
        let dispatcher = reducer(&dispatch);
        use_effect_with((kind, props.uid.clone()), move |(kind, uid)| {
            let (kind, uid) = (*kind, uid.clone());
            spawn_local(async move {
                if let Err(error) = api::shared()
                    .catalogue
                    .fetch_detail_of(&dispatcher, kind, &uid)
                    .await
                {
                    api::report("Error fetching detail", &error);
                }
            });
            || ()
        });
    }

    let is_liked = catalogue.is_favorite(&props.uid, kind);
    let name = match catalogue.detail() {
        Load::Loaded(properties) => properties
            .iter()
            .find(|property| property.label == "name")
            .map(|property| property.value.clone()),
        _ => None,
    };

    let on_like = {
        let dispatcher = reducer(&dispatch);
        let payload = LikePayload {
            uid: Some(props.uid.clone()),
            kind: Some(kind),
            name: name.clone(),
            url: Some(api::shared().catalogue.detail_url(kind, &props.uid)),
        };
        Callback::from(move |_: MouseEvent| {
            api::shared()
                .catalogue
                .toggle_like(&dispatcher, payload.clone());
        })
    };

    let body = match catalogue.detail() {
        Load::Idle | Load::Loading => html! {
            <Loading
                title="Loading details"
                fun_fact="Fun fact: Lightsabers can cut through almost anything!"
            />
        },
        Load::Failed(message) => html! {
            <div class="alert alert-error"><span>{message.clone()}</span></div>
        },
        Load::Loaded(properties) => html! {
            <dl class="grid grid-cols-1 sm:grid-cols-2 gap-3">
                { for properties.iter().map(|property| html! {
                    <div class="bg-base-300 rounded p-3">
                        <dt class="text-xs uppercase text-base-content/60">{property.label.replace('_', " ")}</dt>
                        <dd class="font-medium">{property.value.clone()}</dd>
                    </div>
                }) }
            </dl>
        },
    };

    html! {
        <div class="py-6">
            <Link<MainRoute> to={MainRoute::listing(kind)} classes="btn btn-secondary btn-sm mb-4 gap-2">
                <Icon icon_id={IconId::HeroiconsOutlineArrowLeft} class="w-4 h-4" />
                {"Back to List"}
            </Link<MainRoute>>
            <div class="card bg-base-200 shadow-lg">
                <div class="card-body">
                    <div class="flex items-center justify-between">
                        <h2 class="card-title text-2xl">{name.unwrap_or_else(|| format!("{kind} #{}", props.uid))}</h2>
                        <button
                            class={classes!("btn", "btn-circle", is_liked.then_some("btn-error"))}
                            onclick={on_like}
                        >
                            <Icon
                                icon_id={if is_liked { IconId::HeroiconsSolidHeart } else { IconId::HeroiconsOutlineHeart }}
                                class="w-5 h-5"
                            />
                        </button>
                    </div>
                    {body}
                </div>
            </div>
        </div>
    }
}

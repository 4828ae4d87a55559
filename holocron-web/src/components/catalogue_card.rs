use crate::{
    api,
    models::app_state::{CatalogueStore, reducer},
    routes::MainRoute,
};
use shared::models::{EntityKind, LikePayload};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq)]
pub struct CatalogueCardProps {
    pub uid: String,
    pub kind: EntityKind,
    pub name: String,
    #[prop_or_default]
    pub url: Option<String>,
}

/// One catalogue item with its like toggle.
#[function_component(CatalogueCard)]
pub fn catalogue_card(props: &CatalogueCardProps) -> Html {
    let (catalogue, dispatch) = use_store::<CatalogueStore>();
    let is_liked = catalogue.is_favorite(&props.uid, props.kind);

    let on_like = {
        let dispatcher = reducer(&dispatch);
        let payload = LikePayload {
            uid: Some(props.uid.clone()),
            kind: Some(props.kind),
            name: Some(props.name.clone()),
            url: props.url.clone(),
        };
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            event.prevent_default();
            api::shared()
                .catalogue
                .toggle_like(&dispatcher, payload.clone());
        })
    };

    let detail = MainRoute::Detail {
        kind: props.kind,
        uid: props.uid.clone(),
    };
    let heart = if is_liked {
        IconId::HeroiconsSolidHeart
    } else {
        IconId::HeroiconsOutlineHeart
    };

    html! {
        <div class="card bg-base-200 shadow-md hover:shadow-xl transition-shadow">
            <div class="card-body">
                <div class="flex items-start justify-between gap-2">
                    <Link<MainRoute> to={detail} classes="card-title link link-hover">
                        {props.name.clone()}
                    </Link<MainRoute>>
                    <button
                        class={classes!("btn", "btn-circle", "btn-sm", is_liked.then_some("btn-error"))}
                        title={if is_liked { "Remove from favorites" } else { "Add to favorites" }}
                        onclick={on_like}
                    >
                        <Icon icon_id={heart} class="w-4 h-4" />
                    </button>
                </div>
                <p class="text-sm text-base-content/60">{format!("{} #{}", props.kind, props.uid)}</p>
            </div>
        </div>
    }
}

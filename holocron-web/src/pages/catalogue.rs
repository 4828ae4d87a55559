use crate::{
    api,
    components::{CatalogueCard, Loading},
    models::app_state::{CatalogueStore, SearchTerm, reducer},
};
use shared::models::{EntityKind, Load};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::{use_selector, use_store};

#[derive(Properties, PartialEq)]
pub struct CataloguePageProps {
    pub kind: EntityKind,
}

const fn heading(kind: EntityKind) -> (&'static str, &'static str, &'static str) {
    match kind {
        EntityKind::People => (
            "CHARACTERS",
            "Heroes and Villains of the Galaxy",
            "Fun fact: There are over 20,000 characters in the Star Wars expanded universe!",
        ),
        EntityKind::Planets => (
            "PLANETS",
            "Worlds across the Galaxy",
            "Fun fact: Tatooine orbits two suns!",
        ),
        EntityKind::Vehicles => (
            "VEHICLES",
            "Machines of the Galaxy",
            "Fun fact: The sandcrawler was built by the Corellian Engineering Corporation!",
        ),
    }
}

/// Paginated listing of one catalogue kind.
#[function_component(CataloguePage)]
pub fn catalogue_page(props: &CataloguePageProps) -> Html {
    let kind = props.kind;
    let (catalogue, dispatch) = use_store::<CatalogueStore>();
    let search = use_selector(|term: &SearchTerm| term.0.clone());

    let fetch = {
        let dispatch = dispatch.clone();
        Callback::from(move |cursor: Option<String>| {
            let dispatcher = reducer(&dispatch);
            spawn_local(async move {
                let clients = api::shared();
                let outcome = match cursor {
                    Some(url) => clients.catalogue.fetch_page(&dispatcher, kind, &url).await,
                    None => clients.catalogue.fetch_first_page(&dispatcher, kind).await,
                };
                if let Err(error) = outcome {
                    api::report(&format!("Error fetching {kind}"), &error);
                }
            });
        })
    };

    {
        let fetch = fetch.clone();
        use_effect_with(kind, move |_| {
            fetch.emit(None);
            || ()
        });
    }

    let (title, subtitle, fun_fact) = heading(kind);
    let body = match catalogue.page(kind) {
        Load::Idle | Load::Loading => html! {
            <Loading title={format!("Loading {kind}")} fun_fact={fun_fact.to_string()} />
        },
        Load::Failed(message) => html! {
            <div class="alert alert-error">
                <Icon icon_id={IconId::HeroiconsOutlineExclamationTriangle} class="w-6 h-6" />
                <span>{message.clone()}</span>
            </div>
        },
        Load::Loaded(page) => {
            let items = page.filter_by_name(&search);
            let on_previous = {
                let fetch = fetch.clone();
                let cursor = page.previous.clone();
                Callback::from(move |_: MouseEvent| fetch.emit(cursor.clone()))
            };
            let on_next = {
                let fetch = fetch.clone();
                let cursor = page.next.clone();
                Callback::from(move |_: MouseEvent| fetch.emit(cursor.clone()))
            };
            html! {
                <>
                    if items.is_empty() {
                        <div class="text-center py-10">
                            <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="w-12 h-12 mx-auto mb-3" />
                            <h3 class="text-xl">{format!("No {kind} found")}</h3>
                            <p>{"Try adjusting your search term"}</p>
                        </div>
                    } else {
                        <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                            { for items.into_iter().map(|item| html! {
                                <CatalogueCard
                                    key={item.uid.clone()}
                                    uid={item.uid.clone()}
                                    {kind}
                                    name={item.name.clone()}
                                    url={item.url.clone()}
                                />
                            }) }
                        </div>
                    }
                    <div class="flex justify-center gap-3 my-6">
                        <button class="btn btn-outline btn-warning" disabled={!page.has_previous()} onclick={on_previous}>
                            <Icon icon_id={IconId::HeroiconsOutlineChevronLeft} class="w-4 h-4" />
                            {"Previous"}
                        </button>
                        <button class="btn btn-outline btn-warning" disabled={!page.has_next()} onclick={on_next}>
                            {"Next"}
                            <Icon icon_id={IconId::HeroiconsOutlineChevronRight} class="w-4 h-4" />
                        </button>
                    </div>
                </>
            }
        }
    };

    html! {
        <div class="py-6">
            <div class="text-center mb-8">
                <h2 class="text-3xl font-bold tracking-widest">{title}</h2>
                <p class="text-base-content/70">{subtitle}</p>
            </div>
            {body}
        </div>
    }
}

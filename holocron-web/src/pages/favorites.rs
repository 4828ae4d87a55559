use crate::{components::CatalogueCard, models::app_state::CatalogueStore};
use shared::models::EntityKind;
use yew::prelude::*;
use yewdux::prelude::use_store_value;

/// Favorites grouped by kind.
#[function_component(FavoritesPage)]
pub fn favorites_page() -> Html {
    let catalogue = use_store_value::<CatalogueStore>();

    let sections = EntityKind::ALL.into_iter().map(|kind| {
        let entries: Vec<_> = catalogue.favorites_of(kind).cloned().collect();
        html! {
            <section class="mb-8">
                <h3 class="text-xl font-semibold mb-3 capitalize">{kind.as_str()}</h3>
                if entries.is_empty() {
                    <p class="text-base-content/60">{format!("No favorite {kind} yet")}</p>
                } else {
                    <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                        { for entries.into_iter().map(|entry| html! {
                            <CatalogueCard
                                key={entry.uid.clone()}
                                uid={entry.uid.clone()}
                                {kind}
                                name={entry.name.clone().unwrap_or_else(|| format!("{kind} #{}", entry.uid))}
                                url={entry.url.clone()}
                            />
                        }) }
                    </div>
                }
            </section>
        }
    });

    html! {
        <div class="py-6">
            <div class="text-center mb-8">
                <h2 class="text-3xl font-bold tracking-widest">{"MY FAVORITES"}</h2>
                <p class="text-base-content/70">{"Your favorite characters, planets, and vehicles"}</p>
            </div>
            { for sections }
        </div>
    }
}

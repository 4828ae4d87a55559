use crate::context::Context;
use anyhow::{Context as _, Result, bail};
use shared::{
    models::{EntityKind, LikePayload, Load},
    storage::read_favorites,
    store::{CatalogueState, Store},
};

fn store(context: &Context) -> Store<CatalogueState, crate::storage::FileStorage> {
    Store::new(
        CatalogueState::rehydrate(&context.storage),
        context.storage.clone(),
    )
}

/// Prints one listing page; `page` is a cursor URL from a previous listing.
pub async fn list(context: &Context, kind: EntityKind, page: Option<&str>) -> Result<()> {
    let store = store(context);
    let catalogue = &context.clients.catalogue;
    match page {
        Some(url) => catalogue.fetch_page(&store, kind, url).await,
        None => catalogue.fetch_first_page(&store, kind).await,
    }
    .with_context(|| format!("failed to reach the catalogue for {kind}"))?;

    let state = store.state();
    let listing = match state.page(kind) {
        Load::Loaded(listing) => listing,
        Load::Failed(message) => bail!("{message}"),
        Load::Idle | Load::Loading => bail!("no listing received for {kind}"),
    };

    if listing.items.is_empty() {
        println!("No {kind} found");
    }
    for item in &listing.items {
        let mark = if state.is_favorite(&item.uid, kind) { '*' } else { ' ' };
        println!("{mark} {:>4}  {}", item.uid, item.name);
    }
    if let Some(previous) = &listing.previous {
        println!("previous: {previous}");
    }
    if let Some(next) = &listing.next {
        println!("next: {next}");
    }
    Ok(())
}

/// Prints the properties of one item in source order.
pub async fn detail(context: &Context, kind: EntityKind, uid: &str) -> Result<()> {
    let store = store(context);
    context
        .clients
        .catalogue
        .fetch_detail_of(&store, kind, uid)
        .await
        .with_context(|| format!("failed to reach the catalogue for {kind} {uid}"))?;

    let state = store.state();
    match state.detail() {
        Load::Loaded(properties) => {
            let width = properties
                .iter()
                .map(|property| property.label.len())
                .max()
                .unwrap_or_default();
            for property in properties {
                println!("{:<width$}  {}", property.label, property.value);
            }
            if state.is_favorite(uid, kind) {
                println!("(favorite)");
            }
            Ok(())
        }
        Load::Failed(message) => bail!("{message}"),
        Load::Idle | Load::Loading => bail!("no detail received for {kind} {uid}"),
    }
}

/// Toggles the favorite mark of one item. Works offline.
pub fn like(context: &Context, kind: EntityKind, uid: &str, name: Option<String>) {
    let store = store(context);
    let catalogue = &context.clients.catalogue;
    catalogue.toggle_like(
        &store,
        LikePayload {
            uid: Some(uid.to_string()),
            kind: Some(kind),
            name,
            url: Some(catalogue.detail_url(kind, uid)),
        },
    );

    if store.state().is_favorite(uid, kind) {
        println!("Added {kind} {uid} to favorites");
    } else {
        println!("Removed {kind} {uid} from favorites");
    }
}

/// Prints the stored favorites grouped by kind.
pub fn favorites(context: &Context) {
    let favorites = read_favorites(&context.storage);
    if favorites.is_empty() {
        println!("No favorites yet");
        return;
    }
    for kind in EntityKind::ALL {
        let entries: Vec<_> = favorites.iter().filter(|entry| entry.kind == kind).collect();
        if entries.is_empty() {
            continue;
        }
        println!("{kind}:");
        for entry in entries {
            println!("  {:>4}  {}", entry.uid, entry.name.as_deref().unwrap_or("-"));
        }
    }
}

use crate::{
    containers::layout::Layout,
    models::app_state::SessionStore,
    pages::{CataloguePage, ContactsPage, DetailPage, ErrorPage, FavoritesPage, LoginPage},
};
use shared::models::EntityKind;
use strum::EnumIter;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/people")]
    People,
    #[at("/planets")]
    Planets,
    #[at("/vehicles")]
    Vehicles,
    #[at("/favorites")]
    Favorites,
    #[at("/contacts")]
    Contacts,
    #[at("/login")]
    Login,
    #[at("/:kind/:uid")]
    Detail { kind: EntityKind, uid: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Listing route of a catalogue kind.
    pub const fn listing(kind: EntityKind) -> Self {
        match kind {
            EntityKind::People => Self::People,
            EntityKind::Planets => Self::Planets,
            EntityKind::Vehicles => Self::Vehicles,
        }
    }

    /// Catalogue kind listed by this route, if any.
    pub const fn kind(&self) -> Option<EntityKind> {
        match self {
            Self::People => Some(EntityKind::People),
            Self::Planets => Some(EntityKind::Planets),
            Self::Vehicles => Some(EntityKind::Vehicles),
            Self::Detail { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Routes shown in the navbar, in order.
    pub fn navigation() -> [Self; 5] {
        [
            Self::People,
            Self::Vehicles,
            Self::Planets,
            Self::Favorites,
            Self::Contacts,
        ]
    }

    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home | Self::People => "People",
            Self::Planets => "Planets",
            Self::Vehicles => "Vehicles",
            Self::Favorites => "Favorites",
            Self::Contacts => "Contact List",
            Self::Login => "Login",
            Self::Detail { .. } => "Detail",
            Self::NotFound => "Not found",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let is_authenticated = use_selector(|session: &SessionStore| session.is_authenticated);
    let route = props.route.clone();

    let page = match &route {
        MainRoute::Home => return html! { <Redirect<MainRoute> to={MainRoute::People} /> },
        MainRoute::People | MainRoute::Planets | MainRoute::Vehicles => {
            let kind = route.kind().unwrap_or(EntityKind::People);
            html! { <CataloguePage {kind} /> }
        }
        MainRoute::Detail { kind, uid } => html! { <DetailPage kind={*kind} uid={uid.clone()} /> },
        MainRoute::Favorites => html! { <FavoritesPage /> },
        MainRoute::Contacts => {
            if !*is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
            }
            html! { <ContactsPage /> }
        }
        MainRoute::Login => {
            if *is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Contacts} /> };
            }
            html! { <LoginPage /> }
        }
        MainRoute::NotFound => html! { <ErrorPage /> },
    };

    html! {
        <Layout current_route={route}>
            {page}
        </Layout>
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log(std::format!("Switching to main route: {route:?}").as_str());
    html! { <MainRouteView {route} /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_listing_routes_round_trip_their_kind() {
        for kind in EntityKind::ALL {
            assert_eq!(MainRoute::listing(kind).kind(), Some(kind));
        }
    }

    #[test]
    fn test_detail_route_path() {
        let route = MainRoute::Detail {
            kind: EntityKind::Planets,
            uid: "7".to_string(),
        };
        assert_eq!(route.to_path(), "/planets/7");
        assert_eq!(MainRoute::recognize("/planets/7"), Some(route));
    }

    #[test]
    fn test_static_routes_win_over_detail() {
        assert_eq!(MainRoute::recognize("/people"), Some(MainRoute::People));
        assert_eq!(MainRoute::recognize("/favorites"), Some(MainRoute::Favorites));
    }

    #[test]
    fn test_every_route_has_a_title() {
        for route in MainRoute::iter() {
            assert!(!route.title().is_empty());
        }
    }
}

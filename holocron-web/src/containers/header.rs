use crate::{
    api,
    components::nav_item::NavItem,
    models::app_state::{SearchTerm, SessionStore, reducer},
    routes::MainRoute,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::{use_selector, use_store};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current_route: MainRoute,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (search, search_dispatch) = use_store::<SearchTerm>();
    let (session, session_dispatch) = use_store::<SessionStore>();
    let favorites = use_selector(|catalogue: &crate::models::app_state::CatalogueStore| {
        catalogue.favorites().len()
    });

    let on_search = Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            search_dispatch.set(SearchTerm(input.value()));
        }
    });

    let on_logout = {
        let dispatcher = reducer(&session_dispatch);
        Callback::from(move |_: MouseEvent| api::shared().auth.logout(&dispatcher))
    };

    let nav_items = MainRoute::navigation().into_iter().map(|route| {
        html! { <NavItem {route} current_route={props.current_route.clone()} /> }
    });

    let greeting = session
        .user
        .as_ref()
        .map(|user| user.first_name.clone().unwrap_or_else(|| user.email.clone()));

    html! {
        <nav class="navbar justify-between bg-base-300 sticky top-0 z-10">
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-lg gap-2">
                <Icon icon_id={IconId::HeroiconsSolidStar} class="w-5 h-5" />
                {"STAR WARS DATABASE"}
            </Link<MainRoute>>
            <ul class="hidden menu sm:menu-horizontal gap-1">
                { for nav_items }
            </ul>
            <div class="flex items-center gap-2">
                <span class="badge badge-primary gap-1" title="Favorites">
                    <Icon icon_id={IconId::HeroiconsSolidHeart} class="w-4 h-4" />
                    {*favorites}
                </span>
                <label class="input input-bordered input-sm flex items-center gap-2">
                    <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="w-4 h-4" />
                    <input
                        type="text"
                        class="grow"
                        placeholder="Search in galaxy..."
                        value={search.0.clone()}
                        oninput={on_search}
                    />
                </label>
                {
                    if session.is_authenticated {
                        html! {
                            <>
                                if let Some(name) = greeting {
                                    <span class="text-sm text-base-content/80">{name}</span>
                                }
                                <button class="btn btn-ghost btn-sm" onclick={on_logout}>
                                    <Icon icon_id={IconId::HeroiconsOutlineArrowRightOnRectangle} class="w-5 h-5" />
                                    {"Logout"}
                                </button>
                            </>
                        }
                    } else {
                        html! {
                            <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-sm">
                                {"Login"}
                            </Link<MainRoute>>
                        }
                    }
                }
            </div>
        </nav>
    }
}

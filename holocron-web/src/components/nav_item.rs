use crate::routes::MainRoute;
use yew::{Html, Properties, classes, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq, Eq)]
pub struct NavItemProps {
    pub route: MainRoute,
    pub current_route: MainRoute,
}

fn icon_of(route: &MainRoute) -> IconId {
    match route {
        MainRoute::People => IconId::HeroiconsOutlineUserGroup,
        MainRoute::Planets => IconId::HeroiconsOutlineGlobeAlt,
        MainRoute::Vehicles => IconId::HeroiconsOutlineRocketLaunch,
        MainRoute::Favorites => IconId::HeroiconsOutlineHeart,
        MainRoute::Contacts => IconId::HeroiconsOutlineBookOpen,
        _ => IconId::HeroiconsOutlineStar,
    }
}

#[function_component(NavItem)]
pub fn nav_item(props: &NavItemProps) -> Html {
    // A detail view keeps its listing highlighted.
    let is_active = props.current_route == props.route
        || (props.route.kind().is_some() && props.current_route.kind() == props.route.kind());
    let active_route_class = if is_active { "btn-soft" } else { "" };

    html! {
      <li>
          <Link<MainRoute> to={props.route.clone()} classes={classes!("btn", "btn-ghost", "gap-2", active_route_class)}>
              <Icon icon_id={icon_of(&props.route)} class="w-5 h-5" />
              {props.route.title()}
          </Link<MainRoute>>
      </li>
    }
}

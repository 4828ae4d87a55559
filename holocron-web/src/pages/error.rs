use crate::routes::MainRoute;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

/// `ErrorPage` page component
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <div class="p-4 space-y-6 text-center">
            <h1 class="text-2xl font-bold">{ "Not found!" }</h1>
            <p>{ "This part of the galaxy has not been charted yet." }</p>
            <Link<MainRoute> to={MainRoute::People} classes="btn btn-primary">{"Back to the catalogue"}</Link<MainRoute>>
        </div>
    }
}

use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_else(|| "Loading".to_string())]
    pub title: String,
    #[prop_or_default]
    pub fun_fact: Option<String>,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] animate-fadeIn">
            <div class="bg-base-200 p-6 rounded-lg shadow-md flex flex-col items-center">
                <span class="loading loading-spinner loading-lg text-warning"></span>
                <div class="mt-3 text-xl font-medium">{props.title.clone()}</div>
                if let Some(fact) = &props.fun_fact {
                    <p class="mt-2 text-sm text-base-content/70">{fact.clone()}</p>
                }
            </div>
        </div>
    }
}

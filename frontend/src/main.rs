use yew::prelude::*;
use yew_router::prelude::*;

mod content;
mod components {
    pub mod footer;
    pub mod nav_bar;
    pub mod navigation;
    pub mod sections;
}
mod pages {
    pub mod faq;
    pub mod landing;
}
mod utils {
    pub mod listener;
}

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{"Page not found"}</h1>
                <Link<Route> to={Route::Home}>{"Back to the homepage"}</Link<Route>>
            </div>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("Starting {}", content::PRODUCT_NAME);
    yew::Renderer::<App>::new().render();
}

use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::navigation::SectionAnchor;
use crate::content::PRODUCT_NAME;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub is_open: bool,
    pub on_toggle: Callback<()>,
    pub on_navigate: Callback<SectionAnchor>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };
    let section_link = |anchor: SectionAnchor| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(anchor);
        });
        html! {
            <a key={anchor.id()} href={format!("#{}", anchor.id())} {onclick}>{anchor.label()}</a>
        }
    };

    // The whole nav is the marked subtree: the toggle button, the panel, and also the
    // logo and desktop links (those only render at md and up, where the menu is closed).
    // Marking only the panel would let the toggle close the menu on pointerdown and
    // reopen it on click.
    html! {
        <nav class="top-nav" data-mobile-menu="true">
            <div class="nav-inner">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {PRODUCT_NAME}
                </Link<Route>>
                <div class="nav-links">
                    { for SectionAnchor::ALL.iter().map(|anchor| section_link(*anchor)) }
                </div>
                <button
                    class="menu-toggle"
                    aria-label="Toggle navigation menu"
                    aria-controls="mobile-menu"
                    aria-expanded={props.is_open.to_string()}
                    onclick={toggle}
                >
                    { if props.is_open { "✕" } else { "☰" } }
                </button>
            </div>
            <div
                id="mobile-menu"
                class={classes!("mobile-menu", if props.is_open { "open" } else { "" })}
                aria-hidden={(!props.is_open).to_string()}
            >
                { for SectionAnchor::ALL.iter().map(|anchor| section_link(*anchor)) }
            </div>
        </nav>
    }
}


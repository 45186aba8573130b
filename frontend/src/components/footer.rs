use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::navigation::SectionAnchor;
use crate::content::{LinkTarget, FOOTER_LINKS, PRODUCT_NAME};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<SectionAnchor>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <ul class="footer-links">
                    { for FOOTER_LINKS.iter().map(|link| {
                        let anchor = match link.target {
                            LinkTarget::Section(anchor) => {
                                let on_navigate = props.on_navigate.clone();
                                let onclick = Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    on_navigate.emit(anchor);
                                });
                                html! { <a href={format!("#{}", anchor.id())} {onclick}>{link.label}</a> }
                            }
                            LinkTarget::External(url) => html! {
                                <a href={url} target="_blank" rel="noopener noreferrer">{link.label}</a>
                            },
                        };
                        html! { <li key={link.label}>{anchor}</li> }
                    }) }
                </ul>
                <p class="copyright">{format!("© {} {}", year, PRODUCT_NAME)}</p>
            </div>
        </footer>
    }
}

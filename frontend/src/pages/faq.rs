use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::navigation::{scroll_to_anchor, SectionAnchor};
use crate::content::FAQS;
use crate::utils::listener::EventListenerGuard;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    id: AttrValue,
    question: AttrValue,
    answer: AttrValue,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    // Open the entry when the URL hash points at it, on mount and on every hash change
    {
        let is_open = is_open.clone();
        let id = props.id.clone();
        use_effect_with_deps(
            move |_| {
                let check_hash = move || {
                    let Some(window) = web_sys::window() else {
                        return;
                    };
                    if window.location().hash().ok().as_deref() == Some(format!("#{}", id).as_str()) {
                        is_open.set(true);
                        // Give the answer a moment to expand before scrolling to it
                        let id = id.clone();
                        Timeout::new(100, move || scroll_to_anchor(&id)).forget();
                    }
                };
                check_hash();

                let guard = web_sys::window().and_then(|window| {
                    EventListenerGuard::attach(window.as_ref(), "hashchange", move |_| check_hash())
                });
                move || drop(guard)
            },
            (),
        );
    }

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };
    html! {
        <div id={props.id.clone()} class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" aria-expanded={(*is_open).to_string()} onclick={toggle}>
                <span class="question-text">{props.question.as_str()}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer" hidden={!*is_open}>
                <p>{props.answer.as_str()}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section id={SectionAnchor::Faq.id()} class="faq-section">
            <h2>{"Frequently Asked Questions"}</h2>
            { for FAQS.iter().map(|entry| html! {
                <FaqItem
                    key={entry.id}
                    id={entry.id}
                    question={entry.question}
                    answer={entry.answer}
                />
            }) }
        </section>
    }
}

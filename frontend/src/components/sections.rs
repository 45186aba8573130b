use yew::prelude::*;

use crate::components::navigation::SectionAnchor;
use crate::content::{FEATURES, STEPS};

#[function_component(FeatureList)]
pub fn feature_list() -> Html {
    html! {
        <section id={SectionAnchor::Features.id()} class="feature-list">
            <h2>{"Everything you need to record a demo"}</h2>
            <ul class="feature-grid">
                { for FEATURES.iter().map(|feature| html! {
                    <li key={feature.title} class="feature-card">
                        <i class={feature.icon}></i>
                        <h3>{feature.title}</h3>
                        <p>{feature.description}</p>
                    </li>
                }) }
            </ul>
        </section>
    }
}

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    html! {
        <section id={SectionAnchor::HowItWorks.id()} class="how-it-works">
            <h2>{"How it works"}</h2>
            <ol class="steps">
                { for STEPS.iter().enumerate().map(|(i, step)| html! {
                    <li key={step.title} class="step">
                        <span class="step-number">{i + 1}</span>
                        <div>
                            <h3>{step.title}</h3>
                            <p>{step.description}</p>
                        </div>
                    </li>
                }) }
            </ol>
        </section>
    }
}

// The recorder itself is mounted by the app bundle into `.recorder-mount`.
#[function_component(RecorderSection)]
pub fn recorder_section() -> Html {
    html! {
        <section id={SectionAnchor::Recorder.id()} class="recorder-section">
            <h2>{"Start recording"}</h2>
            <p>{"Screen, camera and microphone capture run entirely in your browser."}</p>
            <div class="recorder-mount"></div>
        </section>
    }
}

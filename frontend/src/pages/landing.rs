use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::nav_bar::NavBar;
use crate::components::navigation::{use_navigation, SectionAnchor};
use crate::components::sections::{FeatureList, HowItWorks, RecorderSection};
use crate::content::PRODUCT_NAME;
use crate::pages::faq::Faq;

#[function_component(Landing)]
pub fn landing() -> Html {
    let nav = use_navigation();

    // Scroll to top on initial mount, unless a hash link asked for a section
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    let has_hash = window.location().hash().map(|h| !h.is_empty()).unwrap_or(false);
                    if !has_hash {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                }
                || ()
            },
            (),
        );
    }

    let start_recording = {
        let navigate = nav.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(SectionAnchor::Recorder))
    };
    let see_features = {
        let navigate = nav.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(SectionAnchor::Features))
    };

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <NavBar
                is_open={nav.state.is_open()}
                on_toggle={nav.toggle.clone()}
                on_navigate={nav.navigate.clone()}
            />
            <header class="hero">
                <div class="hero-content">
                    <h1 class="hero-title">{"Record your screen without installing anything"}</h1>
                    <p class="hero-subtitle">
                        {format!("{} captures your screen, camera and voice right in the browser. Trim it, download it, done.", PRODUCT_NAME)}
                    </p>
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={start_recording}>{"Start recording"}</button>
                        <button class="hero-secondary" onclick={see_features}>{"See features"}</button>
                    </div>
                </div>
            </header>
            <RecorderSection />
            <FeatureList />
            <HowItWorks />
            <Faq />
            <Footer on_navigate={nav.navigate.clone()} />
        </div>
    }
}

const LANDING_CSS: &str = r#"
    html {
        scroll-padding-top: 4.5rem;
    }
    .landing-page {
        min-height: 100vh;
        background: #0d0f14;
        color: #e8e8ea;
        font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
    }
    .top-nav {
        position: sticky;
        top: 0;
        z-index: 10;
        background: rgba(13, 15, 20, 0.9);
        backdrop-filter: blur(8px);
        border-bottom: 1px solid rgba(255, 255, 255, 0.08);
    }
    .nav-inner {
        max-width: 1100px;
        margin: 0 auto;
        padding: 0 1.5rem;
        height: 4rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        font-weight: 700;
        font-size: 1.25rem;
        color: #fff;
        text-decoration: none;
    }
    .nav-links {
        display: flex;
        gap: 1.5rem;
    }
    .nav-links a,
    .mobile-menu a {
        color: #b8bcc8;
        text-decoration: none;
    }
    .nav-links a:hover,
    .mobile-menu a:hover {
        color: #fff;
    }
    .menu-toggle {
        display: none;
        background: none;
        border: none;
        color: #fff;
        font-size: 1.5rem;
        cursor: pointer;
    }
    .mobile-menu {
        display: none;
    }
    .hero {
        padding: 6rem 1.5rem 4rem;
        text-align: center;
    }
    .hero-title {
        font-size: 3rem;
        margin-bottom: 1rem;
        background: linear-gradient(45deg, #fff, #ff6b6b);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .hero-subtitle {
        font-size: 1.25rem;
        color: #b8bcc8;
        max-width: 640px;
        margin: 0 auto 2rem;
    }
    .hero-cta-group {
        display: flex;
        gap: 1rem;
        justify-content: center;
    }
    .hero-cta,
    .hero-secondary {
        padding: 0.9rem 1.8rem;
        border-radius: 999px;
        font-size: 1rem;
        cursor: pointer;
    }
    .hero-cta {
        background: #ff4d4d;
        color: #fff;
        border: none;
    }
    .hero-secondary {
        background: transparent;
        color: #fff;
        border: 1px solid rgba(255, 255, 255, 0.3);
    }
    .recorder-section,
    .feature-list,
    .how-it-works,
    .faq-section {
        max-width: 1100px;
        margin: 0 auto;
        padding: 4rem 1.5rem;
    }
    .recorder-mount {
        min-height: 320px;
        border: 1px dashed rgba(255, 255, 255, 0.2);
        border-radius: 1rem;
    }
    .feature-grid {
        list-style: none;
        padding: 0;
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1.5rem;
    }
    .feature-card i {
        color: #ff6b6b;
        font-size: 1.5rem;
    }
    .steps {
        list-style: none;
        padding: 0;
    }
    .step {
        display: flex;
        gap: 1rem;
        margin-bottom: 1.5rem;
    }
    .step-number {
        flex: none;
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 50%;
        background: #ff4d4d;
        display: flex;
        align-items: center;
        justify-content: center;
        font-weight: 700;
    }
    .faq-item {
        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    }
    .faq-question {
        width: 100%;
        display: flex;
        justify-content: space-between;
        padding: 1.2rem 0;
        background: none;
        border: none;
        color: #fff;
        font-size: 1.1rem;
        text-align: left;
        cursor: pointer;
    }
    .faq-answer p {
        color: #b8bcc8;
        margin: 0 0 1.2rem;
    }
    .site-footer {
        border-top: 1px solid rgba(255, 255, 255, 0.08);
        padding: 2rem 1.5rem;
    }
    .footer-content {
        max-width: 1100px;
        margin: 0 auto;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .footer-links {
        list-style: none;
        padding: 0;
        display: flex;
        gap: 1.5rem;
    }
    .footer-links a {
        color: #b8bcc8;
        text-decoration: none;
    }
    .copyright {
        color: #6b7080;
    }
    @media (max-width: 767px) {
        .nav-links {
            display: none;
        }
        .menu-toggle {
            display: block;
        }
        .mobile-menu.open {
            display: flex;
            flex-direction: column;
            gap: 1rem;
            padding: 1rem 1.5rem 1.5rem;
        }
        .hero-title {
            font-size: 2rem;
        }
        .feature-grid {
            grid-template-columns: 1fr;
        }
        .footer-content {
            flex-direction: column;
            gap: 1rem;
        }
        .footer-links {
            flex-wrap: wrap;
            justify-content: center;
        }
    }
"#;

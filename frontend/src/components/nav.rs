use yew::prelude::*;
use log::{debug, warn};
use web_sys::{MouseEvent, Node};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SCROLL_THRESHOLD
}

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#features", "Features"),
    ("#pricing", "Pricing"),
    ("#trial", "Free Trial"),
    ("#faq", "FAQ"),
    ("#contact", "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled_state = use_state(|| false);
    let nav_ref = use_node_ref();

    {
        let is_scrolled_state = is_scrolled_state.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_y = window.as_ref().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    is_scrolled_state.set(is_scrolled(scroll_y));
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                if window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    warn!("could not attach navbar scroll listener");
                }
            }

            // Page may already be scrolled on load (reload, anchor link)
            if let Err(e) = scroll_callback.as_ref().unchecked_ref::<web_sys::js_sys::Function>().call0(&wasm_bindgen::JsValue::NULL) {
                warn!("initial scroll check failed: {:?}", e);
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    // Clicking anywhere outside the navbar closes the mobile menu
    {
        let menu_open = menu_open.clone();
        let nav_ref = nav_ref.clone();
        use_effect_with_deps(move |_| {
            let document = web_sys::window().and_then(|w| w.document());

            let click_callback = Closure::wrap(Box::new(move |e: MouseEvent| {
                let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                let inside = nav_ref
                    .cast::<Node>()
                    .map_or(false, |nav| nav.contains(target.as_ref()));
                if !inside {
                    menu_open.set(false);
                }
            }) as Box<dyn FnMut(MouseEvent)>);

            if let Some(document) = &document {
                if document
                    .add_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    warn!("could not attach outside-click listener");
                }
            }

            move || {
                if let Some(document) = document {
                    let _ = document.remove_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            let next = !*menu_open;
            debug!("mobile menu {}", if next { "opened" } else { "closed" });
            menu_open.set(next);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <nav id="navbar" ref={nav_ref} class={classes!("navbar", (*is_scrolled_state).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo">{config::BRAND_NAME}</a>

                <ul class="nav-links">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <li><a href={*href}>{*label}</a></li>
                    }) }
                </ul>

                <button
                    id="hamburger"
                    class="hamburger"
                    aria-label="Toggle menu"
                    aria-controls="mobile-menu"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <div id="mobile-menu" class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                { for NAV_LINKS.iter().map(|(href, label)| html! {
                    <a href={*href} onclick={close_menu.clone()}>{*label}</a>
                }) }
            </div>
            <style>
                {r#"
                .navbar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 100;
                    background: rgba(11, 17, 32, 0.6);
                    backdrop-filter: blur(8px);
                    transition: box-shadow 0.3s ease, background 0.3s ease;
                }

                .navbar.scrolled {
                    background: rgba(11, 17, 32, 0.95);
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.4);
                }

                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-logo {
                    color: #facc15;
                    font-weight: 700;
                    text-decoration: none;
                }

                .nav-links {
                    display: flex;
                    gap: 1.5rem;
                    list-style: none;
                }

                .nav-links a,
                .mobile-menu a {
                    color: #e5e7eb;
                    text-decoration: none;
                }

                .hamburger {
                    display: none;
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .hamburger span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    margin: 5px 0;
                    background: #e5e7eb;
                }

                .mobile-menu {
                    display: none;
                }

                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }

                    .hamburger {
                        display: block;
                    }

                    .mobile-menu.open {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1rem 1.5rem 1.5rem;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadow_only_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(10.0));
        assert!(is_scrolled(10.5));
        assert!(is_scrolled(900.0));
    }

    #[test]
    fn every_link_is_an_anchor() {
        assert!(NAV_LINKS.iter().all(|(href, _)| href.starts_with('#')));
    }
}

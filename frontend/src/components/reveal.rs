use yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use web_sys::js_sys::Array;
use log::{debug, warn};

use crate::config;

pub fn hidden_transform() -> String {
    format!("translateY({}px)", config::REVEAL_OFFSET_PX)
}

/// Later elements start their fade a little after earlier ones.
pub fn stagger_transition(index: usize) -> String {
    let delay = index as f64 * config::REVEAL_STAGGER_SECS;
    format!(
        "opacity 0.5s ease {:.2}s, transform 0.5s ease {:.2}s",
        delay, delay
    )
}

fn set_styles(el: &HtmlElement, styles: &[(&str, &str)]) {
    let style = el.style();
    for (name, value) in styles {
        if let Err(e) = style.set_property(name, value) {
            warn!("could not set {} on reveal element: {:?}", name, e);
        }
    }
}

/// Hides every element matching the reveal selector and fades each one in
/// the first time it scrolls into view.
#[hook]
pub fn use_scroll_reveal() {
    use_effect_with_deps(move |_| {
        let observer = start_reveal_observer();
        move || {
            if let Some((observer, _callback)) = observer {
                observer.disconnect();
            }
        }
    }, ());
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn start_reveal_observer() -> Option<(IntersectionObserver, ObserverCallback)> {
    let document = web_sys::window()?.document()?;

    let callback: ObserverCallback = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            if let Some(el) = target.dyn_ref::<HtmlElement>() {
                set_styles(el, &[("opacity", "1"), ("transform", "translateY(0)")]);
            }
            observer.unobserve(&target);
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);

    // Leave everything visible rather than hide content we can never reveal
    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(e) => {
            warn!("IntersectionObserver unavailable, skipping reveal animations: {:?}", e);
            return None;
        }
    };

    let elements = match document.query_selector_all(config::REVEAL_SELECTOR) {
        Ok(elements) => elements,
        Err(e) => {
            warn!("reveal selector failed: {:?}", e);
            return None;
        }
    };

    let hidden = hidden_transform();
    let mut watched = 0;
    for index in 0..elements.length() {
        let Some(el) = elements.item(index).and_then(|node| node.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let transition = stagger_transition(index as usize);
        set_styles(&el, &[
            ("opacity", "0"),
            ("transform", hidden.as_str()),
            ("transition", transition.as_str()),
        ]);
        observer.observe(&el);
        watched += 1;
    }
    debug!("watching {} elements for scroll reveal", watched);

    Some((observer, callback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_element_has_no_delay() {
        assert_eq!(
            stagger_transition(0),
            "opacity 0.5s ease 0.00s, transform 0.5s ease 0.00s"
        );
    }

    #[test]
    fn delay_grows_with_position() {
        assert_eq!(
            stagger_transition(3),
            "opacity 0.5s ease 0.18s, transform 0.5s ease 0.18s"
        );
        assert_eq!(
            stagger_transition(10),
            "opacity 0.5s ease 0.60s, transform 0.5s ease 0.60s"
        );
    }

    #[test]
    fn hidden_offset() {
        assert_eq!(hidden_transform(), "translateY(24px)");
    }
}

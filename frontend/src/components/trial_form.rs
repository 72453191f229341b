use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;
use web_sys::{HtmlInputElement, SubmitEvent};
use gloo_timers::callback::Timeout;
use log::{debug, info, warn};

use crate::config;
use crate::signup::{mask_phone, validate_phone, FormNote};

#[function_component(TrialForm)]
pub fn trial_form() -> Html {
    let note = use_state(FormNote::default);
    let phone_ref = use_node_ref();
    // Dropping a Timeout cancels it, so holding the latest one here is enough
    let reset_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    let onsubmit = {
        let note = note.clone();
        let phone_ref = phone_ref.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(input) = phone_ref.cast::<HtmlInputElement>() else {
                warn!("trial form submitted without a phone input");
                return;
            };

            match validate_phone(&input.value()) {
                Err(err) => {
                    debug!("trial phone rejected: {}", err);
                    reset_timer.borrow_mut().take();
                    note.set(FormNote::Invalid);
                    let _ = input.focus();
                }
                Ok(phone) => {
                    info!("trial requested for {}", mask_phone(&phone));
                    note.set(FormNote::Accepted);
                    input.set_value("");

                    let note = note.clone();
                    let timer = Timeout::new(config::FORM_NOTE_RESET_MS, move || {
                        note.set(FormNote::Empty);
                    });
                    *reset_timer.borrow_mut() = Some(timer);
                }
            }
        })
    };

    html! {
        <form id="trial-form" class="trial-form" onsubmit={onsubmit}>
            <label for="trial-phone" class="visually-hidden">{"WhatsApp number"}</label>
            <div class="trial-input-row">
                <span class="trial-prefix">{"+91"}</span>
                <input
                    id="trial-phone"
                    ref={phone_ref}
                    type="tel"
                    inputmode="numeric"
                    autocomplete="tel-national"
                    placeholder="10-digit WhatsApp number"
                />
                <button type="submit" class="btn btn-primary">{"Start Free Trial"}</button>
            </div>
            <p id="form-note" class="form-note" style={note.style()} aria-live="polite">
                {note.text()}
            </p>
        </form>
    }
}

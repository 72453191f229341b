use yew::prelude::*;
use chrono::{Datelike, Local};

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <p class="footer-brand">{config::BRAND_NAME}</p>
                <p class="footer-copy">
                    {"© "}<span id="year">{year.to_string()}</span>{" "}{config::BRAND_NAME}{". All rights reserved."}
                </p>
            </div>
        </footer>
    }
}

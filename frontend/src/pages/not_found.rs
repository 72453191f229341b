use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found" style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem; color: #e5e7eb; background: #0b1120;">
            <h1>{"This stop doesn't exist"}</h1>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                {"Back to the home page"}
            </Link<Route>>
        </div>
    }
}

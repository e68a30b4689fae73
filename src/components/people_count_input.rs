//! People Count Input Component

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::split::SplitEvent;
use crate::store::store_with_split;

/// Numeric control for the number of people
#[component]
pub fn PeopleCountInput() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let count = move || store_with_split(&store, |s| s.person_count());
    let max = ctx.config().max_person_count;

    let on_change = move |ev: web_sys::Event| {
        ctx.dispatch(SplitEvent::CountChanged(event_target_value(&ev)));
        // Rejected or clamped input snaps back to the count in effect
        if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
            input.set_value(&count().to_string());
        }
    };

    view! {
        <div class="mb-3">
            <label for="peopleCount" class="form-label">"Number of people"</label>
            <input
                type="number"
                id="peopleCount"
                class="form-control"
                min="1"
                max=max.to_string()
                prop:value=move || count().to_string()
                on:change=on_change
            />
        </div>
    }
}

//! Summary Bar Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::store_with_split;

/// Bill total and the amount nobody has claimed yet
#[component]
pub fn SummaryBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let bill_total = move || ctx.money(store_with_split(&store, |s| s.bill_total()));
    let unassigned = move || store_with_split(&store, |s| s.unassigned_total());

    view! {
        <div class="summary-bar d-flex justify-content-between mb-3">
            <span class="fw-bold">"Bill total: " {bill_total}</span>
            <Show when=move || !unassigned().is_zero()>
                <span class="text-warning">"Unassigned: " {move || ctx.money(unassigned())}</span>
            </Show>
        </div>
    }
}

//! Person Card Component
//!
//! Name and phone fields plus the running total for one person.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::split::SplitEvent;
use crate::store::store_with_split;

#[component]
pub fn PersonCard(
    /// Person index, starting at 1
    index: u32,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let person = move || store_with_split(&store, |s| s.person(index).cloned());

    let total = move || person().map(|p| ctx.money(p.total)).unwrap_or_default();
    let name = move || person().map(|p| p.name).unwrap_or_default();
    let phone = move || person().map(|p| p.phone).unwrap_or_default();

    view! {
        <div class="person-card mb-3" data-person-id=index.to_string()>
            <div class="d-flex justify-content-between align-items-center">
                <h5><i class="fas fa-user me-2"></i>{format!("Person {}", index)}</h5>
                <span class="person-total fw-bold">{total}</span>
            </div>
            <input
                type="text"
                class="form-control mb-2"
                placeholder="Name (optional)"
                name=format!("person_{}_name", index)
                id=format!("person_{}_name", index)
                prop:value=name
                on:input=move |ev| ctx.dispatch(SplitEvent::NameEdited {
                    person: index,
                    name: event_target_value(&ev),
                })
            />
            <input
                type="tel"
                class="form-control mb-2"
                placeholder="Phone (optional)"
                name=format!("person_{}_phone", index)
                id=format!("person_{}_phone", index)
                prop:value=phone
                on:input=move |ev| ctx.dispatch(SplitEvent::PhoneEdited {
                    person: index,
                    phone: event_target_value(&ev),
                })
            />
        </div>
    }
}

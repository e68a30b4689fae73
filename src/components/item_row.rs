//! Item Row Component
//!
//! One bill item: active toggle, price field and a checkbox per person.
//! Checkboxes carry `data-person-id`, `data-item-index` and
//! `data-item-price` for page scripts that read them.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::split::SplitEvent;
use crate::store::store_with_split;

#[component]
pub fn ItemRow(
    /// Item index as carried by the item
    index: u32,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let item = move || store_with_split(&store, |s| s.item(index).map(|row| row.item.clone()));

    let active = move || item().map_or(false, |i| i.active);
    let name = move || item().map(|i| i.name).unwrap_or_default();
    let price_text = move || item().map(|i| i.price_text).unwrap_or_default();
    let people = move || store_with_split(&store, |s| s.person_count());

    view! {
        <div class="item-container mb-3" data-item-index=index.to_string()>
            <div class="d-flex align-items-center gap-2">
                <input
                    class="form-check-input item-checkbox"
                    type="checkbox"
                    name=format!("item_{}_active", index)
                    prop:checked=active
                    on:change=move |ev| ctx.dispatch(SplitEvent::ItemActiveToggled {
                        item: index,
                        active: event_target_checked(&ev),
                    })
                />
                <span class="item-name flex-grow-1">{name}</span>
                <input
                    type="text"
                    class="form-control item-price"
                    name=format!("item_{}_price", index)
                    prop:value=price_text
                    on:change=move |ev| ctx.dispatch(SplitEvent::PriceEdited {
                        item: index,
                        text: event_target_value(&ev),
                    })
                />
            </div>
            <div
                class="people-checkboxes"
                style:display=move || if active() { "block" } else { "none" }
            >
                <For
                    each=move || 1..=people()
                    key=|person| *person
                    children=move |person| view! { <AssignmentCheckbox item=index person=person /> }
                />
            </div>
        </div>
    }
}

/// Checkbox assigning one person to one item
#[component]
fn AssignmentCheckbox(item: u32, person: u32) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let control = move || {
        store_with_split(&store, |s| s.item(item).and_then(|row| row.control(person)).copied())
    };
    let label = move || store_with_split(&store, |s| s.person(person).map(|p| p.label()).unwrap_or_default());
    let id = format!("person_{}_item_{}", person, item);

    view! {
        <div class="form-check form-check-inline">
            <input
                class="form-check-input person-item-checkbox"
                type="checkbox"
                id=id.clone()
                name=id.clone()
                value="on"
                data-person-id=person.to_string()
                data-item-index=item.to_string()
                data-item-price=move || control().map(|c| c.price.to_string()).unwrap_or_default()
                prop:checked=move || control().map_or(false, |c| c.checked)
                on:change=move |ev| ctx.dispatch(SplitEvent::AssignmentToggled {
                    person,
                    item,
                    assigned: event_target_checked(&ev),
                })
            />
            <label class="form-check-label" for=id>{label}</label>
        </div>
    }
}

//! Bill Split App
//!
//! Main application component: receipt upload, people, items and totals.

use leptos::html::Input;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ItemRow, PeopleCountInput, PersonCard, SubmitPanel, SummaryBar, UploadLabel};
use crate::config::load_page_data;
use crate::context::AppContext;
use crate::split::SplitState;
use crate::store::{store_with_split, BillState};

#[component]
pub fn App() -> impl IntoView {
    let data = load_page_data();
    let config = data.config;
    let split = SplitState::new(data.items, config.default_person_count, config.max_person_count);

    // State
    let store = Store::new(BillState::new(split));
    let file_input = NodeRef::<Input>::new();

    // Provide context to all children
    provide_context(AppContext::new(store, config));

    let person_indices = move || 1..=store_with_split(&store, |s| s.person_count());
    let item_indices = move || {
        store_with_split(&store, |s| s.items().iter().map(|row| row.item.index).collect::<Vec<_>>())
    };
    let has_items = move || store_with_split(&store, |s| !s.items().is_empty());

    view! {
        <div class="container split-app">
            <h1>"Split the Bill"</h1>

            <UploadLabel file_input=file_input />

            <PeopleCountInput />

            <div id="peopleContainer">
                <For
                    each=person_indices
                    key=|index| *index
                    children=move |index| view! { <PersonCard index=index /> }
                />
            </div>

            <div id="itemsList">
                <Show
                    when=has_items
                    fallback=|| view! { <p class="text-muted">"No items yet. Upload a receipt to read them."</p> }
                >
                    <For
                        each=item_indices
                        key=|index| *index
                        children=move |index| view! { <ItemRow index=index /> }
                    />
                </Show>
            </div>

            <SummaryBar />

            <SubmitPanel file_input=file_input />
        </div>
    }
}

//! Submit Panel Component
//!
//! Uploads the receipt with the people list and reports the outcome.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::console;
use crate::context::use_app_context;
use crate::error::SubmitError;
use crate::receipt;
use crate::store::{store_replace_items, store_set_status, store_status, store_with_split, SubmitStatus};

#[component]
pub fn SubmitPanel(file_input: NodeRef<Input>) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let submit = move |_| {
        if store_status(&store) == SubmitStatus::Submitting {
            return;
        }
        let file = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let Some(file) = file else {
            store_set_status(&store, SubmitStatus::Failed(SubmitError::NoFile.to_string()));
            return;
        };

        let people = store_with_split(&store, |s| s.people_payload());
        let endpoint = ctx.config().endpoint;
        store_set_status(&store, SubmitStatus::Submitting);
        console::log("SUBMIT", &format!("Uploading {} for {} people to {}", file.name(), people.len(), endpoint));

        spawn_local(async move {
            match commands::submit_bill(&endpoint, &file, &people).await {
                Ok(body) => {
                    let items = receipt::items_from_response(&body);
                    let count = items.len();
                    console::log("SUBMIT", &format!("Response received, {} items recognized", count));
                    if count > 0 {
                        store_replace_items(&store, items);
                    }
                    store_set_status(&store, SubmitStatus::Done(count));
                }
                Err(e) => {
                    console::error("SUBMIT", &e.to_string());
                    store_set_status(&store, SubmitStatus::Failed(e.to_string()));
                }
            }
        });
    };

    let submitting = move || store_status(&store) == SubmitStatus::Submitting;

    view! {
        <div class="submit-panel">
            <button type="button" class="btn btn-primary w-100" disabled=submitting on:click=submit>
                {move || if submitting() { "Splitting..." } else { "Split the bill" }}
            </button>
            {move || match store_status(&store) {
                SubmitStatus::Idle | SubmitStatus::Submitting => ().into_any(),
                SubmitStatus::Done(0) => view! {
                    <p class="submit-status text-success">"Bill sent."</p>
                }.into_any(),
                SubmitStatus::Done(n) => view! {
                    <p class="submit-status text-success">{format!("Bill sent, {} items read from the receipt.", n)}</p>
                }.into_any(),
                SubmitStatus::Failed(msg) => view! {
                    <p class="submit-status text-danger">{msg}</p>
                }.into_any(),
            }}
        </div>
    }
}

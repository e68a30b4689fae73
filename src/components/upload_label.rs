//! Upload Label Component
//!
//! Receipt file picker. Once a file is chosen the label shows a check
//! icon and the file name.

use leptos::html::Input;
use leptos::prelude::*;

use crate::console;
use crate::context::use_app_context;
use crate::store::{store_file_name, store_set_file_name};

#[component]
pub fn UploadLabel(file_input: NodeRef<Input>) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let on_change = move |_: web_sys::Event| {
        let name = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
            .map(|file| file.name());
        if let Some(name) = &name {
            console::log("UPLOAD", &format!("Selected {}", name));
        }
        store_set_file_name(&store, name);
    };

    let selected = move || store_file_name(&store).is_some();

    view! {
        <div class="file-upload mb-4">
            <input
                type="file"
                id="bill"
                name="bill"
                accept="image/*"
                class="file-upload-input"
                node_ref=file_input
                on:change=on_change
            />
            <label
                for="bill"
                class="file-upload-label"
                style:border-color=move || if selected() { "#00b894" } else { "" }
            >
                {move || match store_file_name(&store) {
                    Some(name) => view! {
                        <i class="fas fa-check-circle fa-3x mb-3" style="color: #00b894;"></i>
                        <h5>{name}</h5>
                        <p class="text-muted">"Ready to split!"</p>
                    }.into_any(),
                    None => view! {
                        <i class="fas fa-cloud-upload-alt fa-3x mb-3"></i>
                        <h5>"Upload your bill"</h5>
                        <p class="text-muted">"Choose a photo of the receipt"</p>
                    }.into_any(),
                }}
            </label>
        </div>
    }
}

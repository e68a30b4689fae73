//! Receipt Upload Command
//!
//! POSTs the receipt image and the people list as multipart form data.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, Response};

use crate::error::SubmitError;
use crate::models::PersonRecord;

/// Multipart field holding the image
pub const BILL_FIELD: &str = "bill";
/// Multipart field holding the JSON-encoded people list
pub const PEOPLE_FIELD: &str = "people";

fn build_form(file: &File, people: &[PersonRecord]) -> Result<FormData, SubmitError> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(BILL_FIELD, file, &file.name())?;
    let people_json = serde_json::to_string(people)?;
    form.append_with_str(PEOPLE_FIELD, &people_json)?;
    Ok(form)
}

/// Upload the receipt and return the parsed JSON reply
pub async fn submit_bill(
    endpoint: &str,
    file: &File,
    people: &[PersonRecord],
) -> Result<serde_json::Value, SubmitError> {
    let form = build_form(file, people)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&form);
    let request = Request::new_with_str_and_init(endpoint, &init)?;

    let window = web_sys::window().ok_or(SubmitError::NoWindow)?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(SubmitError::Status(response.status()));
    }

    let body = JsFuture::from(response.json()?).await?;
    Ok(serde_wasm_bindgen::from_value(body)?)
}

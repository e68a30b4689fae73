//! UI Components
//!
//! Leptos views projecting the bill store.

mod people_count_input;
mod person_card;
mod item_row;
mod upload_label;
mod submit_panel;
mod summary_bar;

pub use people_count_input::PeopleCountInput;
pub use person_card::PersonCard;
pub use item_row::ItemRow;
pub use upload_label::UploadLabel;
pub use submit_panel::SubmitPanel;
pub use summary_bar::SummaryBar;

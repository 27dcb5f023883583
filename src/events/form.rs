use std::collections::BTreeMap;

use dioxus::prelude::*;

use crate::api::Api;
use crate::components::{Modal, StatusMessage};
use crate::dto::{EventRecord, RefOption};
use crate::forms::{ValidationResult, serialize_fields, to_json, validate_required};

use super::types::FilterOptions;

/// Fields the backend rejects when blank.
const REQUIRED_FIELDS: &[&str] = &[
    "title",
    "event_date",
    "event_time",
    "duration",
    "location_id",
    "event_type_id",
    "entrance_type_id",
    "participant_group_type",
    "lead_by",
    "contact_email",
    "contact_mobile",
    "notes",
];

/// "Post an Event" dialog for logged-in creators. Validation failures keep
/// the submission local; a successful post closes the dialog and lets the
/// caller refresh the listing.
#[component]
pub fn EventFormModal(
    open: Signal<bool>,
    options: FilterOptions,
    on_created: EventHandler<()>,
) -> Element {
    let mut fields = use_signal(BTreeMap::<String, String>::new);
    let mut validation = use_signal(ValidationResult::default);
    let mut status_msg = use_signal(|| None::<(String, bool)>);
    let mut submitting = use_signal(|| false);

    let mut submit = move |_: ()| {
        let current = fields.read().clone();
        let result = validate_required(
            REQUIRED_FIELDS
                .iter()
                .map(|name| (*name, current.get(*name).map(String::as_str).unwrap_or(""))),
        );
        let valid = result.is_valid();
        validation.set(result);
        if !valid {
            return;
        }

        submitting.set(true);
        spawn(async move {
            let body = to_json(&serialize_fields(
                current.iter().map(|(name, value)| (name.as_str(), value.clone())),
            ));
            match Api::default()
                .post::<EventRecord, _>("/creator/events", &body)
                .await
            {
                Ok(event) => {
                    tracing::info!("event {} submitted", event.id);
                    let mut open = open;
                    let mut fields = fields;
                    status_msg.set(None);
                    fields.set(BTreeMap::new());
                    open.set(false);
                    on_created.call(());
                }
                Err(err) => {
                    tracing::error!("failed to submit event: {err}");
                    status_msg.set(Some((err.to_string(), true)));
                }
            }
            submitting.set(false);
        });
    };

    let value = move |name: &str| fields.read().get(name).cloned().unwrap_or_default();
    let mut set = move |name: &'static str, value: String| {
        fields.write().insert(name.to_string(), value);
    };

    rsx! {
        Modal { open, title: "Post an Event",
            StatusMessage { status_msg }
            form {
                class: "event-form",
                onsubmit: move |ev: Event<FormData>| {
                    ev.prevent_default();
                    submit(());
                },
                TextField {
                    label: "Title",
                    name: "title",
                    input_type: "text",
                    value: value("title"),
                    error: validation.read().has_error("title"),
                    on_input: move |v| set("title", v),
                }
                TextField {
                    label: "Date",
                    name: "event_date",
                    input_type: "date",
                    value: value("event_date"),
                    error: validation.read().has_error("event_date"),
                    on_input: move |v| set("event_date", v),
                }
                TextField {
                    label: "Start time",
                    name: "event_time",
                    input_type: "time",
                    value: value("event_time"),
                    error: validation.read().has_error("event_time"),
                    on_input: move |v| set("event_time", v),
                }
                TextField {
                    label: "Duration",
                    name: "duration",
                    input_type: "text",
                    value: value("duration"),
                    error: validation.read().has_error("duration"),
                    on_input: move |v| set("duration", v),
                }
                SelectField {
                    label: "Location",
                    name: "location_id",
                    value: value("location_id"),
                    options: options.locations.clone(),
                    error: validation.read().has_error("location_id"),
                    on_change: move |v| set("location_id", v),
                }
                SelectField {
                    label: "Event type",
                    name: "event_type_id",
                    value: value("event_type_id"),
                    options: options.event_types.clone(),
                    error: validation.read().has_error("event_type_id"),
                    on_change: move |v| set("event_type_id", v),
                }
                SelectField {
                    label: "Entrance type",
                    name: "entrance_type_id",
                    value: value("entrance_type_id"),
                    options: options.entrance_types.clone(),
                    error: validation.read().has_error("entrance_type_id"),
                    on_change: move |v| set("entrance_type_id", v),
                }
                TextField {
                    label: "Entrance fee",
                    name: "entrance_fee",
                    input_type: "number",
                    value: value("entrance_fee"),
                    error: false,
                    on_input: move |v| set("entrance_fee", v),
                }
                TextField {
                    label: "Audience",
                    name: "participant_group_type",
                    input_type: "text",
                    value: value("participant_group_type"),
                    error: validation.read().has_error("participant_group_type"),
                    on_input: move |v| set("participant_group_type", v),
                }
                TextField {
                    label: "Lead by",
                    name: "lead_by",
                    input_type: "text",
                    value: value("lead_by"),
                    error: validation.read().has_error("lead_by"),
                    on_input: move |v| set("lead_by", v),
                }
                TextField {
                    label: "Contact email",
                    name: "contact_email",
                    input_type: "email",
                    value: value("contact_email"),
                    error: validation.read().has_error("contact_email"),
                    on_input: move |v| set("contact_email", v),
                }
                TextField {
                    label: "Contact mobile",
                    name: "contact_mobile",
                    input_type: "tel",
                    value: value("contact_mobile"),
                    error: validation.read().has_error("contact_mobile"),
                    on_input: move |v| set("contact_mobile", v),
                }
                {
                    let notes = value("notes");
                    rsx! {
                        label { class: "form-field",
                            span { class: "form-label", "Notes" }
                            textarea {
                                class: if validation.read().has_error("notes") { "form-input error" } else { "form-input" },
                                name: "notes",
                                rows: "4",
                                value: "{notes}",
                                oninput: move |ev| set("notes", ev.value()),
                            }
                        }
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: *submitting.read(),
                    if *submitting.read() { "Posting…" } else { "Post Event" }
                }
            }
        }
    }
}

#[component]
fn TextField(
    label: String,
    name: String,
    input_type: String,
    value: String,
    error: bool,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        label { class: "form-field",
            span { class: "form-label", "{label}" }
            input {
                class: if error { "form-input error" } else { "form-input" },
                r#type: input_type,
                name: name,
                value: "{value}",
                oninput: move |ev| on_input.call(ev.value()),
            }
        }
    }
}

#[component]
fn SelectField(
    label: String,
    name: String,
    value: String,
    options: Vec<RefOption>,
    error: bool,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        label { class: "form-field",
            span { class: "form-label", "{label}" }
            select {
                class: if error { "form-input error" } else { "form-input" },
                name: name,
                value: "{value}",
                onchange: move |ev| on_change.call(ev.value()),
                option { value: "", "Select…" }
                for opt in options {
                    option { value: "{opt.id}", "{opt.name}" }
                }
            }
        }
    }
}

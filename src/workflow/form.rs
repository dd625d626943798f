//! Editable form fields and the merge rule.

use super::carry::CARRIED_FIELDS;
use crate::api::{JobCard, JobCardUpdate};
use std::collections::BTreeMap;

/// Every field the edit form presents, in display order.
pub const FORM_FIELDS: &[&str] = &[
    "customer_name",
    "phone",
    "vehicle_make",
    "vehicle_model",
    "registration_no",
    "service_type",
    "status",
    "bill_amount",
    "notes",
];

/// The field set rendered into the edit form. Every known field is always
/// present; a field neither carried forward nor freshly fetched is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedForm {
    fields: BTreeMap<String, String>,
}

impl MergedForm {
    pub fn empty() -> Self {
        let fields = FORM_FIELDS
            .iter()
            .map(|name| (name.to_string(), String::new()))
            .collect();
        Self { fields }
    }

    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_string(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Build the full-field-set update payload sent on submit.
    ///
    /// Entered text is forwarded as-is; the bill amount is re-parsed from
    /// its string representation leniently (unparseable text travels as
    /// absent and the backend decides what to make of it).
    pub fn to_update(&self) -> JobCardUpdate {
        let notes = self.get("notes");
        JobCardUpdate {
            customer_name: self.get("customer_name").to_string(),
            phone: self.get("phone").to_string(),
            vehicle_make: self.get("vehicle_make").to_string(),
            vehicle_model: self.get("vehicle_model").to_string(),
            registration_no: self.get("registration_no").to_string(),
            service_type: self.get("service_type").to_string(),
            status: self.get("status").to_string(),
            bill_amount: self.get("bill_amount").trim().parse::<f64>().ok(),
            notes: if notes.is_empty() {
                None
            } else {
                Some(notes.to_string())
            },
        }
    }
}

/// Project a backend snapshot onto the full form field set.
pub fn snapshot_fields(card: &JobCard) -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();
    fields.insert("customer_name".to_string(), card.customer_name.clone());
    fields.insert("phone".to_string(), card.phone.clone());
    fields.insert("vehicle_make".to_string(), card.vehicle_make.clone());
    fields.insert("vehicle_model".to_string(), card.vehicle_model.clone());
    fields.insert("registration_no".to_string(), card.registration_no.clone());
    fields.insert("service_type".to_string(), card.service_type.clone());
    fields.insert("status".to_string(), card.status.as_str().to_string());
    fields.insert(
        "bill_amount".to_string(),
        card.bill_amount.map(|v| v.to_string()).unwrap_or_default(),
    );
    fields.insert(
        "notes".to_string(),
        card.notes.clone().unwrap_or_default(),
    );
    fields
}

/// The fixed subset of snapshot fields the review step hands to the edit
/// step through the address.
pub fn carried_subset(card: &JobCard) -> Vec<(&'static str, String)> {
    let snapshot = snapshot_fields(card);
    CARRIED_FIELDS
        .iter()
        .map(|&name| (name, snapshot.get(name).cloned().unwrap_or_default()))
        .collect()
}

/// Merge carried-forward values with a fresh snapshot.
///
/// Per field: a carried value wins (it is what the user already confirmed
/// upstream); otherwise the fresh value fills in; otherwise the field is
/// empty. Keys outside [`FORM_FIELDS`] are ignored.
pub fn merge(carried: &BTreeMap<String, String>, fresh: Option<&JobCard>) -> MergedForm {
    let fresh_fields = fresh.map(snapshot_fields);
    let mut form = MergedForm::empty();
    for &name in FORM_FIELDS {
        if let Some(value) = carried.get(name) {
            form.set(name, value.clone());
        } else if let Some(value) = fresh_fields.as_ref().and_then(|fields| fields.get(name)) {
            form.set(name, value.clone());
        }
    }
    form
}

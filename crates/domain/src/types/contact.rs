//! Contact record types and the neutral delivered-record shape.
//!
//! A [`Contact`] is an owned, plain-data copy of one address-book record.
//! The platform store's native representations never cross a thread
//! boundary; every field is copied into this type during the background
//! phase of a fetch, so the completion phase reads exclusively owned data.
//!
//! Scalar fields follow a sparse-field policy: a field the store does not
//! provide is `None` and is omitted entirely from the delivered record,
//! never an empty string and never a JSON null.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Neutral record shape delivered to fetch callbacks.
///
/// Field name → string value, plus a nested `"numbers"` object mapping
/// phone label → phone value.
pub type ContactRecord = Map<String, Value>;

/// One labeled phone entry from the store's multi-value phone field.
///
/// Entries keep store order. Duplicate labels are preserved here as
/// separate pairs; they only collapse when folded into the nested
/// label → value object of a [`ContactRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    /// Normalized label, e.g. "Mobile", "Home", or a user-defined label.
    pub label: String,
    /// Phone number exactly as stored.
    pub value: String,
}

/// One retrieved address-book record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Store-assigned identifier. Kept for logging and diagnostics; not
    /// part of the delivered record.
    pub record_id: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    /// Labeled phone entries in store order.
    #[serde(default)]
    pub phone_numbers: Vec<PhoneNumber>,
}

impl Contact {
    /// Create an empty contact with the given store record id.
    pub fn new(record_id: i32) -> Self {
        Self { record_id, ..Self::default() }
    }

    /// Build the neutral record delivered to fetch callbacks.
    ///
    /// Applies the sparse-field policy: absent scalar fields produce no
    /// key at all. Phone entries fold into a nested `"numbers"` object;
    /// if the same label appears more than once the later entry
    /// overwrites the earlier one (known lossy edge case; the ordered
    /// pairs on [`Contact::phone_numbers`] remain complete).
    pub fn to_record(&self) -> ContactRecord {
        let mut record = Map::new();

        Self::insert_present(&mut record, "firstName", self.first_name.as_ref());
        Self::insert_present(&mut record, "middleName", self.middle_name.as_ref());
        Self::insert_present(&mut record, "lastName", self.last_name.as_ref());
        Self::insert_present(&mut record, "organization", self.organization.as_ref());
        Self::insert_present(&mut record, "jobTitle", self.job_title.as_ref());
        Self::insert_present(&mut record, "department", self.department.as_ref());

        let mut numbers = Map::new();
        for phone in &self.phone_numbers {
            numbers.insert(phone.label.clone(), Value::String(phone.value.clone()));
        }
        record.insert("numbers".to_string(), Value::Object(numbers));

        record
    }

    fn insert_present(record: &mut ContactRecord, key: &str, value: Option<&String>) {
        if let Some(value) = value {
            record.insert(key.to_string(), Value::String(value.clone()));
        }
    }
}

//! Native record marshalling
//!
//! Converts one AddressBook record handle into an owned [`Contact`]
//! before any cross-thread handoff. Scalar fields follow the sparse
//! policy: a property the store does not hold (or that cannot be read as
//! a string) becomes `None` and is silently omitted from the record.
//! Phone entries keep the store's multi-value count: an entry whose
//! label or value cannot be read contributes an empty string rather than
//! being dropped, so delivered length always matches the store's count.

use core_foundation::base::{CFRelease, CFTypeRef, TCFType};
use core_foundation::string::{CFString, CFStringRef};
use rolodex_domain::{Contact, PhoneNumber};

use super::ab_helpers::{
    kABPersonDepartmentProperty, kABPersonFirstNameProperty, kABPersonJobTitleProperty,
    kABPersonLastNameProperty, kABPersonMiddleNameProperty, kABPersonOrganizationProperty,
    kABPersonPhoneProperty, ABMultiValueCopyLabelAtIndex, ABMultiValueCopyValueAtIndex,
    ABMultiValueGetCount, ABMultiValueRef, ABPropertyID, ABRecordCopyValue, ABRecordGetRecordID,
    ABRecordRef,
};
use crate::platform::label::normalize_label;

/// Marshal one person record into an owned [`Contact`].
///
/// # Safety
///
/// `record` must be a valid ABRecord handle borrowed from a live people
/// array; the handle is only read within this call.
pub(crate) unsafe fn contact_from_record(record: ABRecordRef) -> Contact {
    Contact {
        record_id: ABRecordGetRecordID(record),
        first_name: copy_string_property(record, kABPersonFirstNameProperty),
        middle_name: copy_string_property(record, kABPersonMiddleNameProperty),
        last_name: copy_string_property(record, kABPersonLastNameProperty),
        organization: copy_string_property(record, kABPersonOrganizationProperty),
        job_title: copy_string_property(record, kABPersonJobTitleProperty),
        department: copy_string_property(record, kABPersonDepartmentProperty),
        phone_numbers: copy_phone_numbers(record),
    }
}

/// Copy one scalar string property, or `None` if the store holds no
/// value for it.
unsafe fn copy_string_property(record: ABRecordRef, property: ABPropertyID) -> Option<String> {
    let value = ABRecordCopyValue(record, property);
    string_from_owned_cftype(value)
}

/// Read the record's multi-value phone field, normalizing each label.
unsafe fn copy_phone_numbers(record: ABRecordRef) -> Vec<PhoneNumber> {
    let numbers: ABMultiValueRef = ABRecordCopyValue(record, kABPersonPhoneProperty).cast();
    if numbers.is_null() {
        return Vec::new();
    }

    // The store's reported count is authoritative for output length
    let count = ABMultiValueGetCount(numbers);
    let mut entries = Vec::with_capacity(usize::try_from(count).unwrap_or(0));
    for index in 0..count {
        let label_ref: CFStringRef = ABMultiValueCopyLabelAtIndex(numbers, index);
        let label = string_from_owned_cftype(label_ref.cast())
            .map(|raw| normalize_label(&raw))
            .unwrap_or_default();

        let value_ref = ABMultiValueCopyValueAtIndex(numbers, index);
        let value = string_from_owned_cftype(value_ref).unwrap_or_default();

        entries.push(PhoneNumber { label, value });
    }

    CFRelease(numbers.cast());
    entries
}

/// Take ownership of a copied CFString reference and convert it.
///
/// Accepts null (property absent) and returns `None`; otherwise the
/// reference is consumed under the create rule and released when the
/// wrapper drops.
unsafe fn string_from_owned_cftype(value: CFTypeRef) -> Option<String> {
    if value.is_null() {
        return None;
    }
    let string = CFString::wrap_under_create_rule(value.cast());
    Some(string.to_string())
}

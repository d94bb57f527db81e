//! AddressBook framework FFI
//!
//! Raw bindings for the subset of the AddressBook C API the store client
//! needs: open the shared store, copy the array of all people, and walk
//! each record's properties. Every CoreFoundation object obtained here
//! follows the create/copy rule and is released before the enumeration
//! returns.

use core_foundation::array::{CFArrayGetCount, CFArrayGetValueAtIndex, CFArrayRef};
use core_foundation::base::{CFIndex, CFRelease, CFTypeRef};
use core_foundation::string::CFStringRef;
use rolodex_domain::{Contact, Result as DomainResult};

use super::error_helpers::store_unavailable_error;
use super::marshal;

// AddressBook framework types
#[repr(C)]
struct __ABAddressBook(std::ffi::c_void);
pub(crate) type ABAddressBookRef = *const __ABAddressBook;
pub(crate) type ABRecordRef = *const std::ffi::c_void;
pub(crate) type ABMultiValueRef = *const std::ffi::c_void;
pub(crate) type ABRecordID = i32;
pub(crate) type ABPropertyID = i32;

// Property id statics keep their framework names
#[allow(non_upper_case_globals)]
#[link(name = "AddressBook", kind = "framework")]
extern "C" {
    pub(crate) fn ABAddressBookCreate() -> ABAddressBookRef;
    pub(crate) fn ABAddressBookCopyArrayOfAllPeople(address_book: ABAddressBookRef) -> CFArrayRef;
    pub(crate) fn ABRecordGetRecordID(record: ABRecordRef) -> ABRecordID;
    pub(crate) fn ABRecordCopyValue(record: ABRecordRef, property: ABPropertyID) -> CFTypeRef;
    pub(crate) fn ABMultiValueGetCount(multi_value: ABMultiValueRef) -> CFIndex;
    pub(crate) fn ABMultiValueCopyLabelAtIndex(
        multi_value: ABMultiValueRef,
        index: CFIndex,
    ) -> CFStringRef;
    pub(crate) fn ABMultiValueCopyValueAtIndex(
        multi_value: ABMultiValueRef,
        index: CFIndex,
    ) -> CFTypeRef;

    pub(crate) static kABPersonFirstNameProperty: ABPropertyID;
    pub(crate) static kABPersonMiddleNameProperty: ABPropertyID;
    pub(crate) static kABPersonLastNameProperty: ABPropertyID;
    pub(crate) static kABPersonOrganizationProperty: ABPropertyID;
    pub(crate) static kABPersonJobTitleProperty: ABPropertyID;
    pub(crate) static kABPersonDepartmentProperty: ABPropertyID;
    pub(crate) static kABPersonPhoneProperty: ABPropertyID;
}

/// Open the store, marshal every person record and release the store.
///
/// Runs synchronously; callers move it off the caller's execution
/// context with `spawn_blocking`. The store connection and every copied
/// framework object live entirely within this call.
///
/// # Errors
///
/// `RolodexError::StoreUnavailable` when the store cannot be opened or
/// the people array cannot be copied (typically access denial).
pub(crate) fn copy_all_contacts() -> DomainResult<Vec<Contact>> {
    // SAFETY: This unsafe block interacts with the AddressBook C API:
    // - ABAddressBookCreate / ABAddressBookCopyArrayOfAllPeople return
    //   owned references (create/copy rule) released below
    // - CFArrayGetValueAtIndex returns a borrowed record handle valid
    //   while the people array is alive; marshalling copies every field
    //   out before the array is released
    // - Null pointers are checked before use
    unsafe {
        let address_book = ABAddressBookCreate();
        if address_book.is_null() {
            return Err(store_unavailable_error());
        }

        let people = ABAddressBookCopyArrayOfAllPeople(address_book);
        if people.is_null() {
            CFRelease(address_book.cast());
            return Err(store_unavailable_error());
        }

        let count = CFArrayGetCount(people);
        let mut contacts = Vec::with_capacity(usize::try_from(count).unwrap_or(0));
        for index in 0..count {
            let record = CFArrayGetValueAtIndex(people, index);
            if record.is_null() {
                tracing::trace!(index, "Skipping null record handle");
                continue;
            }
            contacts.push(marshal::contact_from_record(record));
        }

        CFRelease(people.cast());
        CFRelease(address_book.cast());

        tracing::debug!(count = contacts.len(), "Enumerated contact store");
        Ok(contacts)
    }
}

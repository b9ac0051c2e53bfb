//! C ABI for embedding the reindenter in a foreign host.
//!
//! The host passes a NUL-terminated string to [`format_json`] and receives
//! a newly allocated NUL-terminated result that it must hand back to
//! [`free_result`] exactly once. In-process Rust callers should use
//! [`reformat`](crate::reformat) instead, where ownership needs no
//! explicit release.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::scanner::reformat_bytes;

/// Reindents a NUL-terminated JSON-like string.
///
/// Returns NULL when `input` is NULL. Otherwise returns a newly allocated
/// NUL-terminated string owned by the caller; release it with
/// [`free_result`]. Allocation failure also yields NULL, so callers that
/// need to tell the two apart must check their input for NULL first.
///
/// # Safety
///
/// `input` must be NULL or a valid pointer to a NUL-terminated byte
/// string that stays alive and unmodified for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn format_json(input: *const c_char) -> *mut c_char {
    if input.is_null() {
        return ptr::null_mut();
    }
    // SAFETY: caller guarantees a live NUL-terminated string.
    let bytes = unsafe { CStr::from_ptr(input) }.to_bytes();
    let Ok(out) = reformat_bytes(bytes) else {
        return ptr::null_mut();
    };
    // The input had no interior NUL and the scanner only inserts ASCII
    // whitespace, so the output has none either.
    match CString::new(out) {
        Ok(text) => text.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Releases a string returned by [`format_json`].
///
/// Passing NULL is a no-op.
///
/// # Safety
///
/// `ptr` must be NULL or a pointer obtained from [`format_json`] that has
/// not been released before. Releasing any other pointer, or the same
/// pointer twice, is undefined behavior.
#[no_mangle]
pub unsafe extern "C" fn free_result(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    // SAFETY: the pointer came from CString::into_raw in format_json.
    drop(unsafe { CString::from_raw(ptr) });
}

//! C FFI bindings for out-of-process consumers

use core::slice;

use crate::backend;
use crate::error::Error;

/// Success.
pub const X13_OK: i32 = 0;
/// A required pointer was null.
pub const X13_ERR_NULL: i32 = -1;
/// The offset/length pair is out of bounds.
pub const X13_ERR_RANGE: i32 = -2;
/// The digest computation itself failed.
pub const X13_ERR_COMPUTE: i32 = -3;

/// Compute the X13 digest of `input[0..input_len]`.
///
/// - `input`: pointer to input bytes (may be null only when `input_len` is 0)
/// - `output`: pointer to a 32-byte buffer for the result
///
/// Returns `X13_OK` on success, a negative status otherwise. The output
/// buffer is untouched on failure.
#[no_mangle]
pub extern "C" fn x13_digest(input: *const u8, input_len: usize, output: *mut u8) -> i32 {
    x13_digest_range(input, input_len, 0, input_len, output)
}

/// Compute the X13 digest of `input[offset..offset + length]`.
#[no_mangle]
pub extern "C" fn x13_digest_range(
    input: *const u8,
    input_len: usize,
    offset: usize,
    length: usize,
    output: *mut u8,
) -> i32 {
    if output.is_null() || (input.is_null() && input_len != 0) {
        return X13_ERR_NULL;
    }

    let message = if input_len == 0 {
        &[]
    } else {
        unsafe { slice::from_raw_parts(input, input_len) }
    };

    match backend::digest_range(message, offset, length) {
        Ok(digest) => {
            let out = unsafe { slice::from_raw_parts_mut(output, 32) };
            out.copy_from_slice(digest.as_bytes());
            X13_OK
        }
        Err(Error::Range { .. }) => X13_ERR_RANGE,
        Err(_) => X13_ERR_COMPUTE,
    }
}

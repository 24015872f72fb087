//! The exported C ABI: `create/init/update/finalize/get_value/destroy`
//! for each of the twelve algorithms in [`registry::Algorithm`].
//!
//! Handles are tagged opaque pointers rather than bare `void*`: every call
//! checks the discriminant baked into the handle against the algorithm the
//! symbol was compiled for and rejects a mismatch with a zero return, so
//! there is no reliance on RTTI or any cast the caller could get wrong. A
//! panic inside the library (should one ever slip through `registry`) is
//! caught at the boundary with `catch_unwind` so it cannot unwind across
//! the FFI edge — undefined behavior in a C caller — regardless of the
//! final binary's panic strategy.
#![allow(clippy::missing_safety_doc)]

use std::os::raw::c_int;
use std::panic::{catch_unwind, AssertUnwindSafe};

use registry::{Algorithm, Hasher};

/// Opaque handle returned across the C boundary. Never dereferenced by
/// callers; only ever round-tripped back into the `hash_*` functions.
struct Handle {
    tag: Algorithm,
    hasher: Box<dyn Hasher>,
}

unsafe fn handle_ref<'a>(tag: Algorithm, ptr: *mut Handle) -> Option<&'a mut Handle> {
    if ptr.is_null() {
        log::debug!("{}: null handle", tag);
        return None;
    }
    let handle = &mut *ptr;
    if handle.tag != tag {
        log::debug!(
            "{}: handle tagged for {} rejected at {} boundary",
            tag,
            handle.tag,
            tag
        );
        return None;
    }
    Some(handle)
}

fn create(tag: Algorithm) -> *mut Handle {
    let result = catch_unwind(|| {
        Box::into_raw(Box::new(Handle {
            tag,
            hasher: tag.new_hasher(),
        }))
    });
    result.unwrap_or(std::ptr::null_mut())
}

unsafe fn init(tag: Algorithm, ptr: *mut Handle) -> c_int {
    let result = catch_unwind(AssertUnwindSafe(|| {
        handle_ref(tag, ptr).map(|h| h.hasher.init())
    }));
    matches!(result, Ok(Some(()))) as c_int
}

unsafe fn update(tag: Algorithm, ptr: *mut Handle, buf: *const u8, len: usize) -> c_int {
    if buf.is_null() && len != 0 {
        log::debug!("{}: null buffer with nonzero length", tag);
        return 0;
    }
    let slice = if len == 0 {
        &[][..]
    } else {
        std::slice::from_raw_parts(buf, len)
    };
    let result = catch_unwind(AssertUnwindSafe(|| {
        handle_ref(tag, ptr).map(|h| h.hasher.update(slice))
    }));
    matches!(result, Ok(Some(()))) as c_int
}

unsafe fn finalize(tag: Algorithm, ptr: *mut Handle) -> c_int {
    let result = catch_unwind(AssertUnwindSafe(|| {
        handle_ref(tag, ptr).map(|h| h.hasher.finalize())
    }));
    matches!(result, Ok(Some(()))) as c_int
}

unsafe fn get_value(tag: Algorithm, ptr: *mut Handle, out: *mut u8, out_len: usize) -> usize {
    if out.is_null() || out_len == 0 {
        return 0;
    }
    let result = catch_unwind(AssertUnwindSafe(|| {
        let buf = std::slice::from_raw_parts_mut(out, out_len);
        handle_ref(tag, ptr).map(|h| h.hasher.digest(buf))
    }));
    match result {
        Ok(Some(n)) => n,
        _ => 0,
    }
}

unsafe fn destroy(tag: Algorithm, ptr: *mut Handle) -> c_int {
    if ptr.is_null() {
        log::debug!("{}: null handle", tag);
        return 0;
    }
    let result = catch_unwind(AssertUnwindSafe(|| {
        let owned = Box::from_raw(ptr);
        if owned.tag != tag {
            log::debug!(
                "{}: handle tagged for {} rejected at {} boundary",
                tag,
                owned.tag,
                tag
            );
            // Put it back rather than leaking the mismatched handle's memory.
            let _ = Box::into_raw(owned);
            false
        } else {
            drop(owned);
            true
        }
    }));
    matches!(result, Ok(true)) as c_int
}

/// Generates the six `hash_<name>_*` symbols for one algorithm.
macro_rules! abi_for {
    ($name:ident, $alg:expr) => {
        paste::paste! {
            #[no_mangle]
            pub extern "C" fn [<hash_ $name _create>]() -> *mut Handle {
                create($alg)
            }

            #[no_mangle]
            pub unsafe extern "C" fn [<hash_ $name _init>](handle: *mut Handle) -> c_int {
                init($alg, handle)
            }

            #[no_mangle]
            pub unsafe extern "C" fn [<hash_ $name _update>](
                handle: *mut Handle,
                buf: *const u8,
                len: usize,
            ) -> c_int {
                update($alg, handle, buf, len)
            }

            #[no_mangle]
            pub unsafe extern "C" fn [<hash_ $name _finalize>](handle: *mut Handle) -> c_int {
                finalize($alg, handle)
            }

            #[no_mangle]
            pub unsafe extern "C" fn [<hash_ $name _get_value>](
                handle: *mut Handle,
                out: *mut u8,
                out_len: usize,
            ) -> usize {
                get_value($alg, handle, out, out_len)
            }

            #[no_mangle]
            pub unsafe extern "C" fn [<hash_ $name _destroy>](handle: *mut Handle) -> c_int {
                destroy($alg, handle)
            }
        }
    };
}

abi_for!(crc16_ccitt, Algorithm::Crc16CcittFalse);
abi_for!(crc16_xmodem, Algorithm::Crc16Xmodem);
abi_for!(crc16_x25, Algorithm::Crc16X25);
abi_for!(crc32, Algorithm::Crc32);
abi_for!(crc32_bzip2, Algorithm::Crc32Bzip2);
abi_for!(crc32c, Algorithm::Crc32C);
abi_for!(md5, Algorithm::Md5);
abi_for!(sha1, Algorithm::Sha1);
abi_for!(sha2_224, Algorithm::Sha224);
abi_for!(sha2_256, Algorithm::Sha256);
abi_for!(sha2_384, Algorithm::Sha384);
abi_for!(sha2_512, Algorithm::Sha512);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_lifecycle_matches_known_vector() {
        let h = hash_md5_create();
        assert_eq!(unsafe { hash_md5_init(h) }, 1);
        let input = b"abc";
        assert_eq!(
            unsafe { hash_md5_update(h, input.as_ptr(), input.len()) },
            1
        );
        assert_eq!(unsafe { hash_md5_finalize(h) }, 1);
        let mut out = [0u8; 16];
        let n = unsafe { hash_md5_get_value(h, out.as_mut_ptr(), out.len()) };
        assert_eq!(n, 16);
        assert_eq!(out, [
            0x90, 0x01, 0x50, 0x98, 0x3c, 0xd2, 0x4f, 0xb0, 0xd6, 0x96, 0x3f, 0x7d, 0x28, 0xe1,
            0x7f, 0x72,
        ]);
        assert_eq!(unsafe { hash_md5_destroy(h) }, 1);
    }

    #[test]
    fn wrong_algorithm_handle_is_rejected() {
        let h = hash_md5_create();
        // `h` is tagged for MD5; feeding it to the SHA-1 boundary must be
        // rejected with a zero return and must not corrupt or free it.
        assert_eq!(unsafe { hash_sha1_init(h as *mut _) }, 0);
        assert_eq!(unsafe { hash_sha1_destroy(h as *mut _) }, 0);
        // The handle is still valid for its real algorithm.
        assert_eq!(unsafe { hash_md5_init(h) }, 1);
        assert_eq!(unsafe { hash_md5_destroy(h) }, 1);
    }

    #[test]
    fn null_handle_is_rejected_everywhere() {
        let null: *mut Handle = std::ptr::null_mut();
        assert_eq!(unsafe { hash_sha2_256_init(null) }, 0);
        assert_eq!(unsafe { hash_sha2_256_update(null, std::ptr::null(), 0) }, 0);
        assert_eq!(unsafe { hash_sha2_256_finalize(null) }, 0);
        assert_eq!(
            unsafe { hash_sha2_256_get_value(null, std::ptr::null_mut(), 0) },
            0
        );
        assert_eq!(unsafe { hash_sha2_256_destroy(null) }, 0);
    }

    #[test]
    fn get_value_reports_truncated_byte_count() {
        let h = hash_crc32_create();
        unsafe { hash_crc32_init(h) };
        let input = b"123456789";
        unsafe { hash_crc32_update(h, input.as_ptr(), input.len()) };
        unsafe { hash_crc32_finalize(h) };
        let mut out = [0u8; 2];
        let n = unsafe { hash_crc32_get_value(h, out.as_mut_ptr(), out.len()) };
        assert_eq!(n, 2);
        unsafe { hash_crc32_destroy(h) };
    }
}

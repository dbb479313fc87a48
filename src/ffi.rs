//! C ABI exported to the Dart side (`dart:ffi`) and to the platform glue.
//!
//! The activity handle crosses as an untyped pointer. Query results come back
//! as a heap-allocated [`CommandLineArguments`] the caller must release with
//! [`free_command_line_arguments`].

use std::ffi::{CString, c_char, c_void};
use std::ptr;

use log::{debug, warn};

use crate::constants::ERROR_NONE;
use crate::error::LaunchArgsError;
use crate::handle::ActivityHandle;
use crate::plugin::plugin;

/// Result of [`get_command_line_arguments`], laid out for C.
#[repr(C)]
#[derive(Debug)]
pub struct CommandLineArguments {
    /// `count` NUL-terminated strings, or null when `count` is 0.
    pub arguments: *mut *mut c_char,
    pub count: i32,
    /// 0 on success, negative on failure.
    pub error_code: i32,
    /// Null on success.
    pub error_message: *mut c_char,
}

/// Interior NULs would end the string early on the C side anyway.
fn to_c_string(s: &str) -> *mut c_char {
    let visible = s.split('\0').next().unwrap_or_default();
    CString::new(visible).unwrap_or_default().into_raw()
}

impl CommandLineArguments {
    pub fn from_result(result: Result<Vec<String>, LaunchArgsError>) -> Self {
        match result {
            Ok(mut args) => {
                if args.len() > i32::MAX as usize {
                    warn!("[FFI] Truncating {} launch arguments", args.len());
                    args.truncate(i32::MAX as usize);
                }
                let count = args.len() as i32;
                let arguments = if args.is_empty() {
                    ptr::null_mut()
                } else {
                    let raw: Box<[*mut c_char]> =
                        args.iter().map(|a| to_c_string(a)).collect();
                    Box::into_raw(raw).cast::<*mut c_char>()
                };
                Self {
                    arguments,
                    count,
                    error_code: ERROR_NONE,
                    error_message: ptr::null_mut(),
                }
            }
            Err(e) => Self {
                arguments: ptr::null_mut(),
                count: 0,
                error_code: e.code(),
                error_message: to_c_string(&e.to_string()),
            },
        }
    }
}

/// Stores the current activity. Null clears it.
#[unsafe(no_mangle)]
pub extern "C" fn launch_args_set_activity(activity: *mut c_void) {
    let lifecycle = plugin().lifecycle();
    match ActivityHandle::from_raw(activity) {
        Some(handle) => lifecycle.on_attached_to_activity(handle),
        None => lifecycle.on_detached_from_activity(),
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn launch_args_clear_activity() {
    plugin().lifecycle().on_detached_from_activity();
}

#[unsafe(no_mangle)]
pub extern "C" fn launch_args_has_activity() -> bool {
    plugin().registry().is_attached()
}

/// Never returns null; failures are described by `error_code`/`error_message`.
#[unsafe(no_mangle)]
pub extern "C" fn get_command_line_arguments() -> *mut CommandLineArguments {
    let result = plugin().query().fetch();
    Box::into_raw(Box::new(CommandLineArguments::from_result(result)))
}

/// Releases a result from [`get_command_line_arguments`]. Null is ignored.
///
/// # Safety
/// `args` must be null or a pointer returned by [`get_command_line_arguments`]
/// that has not been freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn free_command_line_arguments(args: *mut CommandLineArguments) {
    if args.is_null() {
        return;
    }
    let args = unsafe { Box::from_raw(args) };

    if !args.arguments.is_null() {
        let slice = ptr::slice_from_raw_parts_mut(args.arguments, args.count.max(0) as usize);
        let strings = unsafe { Box::from_raw(slice) };
        for &s in strings.iter() {
            if !s.is_null() {
                drop(unsafe { CString::from_raw(s) });
            }
        }
    }
    if !args.error_message.is_null() {
        drop(unsafe { CString::from_raw(args.error_message) });
    }
    debug!("[FFI] Released {} launch arguments", args.count);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    unsafe fn strings(args: &CommandLineArguments) -> Vec<String> {
        (0..args.count as usize)
            .map(|i| unsafe {
                CStr::from_ptr(*args.arguments.add(i))
                    .to_string_lossy()
                    .into_owned()
            })
            .collect()
    }

    #[test]
    fn success_layout() {
        let result = Ok(vec!["--a=1".to_string(), "--b".to_string()]);
        let args = Box::into_raw(Box::new(CommandLineArguments::from_result(result)));
        unsafe {
            assert_eq!((*args).error_code, 0);
            assert!((*args).error_message.is_null());
            assert_eq!(strings(&*args), vec!["--a=1", "--b"]);
            free_command_line_arguments(args);
        }
    }

    #[test]
    fn empty_success_has_no_array() {
        let args = CommandLineArguments::from_result(Ok(Vec::new()));
        assert_eq!(args.count, 0);
        assert!(args.arguments.is_null());
        assert_eq!(args.error_code, 0);
        unsafe { free_command_line_arguments(Box::into_raw(Box::new(args))) };
    }

    #[test]
    fn errors_carry_code_and_message() {
        let args = Box::into_raw(Box::new(CommandLineArguments::from_result(Err(
            LaunchArgsError::ContextUnavailable,
        ))));
        unsafe {
            assert_eq!((*args).error_code, -1);
            assert_eq!((*args).count, 0);
            assert!((*args).arguments.is_null());
            assert_eq!(
                CStr::from_ptr((*args).error_message).to_str().unwrap(),
                "Activity not available"
            );
            free_command_line_arguments(args);
        }
    }

    #[test]
    fn interior_nul_cuts_the_string() {
        let args = CommandLineArguments::from_result(Ok(vec!["--key=a\0b".to_string()]));
        unsafe {
            assert_eq!(strings(&args), vec!["--key=a"]);
            free_command_line_arguments(Box::into_raw(Box::new(args)));
        }
    }

    #[test]
    fn free_ignores_null() {
        unsafe { free_command_line_arguments(ptr::null_mut()) };
    }
}

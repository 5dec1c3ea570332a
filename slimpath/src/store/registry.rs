//! Windows registry environment store.
//!
//! User variables live under `HKCU\Environment`, machine-wide variables
//! under `HKLM\SYSTEM\CurrentControlSet\Control\Session Manager\Environment`.
//! Values are read without expanding `%VAR%` references so they are written
//! back exactly as they were.

use windows_sys::Win32::Foundation::{
    ERROR_ACCESS_DENIED, ERROR_FILE_NOT_FOUND, ERROR_MORE_DATA, ERROR_NO_MORE_ITEMS,
    ERROR_SUCCESS, ERROR_UNSUPPORTED_TYPE, WIN32_ERROR,
};
use windows_sys::Win32::System::Registry::{
    RegCloseKey, RegEnumValueW, RegGetValueW, RegOpenKeyExW, RegSetValueExW, HKEY,
    HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, KEY_QUERY_VALUE, KEY_SET_VALUE, REG_EXPAND_SZ,
    REG_SZ, RRF_NOEXPAND, RRF_RT_REG_EXPAND_SZ, RRF_RT_REG_SZ,
};
use windows_sys::Win32::UI::WindowsAndMessaging::{
    SendMessageTimeoutW, HWND_BROADCAST, SMTO_ABORTIFHUNG, WM_SETTINGCHANGE,
};

use crate::error::{Error, Result};
use crate::scope::Scope;
use crate::store::EnvironmentStore;

const USER_ENVIRONMENT: &str = "Environment";
const SYSTEM_ENVIRONMENT: &str = r"SYSTEM\CurrentControlSet\Control\Session Manager\Environment";

/// Longest value name the registry allows, plus the terminating NUL.
const MAX_VALUE_NAME: usize = 16_384;

/// How long each top-level window gets to process the change broadcast.
const BROADCAST_TIMEOUT_MS: u32 = 5_000;

/// The user and machine environments in the Windows registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryStore;

impl RegistryStore {
    /// Create a registry store.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// An open registry key, closed on drop.
struct OpenKey(HKEY);

impl Drop for OpenKey {
    fn drop(&mut self) {
        let _ = unsafe { RegCloseKey(self.0) };
    }
}

fn location(scope: Scope) -> (HKEY, &'static str) {
    match scope {
        Scope::User => (HKEY_CURRENT_USER, USER_ENVIRONMENT),
        Scope::System => (HKEY_LOCAL_MACHINE, SYSTEM_ENVIRONMENT),
    }
}

fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

fn map_status(status: WIN32_ERROR, scope: Scope, variable: &str) -> Error {
    if status == ERROR_ACCESS_DENIED {
        return Error::PermissionDenied {
            scope,
            variable: variable.to_string(),
        };
    }
    Error::Store {
        scope,
        message: format!(
            "registry error accessing '{variable}' under {}: status={status}",
            location(scope).1
        ),
    }
}

fn open_key(scope: Scope, access: u32, variable: &str) -> Result<OpenKey> {
    let (root, subkey) = location(scope);
    let wide_subkey = to_wide(subkey);
    let mut key: HKEY = 0;
    let status = unsafe { RegOpenKeyExW(root, wide_subkey.as_ptr(), 0, access, &mut key) };
    if status != ERROR_SUCCESS {
        return Err(map_status(status, scope, variable));
    }
    Ok(OpenKey(key))
}

fn read_value(key: &OpenKey, scope: Scope, name: &str) -> Result<Option<String>> {
    read_string(key, name).map_err(|status| map_status(status, scope, name))
}

/// Read a `REG_SZ` or `REG_EXPAND_SZ` value without expanding it.
///
/// Any other value type fails with `ERROR_UNSUPPORTED_TYPE`.
fn read_string(key: &OpenKey, name: &str) -> std::result::Result<Option<String>, WIN32_ERROR> {
    let wide_name = to_wide(name);
    let flags = RRF_RT_REG_SZ | RRF_RT_REG_EXPAND_SZ | RRF_NOEXPAND;

    let mut size_bytes: u32 = 0;
    let status = unsafe {
        RegGetValueW(
            key.0,
            std::ptr::null(),
            wide_name.as_ptr(),
            flags,
            std::ptr::null_mut(),
            std::ptr::null_mut(),
            &mut size_bytes,
        )
    };
    if status == ERROR_FILE_NOT_FOUND {
        return Ok(None);
    }
    if status != ERROR_SUCCESS {
        return Err(status);
    }

    // The value may grow between the size query and the read.
    loop {
        let mut buffer: Vec<u16> = vec![0u16; (size_bytes as usize / 2).max(1)];
        let status = unsafe {
            RegGetValueW(
                key.0,
                std::ptr::null(),
                wide_name.as_ptr(),
                flags,
                std::ptr::null_mut(),
                buffer.as_mut_ptr().cast(),
                &mut size_bytes,
            )
        };
        if status == ERROR_MORE_DATA {
            continue;
        }
        if status == ERROR_FILE_NOT_FOUND {
            return Ok(None);
        }
        if status != ERROR_SUCCESS {
            return Err(status);
        }

        buffer.truncate(size_bytes as usize / 2);
        while buffer.last() == Some(&0) {
            buffer.pop();
        }
        return Ok(Some(String::from_utf16_lossy(&buffer)));
    }
}

/// Pair each name with its string value.
///
/// Values of other registry types (`REG_DWORD`, `REG_BINARY`, ...) are not
/// environment variables we can rewrite and are skipped.
fn collect_strings<F>(
    names: Vec<String>,
    scope: Scope,
    mut read: F,
) -> Result<Vec<(String, String)>>
where
    F: FnMut(&str) -> std::result::Result<Option<String>, WIN32_ERROR>,
{
    let mut pairs = Vec::new();
    for name in names {
        match read(&name) {
            Ok(Some(value)) => pairs.push((name, value)),
            Ok(None) => {}
            Err(ERROR_UNSUPPORTED_TYPE) => {
                log::debug!("skipping non-string value '{name}' in {scope} scope");
            }
            Err(status) => return Err(map_status(status, scope, &name)),
        }
    }
    Ok(pairs)
}

fn value_names(key: &OpenKey, scope: Scope) -> Result<Vec<String>> {
    let mut names = Vec::new();
    let mut index: u32 = 0;
    loop {
        let mut name_buf = vec![0u16; MAX_VALUE_NAME];
        let mut name_len = MAX_VALUE_NAME as u32;
        let status = unsafe {
            RegEnumValueW(
                key.0,
                index,
                name_buf.as_mut_ptr(),
                &mut name_len,
                std::ptr::null(),
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                std::ptr::null_mut(),
            )
        };
        if status == ERROR_NO_MORE_ITEMS {
            break;
        }
        if status != ERROR_SUCCESS {
            return Err(map_status(status, scope, "*"));
        }
        names.push(String::from_utf16_lossy(&name_buf[..name_len as usize]));
        index += 1;
    }
    Ok(names)
}

impl EnvironmentStore for RegistryStore {
    fn get(&self, name: &str, scope: Scope) -> Result<Option<String>> {
        let key = match open_key(scope, KEY_QUERY_VALUE, name) {
            Ok(key) => key,
            Err(Error::Store { .. }) if scope == Scope::User => return Ok(None),
            Err(e) => return Err(e),
        };
        read_value(&key, scope, name)
    }

    fn set(&self, name: &str, value: &str, scope: Scope) -> Result<()> {
        let key = open_key(scope, KEY_SET_VALUE | KEY_QUERY_VALUE, name)?;
        let wide_name = to_wide(name);
        let data = to_wide(value);
        let kind = if value.contains('%') {
            REG_EXPAND_SZ
        } else {
            REG_SZ
        };
        let size_bytes = u32::try_from(data.len() * 2).map_err(|_| Error::Store {
            scope,
            message: format!("value for '{name}' is too large"),
        })?;

        let status = unsafe {
            RegSetValueExW(
                key.0,
                wide_name.as_ptr(),
                0,
                kind,
                data.as_ptr().cast(),
                size_bytes,
            )
        };
        if status != ERROR_SUCCESS {
            return Err(map_status(status, scope, name));
        }
        Ok(())
    }

    fn list(&self, scope: Scope) -> Result<Vec<(String, String)>> {
        let key = open_key(scope, KEY_QUERY_VALUE, "*")?;
        let names = value_names(&key, scope)?;
        collect_strings(names, scope, |name| read_string(&key, name))
    }

    fn broadcast_change(&self) -> Result<()> {
        let param = to_wide(USER_ENVIRONMENT);
        let mut result: usize = 0;
        let sent = unsafe {
            SendMessageTimeoutW(
                HWND_BROADCAST,
                WM_SETTINGCHANGE,
                0,
                param.as_ptr() as isize,
                SMTO_ABORTIFHUNG,
                BROADCAST_TIMEOUT_MS,
                &mut result,
            )
        };
        if sent == 0 {
            log::warn!("environment change broadcast timed out or failed");
        }
        Ok(())
    }
}

//! Console Logging
//!
//! Tagged log lines (`[SPLIT] ...`) sent to the browser console.
//! Off-wasm (native test runs) they go to stderr instead.

#[cfg(target_arch = "wasm32")]
pub fn log(tag: &str, message: &str) {
    web_sys::console::log_1(&format!("[{}] {}", tag, message).into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn(tag: &str, message: &str) {
    web_sys::console::warn_1(&format!("[{}] {}", tag, message).into());
}

#[cfg(target_arch = "wasm32")]
pub fn error(tag: &str, message: &str) {
    web_sys::console::error_1(&format!("[{}] {}", tag, message).into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(tag: &str, message: &str) {
    eprintln!("[{}] {}", tag, message);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(tag: &str, message: &str) {
    eprintln!("[{}] warning: {}", tag, message);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(tag: &str, message: &str) {
    eprintln!("[{}] error: {}", tag, message);
}

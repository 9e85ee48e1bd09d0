//! Transient feedback: toasts and the clipboard

mod clipboard;
mod toast;

pub use clipboard::{Clipboard, MemoryClipboard, Osc52Clipboard};
pub use toast::{Toast, ToastQueue, Tone};

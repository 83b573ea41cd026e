use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

// Format bytes using binary units, up to two decimal places with trailing
// zeros dropped ("1 KB", "1.5 KB", "1.18 MB"). Zero renders as "0 B".
pub fn fmt_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    let units = ["B", "KB", "MB", "GB", "TB"];
    let mut v = bytes as f64;
    let mut i = 0usize;
    while v >= 1024.0 && i < units.len() - 1 {
        v /= 1024.0;
        i += 1;
    }
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", s, units[i])
}

// Show a transient toast in the #toasts container
pub fn show_toast(message: &str) {
    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            if let Some(container) = doc.get_element_by_id("toasts") {
                if let Ok(toast) = doc.create_element("div") {
                    toast.set_class_name("toast fade-in");
                    toast.set_text_content(Some(message));
                    if container.append_child(&toast).is_err() {
                        return;
                    }

                    // Auto-remove after timeout
                    let container_clone = container.clone();
                    let toast_clone = toast.clone();
                    let cb = Closure::wrap(Box::new(move || {
                        let _ = container_clone.remove_child(&toast_clone);
                    }) as Box<dyn FnMut()>);
                    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                        cb.as_ref().unchecked_ref(),
                        2400,
                    );
                    cb.forget();
                }
            }
        }
    }
}

// Blocking yes/no dialog. A missing window or a browser that refuses the
// dialog counts as "no", so destructive actions stay un-confirmed.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|win| win.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::fmt_bytes;

    #[test]
    fn zero_bytes() {
        assert_eq!(fmt_bytes(0), "0 B");
    }

    #[test]
    fn exact_units_drop_decimals() {
        assert_eq!(fmt_bytes(1024), "1 KB");
        assert_eq!(fmt_bytes(1024 * 1024), "1 MB");
        assert_eq!(fmt_bytes(1024 * 1024 * 1024), "1 GB");
    }

    #[test]
    fn fractions_keep_up_to_two_places() {
        assert_eq!(fmt_bytes(1536), "1.5 KB");
        assert_eq!(fmt_bytes(1234567), "1.18 MB");
    }

    #[test]
    fn below_one_kilobyte_stays_in_bytes() {
        assert_eq!(fmt_bytes(500), "500 B");
        assert_eq!(fmt_bytes(1023), "1023 B");
    }

    #[test]
    fn caps_at_terabytes() {
        assert_eq!(fmt_bytes(1024u64.pow(4)), "1 TB");
        assert_eq!(fmt_bytes(1024u64.pow(5)), "1024 TB");
    }
}

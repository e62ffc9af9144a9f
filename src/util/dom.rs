//! Class toggles on elements looked up by id.
//!
//! Used for loading spinners that live in page markup outside the Leptos
//! tree. Missing elements are ignored.

/// Class that marks a spinner as visible.
pub const ACTIVE_CLASS: &str = "active";

pub fn show_spinner(id: &str) {
    set_class(id, ACTIVE_CLASS, true);
}

pub fn hide_spinner(id: &str) {
    set_class(id, ACTIVE_CLASS, false);
}

fn set_class(id: &str, class: &str, on: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return;
        };
        let classes = el.class_list();
        let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
        if let Err(e) = result {
            leptos::logging::warn!("failed to update class on #{id}: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, class, on);
    }
}

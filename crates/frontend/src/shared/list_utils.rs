/// List helpers: the debounced search box above a table
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value (for display)
    #[prop(into)]
    value: Signal<String>,
    /// Receives the filter once typing pauses
    #[prop(into)]
    on_change: Callback<String>,
    debounce_ms: u32,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let debounce_timeout = StoredValue::new(None::<i32>);

    let cancel_pending = move || {
        let pending = debounce_timeout.try_get_value().flatten();
        if let (Some(timeout_id), Some(window)) = (pending, web_sys::window()) {
            window.clear_timeout_with_handle(timeout_id);
        }
        debounce_timeout.set_value(None);
    };
    on_cleanup(cancel_pending);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        cancel_pending();

        let Some(window) = web_sys::window() else {
            deliver(on_change, new_value);
            return;
        };
        let closure = wasm_bindgen::closure::Closure::once_into_js(move || {
            deliver(on_change, new_value);
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.unchecked_ref::<js_sys::Function>(),
            debounce_ms as i32,
        ) {
            Ok(timeout_id) => debounce_timeout.set_value(Some(timeout_id)),
            Err(e) => log::error!("setTimeout failed: {:?}", e),
        }
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        cancel_pending();
        set_input_value.set(String::new());
        deliver(on_change, String::new());
    };

    view! {
        <div class="search-input" class:search-input--active=is_filter_active>
            <input
                type="search"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" title="Limpar" on:click=clear_filter>
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Hands the filter to the owning list; false once that list is unmounted
fn deliver(on_change: Callback<String>, value: String) -> bool {
    on_change.try_run(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_change_after_unmount_is_dropped() {
        let seen = Arc::new(Mutex::new(Vec::<String>::new()));
        let sink = seen.clone();
        let owner = Owner::new();
        let on_change = owner.with(|| {
            Callback::new(move |value: String| sink.lock().unwrap().push(value))
        });

        assert!(deliver(on_change, "radio".to_string()));
        drop(owner);
        assert!(!deliver(on_change, "notebook".to_string()));
        assert_eq!(*seen.lock().unwrap(), vec!["radio".to_string()]);
    }
}

//! Category Select Component
//!
//! Dropdown over the four item categories.

use leptos::prelude::*;

use inventory_core::Category;

/// Category `<select>` with a disabled placeholder option
#[component]
pub fn CategorySelect(
    /// Selected wire value, empty for none
    value: Signal<String>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            id="category"
            class="form-select"
            required
            prop:value=move || value.get()
            on:change=move |ev| on_change(event_target_value(&ev))
        >
            <option value="" disabled selected=move || value.get().is_empty()>"Select category"</option>
            {Category::ALL.iter().map(|category| {
                let val = category.as_str();
                view! {
                    <option value=val selected=move || value.get() == val>
                        {category.label()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

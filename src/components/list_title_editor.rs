//! List Title Editor Component
//!
//! Inline rename input shown in place of a list header.

use board_core::ListId;
use leptos::html;
use leptos::prelude::*;
use web_sys::KeyboardEvent;

use crate::context::BoardContext;

/// Rename input for one list.
///
/// Enter or ✓ saves (a blank title keeps the old one), Escape cancels.
#[component]
pub fn ListTitleEditor(list_id: ListId) -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");

    let (draft, set_draft) = signal(ctx.rename_prefill(list_id));
    let input_ref = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let commit = move || ctx.rename_list(list_id, &draft.get_untracked());

    view! {
        <div class="input-header">
            <input
                node_ref=input_ref
                type="text"
                placeholder="New List..."
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
                on:keydown=move |ev: KeyboardEvent| match ev.key().as_str() {
                    "Enter" => commit(),
                    "Escape" => ctx.cancel_rename(),
                    _ => {}
                }
            />
            <button class="icon-btn done-btn" title="Save title" on:click=move |_| commit()>
                "✓"
            </button>
        </div>
    }
}

//! Card Row Component
//!
//! A card's text input with edit/done and delete buttons. The input is
//! disabled unless this card holds the board's single edit slot; typing
//! writes straight through to the board.

use board_core::{CardId, ListId};
use leptos::html;
use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragend, make_on_dragstart};
use web_sys::KeyboardEvent;

use crate::context::BoardContext;

#[component]
pub fn CardRow(list_id: ListId, card_id: CardId) -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");
    let dnd = ctx.dnd;

    let editing = Memo::new(move |_| ctx.is_editing_card(card_id));
    let input_ref = NodeRef::<html::Input>::new();

    // Focus once the input is enabled
    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let on_dragstart = make_on_dragstart(dnd, move || ctx.start_drag(list_id, card_id));
    let on_dragend = make_on_dragend(dnd, move || ctx.cancel_drag());

    view! {
        <div
            class="card-cont"
            role="listitem"
            draggable=move || if editing.get() { "false" } else { "true" }
            on:dragstart=on_dragstart
            on:dragend=on_dragend
        >
            <input
                node_ref=input_ref
                type="text"
                class="card"
                placeholder="New Card..."
                prop:value=move || ctx.card_text(list_id, card_id)
                prop:disabled=move || !editing.get()
                on:input=move |ev| ctx.edit_card_text(list_id, card_id, &event_target_value(&ev))
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ctx.end_card_edit();
                    }
                }
            />
            {move || if editing.get() {
                view! {
                    <button
                        class="icon-btn done-btn"
                        title="Done"
                        on:click=move |_| ctx.end_card_edit()
                    >
                        "✓"
                    </button>
                }.into_any()
            } else {
                view! {
                    <button
                        class="icon-btn edit-btn"
                        title="Edit"
                        on:click=move |_| ctx.begin_card_edit(card_id)
                    >
                        "✎"
                    </button>
                }.into_any()
            }}
            <button
                class="icon-btn delete-btn"
                title="Delete card"
                on:click=move |_| ctx.delete_card(list_id, card_id)
            >
                "×"
            </button>
        </div>
    }
}

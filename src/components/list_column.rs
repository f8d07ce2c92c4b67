//! List Column Component
//!
//! One list: header (or rename input), its cards, and the add-card footer.
//! The whole column is a drop target for dragged cards.

use board_core::ListId;
use leptos::prelude::*;
use leptos_dragdrop::{is_over, make_on_dragleave, make_on_dragover, make_on_drop};

use super::{CardRow, ListTitleEditor};
use crate::context::BoardContext;

#[component]
pub fn ListColumn(list_id: ListId) -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");
    let dnd = ctx.dnd;

    let renaming = Memo::new(move |_| ctx.is_renaming(list_id));

    let on_dragover = make_on_dragover(dnd, list_id);
    let on_dragleave = make_on_dragleave(dnd, list_id);
    let on_drop = make_on_drop(dnd, list_id, move |dest| ctx.drop_pending(dest));

    view! {
        <div
            class=move || if is_over(dnd, list_id) { "box drop-over" } else { "box" }
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            {move || if renaming.get() {
                view! { <ListTitleEditor list_id=list_id /> }.into_any()
            } else {
                view! {
                    <div class="header">
                        <span
                            class="list-title"
                            title="Click to rename"
                            on:click=move |_| ctx.begin_rename(list_id)
                        >
                            {move || ctx.list_title(list_id)}
                        </span>
                        <button
                            class="icon-btn delete-list-btn"
                            title="Delete list"
                            on:click=move |_| ctx.delete_list(list_id)
                        >
                            "×"
                        </button>
                    </div>
                }.into_any()
            }}

            <For
                each=move || ctx.card_ids(list_id)
                key=|id| *id
                children=move |card_id| view! { <CardRow list_id=list_id card_id=card_id /> }
            />

            <div class="footer" on:click=move |_| ctx.add_card(list_id)>
                "Add a card..."
            </div>
        </div>
    }
}

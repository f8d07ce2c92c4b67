use leptos::prelude::*;

use crate::context::BoardContext;

/// "Add a list..." tile at the end of the board
#[component]
pub fn AddListButton() -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");

    view! {
        <div class="add_list" on:click=move |_| ctx.add_list()>
            "Add a list..."
        </div>
    }
}

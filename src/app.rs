//! Trello Board Frontend App
//!
//! Header, the row of list columns, and the add-list affordance.

use leptos::prelude::*;

use crate::components::{AddListButton, ListColumn};
use crate::context::BoardContext;

#[component]
pub fn App() -> impl IntoView {
    let ctx = BoardContext::open();
    provide_context(ctx);

    view! {
        <div class="head">
            <h1>"Trello Board"</h1>
        </div>
        <div class="main">
            <div class="left">
                <div class="container">
                    <For
                        each=move || ctx.list_ids()
                        key=|id| *id
                        children=move |id| view! { <ListColumn list_id=id /> }
                    />
                </div>
            </div>
            <div class="right">
                <AddListButton />
            </div>
        </div>
    }
}

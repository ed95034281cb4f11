//! Footer Component

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <footer class="footer glass-card">
            <button class="nav-item" on:click=move |_| ctx.select("about")>
                <span class="nav-icon bg-muted">"ℹ"</span>
                <span>"About us"</span>
            </button>
        </footer>
    }
}

//! Not Found Page

use leptos::prelude::*;
use taskquest_core::nav::Page;

use crate::context::AppContext;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Oops! Page not found"</p>
            <button class="link-btn" on:click=move |_| ctx.go(Page::Home)>"Return to Home"</button>
        </div>
    }
}

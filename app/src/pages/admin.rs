use leptos::prelude::*;
use leptos_router::components::A;

// The admin dashboard (auth, project management) is deployed separately;
// this page only exists as the target of the hero's "Admin Login" button.
#[component]
pub fn Index() -> impl IntoView {
    view! {
        <main class="admin">
            <h1>"Admin"</h1>
            <p>"Project management happens in the admin dashboard."</p>
            <A href="/">"Back to the portfolio"</A>
        </main>
    }
}

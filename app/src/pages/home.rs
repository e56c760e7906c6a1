use leptos::prelude::*;

use crate::components::{EmptyState, Hero, ProjectGrid, Spinner};
use crate::store;

#[component]
pub fn Index() -> impl IntoView {
    let projects = Resource::new_blocking(|| (), move |_| async { get_projects().await });

    view! {
        <main class="home">
            {move || match projects.get() {
                None => leptos::either::EitherOf3::A(view! { <Spinner /> }.into_view()),
                Some(Ok(list)) => leptos::either::EitherOf3::B(view! {
                    <Hero />
                    <ProjectGrid projects=list />
                }.into_view()),
                // A failed fetch is deliberately rendered like an empty
                // store: log it and fall back to the empty state.
                Some(Err(err)) => {
                    log::warn!("Could not load projects: {}", err.to_string());
                    leptos::either::EitherOf3::C(view! {
                        <Hero />
                        <section class="projects">
                            <h2>"Selected Work"</h2>
                            <EmptyState />
                        </section>
                    }.into_view())
                }
            }}
        </main>
    }
}

#[server(GetProjects, "/api", "GetJson", "projects")]
pub async fn get_projects() -> Result<Vec<store::Project>, ServerFnError> {
    let store: store::Store = use_context()
        .ok_or_else(|| ServerFnError::new("document store is missing from the context"))?;
    store
        .list_projects()
        .await
        .map_err(|e| ServerFnError::ServerError(e.to_string()))
}

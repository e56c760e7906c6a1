use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::Spinner;
use crate::store;

#[component]
pub fn Detail() -> impl IntoView {
    let params = leptos_router::hooks::use_params_map();

    let project = Resource::new_blocking(
        move || params.read().get("id").unwrap_or_default(),
        move |id| async {
            if id.is_empty() {
                return Err(ServerFnError::MissingArg(String::from("empty id")));
            }
            get_project_by_id(id).await
        },
    );

    view! {
        <main class="project-detail">
            {move || match project.get() {
                None => leptos::either::EitherOf3::A(view! { <Spinner /> }.into_view()),
                Some(Ok(project)) => leptos::either::EitherOf3::B(view! {
                    <article>
                        <div class="project-detail-cover">
                            <img src=project.cover_image alt=project.title.clone() />
                        </div>
                        <span class="category-tag">{project.category}</span>
                        <h1>{project.title}</h1>
                        <p>{project.description}</p>
                        <A href="/">"Back to all projects"</A>
                    </article>
                }.into_view()),
                Some(Err(err)) => leptos::either::EitherOf3::C(view! {
                    <p>{format!("Could not load this project: {}", err.to_string())}</p>
                }.into_view()),
            }}
        </main>
    }
}

#[server(GetProjectById, "/api", "GetJson", "project")]
pub async fn get_project_by_id(id: String) -> Result<store::Project, ServerFnError> {
    let store: store::Store = use_context()
        .ok_or_else(|| ServerFnError::new("document store is missing from the context"))?;
    store
        .get_project(&id)
        .await
        .map_err(|e| ServerFnError::ServerError(e.to_string()))
}

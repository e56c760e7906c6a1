use leptos::either::Either;
use leptos::prelude::*;

use crate::store::Project;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-viewport">
            <div class="spinner" aria-label="Loading"></div>
        </div>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let navigate = leptos_router::hooks::use_navigate();

    view! {
        <section class="hero">
            <span class="hero-kicker">"PORTFOLIO"</span>
            <h1>
                "Creating digital" <br/>
                <span class="hero-muted">"experiences that matter."</span>
            </h1>
            <p class="hero-subtitle">
                "I'm a passionate developer and designer focused on building accessible, human-centered products."
            </p>
            <div class="hero-actions">
                <button
                    class="admin-login"
                    on:click=move |_| navigate("/admin", Default::default())
                >
                    "Admin Login"
                </button>
                <SocialLinks />
            </div>
        </section>
    }
}

#[component]
pub fn SocialLinks() -> impl IntoView {
    view! {
        <div class="social-links">
            <a href="https://github.com" aria-label="GitHub"><GithubIcon /></a>
            <a href="https://www.linkedin.com" aria-label="LinkedIn"><LinkedinIcon /></a>
            <a href="mailto:hello@example.com" aria-label="Email"><MailIcon /></a>
        </div>
    }
}

#[component]
pub fn ProjectGrid(projects: Vec<Project>) -> impl IntoView {
    view! {
        <section class="projects">
            <h2>"Selected Work"</h2>
            {if projects.is_empty() {
                Either::Left(view! { <EmptyState /> })
            } else {
                Either::Right(view! {
                    <div class="project-grid">
                        {projects
                            .into_iter()
                            .map(|project| view! { <ProjectCard project /> })
                            .collect_view()}
                    </div>
                })
            }}
        </section>
    }
}

#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <p>"No projects found. Login to Admin to add some!"</p>
        </div>
    }
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let navigate = leptos_router::hooks::use_navigate();
    let detail_url = format!("/repo/{}", project.id);

    view! {
        <div
            class="project-card"
            on:click=move |_| navigate(&detail_url, Default::default())
        >
            <div class="project-card-cover">
                <img src=project.cover_image alt=project.title.clone() />
            </div>
            <div class="project-card-body">
                <div class="project-card-header">
                    <span class="category-tag">{project.category}</span>
                    <span class="card-arrow"><ArrowRightIcon /></span>
                </div>
                <h3>{project.title}</h3>
                <p>{project.description}</p>
            </div>
        </div>
    }
}

#[component]
fn GithubIcon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" width="20" height="20" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" />
            <path d="M9 18c-4.51 2-5-2-7-2" />
        </svg>
    }
}

#[component]
fn LinkedinIcon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" width="20" height="20" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" />
            <rect width="4" height="12" x="2" y="9" />
            <circle cx="4" cy="4" r="2" />
        </svg>
    }
}

#[component]
fn MailIcon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" width="20" height="20" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <rect width="20" height="16" x="2" y="4" rx="2" />
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
        </svg>
    }
}

#[component]
fn ArrowRightIcon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" width="16" height="16" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M5 12h14" />
            <path d="m12 5 7 7-7 7" />
        </svg>
    }
}

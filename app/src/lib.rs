pub mod components;
#[cfg(feature = "ssr")]
pub mod context;
pub mod pages;
pub mod store;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, SsrMode, StaticSegment,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Personal portfolio: a passionate developer and designer focused on building accessible, human-centered products."/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body id="#top">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    use pages;

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>

        // sets the document title
        <Title formatter=|text: String| {
            if text.is_empty() {
                format!("Portfolio")
            } else {
                format!("{} - Portfolio", text)
            }
        }/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                // The home and detail pages read from the document store, so
                // let the server block on the fetch before streaming them.
                <Route
                    path=StaticSegment("")
                    view=pages::home::Index
                    ssr=SsrMode::PartiallyBlocked
                />
                <Route
                    path=(StaticSegment("repo"), ParamSegment("id"))
                    view=pages::project::Detail
                    ssr=SsrMode::PartiallyBlocked
                />
                // Static content, render it fully on the server.
                <Route
                    path=StaticSegment("admin")
                    view=pages::admin::Index
                    ssr=SsrMode::Async
                />
            </Routes>
        </Router>
    }
}

mod about;
mod buttons;
mod contact;
mod hero;
mod hooks;
mod projects;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::AboutSection;
use contact::ContactSection;
use hero::TopSection;
use projects::PortfolioSection;

use crate::portfolio::{copyright_year, OWNER};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <main class="flex flex-col gap-8 md:gap-12 lg:gap-32">
            <TopSection />
            <AboutSection />
            <PortfolioSection />
            <ContactSection />
        </main>
        <Footer />
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = copyright_year(env!("BUILD_TIME"));
    view! {
        <footer class="container py-12 text-center text-sm opacity-70">
            {year.map(|y| format!("© {y} "))}
            {OWNER}
        </footer>
    }
}

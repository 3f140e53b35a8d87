use leptos::prelude::*;

use crate::portfolio::LINKEDIN_PROFILE;

/// Grows its content slightly on hover.
#[component]
pub fn Hover(children: Children) -> impl IntoView {
    view! { <div class="transition-transform duration-200 hover:scale-110">{children()}</div> }
}

/// Nudges a menu entry to the right on hover.
#[component]
pub fn MenuHover(children: Children) -> impl IntoView {
    view! { <div class="transition-transform duration-200 hover:translate-x-3">{children()}</div> }
}

#[component]
fn IconLink(href: &'static str, icon: &'static str, alt: &'static str) -> impl IntoView {
    view! {
        <Hover>
            <a href=href target="_blank" rel="noreferrer">
                <img class="rounded-xl border-2" src=icon alt=alt width="50" height="50" />
            </a>
        </Hover>
    }
}

#[component]
pub fn GithubButton(href: &'static str) -> impl IntoView {
    view! { <IconLink href icon="/github.svg" alt="GitHub Logo" /> }
}

#[component]
pub fn LinkedinButton() -> impl IntoView {
    view! { <IconLink href=LINKEDIN_PROFILE icon="/linkedin.svg" alt="LinkedIn Logo" /> }
}

#[component]
pub fn ExternalLinkButton(href: &'static str) -> impl IntoView {
    view! { <IconLink href icon="/external-link.svg" alt="External Link" /> }
}

use leptos::prelude::*;

use super::buttons::{GithubButton, LinkedinButton};
use crate::portfolio::{ABOUT, GITHUB_PROFILE};

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="container">
            <h2 class="mb-8">"About"</h2>
            <div class="rounded-lg border">
                <div class="space-y-8 p-8 text-justify text-lg">
                    {ABOUT.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
                    <div class="flex justify-end gap-2">
                        <GithubButton href=GITHUB_PROFILE />
                        <LinkedinButton />
                    </div>
                </div>
            </div>
        </section>
    }
}

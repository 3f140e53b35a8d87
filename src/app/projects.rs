use leptos::{either::Either, prelude::*};

use super::buttons::{ExternalLinkButton, GithubButton};
use crate::portfolio::{image_leads, LinkKind, Project, PROJECTS};

#[component]
pub fn PortfolioSection() -> impl IntoView {
    view! {
        <section id="portfolio" class="container">
            <h2 class="mb-8">"Portfolio"</h2>
            <div class="flex flex-col gap-24">
                {PROJECTS
                    .into_iter()
                    .enumerate()
                    .map(|(i, project)| view! { <ProjectCard project image_leads=image_leads(i) /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, image_leads: bool) -> impl IntoView {
    let links = project
        .links
        .iter()
        .map(|link| match link.kind {
            LinkKind::Github => Either::Left(view! { <GithubButton href=link.href /> }),
            LinkKind::External => Either::Right(view! { <ExternalLinkButton href=link.href /> }),
        })
        .collect_view();
    let links_class = if image_leads {
        "flex justify-end gap-2"
    } else {
        "flex justify-start gap-2"
    };

    let text = view! {
        <div>
            <h4 class="p-8 text-center">{project.title}</h4>
            <div class="space-y-8 p-8 text-justify text-lg md:p-0 md:px-0 lg:pt-8">
                <p>{project.description}</p>
                <div class=links_class>{links}</div>
            </div>
        </div>
    };
    // the hidden heading keeps the image aligned with the text column on md
    let image = view! {
        <div class=if image_leads { "" } else { "row-start-1 md:col-start-2" }>
            <h4 class="hidden p-8 text-center md:invisible md:block lg:hidden">
                {project.title}
            </h4>
            <img
                src=project.image
                class="select-none rounded-lg md:border lg:mt-8"
                alt="Illustration"
            />
        </div>
    };

    view! {
        <div class="rounded-lg border">
            <div class="grid grid-cols-1 gap-10 md:grid-cols-2 md:px-8 md:pb-8">
                {if image_leads {
                    Either::Left(view! { {image} {text} })
                } else {
                    Either::Right(view! { {text} {image} })
                }}
            </div>
        </div>
    }
}

use leptos::{html, prelude::*};

use super::buttons::MenuHover;
use super::hooks::{use_menu_reveal, use_scroll_progress, use_viewport};
use crate::motion::{
    reveal::DEFAULT_STEP, HeroState, LayoutHeights, ScrollRegion, ViewportTracker,
};
use crate::portfolio::{MENU, OWNER};

#[component]
pub fn TopSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let container_ref = NodeRef::<html::Div>::new();
    let menu_ref = NodeRef::<html::Div>::new();

    let viewport = use_viewport();
    let (region, set_region) = signal(None::<ScrollRegion>);
    let progress = use_scroll_progress(region.into());
    let reveal = use_menu_reveal(MENU.len(), DEFAULT_STEP);
    let hero = RwSignal::new(HeroState::default());

    // runs after the first layout pass and again on every resize
    Effect::new(move |_| {
        let size = viewport.with(ViewportTracker::size);
        let heights = LayoutHeights::new(
            container_ref.get_untracked().map(|el| el.client_height() as f64),
            menu_ref.get_untracked().map(|el| el.client_height() as f64),
        );
        set_region.set(
            section_ref
                .get_untracked()
                .map(|el| ScrollRegion::new(el.offset_top() as f64, el.offset_height() as f64)),
        );
        hero.update(|h| {
            let phase = h.resize(size, heights);
            log::debug!("hero laid out at {}x{}: {phase:?}", size.width, size.height);
        });
    });

    Effect::new(move |_| {
        let p = progress.get();
        hero.update(|h| h.scroll(p));
    });

    // no transform at all while parallax is off
    let menu_style = move || {
        hero.with(|h| {
            h.is_parallax_active()
                .then(|| format!("transform: translateY({}px)", h.offset()))
                .unwrap_or_default()
        })
    };

    let (illustration_shown, set_illustration_shown) = signal(false);
    Effect::new(move |_| set_illustration_shown.set(true));

    let menu = MENU
        .into_iter()
        .enumerate()
        .map(|(i, (label, id))| {
            let class = move || {
                if reveal.with(|r| r.is_revealed(i)) {
                    "transition-all duration-500 opacity-100 translate-x-0"
                } else {
                    "transition-all duration-500 opacity-0 -translate-x-12"
                }
            };
            view! {
                <li class=class>
                    <MenuHover>
                        <a href=format!("#{id}")>
                            <h3>{label}</h3>
                        </a>
                    </MenuHover>
                </li>
            }
        })
        .collect_view();

    view! {
        <section node_ref=section_ref class="relative flex min-h-screen w-full flex-col">
            <div class="flex grow flex-col gap-12 px-12 pb-12 pt-24 md:container md:gap-0 md:p-24">
                <div>
                    <h1>{OWNER}</h1>
                    <img
                        class="pointer-events-none my-10 max-w-48 select-none"
                        src="/images/itx-logo.svg"
                        alt="Logo"
                    />
                </div>
                <div
                    node_ref=container_ref
                    class="relative flex grow select-none flex-col items-center justify-evenly gap-12 md:flex-row md:items-start md:justify-between"
                >
                    <div node_ref=menu_ref class="md:mt-24" style=menu_style>
                        <ul class="space-y-5">{menu}</ul>
                    </div>
                    <div class=move || {
                        if illustration_shown.get() {
                            "mx-auto h-full w-full max-w-md self-end transition-all duration-700 opacity-100 translate-y-0 lg:mx-0 lg:max-w-lg xl:max-w-xl 2xl:max-w-2xl"
                        } else {
                            "mx-auto h-full w-full max-w-md self-end transition-all duration-700 opacity-0 translate-y-24 lg:mx-0 lg:max-w-lg xl:max-w-xl 2xl:max-w-2xl"
                        }
                    }>
                        <img
                            class="pointer-events-none dark:invert"
                            src="/images/top-section.svg"
                            alt="Illustration"
                        />
                    </div>
                </div>
            </div>
            <hr class="w-full" />
        </section>
    }
}

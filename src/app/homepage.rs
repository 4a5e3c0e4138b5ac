use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::GLOBAL_CATALOG;
use crate::navigation::Section;

use super::contact::Contact;
use super::projects::{FeaturedProjects, ProjectList};
use super::{tr, use_navigator};

const TECH_STACK_SIZE: usize = 8;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=tr("nav.home") />
        <Hero />
        <FeaturedProjects />
        <ProjectList />
        <Contact />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let navigator = use_navigator();
    let catalog = &*GLOBAL_CATALOG;
    let years = catalog
        .projects()
        .iter()
        .filter_map(|p| p.year)
        .fold(None::<(u16, u16)>, |range, y| match range {
            None => Some((y, y)),
            Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
        })
        .map(|(lo, hi)| hi - lo + 1)
        .unwrap_or(1);

    view! {
        <section id=Section::Hero.element_id() class="border-b-4 border-black bg-yellow-300">
            <div class="max-w-6xl mx-auto px-6 py-20 lg:py-28 grid lg:grid-cols-3 gap-12">
                <div class="lg:col-span-2">
                    <span class="inline-block mb-6 px-3 py-1 bg-black text-white text-sm font-bold">
                        "● " {tr("hero.status")}
                    </span>
                    <h1 class="text-5xl lg:text-7xl font-black leading-none mb-6">
                        {tr("hero.title")}
                    </h1>
                    <p class="text-lg lg:text-xl max-w-2xl mb-10">{tr("hero.subtitle")}</p>
                    <button
                        class="px-8 py-4 bg-black text-white font-black text-lg shadow-[6px_6px_0_0_#ec4899]"
                        on:click=move |_| navigator.update(|n| n.navigate_to_projects())
                    >
                        {tr("hero.cta")}
                    </button>
                </div>
                <div class="flex flex-col gap-6">
                    <div class="grid grid-cols-2 gap-4">
                        <div class="bg-white border-4 border-black p-4 shadow-[4px_4px_0_0_#000]">
                            <div class="text-4xl font-black">{catalog.len()}</div>
                            <div class="text-sm font-bold">{tr("hero.stats.projects")}</div>
                        </div>
                        <div class="bg-white border-4 border-black p-4 shadow-[4px_4px_0_0_#000]">
                            <div class="text-4xl font-black">{years} "+"</div>
                            <div class="text-sm font-bold">{tr("hero.stats.years")}</div>
                        </div>
                    </div>
                    <div class="bg-white border-4 border-black p-4 shadow-[4px_4px_0_0_#000]">
                        <div class="text-sm font-bold mb-3">{tr("hero.techStack")}</div>
                        <div class="flex flex-wrap gap-2">
                            {catalog
                                .technologies()
                                .into_iter()
                                .take(TECH_STACK_SIZE)
                                .map(|t| {
                                    view! {
                                        <span class="px-2 py-1 border-2 border-black text-xs font-bold">
                                            {t.to_string()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

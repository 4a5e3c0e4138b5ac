use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use crate::content::{GalleryImage, LocalizedText, Project};

use super::projects::{CategoryTag, TechList};
use super::{localized, tr, use_i18n, use_navigator};

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let navigator = use_navigator();
    let selected = Memo::new(move |_| navigator.with(|n| n.selected_project().cloned()));

    move || match selected.get() {
        Some(project) => Either::Left(view! { <ProjectDetail project=project /> }),
        None => Either::Right(view! { <ProjectNotFound /> }),
    }
}

#[component]
fn ProjectDetail(project: Project) -> impl IntoView {
    let i18n = use_i18n();
    let navigator = use_navigator();

    let title = {
        let text = project.title.clone();
        move || i18n.with(|i| i.t(&text))
    };
    let cover = project.cover.clone().map(|url| {
        let alt = project.title.clone();
        view! {
            <img
                class="w-full border-4 border-black shadow-[8px_8px_0_0_#000] mb-12"
                src=url
                alt=localized(alt)
            />
        }
    });

    view! {
        <Title text=title.clone() />
        <article class="max-w-5xl mx-auto px-6 py-12 w-full">
            <button
                class="mb-8 font-black underline underline-offset-4"
                on:click=move |_| navigator.update(|n| n.navigate_to_projects())
            >
                "← " {tr("projects.back")}
            </button>
            <header class="mb-10">
                <CategoryTag category=project.category />
                <h1 class="text-4xl lg:text-6xl font-black mt-4 mb-4">{title}</h1>
                <p class="text-lg lg:text-xl max-w-3xl">
                    {localized(project.description.clone())}
                </p>
            </header>
            {cover}
            <dl class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-12">
                {project.role.clone().map(|text| view! { <MetaItem label="projects.role" text=text /> })}
                {project
                    .duration
                    .clone()
                    .map(|text| view! { <MetaItem label="projects.duration" text=text /> })}
                {project
                    .client
                    .clone()
                    .map(|text| view! { <MetaItem label="projects.client" text=text /> })}
                {project
                    .year
                    .map(|year| {
                        view! {
                            <MetaItem
                                label="projects.year"
                                text=LocalizedText::uniform(year.to_string())
                            />
                        }
                    })}
            </dl>
            <section class="mb-12">
                <h2 class="text-2xl font-black mb-4">{tr("projects.technologies")}</h2>
                <TechList technologies=project.technologies.clone() />
            </section>
            <BulletSection heading="projects.challenge" items=project.challenges.clone() />
            {project
                .solution
                .clone()
                .map(|solution| {
                    view! {
                        <section class="mb-12">
                            <h2 class="text-2xl font-black mb-4">{tr("projects.solution")}</h2>
                            <p class="text-lg max-w-3xl">{localized(solution)}</p>
                        </section>
                    }
                })}
            <BulletSection heading="projects.results" items=project.outcomes.clone() />
            <Gallery images=project.gallery.clone() />
            <Links project=project.clone() />
        </article>
    }
}

#[component]
fn MetaItem(label: &'static str, text: LocalizedText) -> impl IntoView {
    view! {
        <div class="border-4 border-black p-4">
            <dt class="text-xs font-black uppercase mb-1">{tr(label)}</dt>
            <dd class="font-bold">{localized(text)}</dd>
        </div>
    }
}

#[component]
fn BulletSection(heading: &'static str, items: Vec<LocalizedText>) -> impl IntoView {
    if items.is_empty() {
        return None;
    }
    Some(view! {
        <section class="mb-12">
            <h2 class="text-2xl font-black mb-4">{tr(heading)}</h2>
            <ul class="grid gap-3 max-w-3xl">
                {items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <li class="pl-4 border-l-4 border-yellow-300">{localized(item)}</li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    })
}

#[component]
fn Gallery(images: Vec<GalleryImage>) -> impl IntoView {
    if images.is_empty() {
        return None;
    }
    Some(view! {
        <section class="mb-12">
            <h2 class="text-2xl font-black mb-4">{tr("projects.gallery")}</h2>
            <div class="grid md:grid-cols-2 gap-6">
                {images
                    .into_iter()
                    .map(|image| {
                        view! {
                            <figure class="border-4 border-black">
                                <img class="w-full" src=image.url alt=image.alt loading="lazy" />
                                {image
                                    .caption
                                    .map(|caption| {
                                        view! {
                                            <figcaption class="p-3 border-t-4 border-black text-sm">
                                                {localized(caption)}
                                            </figcaption>
                                        }
                                    })}
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    })
}

#[component]
fn Links(project: Project) -> impl IntoView {
    let links = project.links;
    let entries = [
        ("projects.links.demo", links.demo),
        ("projects.links.github", links.github),
        ("projects.links.behance", links.behance),
        ("projects.links.caseStudy", links.case_study),
    ]
    .into_iter()
    .filter_map(|(label, url)| url.map(|url| (label, url)))
    .map(|(label, url)| {
        view! {
            <a
                class="px-6 py-3 border-4 border-black bg-white font-black shadow-[4px_4px_0_0_#000] hover:bg-yellow-300"
                href=url
                target="_blank"
                rel="noopener noreferrer"
            >
                {tr(label)}
                " ↗"
            </a>
        }
    })
    .collect::<Vec<_>>();

    (!entries.is_empty()).then(|| view! { <div class="flex flex-wrap gap-4">{entries}</div> })
}

#[component]
fn ProjectNotFound() -> impl IntoView {
    let navigator = use_navigator();
    view! {
        <Title text=tr("projects.notFound.title") />
        <div class="max-w-2xl mx-auto py-32 px-6 text-center">
            <h1 class="text-4xl font-black mb-4">{tr("projects.notFound.title")}</h1>
            <p class="text-lg mb-8">{tr("projects.notFound.description")}</p>
            <button
                class="px-6 py-3 border-4 border-black bg-yellow-300 font-bold shadow-[4px_4px_0_0_#000]"
                on:click=move |_| navigator.update(|n| n.navigate_to_home())
            >
                {tr("projects.notFound.home")}
            </button>
        </div>
    }
}

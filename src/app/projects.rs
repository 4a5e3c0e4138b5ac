use leptos::{either::Either, ev::KeyboardEvent, prelude::*};

use crate::content::{Category, Project, GLOBAL_CATALOG};
use crate::navigation::{filter_by_category, Carousel, CategoryFilter, InlineSelection, Section};

use super::{localized, tr, use_i18n, use_navigator};

fn category_class(category: Category) -> &'static str {
    match category {
        Category::UxUi => "bg-pink-300",
        Category::Frontend => "bg-cyan-300",
        Category::Fullstack => "bg-lime-300",
    }
}

#[component]
pub(super) fn CategoryTag(category: Category) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-block px-2 py-1 border-2 border-black text-xs font-black {}",
            category_class(category),
        )>{tr(category.label_key())}</span>
    }
}

#[component]
pub(super) fn TechList(technologies: Vec<String>) -> impl IntoView {
    view! {
        <ul class="flex flex-wrap gap-2">
            {technologies
                .into_iter()
                .map(|t| {
                    view! { <li class="px-2 py-1 bg-black text-white text-xs font-bold">{t}</li> }
                })
                .collect_view()}
        </ul>
    }
}

/// Filterable list where each card expands in place; one card open at a time.
#[component]
pub fn ProjectList() -> impl IntoView {
    let i18n = use_i18n();
    let catalog = &*GLOBAL_CATALOG;
    let (filter, set_filter) = signal(CategoryFilter::All);
    let selection = RwSignal::new(InlineSelection::default());

    let visible = Memo::new(move |_| {
        filter.with(|f| {
            filter_by_category(catalog.projects(), f)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let choose = move |option: CategoryFilter| {
        set_filter.set(option);
        selection.update(|s| s.clear());
    };

    let filter_buttons = CategoryFilter::options()
        .into_iter()
        .map(|option| {
            let count = match &option {
                CategoryFilter::All => catalog.len(),
                CategoryFilter::Only(category) => catalog.count_in(*category),
                CategoryFilter::Unknown(_) => 0,
            };
            let label_key = option.label_key().to_string();
            let is_active = {
                let option = option.clone();
                move || filter.with(|f| *f == option)
            };
            view! {
                <button
                    class=move || {
                        if is_active() {
                            "px-4 py-2 border-4 border-black bg-black text-white font-black"
                        } else {
                            "px-4 py-2 border-4 border-black bg-white font-black hover:bg-yellow-300"
                        }
                    }
                    on:click=move |_| choose(option.clone())
                >
                    {move || i18n.with(|i| i.t(&label_key))}
                    " (" {count} ")"
                </button>
            }
        })
        .collect_view();

    let summary = move || {
        filter.with(|f| match f {
            CategoryFilter::All => None,
            f => {
                let f = f.clone();
                Some(view! {
                    <p class="mb-8 font-bold">
                        {tr("projects.filter.showing")} " " {move || visible.with(|v| v.len())} " "
                        {tr("projects.filter.projectsIn")} " "
                        {move || i18n.with(|i| i.t(f.label_key()))} " · "
                        <button
                            class="underline underline-offset-4"
                            on:click=move |_| choose(CategoryFilter::All)
                        >
                            {tr("projects.filter.clear")}
                        </button>
                    </p>
                })
            }
        })
    };

    view! {
        <section id=Section::Projects.element_id() class="border-b-4 border-black">
            <div class="max-w-6xl mx-auto px-6 py-20">
                <h2 class="text-4xl lg:text-6xl font-black mb-4">{tr("projects.title")}</h2>
                <p class="text-lg max-w-2xl mb-10">{tr("projects.subtitle")}</p>
                <div class="flex flex-wrap gap-3 mb-6">{filter_buttons}</div>
                {summary}
                {move || {
                    let projects = visible.get();
                    if projects.is_empty() {
                        Either::Left(
                            view! {
                                <div class="border-4 border-dashed border-black p-12 text-center">
                                    <h3 class="text-2xl font-black mb-2">
                                        {tr("projects.empty.title")}
                                    </h3>
                                    <p class="mb-6">{tr("projects.empty.description")}</p>
                                    <button
                                        class="px-6 py-3 bg-black text-white font-bold"
                                        on:click=move |_| choose(CategoryFilter::All)
                                    >
                                        {tr("projects.empty.viewAll")}
                                    </button>
                                </div>
                            },
                        )
                    } else {
                        Either::Right(
                            view! {
                                <div class="grid gap-6">
                                    {projects
                                        .into_iter()
                                        .map(|project| view! { <ProjectCard project=project selection=selection /> })
                                        .collect_view()}
                                </div>
                            },
                        )
                    }
                }}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, selection: RwSignal<InlineSelection>) -> impl IntoView {
    let navigator = use_navigator();
    let expanded = {
        let id = project.id.clone();
        Memo::new(move |_| selection.with(|s| s.is_expanded(&id)))
    };

    let toggle = {
        let project = project.clone();
        move |_| {
            selection.update(|s| {
                s.select_project(&project);
            })
        }
    };

    let details = {
        let project = project.clone();
        move || {
            if !expanded.get() {
                return None;
            }
            let open = project.clone();
            Some(view! {
                <div class="mt-6 pt-6 border-t-2 border-black grid md:grid-cols-2 gap-6">
                    <dl class="grid gap-3">
                        {project
                            .role
                            .clone()
                            .map(|role| {
                                view! {
                                    <div>
                                        <dt class="text-xs font-black uppercase">{tr("projects.role")}</dt>
                                        <dd>{localized(role)}</dd>
                                    </div>
                                }
                            })}
                        {project
                            .duration
                            .clone()
                            .map(|duration| {
                                view! {
                                    <div>
                                        <dt class="text-xs font-black uppercase">
                                            {tr("projects.duration")}
                                        </dt>
                                        <dd>{localized(duration)}</dd>
                                    </div>
                                }
                            })}
                    </dl>
                    {project
                        .challenges
                        .first()
                        .cloned()
                        .map(|challenge| {
                            view! {
                                <div>
                                    <h4 class="text-xs font-black uppercase mb-1">
                                        {tr("projects.challenge")}
                                    </h4>
                                    <p>{localized(challenge)}</p>
                                </div>
                            }
                        })}
                    <div class="md:col-span-2">
                        <button
                            class="px-6 py-3 bg-yellow-300 border-4 border-black font-black shadow-[4px_4px_0_0_#000]"
                            on:click=move |_| {
                                let open = open.clone();
                                navigator.update(|n| n.navigate_to_project(open))
                            }
                        >
                            {tr("projects.viewProject")}
                        </button>
                    </div>
                </div>
            })
        }
    };

    let close = tr("projects.close");
    let view_details = tr("projects.viewDetails");
    let open_label = tr("aria.openProjectDetails");
    let close_label = tr("aria.closeProjectDetails");
    let panel_id = format!("project-panel-{}", project.id);
    view! {
        <article class="border-4 border-black bg-white p-6 shadow-[6px_6px_0_0_#000]">
            <div class="flex flex-wrap items-center gap-3 mb-3">
                <CategoryTag category=project.category />
                {project.year.map(|y| view! { <span class="text-sm font-bold">{y}</span> })}
            </div>
            <h3 class="text-2xl font-black mb-2">{localized(project.title.clone())}</h3>
            <p class="mb-4">{localized(project.description.clone())}</p>
            <TechList technologies=project.technologies.clone() />
            <button
                class="mt-6 font-black underline underline-offset-4"
                aria-expanded=move || expanded.get().to_string()
                aria-controls=panel_id.clone()
                aria-label=move || if expanded.get() { close_label() } else { open_label() }
                on:click=toggle
            >
                {move || if expanded.get() { close() } else { view_details() }}
            </button>
            <div id=panel_id>{details}</div>
        </article>
    }
}

/// One project at a time, paged with buttons or the arrow keys.
#[component]
pub fn FeaturedProjects() -> impl IntoView {
    let navigator = use_navigator();
    let catalog = &*GLOBAL_CATALOG;
    let carousel = RwSignal::new(Carousel::new(catalog.len()));
    let current = Memo::new(move |_| carousel.with(|c| c.current(catalog.projects()).cloned()));

    let on_keydown = move |ev: KeyboardEvent| match ev.key().as_str() {
        "ArrowLeft" | "ArrowUp" => {
            ev.prevent_default();
            carousel.update(|c| c.prev());
        }
        "ArrowRight" | "ArrowDown" => {
            ev.prevent_default();
            carousel.update(|c| c.next());
        }
        _ => {}
    };

    view! {
        <Show when=move || current.with(Option::is_some)>
            <section class="border-b-4 border-black bg-black text-white">
                <div
                    class="max-w-6xl mx-auto px-6 py-12 flex items-center gap-6 focus:outline-none"
                    tabindex="0"
                    on:keydown=on_keydown
                >
                    <button
                        class="px-4 py-2 border-2 border-white font-black"
                        aria-label=tr("projects.previous")
                        on:click=move |_| carousel.update(|c| c.prev())
                    >
                        "←"
                    </button>
                    <div class="flex-1">
                        {move || {
                            current
                                .get()
                                .map(|project| {
                                    let open = project.clone();
                                    view! {
                                        <div class="flex items-center gap-3 mb-2">
                                            <CategoryTag category=project.category />
                                            <span class="text-sm font-bold">
                                                {move || carousel.with(|c| c.index() + 1)} " / "
                                                {move || carousel.with(|c| c.len())}
                                            </span>
                                        </div>
                                        <h3 class="text-3xl font-black mb-2">
                                            {localized(project.title.clone())}
                                        </h3>
                                        <p class="mb-4 max-w-3xl">
                                            {localized(project.description.clone())}
                                        </p>
                                        <button
                                            class="font-black underline underline-offset-4"
                                            on:click=move |_| {
                                                let open = open.clone();
                                                navigator.update(|n| n.navigate_to_project(open))
                                            }
                                        >
                                            {tr("projects.viewProject")}
                                        </button>
                                    }
                                })
                        }}
                    </div>
                    <button
                        class="px-4 py-2 border-2 border-white font-black"
                        aria-label=tr("projects.next")
                        on:click=move |_| carousel.update(|c| c.next())
                    >
                        "→"
                    </button>
                </div>
            </section>
        </Show>
    }
}

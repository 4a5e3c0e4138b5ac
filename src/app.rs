mod contact;
mod header;
mod homepage;
mod project_detail;
mod projects;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::LocalizedText;
use crate::i18n::I18n;
use crate::navigation::{Navigator, Route, ScrollTarget};

use header::Header;
use homepage::HomePage;
use project_detail::ProjectDetailPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-white text-black">
                <App />
            </body>
        </html>
    }
}

pub(crate) fn use_i18n() -> RwSignal<I18n> {
    expect_context::<RwSignal<I18n>>()
}

pub(crate) fn use_navigator() -> RwSignal<Navigator> {
    expect_context::<RwSignal<Navigator>>()
}

/// Reactive text for a translation key.
pub(crate) fn tr(key: &'static str) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    let i18n = use_i18n();
    move || i18n.with(|i| i.t(key))
}

/// Reactive text for a piece of bilingual content.
pub(crate) fn localized(text: LocalizedText) -> impl Fn() -> String + Clone + Send + Sync + 'static {
    let i18n = use_i18n();
    move || i18n.with(|i| i.t(&text))
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let i18n = RwSignal::new(I18n::default());
    let navigator = RwSignal::new(Navigator::new());
    provide_context(i18n);
    provide_context(navigator);

    view! {
        <Html attr:lang=move || i18n.with(|i| i.language().code()) />
        <Title formatter=|title| format!("Portfolio - {title}") />

        <Router>
            <Header />
            <main class="flex flex-col flex-grow w-full">
                <Routes fallback=|| view! { <PageNotFound /> }>
                    <Route path=path!("/") view=Portfolio />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

/// Swaps between the home view and the project detail view.
#[component]
fn Portfolio() -> impl IntoView {
    let navigator = use_navigator();
    let route = Memo::new(move |_| navigator.with(|n| n.route()));

    // The pending target is taken after the next frame, when the view for the new
    // route is already in the document.
    Effect::new(move |_| {
        if navigator.with(|n| n.pending_scroll().is_none()) {
            return;
        }
        request_animation_frame(move || {
            if let Some(target) = navigator.try_update(|n| n.take_pending_scroll()).flatten() {
                scroll_to(target);
            }
        });
    });

    move || match route.get() {
        Route::Home => Either::Left(view! { <HomePage /> }),
        Route::ProjectDetail => Either::Right(view! { <ProjectDetailPage /> }),
    }
}

fn scroll_to(target: ScrollTarget) {
    match target {
        ScrollTarget::Top => window().scroll_to_with_x_and_y(0.0, 0.0),
        ScrollTarget::Section(section) => {
            match document().get_element_by_id(section.element_id()) {
                Some(el) => el.scroll_into_view(),
                None => log::warn!("no element to scroll to: #{}", section.element_id()),
            }
        }
    }
}

#[component]
fn PageNotFound() -> impl IntoView {
    view! {
        <Title text=tr("projects.notFound.title") />
        <div class="max-w-2xl mx-auto py-32 px-6 text-center">
            <h1 class="text-4xl font-black mb-4">"404"</h1>
            <p class="text-lg mb-8">{tr("projects.notFound.description")}</p>
            <A
                href="/"
                attr:class="inline-block px-6 py-3 border-4 border-black bg-yellow-300 font-bold shadow-[4px_4px_0_0_#000]"
            >
                {tr("projects.notFound.home")}
            </A>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let updated = chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|d| d.format("%Y-%m-%d").to_string())
        .ok();
    view! {
        <footer class="border-t-4 border-black mt-16">
            <div class="max-w-6xl mx-auto px-6 py-8 flex flex-col sm:flex-row justify-between gap-2 text-sm">
                <p>"© " {env!("BUILD_YEAR")} " Portfolio. " {tr("footer.rights")}</p>
                {updated.map(|d| view! { <p class="text-gray-600">{d}</p> })}
            </div>
        </footer>
    }
}

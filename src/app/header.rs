use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::i18n::Language;
use crate::navigation::{Route, Section};

use super::{tr, use_i18n, use_navigator};

#[component]
pub fn Header() -> impl IntoView {
    let i18n = use_i18n();
    let navigator = use_navigator();
    let (menu_open, set_menu_open) = signal(false);

    #[cfg(feature = "hydrate")]
    let (stored_language, set_stored_language, _) =
        use_local_storage::<Language, JsonSerdeWasmCodec>("language");

    // restore the last chosen language once, on the client
    #[cfg(feature = "hydrate")]
    Effect::watch(
        || (),
        move |_, _, _| {
            let language = stored_language.get_untracked();
            i18n.update(|i| i.set_language(language));
        },
        true,
    );

    let toggle_language = move |_| {
        let language = i18n.try_update(|i| i.toggle()).unwrap_or_default();
        #[cfg(feature = "hydrate")]
        set_stored_language.set(language);
        #[cfg(not(feature = "hydrate"))]
        let _ = language;
    };

    let go_to = move |section: Section| {
        navigator.update(|n| n.navigate_to_section(section));
        set_menu_open.set(false);
    };

    let nav_links = move |class: &'static str| {
        Section::all()
            .into_iter()
            .map(|section| {
                view! {
                    <li>
                        <button class=class on:click=move |_| go_to(section)>
                            {tr(section.label_key())}
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    let on_detail = move || navigator.with(|n| n.route() == Route::ProjectDetail);

    view! {
        <header class="sticky top-0 z-50 bg-white border-b-4 border-black">
            <div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between gap-4">
                <button
                    class="text-2xl font-black tracking-tight"
                    on:click=move |_| navigator.update(|n| n.navigate_to_home())
                >
                    "PORTFOLIO"
                    <span class=move || {
                        if on_detail() { "text-pink-500" } else { "text-yellow-400" }
                    }>"."</span>
                </button>
                <nav class="hidden md:block" aria-label=tr("aria.mainNavigation")>
                    <ul class="flex gap-6 font-bold uppercase">
                        {nav_links("hover:underline underline-offset-4")}
                    </ul>
                </nav>
                <div class="flex items-center gap-2">
                    <button
                        class="px-3 py-1 border-2 border-black font-bold uppercase shadow-[2px_2px_0_0_#000]"
                        aria-label=tr("aria.languageSelector")
                        on:click=toggle_language
                    >
                        {move || i18n.with(|i| i.language().other().code().to_uppercase())}
                    </button>
                    <button
                        class="md:hidden px-3 py-1 border-2 border-black font-bold"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="md:hidden border-t-2 border-black" aria-label=tr("aria.mainNavigation")>
                    <ul class="flex flex-col px-6 py-4 gap-3 font-bold uppercase">
                        {nav_links("w-full text-left")}
                    </ul>
                </nav>
            </Show>
        </header>
    }
}

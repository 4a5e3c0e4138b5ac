use leptos::prelude::*;

use crate::content::GLOBAL_CONTACT;
use crate::navigation::Section;

use super::tr;

fn network_icon(name: &str) -> &'static str {
    match name {
        "LinkedIn" => "devicon-linkedin-plain",
        "GitHub" => "devicon-github-plain",
        "Behance" => "devicon-behance-plain",
        "Dribbble" => "devicon-dribbble-plain",
        _ => "extra-link",
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let contact = &*GLOBAL_CONTACT;

    let email = contact.email.clone().zip(contact.mailto()).map(|(email, mailto)| {
        view! {
            <div class="bg-white text-black border-4 border-black p-6 shadow-[6px_6px_0_0_#ec4899]">
                <div class="text-sm font-black uppercase mb-2">{tr("contact.email")}</div>
                <a class="text-2xl font-black break-all hover:underline" href=mailto.clone()>
                    <i class="extra-email"></i>
                    " "
                    {email}
                </a>
                <a
                    class="mt-6 inline-block px-6 py-3 bg-yellow-300 border-4 border-black font-black"
                    href=mailto
                >
                    {tr("contact.sendEmail")}
                </a>
            </div>
        }
    });

    let socials = contact.socials();
    let social_links = (!socials.is_empty()).then(|| {
        view! {
            <div>
                <div class="text-sm font-black uppercase mb-4">{tr("contact.social")}</div>
                <ul class="grid grid-cols-2 gap-4">
                    {socials
                        .into_iter()
                        .map(|(name, url)| {
                            view! {
                                <li>
                                    <a
                                        class="flex items-center gap-3 p-4 border-4 border-white font-bold hover:bg-white hover:text-black"
                                        href=url.to_string()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=name
                                    >
                                        <i class=format!("{} text-2xl", network_icon(name))></i>
                                        {name}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        }
    });

    view! {
        <section id=Section::Contact.element_id() class="bg-black text-white">
            <div class="max-w-6xl mx-auto px-6 py-20">
                <h2 class="text-4xl lg:text-6xl font-black mb-4">{tr("contact.title")}</h2>
                <p class="text-lg max-w-2xl mb-12">{tr("contact.subtitle")}</p>
                <div class="grid md:grid-cols-2 gap-8">{email} {social_links}</div>
            </div>
        </section>
    }
}

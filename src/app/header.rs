use leptos::prelude::*;

use super::scroll::ScrollLink;
use super::theme::ThemeToggle;
use crate::config::SiteConfig;
use crate::nav::NAV_LINKS;

#[component]
pub fn Header() -> impl IntoView {
    let owner = expect_context::<SiteConfig>().owner;
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = Callback::new(move |_: ()| set_menu_open(false));

    view! {
        <header class="fixed w-full top-0 z-50 bg-white/80 dark:bg-gray-900/80 backdrop-blur-sm shadow-md">
            <nav class="container mx-auto px-6 py-4 flex justify-between items-center">
                <ScrollLink href="#home" class="text-2xl font-bold text-indigo-500 dark:text-indigo-400">
                    {owner}
                </ScrollLink>
                <div class="flex items-center gap-6">
                    <div class="hidden md:flex items-center gap-6">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <ScrollLink
                                        href=link.href
                                        class="hover:text-indigo-500 dark:hover:text-indigo-400 transition-colors duration-200"
                                    >
                                        {link.label}
                                    </ScrollLink>
                                }
                            })
                            .collect_view()}
                    </div>
                    <ThemeToggle />
                    <button
                        id="mobile-menu-btn"
                        type="button"
                        aria-label="Toggle menu"
                        class="md:hidden text-2xl focus:outline-none"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        "☰"
                    </button>
                </div>
            </nav>
            <div
                id="mobile-menu"
                class="md:hidden px-6 pb-4 bg-white dark:bg-gray-900"
                class:hidden=move || !menu_open.get()
            >
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <ScrollLink
                                href=link.href
                                class="block py-2 hover:text-indigo-500 dark:hover:text-indigo-400"
                                on_navigate=close_menu
                            >
                                {link.label}
                            </ScrollLink>
                        }
                    })
                    .collect_view()}
            </div>
        </header>
    }
}

use leptos::prelude::*;
use leptos::server::SharedValue;

use crate::config::SiteConfig;
use crate::footer::FooterStamp;

#[component]
pub fn Footer() -> impl IntoView {
    let owner = expect_context::<SiteConfig>().owner;
    // computed during SSR and serialized into the page for hydration
    let FooterStamp { year, built } = SharedValue::new(FooterStamp::current).into_inner();

    view! {
        <footer class="bg-white dark:bg-gray-800 py-6 mt-16">
            <div class="container mx-auto px-6 text-center text-gray-600 dark:text-gray-400">
                <p>
                    "© " <span id="current-year" title=built>
                        {year}
                    </span> " " {owner} ". All rights reserved."
                </p>
            </div>
        </footer>
    }
}

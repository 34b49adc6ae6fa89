use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::typewriter::Typewriter;

fn tick(mut typewriter: Typewriter, set_text: WriteSignal<String>) {
    let Some(frame) = typewriter.next() else {
        return;
    };
    set_text(frame.text);
    set_timeout(move || tick(typewriter, set_text), frame.delay);
}

#[component]
pub fn TypewriterText() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let (text, set_text) = signal(String::new());

    Effect::new(move |_| {
        let typewriter = Typewriter::new(config.roles.clone(), config.typewriter_timing());
        tick(typewriter, set_text);
    });

    view! {
        <span id="typewriter" class="text-indigo-500 dark:text-indigo-400">
            {text}
        </span>
        <span class="animate-pulse">"|"</span>
    }
}

use leptos::prelude::*;
use leptos_meta::Title;

use super::contact::Contact;
use super::projects::ProjectsGrid;
use super::reveal::observe_scroll_targets;
use super::scroll::ScrollLink;
use super::typewriter::TypewriterText;
use crate::config::SiteConfig;
use crate::projects::catalog;

const SKILLS: &[&str] = &[
    "HTML",
    "CSS",
    "JavaScript",
    "Tailwind CSS",
    "React",
    "Git",
    "Responsive Design",
    "Accessibility",
];

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let threshold = config.reveal_threshold;
    let projects = match catalog() {
        Ok(projects) => projects.to_vec(),
        Err(e) => {
            log::error!("couldn't load projects: {e}");
            Vec::new()
        }
    };

    // static sections; project cards register themselves once injected
    Effect::new(move |_| observe_scroll_targets(threshold));

    view! {
        <Title text="Portfolio" />
        <Hero owner=config.owner.clone() />
        <About />
        <section id="projects" class="py-20 px-6">
            <div class="container mx-auto">
                <h2 class="scroll-target text-3xl font-bold text-center mb-12">"My Projects"</h2>
                <ProjectsGrid projects />
            </div>
        </section>
        <section id="contact" class="py-20 px-6">
            <div class="container mx-auto">
                <h2 class="scroll-target text-3xl font-bold text-center mb-12">"Get In Touch"</h2>
                <Contact />
            </div>
        </section>
    }
}

#[component]
fn Hero(owner: String) -> impl IntoView {
    view! {
        <section id="home" class="min-h-screen flex items-center justify-center text-center px-6 pt-20">
            <div class="scroll-target">
                <h1 class="text-4xl md:text-6xl font-bold mb-4">
                    "Hi, I'm " <span class="text-indigo-500 dark:text-indigo-400">{owner}</span>
                </h1>
                <p class="text-2xl md:text-3xl font-medium mb-8 h-10">
                    <TypewriterText />
                </p>
                <div class="flex flex-col sm:flex-row justify-center gap-4">
                    <ScrollLink
                        href="#projects"
                        class="bg-indigo-500 hover:bg-indigo-600 text-white font-bold py-3 px-6 rounded-lg transition-colors duration-300"
                    >
                        "View My Work"
                    </ScrollLink>
                    <ScrollLink
                        href="#contact"
                        class="border-2 border-indigo-500 text-indigo-500 dark:text-indigo-400 hover:bg-indigo-500 hover:text-white font-bold py-3 px-6 rounded-lg transition-colors duration-300"
                    >
                        "Get In Touch"
                    </ScrollLink>
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 px-6 bg-white dark:bg-gray-800">
            <div class="container mx-auto max-w-4xl">
                <h2 class="scroll-target text-3xl font-bold text-center mb-12">"About Me"</h2>
                <div class="scroll-target grid md:grid-cols-2 gap-8 items-center">
                    <div>
                        <p class="mb-4 leading-relaxed">
                            "I'm a web developer who enjoys turning ideas into fast, accessible and good-looking interfaces."
                        </p>
                        <p class="leading-relaxed">
                            "I care about clean markup, responsive layouts and the small details that make a site feel polished."
                        </p>
                    </div>
                    <div>
                        <h3 class="text-xl font-bold mb-4">"Skills"</h3>
                        <div>
                            {SKILLS
                                .iter()
                                .map(|skill| {
                                    view! {
                                        <span class="inline-block bg-gray-200 dark:bg-gray-700 rounded-full px-3 py-1 text-sm font-semibold mr-2 mb-2">
                                            {*skill}
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

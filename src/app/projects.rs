use leptos::{html, prelude::*};

use super::reveal::observe_scroll_targets;
use crate::config::SiteConfig;
use crate::projects::{render_projects, ProjectRecord};

#[component]
pub fn ProjectsGrid(projects: Vec<ProjectRecord>) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let delay = config.project_load_delay();
    let threshold = config.reveal_threshold;
    let grid_ref = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        let markup = render_projects(&projects);
        set_timeout(
            move || {
                let Some(grid) = grid_ref.get_untracked() else {
                    return;
                };
                // replaces the loading skeleton wholesale
                grid.set_inner_html(&markup);
                // new cards have to be registered after they exist
                observe_scroll_targets(threshold);
            },
            delay,
        );
    });

    view! {
        <div id="projects-grid" node_ref=grid_ref class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
            {(0..3)
                .map(|_| view! { <div class="loading-skeleton h-80 rounded-lg"></div> })
                .collect_view()}
        </div>
    }
}

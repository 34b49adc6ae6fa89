use leptos::{ev::MouseEvent, prelude::*};
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::config::SiteConfig;
use crate::nav::{scroll_offset, scroll_target_id};

fn smooth_scroll_to(id: &str, header_offset: f64) {
    let Some(target) = document().get_element_by_id(id) else {
        log::debug!("no element #{id} to scroll to");
        return;
    };
    let top = target.get_bounding_client_rect().top();
    let page_y = window().page_y_offset().unwrap_or_default();
    let options = ScrollToOptions::new();
    options.set_top(scroll_offset(top, page_y, header_offset));
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// In-page anchor that smooth-scrolls to its target, leaving room for the
/// fixed header.
#[component]
pub fn ScrollLink(
    href: &'static str,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] on_navigate: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let header_offset = expect_context::<SiteConfig>().header_offset;
    view! {
        <a
            href=href
            class=class
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                if let Some(cb) = on_navigate {
                    cb.run(());
                }
                if let Some(id) = scroll_target_id(href) {
                    smooth_scroll_to(id, header_offset);
                }
            }
        >
            {children()}
        </a>
    }
}

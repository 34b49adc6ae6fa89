pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Home",
        href: "#home",
    },
    NavLink {
        label: "About",
        href: "#about",
    },
    NavLink {
        label: "Projects",
        href: "#projects",
    },
    NavLink {
        label: "Contact",
        href: "#contact",
    },
];

/// Element id an in-page link points at. A bare `#` points nowhere.
pub fn scroll_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document y-coordinate to scroll to so the target sits just below a fixed
/// header of height `header_offset`.
pub fn scroll_offset(element_top: f64, page_y_offset: f64, header_offset: f64) -> f64 {
    element_top + page_y_offset - header_offset
}

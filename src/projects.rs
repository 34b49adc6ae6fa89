use std::fmt::Write;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::content::{read_json, ContentError};

pub const PROJECTS_FILE: &str = "projects.json";
/// Inert link target used when a project has no demo or source link.
pub const PLACEHOLDER_URL: &str = "#";

static CATALOG: LazyLock<Result<Vec<ProjectRecord>, ContentError>> =
    LazyLock::new(|| read_json(PROJECTS_FILE));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    #[serde(rename = "image")]
    pub image_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub code_url: Option<String>,
}

impl ProjectRecord {
    pub fn live_href(&self) -> &str {
        link_or_placeholder(self.live_url.as_deref())
    }

    pub fn code_href(&self) -> &str {
        link_or_placeholder(self.code_url.as_deref())
    }
}

fn link_or_placeholder(url: Option<&str>) -> &str {
    match url.map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => PLACEHOLDER_URL,
    }
}

/// The project list shipped with the site. Parsed once, never mutated.
pub fn catalog() -> Result<&'static [ProjectRecord], ContentError> {
    match &*CATALOG {
        Ok(projects) => Ok(projects.as_slice()),
        Err(e) => Err(e.clone()),
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Markup for a single project card. Cards are `scroll-target`s so they are
/// picked up by the reveal observer once injected.
pub fn render_card(project: &ProjectRecord) -> String {
    let title = escape_html(&project.title);
    let tags = project.tags.iter().fold(String::new(), |mut acc, tag| {
        let _ = write!(
            acc,
            r#"<span class="inline-block bg-gray-200 dark:bg-gray-700 rounded-full px-3 py-1 text-sm font-semibold text-gray-700 dark:text-gray-200 mr-2 mb-2">{}</span>"#,
            escape_html(tag)
        );
        acc
    });
    format!(
        concat!(
            r#"<div class="scroll-target bg-white dark:bg-gray-800 rounded-lg shadow-lg overflow-hidden transform hover:scale-105 transition-transform duration-300">"#,
            r#"<img src="{image}" alt="{title}" class="w-full h-48 object-cover">"#,
            r#"<div class="p-6">"#,
            r#"<h3 class="text-xl font-bold mb-2">{title}</h3>"#,
            r#"<p class="text-gray-600 dark:text-gray-400 mb-4">{description}</p>"#,
            r#"<div class="mb-4">{tags}</div>"#,
            r#"<div class="flex justify-between">"#,
            r#"<a href="{live}" target="_blank" rel="noopener noreferrer" class="text-indigo-500 dark:text-indigo-400 hover:underline">Live Demo</a>"#,
            r#"<a href="{code}" target="_blank" rel="noopener noreferrer" class="text-indigo-500 dark:text-indigo-400 hover:underline">View Code</a>"#,
            r#"</div></div></div>"#,
        ),
        image = escape_html(&project.image_url),
        title = title,
        description = escape_html(&project.description),
        tags = tags,
        live = escape_html(project.live_href()),
        code = escape_html(project.code_href()),
    )
}

/// Markup for the whole grid, one card per project in input order. The result
/// replaces the container's content wholesale.
pub fn render_projects(projects: &[ProjectRecord]) -> String {
    projects.iter().map(render_card).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, tags: &[&str]) -> ProjectRecord {
        ProjectRecord {
            title: title.to_string(),
            description: format!("About {title}"),
            image_url: format!("https://img.example/{title}.png"),
            tags: tags.iter().map(|s| s.to_string()).collect(),
            live_url: None,
            code_url: Some("https://github.com/example/repo".to_string()),
        }
    }

    #[test]
    fn test_catalog_loads_shipped_projects() {
        let projects = catalog().expect("embedded projects should parse");
        assert_eq!(projects.len(), 3);
        assert_eq!(projects[0].title, "E-commerce Platform");
        assert_eq!(projects[1].tags, vec!["JavaScript", "Local Storage", "Tailwind CSS"]);
        assert_eq!(projects[1].code_href(), PLACEHOLDER_URL);
        assert_eq!(
            projects[2].live_href(),
            "https://martin-morondo-portfolio.netlify.app/"
        );
    }

    #[test]
    fn test_one_card_per_project_in_order() {
        let projects = vec![project("Alpha", &[]), project("Beta", &[]), project("Gamma", &[])];
        let html = render_projects(&projects);
        assert_eq!(html.matches("<h3 ").count(), 3);
        let a = html.find("Alpha</h3>").expect("alpha rendered");
        let b = html.find("Beta</h3>").expect("beta rendered");
        let c = html.find("Gamma</h3>").expect("gamma rendered");
        assert!(a < b && b < c);
    }

    #[test]
    fn test_render_is_idempotent() {
        let projects = catalog().expect("embedded projects should parse");
        assert_eq!(render_projects(projects), render_projects(projects));
    }

    #[test]
    fn test_card_contents() {
        let html = render_card(&project("Alpha", &["Rust", "WASM", "CSS"]));
        assert!(html.contains(r#"alt="Alpha""#));
        assert!(html.contains(r#"src="https://img.example/Alpha.png""#));
        assert!(html.contains("<p class=\"text-gray-600 dark:text-gray-400 mb-4\">About Alpha</p>"));
        let rust = html.find(">Rust</span>").expect("rust tag");
        let wasm = html.find(">WASM</span>").expect("wasm tag");
        let css = html.find(">CSS</span>").expect("css tag");
        assert!(rust < wasm && wasm < css);
        assert_eq!(html.matches(r#"target="_blank""#).count(), 2);
        assert!(html.starts_with(r#"<div class="scroll-target "#));
    }

    #[test]
    fn test_missing_links_degrade_to_placeholder() {
        let mut p = project("Alpha", &[]);
        p.code_url = Some("   ".to_string());
        let html = render_card(&p);
        assert_eq!(html.matches(r##"href="#""##).count(), 2);
    }

    #[test]
    fn test_markup_is_escaped() {
        let mut p = project("<script>", &["a&b"]);
        p.image_url = "https://img.example/x.png?a=1&b=2".to_string();
        let html = render_card(&p);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains(">a&amp;b</span>"));
        assert!(html.contains("x.png?a=1&amp;b=2"));
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        assert_eq!(render_projects(&[]), "");
    }
}

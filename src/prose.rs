use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use pulldown_cmark::{Options, Parser};

/// Rendered documents keyed by name. Filled by the server on first request and by the browser
/// as server function responses arrive.
pub static GLOBAL_PROSE_CACHE: LazyLock<DashMap<String, Prose>> = LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "content"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug)]
struct FrontMatter {
    title: String,
    #[serde(default)]
    download: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProseMeta {
    pub name: String,
    pub title: String,
    /// Site-relative path of a file offered for download next to the document.
    pub download: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prose {
    pub meta: ProseMeta,
    pub html: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProseError {
    #[error("no prose document named {0}")]
    NotFound(String),
    #[error("prose document {0} is not valid UTF-8")]
    Encoding(String),
    #[error("prose document {0} has missing or malformed front matter")]
    FrontMatter(String),
}

/// Names of the embedded documents, without the `.md` suffix.
pub fn names() -> Vec<String> {
    Assets::iter()
        .filter_map(|s| s.strip_suffix(".md").map(str::to_string))
        .collect()
}

/// Split front matter from `source` and render the body to HTML.
#[cfg(feature = "ssr")]
pub fn render(name: &str, source: &str) -> Result<Prose, ProseError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<FrontMatter>(source)
        .ok_or_else(|| ProseError::FrontMatter(name.to_string()))?;

    let parser = Parser::new_ext(&parsed.content, Options::all());
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);

    Ok(Prose {
        meta: ProseMeta {
            name: name.to_string(),
            title: parsed.data.title,
            download: parsed.data.download,
        },
        html,
    })
}

#[cfg(feature = "ssr")]
pub fn get_prose(name: &str) -> Result<Prose, ProseError> {
    let cache = &*GLOBAL_PROSE_CACHE;
    if let Some(prose) = cache.get(name) {
        return Ok(prose.clone());
    }
    tracing::debug!(name, "rendering prose document");

    let file =
        Assets::get(&format!("{name}.md")).ok_or_else(|| ProseError::NotFound(name.to_string()))?;
    let source = String::from_utf8(file.data.into_owned())
        .map_err(|_| ProseError::Encoding(name.to_string()))?;
    let prose = render(name, &source)?;

    cache.insert(name.to_string(), prose.clone());
    Ok(prose)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_names() {
        let mut names = names();
        names.sort();
        assert_eq!(names, vec!["about".to_string(), "resume".to_string()]);
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_render_splits_front_matter() {
        let source = "---\ntitle: Hello\n---\n\nSome **bold** text.\n";
        let prose = render("hello", source).expect("front matter should parse");
        assert_eq!(prose.meta.title, "Hello");
        assert_eq!(prose.meta.download, None);
        assert!(!prose.html.contains("title:"));
        assert!(prose.html.contains("<strong>bold</strong>"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_render_without_front_matter() {
        let res = render("bare", "Just a paragraph.\n");
        assert_eq!(res, Err(ProseError::FrontMatter("bare".to_string())));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_get_embedded_prose() {
        let about = get_prose("about").expect("about.md should be embedded");
        assert_eq!(about.meta.title, "About Me");
        assert!(about.html.contains("<p>"));
        assert!(GLOBAL_PROSE_CACHE.contains_key("about"));

        let resume = get_prose("resume").expect("resume.md should be embedded");
        assert!(resume.html.contains("<li>"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_render_download_path() {
        let source = "---\ntitle: CV\ndownload: /cv.pdf\n---\n\nBody.\n";
        let prose = render("cv", source).expect("front matter should parse");
        assert_eq!(prose.meta.download.as_deref(), Some("/cv.pdf"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_downloads_are_served() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for name in names() {
            let prose = get_prose(&name).expect("embedded document should render");
            if let Some(href) = prose.meta.download {
                let file = public.join(href.trim_start_matches('/'));
                assert!(file.is_file(), "{name} offers {href} but {file:?} is missing");
            }
        }
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_missing_prose() {
        assert_eq!(
            get_prose("../Cargo.toml"),
            Err(ProseError::NotFound("../Cargo.toml".to_string()))
        );
    }
}

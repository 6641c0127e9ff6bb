//! Page templates compiled into the binary

use axum::response::Html;
use tera::{Context, Tera};

use crate::utils::{AppError, ErrorCode};

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    ("index.html", include_str!("../../templates/index.html")),
    ("about.html", include_str!("../../templates/about.html")),
    ("menu.html", include_str!("../../templates/menu.html")),
    ("menu_item.html", include_str!("../../templates/menu_item.html")),
    ("book.html", include_str!("../../templates/book.html")),
    ("bookings.html", include_str!("../../templates/bookings.html")),
    ("not_found.html", include_str!("../../templates/not_found.html")),
];

/// Holds the parsed template set; shared through `ServerState`
#[derive(Debug)]
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    /// Parse every page template. Fails on a syntax error or a missing parent.
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())?;
        Ok(Self { tera })
    }

    pub fn render(&self, name: &str, ctx: &Context) -> Result<Html<String>, AppError> {
        self.tera.render(name, ctx).map(Html).map_err(|e| {
            AppError::with_message(ErrorCode::TemplateError, format!("{name}: {e}"))
        })
    }

    /// Render a template that needs no data
    pub fn render_static(&self, name: &str) -> Result<Html<String>, AppError> {
        self.render(name, &Context::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::MenuItem;

    #[test]
    fn test_all_templates_parse() {
        let pages = PageRenderer::new().unwrap();
        for name in ["index.html", "about.html"] {
            let Html(body) = pages.render_static(name).unwrap();
            assert!(body.contains("Little Lemon"));
        }
    }

    #[test]
    fn test_menu_output_is_escaped() {
        let pages = PageRenderer::new().unwrap();
        let mut ctx = Context::new();
        ctx.insert(
            "menu",
            &vec![MenuItem {
                id: 1,
                name: "<script>alert(1)</script>".into(),
                price: 5,
                description: String::new(),
            }],
        );
        let Html(body) = pages.render("menu.html", &ctx).unwrap();
        assert!(!body.contains("<script>"));
        assert!(body.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_unknown_template_is_template_error() {
        let pages = PageRenderer::new().unwrap();
        let err = pages.render_static("missing.html").unwrap_err();
        assert_eq!(err.code, ErrorCode::TemplateError);
    }
}

//! Landing page composition.
//!
//! The page body is four sections in fixed order: hero, stats strip,
//! feature grid, closing call-to-action. Everything is static data except
//! the links, which go through the path resolver.

pub mod features;

pub use features::{FEATURES, FeatureItem, render_features};

use crate::config::SiteConfig;
use crate::utils::html::{escape, escape_attr};

/// `<title>` of the landing page.
pub const HOME_TITLE: &str = "Aprende Flutter Avanzado";

/// Meta description of the landing page.
pub const HOME_DESCRIPTION: &str = "Curso completo de Flutter avanzado: Isolates, Platform Channels, Backend Driven UI, Seguridad, IA, Super Apps, Telemetría y más.";

/// Dart snippet shown in the hero terminal card.
const HERO_CODE: &str = "import 'dart:isolate';

Future<void> main() async {
  final result = await Isolate.run(() {
    // Heavy computation 🧶
    return fibonacci(42);
  });
  print('Result: $result'); // 🚀
}";

/// The four stats strip entries: (number, label).
const STATS: [(&str, &str); 4] = [
    ("12", "Temas Avanzados"),
    ("100%", "Práctico"),
    ("🆓", "Gratuito"),
    ("ES/EN", "Bilingüe"),
];

/// Render the landing page body (sections in fixed order).
pub fn render_home(config: &SiteConfig) -> String {
    let mut out = String::with_capacity(16 * 1024);
    render_hero(&mut out, config);
    render_stats(&mut out);
    out.push_str("<main>\n");
    out.push_str(&render_features(&config.paths()));
    out.push_str("</main>\n");
    render_cta(&mut out, config);
    out
}

fn render_hero(out: &mut String, config: &SiteConfig) {
    let paths = config.paths();

    out.push_str("<header class=\"hero hero-banner\">\n<div class=\"container\">\n");
    out.push_str("<div class=\"hero-inner\">\n<div class=\"hero-text\">\n");
    out.push_str("<span class=\"hero-badge\">🚀 Curso Avanzado</span>\n");
    out.push_str(
        "<h1 class=\"hero-title\">Flutter <span class=\"hero-title-accent\">Avanzado</span></h1>\n",
    );

    out.push_str("<p class=\"hero-subtitle\">");
    out.push_str(&escape(&config.site.tagline));
    out.push_str("</p>\n");

    out.push_str(
        "<p class=\"hero-description\">Domina <strong>12 temas avanzados</strong> de Flutter: Isolates, Platform Channels, Backend Driven UI, Seguridad, IA, Super Apps y mucho más.</p>\n",
    );

    out.push_str("<div class=\"hero-buttons\">\n<a class=\"button button--lg hero-button-primary\" href=\"");
    out.push_str(&escape_attr(&paths.url_for("/docs/intro")));
    out.push_str("\">📚 Comenzar el Curso</a>\n");
    out.push_str(
        "<a class=\"button button--lg hero-button-secondary\" href=\"https://discord.gg/mtJWZFZE7R\">💬 Unirse al Discord</a>\n",
    );
    out.push_str("</div>\n</div>\n");

    // terminal-style code illustration
    out.push_str("<div class=\"hero-visual\">\n<div class=\"hero-card\">\n");
    out.push_str("<div class=\"hero-card-header\">");
    for color in ["#FF5F56", "#FFBD2E", "#27C93F"] {
        out.push_str("<span class=\"dot\" style=\"background:");
        out.push_str(color);
        out.push_str("\"></span>");
    }
    out.push_str("</div>\n<pre class=\"hero-code\"><code>");
    out.push_str(&escape(HERO_CODE));
    out.push_str("</code></pre>\n</div>\n</div>\n");

    out.push_str("</div>\n</div>\n</header>\n");
}

fn render_stats(out: &mut String) {
    out.push_str("<section class=\"stats\">\n<div class=\"container\">\n<div class=\"stats-grid\">\n");
    for (number, label) in STATS {
        out.push_str("<div class=\"stat-item\"><span class=\"stat-number\">");
        out.push_str(&escape(number));
        out.push_str("</span><span class=\"stat-label\">");
        out.push_str(&escape(label));
        out.push_str("</span></div>\n");
    }
    out.push_str("</div>\n</div>\n</section>\n");
}

fn render_cta(out: &mut String, config: &SiteConfig) {
    let paths = config.paths();

    out.push_str("<section class=\"cta\">\n<div class=\"container\">\n<div class=\"cta-inner\">\n");
    out.push_str("<h2 class=\"cta-title\">¿Listo para dominar Flutter? 🎯</h2>\n");
    out.push_str(
        "<p class=\"cta-text\">Únete a la comunidad de desarrolladores que están llevando sus habilidades de Flutter al siguiente nivel.</p>\n",
    );
    out.push_str("<div class=\"cta-buttons\">\n<a class=\"button button--lg hero-button-primary\" href=\"");
    out.push_str(&escape_attr(&paths.url_for("/docs/intro")));
    out.push_str("\">Explorar la Documentación</a>\n");
    out.push_str(
        "<a class=\"button button--lg hero-button-secondary\" href=\"https://youtube.com/@weincode\">📺 Ver en YouTube</a>\n",
    );
    out.push_str("</div>\n</div>\n</div>\n</section>\n");
}

/// Internal links used by the landing page chrome, for route validation.
pub fn home_internal_links() -> Vec<&'static str> {
    let mut links = vec!["/docs/intro"];
    links.extend(FEATURES.iter().map(|f| f.link));
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn home_html() -> String {
        let mut config = test_parse_config("");
        config.site.tagline = "Aprende Flutter con conceptos avanzados y casos de uso reales".into();
        render_home(&config)
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let html = home_html();
        let hero = html.find("hero-banner").unwrap();
        let stats = html.find("stats-grid").unwrap();
        let grid = html.find("class=\"features\"").unwrap();
        let cta = html.find("class=\"cta\"").unwrap();
        assert!(hero < stats && stats < grid && grid < cta);
    }

    #[test]
    fn test_hero_shows_tagline_from_config() {
        let html = home_html();
        assert!(html.contains("Aprende Flutter con conceptos avanzados y casos de uso reales"));
    }

    #[test]
    fn test_stats_strip_literals() {
        let html = home_html();
        for (number, label) in STATS {
            assert!(html.contains(number), "missing stat number {number}");
            assert!(html.contains(label), "missing stat label {label}");
        }
    }

    #[test]
    fn test_hero_code_is_escaped() {
        let html = home_html();
        assert!(html.contains("Future&lt;void&gt; main()"));
        assert!(!html.contains("Future<void> main()"));
    }

    #[test]
    fn test_cta_links() {
        let html = home_html();
        assert!(html.contains("href=\"/docs/intro/\""));
        assert!(html.contains("https://discord.gg/mtJWZFZE7R"));
        assert!(html.contains("https://youtube.com/@weincode"));
    }

    #[test]
    fn test_home_internal_links_cover_features() {
        let links = home_internal_links();
        assert_eq!(links.len(), 1 + FEATURES.len());
        assert!(links.contains(&"/docs/accesibilidad/introduccion"));
    }
}

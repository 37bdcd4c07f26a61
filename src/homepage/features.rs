//! The course feature grid: 12 topic cards on the landing page.
//!
//! `FEATURES` is the single source of truth; the grid renders one card per
//! item, in declaration order, three columns per row. Every `link` is
//! checked against the route table during the build.

use crate::config::PathResolver;
use crate::utils::html::{escape, escape_attr};

/// One topic card on the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureItem {
    pub emoji: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Site-root path to the topic's first doc.
    pub link: &'static str,
}

/// The course topics, in display order.
pub const FEATURES: [FeatureItem; 12] = [
    FeatureItem {
        emoji: "🐦",
        title: "Accesibilidad",
        description: "Crea apps inclusivas para todos los usuarios con Semantics, lectores de pantalla y más.",
        link: "/docs/accesibilidad/introduccion",
    },
    FeatureItem {
        emoji: "🧶",
        title: "Isolates",
        description: "Programación concurrente y multi-hilo en Dart para operaciones pesadas sin bloquear la UI.",
        link: "/docs/isolates/introduccion",
    },
    FeatureItem {
        emoji: "📍",
        title: "Platform Channels",
        description: "Comunica Flutter con código nativo iOS y Android usando MethodChannel, EventChannel y Pigeon.",
        link: "/docs/platform-channels/introduccion",
    },
    FeatureItem {
        emoji: "🎷",
        title: "Backend Driven UI",
        description: "Interfaces dinámicas controladas desde el servidor. Actualiza la UI sin publicar nueva versión.",
        link: "/docs/backend-driven-ui/introduccion",
    },
    FeatureItem {
        emoji: "🐵",
        title: "Seguridad",
        description: "Protege tu app y los datos de tus usuarios con encriptación, SSL pinning y más.",
        link: "/docs/seguridad/introduccion",
    },
    FeatureItem {
        emoji: "😎",
        title: "Estructurar Proyectos",
        description: "Arquitectura escalable con monorepos, Clean Architecture y modularización para equipos grandes.",
        link: "/docs/estructurar-proyectos/introduccion",
    },
    FeatureItem {
        emoji: "⏳",
        title: "Performance",
        description: "Optimización, profiling y gestión de memoria para apps Flutter de alto rendimiento.",
        link: "/docs/performance/optimizacion",
    },
    FeatureItem {
        emoji: "🌊",
        title: "Inteligencia Artificial",
        description: "Integra modelos de IA (Gemini, GPT, TensorFlow Lite) en tus apps Flutter.",
        link: "/docs/inteligencia-artificial/introduccion",
    },
    FeatureItem {
        emoji: "🎷",
        title: "Super Apps",
        description: "Construye aplicaciones todo-en-uno con módulos dinámicos y arquitectura de mini-apps.",
        link: "/docs/super-apps/introduccion",
    },
    FeatureItem {
        emoji: "🗂",
        title: "Telemetría",
        description: "Monitoreo, analytics y observabilidad para entender el comportamiento de tu app en producción.",
        link: "/docs/telemetria/introduccion",
    },
    FeatureItem {
        emoji: "🏞",
        title: "Desarrollador de Alto Impacto",
        description: "Habilidades profesionales que marcan la diferencia: code reviews, comunicación y liderazgo técnico.",
        link: "/docs/desarrollador-alto-impacto/introduccion",
    },
    FeatureItem {
        emoji: "🏀",
        title: "¿Qué sigue?",
        description: "Próximos pasos en tu carrera: open source, Dart backend, Flutter Web, Desktop y más.",
        link: "/docs/que-sigue/introduccion",
    },
];

/// Render the feature grid section.
pub fn render_features(paths: &PathResolver<'_>) -> String {
    let mut out = String::with_capacity(8192);

    out.push_str("<section class=\"features\">\n<div class=\"container\">\n");
    out.push_str("<div class=\"section-header\">\n");
    out.push_str("<h2 class=\"section-title\">📚 Temario del Curso</h2>\n");
    out.push_str(
        "<p class=\"section-subtitle\">12 temas avanzados diseñados para convertirte en un desarrollador Flutter profesional</p>\n",
    );
    out.push_str("</div>\n<div class=\"row\">\n");

    for feature in &FEATURES {
        render_card(&mut out, feature, paths);
    }

    out.push_str("</div>\n</div>\n</section>\n");
    out
}

fn render_card(out: &mut String, feature: &FeatureItem, paths: &PathResolver<'_>) {
    out.push_str("<div class=\"col col--4\">\n<a href=\"");
    out.push_str(&escape_attr(&paths.url_for(feature.link)));
    out.push_str("\" class=\"feature-link\">\n<div class=\"feature-card\">\n");

    out.push_str("<div class=\"feature-emoji\">");
    out.push_str(feature.emoji);
    out.push_str("</div>\n<h3 class=\"feature-title\">");
    out.push_str(&escape(feature.title));
    out.push_str("</h3>\n<p class=\"feature-description\">");
    out.push_str(&escape(feature.description));
    out.push_str("</p>\n<span class=\"feature-arrow\">Explorar →</span>\n");

    out.push_str("</div>\n</a>\n</div>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_twelve_features_in_literal_order() {
        assert_eq!(FEATURES.len(), 12);
        assert_eq!(FEATURES[0].title, "Accesibilidad");
        assert_eq!(FEATURES[11].title, "¿Qué sigue?");
    }

    #[test]
    fn test_grid_renders_one_card_per_feature_in_order() {
        let config = test_parse_config("");
        let html = render_features(&config.paths());

        assert_eq!(html.matches("feature-card").count(), FEATURES.len());

        // declaration order is rendering order
        let mut last = 0;
        for feature in &FEATURES {
            let pos = html[last..]
                .find(feature.title)
                .unwrap_or_else(|| panic!("'{}' missing or out of order", feature.title));
            last += pos;
        }
    }

    #[test]
    fn test_cards_link_to_prefixed_routes() {
        let config = test_parse_config("base_url = \"/flutter-avanzado/\"");
        let html = render_features(&config.paths());
        assert!(html.contains("href=\"/flutter-avanzado/docs/accesibilidad/introduccion/\""));
        assert!(html.contains("href=\"/flutter-avanzado/docs/que-sigue/introduccion/\""));
    }

    #[test]
    fn test_every_feature_links_into_docs() {
        for feature in &FEATURES {
            assert!(
                feature.link.starts_with("/docs/"),
                "feature '{}' links outside /docs/",
                feature.title
            );
        }
    }

    #[test]
    fn test_card_affordance_present() {
        let config = test_parse_config("");
        let html = render_features(&config.paths());
        assert_eq!(html.matches("Explorar →").count(), 12);
    }
}

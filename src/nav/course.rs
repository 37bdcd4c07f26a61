//! The course sidebar: an ordered tree of categories and doc leaves.
//!
//! Category labels are display-only; leaf ids must have a backing file
//! under `content/docs/`.

use super::{NavItem, Sidebar};

/// The "Flutter Avanzado" course navigation tree.
pub const fn course_sidebar() -> Sidebar {
    COURSE_SIDEBAR
}

const COURSE_SIDEBAR: Sidebar = &[
    NavItem::Doc("intro"),
    NavItem::Category {
        label: "🐦 Accesibilidad",
        items: &[NavItem::Doc("accesibilidad/introduccion")],
    },
    NavItem::Category {
        label: "🧶 Isolates",
        items: &[
            NavItem::Doc("isolates/introduccion"),
            NavItem::Doc("isolates/basico"),
            NavItem::Doc("isolates/avanzado"),
        ],
    },
    NavItem::Category {
        label: "📍 Platform Channels",
        items: &[NavItem::Doc("platform-channels/introduccion")],
    },
    NavItem::Category {
        label: "🎷 Backend Driven UI",
        items: &[NavItem::Doc("backend-driven-ui/introduccion")],
    },
    NavItem::Category {
        label: "🐵 Seguridad",
        items: &[NavItem::Doc("seguridad/introduccion")],
    },
    NavItem::Category {
        label: "😎 Estructurar Grandes Proyectos",
        items: &[NavItem::Doc("estructurar-proyectos/introduccion")],
    },
    NavItem::Category {
        label: "⏳ Performance",
        items: &[
            NavItem::Doc("performance/optimizacion"),
            NavItem::Doc("performance/profiling"),
            NavItem::Doc("performance/memory"),
        ],
    },
    NavItem::Category {
        label: "🌊 Inteligencia Artificial",
        items: &[NavItem::Doc("inteligencia-artificial/introduccion")],
    },
    NavItem::Category {
        label: "🎷 Super Apps",
        items: &[NavItem::Doc("super-apps/introduccion")],
    },
    NavItem::Category {
        label: "🗂 Telemetría",
        items: &[NavItem::Doc("telemetria/introduccion")],
    },
    NavItem::Category {
        label: "🏞 Desarrollador de Alto Impacto",
        items: &[NavItem::Doc("desarrollador-alto-impacto/introduccion")],
    },
    NavItem::Category {
        label: "🏀 ¿Qué sigue?",
        items: &[NavItem::Doc("que-sigue/introduccion")],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::flatten;

    #[test]
    fn test_course_shape() {
        let sidebar = course_sidebar();
        // intro leaf plus 12 topic categories
        assert_eq!(sidebar.len(), 13);
        assert!(matches!(sidebar[0], NavItem::Doc("intro")));

        let categories = sidebar
            .iter()
            .filter(|item| matches!(item, NavItem::Category { .. }))
            .count();
        assert_eq!(categories, 12);
    }

    #[test]
    fn test_course_leaf_order() {
        let leaves = flatten(course_sidebar());
        assert_eq!(leaves.len(), 17);
        assert_eq!(leaves.first(), Some(&"intro"));
        assert_eq!(leaves.last(), Some(&"que-sigue/introduccion"));

        // category-internal ordering survives flattening
        let isolates: Vec<_> = leaves
            .iter()
            .filter(|id| id.starts_with("isolates/"))
            .collect();
        assert_eq!(
            isolates,
            [
                &"isolates/introduccion",
                &"isolates/basico",
                &"isolates/avanzado"
            ]
        );
    }

    #[test]
    fn test_first_and_last_category_labels() {
        let sidebar = course_sidebar();
        let labels: Vec<_> = sidebar
            .iter()
            .filter_map(|item| match item {
                NavItem::Category { label, .. } => Some(*label),
                NavItem::Doc(_) => None,
            })
            .collect();
        assert_eq!(labels.first(), Some(&"🐦 Accesibilidad"));
        assert_eq!(labels.last(), Some(&"🏀 ¿Qué sigue?"));
    }
}

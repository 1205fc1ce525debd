use once_cell::sync::Lazy;

use crate::entities::project::Project;

/// Build-time project list served whenever the remote source is absent
/// or failing. Authored order is meaningful and must be preserved.
pub static FALLBACK_PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    vec![
        Project {
            slug: "couture-lab".into(),
            title: "Couture Lab".into(),
            description: "Plateforme immersive permettant à une maison de couture de présenter \
                          ses collections interactives avec narration scrollée et expériences vidéo."
                .into(),
            tags: vec!["Nuxt 3".into(), "GSAP".into(), "Three.js".into()],
            year: 2024,
            role: "Lead Front".into(),
            cover: "/assets/images/img/1.jpg".into(),
            link: Some("https://www.behance.net/".into()),
        },
        Project {
            slug: "data-stories".into(),
            title: "Data Stories".into(),
            description: "Dashboard éditorial mêlant visualisations temps réel et storytelling \
                          pour une agence de conseil en innovation."
                .into(),
            tags: vec!["Vue 3".into(), "D3.js".into(), "TypeScript".into()],
            year: 2023,
            role: "Fullstack".into(),
            cover: "/assets/images/img/4.jpg".into(),
            link: Some("https://dribbble.com/".into()),
        },
        Project {
            slug: "motion-playground".into(),
            title: "Motion Playground".into(),
            description: "Collection d’expériences WebGL et micro-interactions bâties autour de \
                          GSAP, Lenis et SplitType pour explorer des concepts UI futuristes."
                .into(),
            tags: vec!["Nuxt 3".into(), "GSAP".into(), "WebGL".into()],
            year: 2022,
            role: "Creative Developer".into(),
            cover: "/assets/images/img/6.jpg".into(),
            link: None,
        },
    ]
});

/// Case-sensitive exact lookup, the only matching rule the fallback
/// list ever needs.
pub fn find_fallback_project(slug: &str) -> Option<Project> {
    FALLBACK_PROJECTS.iter().find(|p| p.slug == slug).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_list_keeps_authored_order() {
        let slugs: Vec<&str> = FALLBACK_PROJECTS.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["couture-lab", "data-stories", "motion-playground"]);
    }

    #[test]
    fn fallback_lookup_is_case_sensitive() {
        assert!(find_fallback_project("couture-lab").is_some());
        assert!(find_fallback_project("Couture-Lab").is_none());
    }
}

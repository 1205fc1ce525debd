use mockall::mock;
use mockall::predicate::*;
use serde_json::json;

use portfolio_gateway::{
    entities::project::ProjectRow,
    errors::AppError,
    fallback::FALLBACK_PROJECTS,
    repositories::projects::ProjectRepository,
    use_cases::projects::ProjectDirectory,
};

mock! {
    pub ProjectRepo {}

    #[async_trait::async_trait]
    impl ProjectRepository for ProjectRepo {
        async fn fetch_all(&self) -> Result<Vec<ProjectRow>, AppError>;
        async fn fetch_by_slug(&self, slug: &str) -> Result<Option<ProjectRow>, AppError>;
    }
}

fn stored_row(slug: &str, year: i32) -> ProjectRow {
    ProjectRow {
        slug: Some(slug.to_string()),
        title: Some(slug.replace('-', " ")),
        description: Some("desc".to_string()),
        tags: Some(json!(["Nuxt 3"])),
        year: Some(json!(year)),
        role: Some("Lead Front".to_string()),
        cover: Some("https://cdn.example.com/c.jpg".to_string()),
        link: None,
    }
}

#[actix_rt::test]
async fn unconfigured_source_serves_fallback_in_authored_order() {
    let directory = ProjectDirectory::<MockProjectRepo>::new(None);

    let projects = directory.list().await;

    assert_eq!(projects, *FALLBACK_PROJECTS);
}

#[actix_rt::test]
async fn listing_failure_degrades_to_fallback() {
    let mut repo = MockProjectRepo::new();
    repo.expect_fetch_all()
        .returning(|| Err(AppError::QueryFailed("connection refused".into())));

    let directory = ProjectDirectory::new(Some(repo));
    let projects = directory.list().await;

    assert_eq!(projects, *FALLBACK_PROJECTS);
}

#[actix_rt::test]
async fn empty_listing_degrades_to_fallback() {
    let mut repo = MockProjectRepo::new();
    repo.expect_fetch_all().returning(|| Ok(Vec::new()));

    let directory = ProjectDirectory::new(Some(repo));
    let projects = directory.list().await;

    assert_eq!(projects, *FALLBACK_PROJECTS);
}

#[actix_rt::test]
async fn listing_normalizes_loose_rows() {
    let mut repo = MockProjectRepo::new();
    repo.expect_fetch_all().returning(|| {
        Ok(vec![ProjectRow {
            slug: Some("couture-lab".into()),
            title: Some("Couture Lab".into()),
            tags: Some(json!(r#"["Nuxt 3","GSAP"]"#)),
            year: Some(json!("2024")),
            cover: Some(r#"<img src="https://cdn.example.com/1.jpg">"#.into()),
            ..ProjectRow::default()
        }])
    });

    let directory = ProjectDirectory::new(Some(repo));
    let projects = directory.list().await;

    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].tags, vec!["Nuxt 3", "GSAP"]);
    assert_eq!(projects[0].year, 2024);
    assert_eq!(projects[0].cover, "https://cdn.example.com/1.jpg");
}

#[actix_rt::test]
async fn empty_slug_short_circuits_without_querying() {
    // No expectations: any repo call would panic the test
    let repo = MockProjectRepo::new();
    let directory = ProjectDirectory::new(Some(repo));

    assert_eq!(directory.get_by_slug("").await, None);
    assert_eq!(directory.get_by_slug("   ").await, None);
}

#[actix_rt::test]
async fn exact_slug_match_is_normalized_and_returned() {
    let mut repo = MockProjectRepo::new();
    repo.expect_fetch_by_slug()
        .with(eq("couture-lab"))
        .returning(|_| Ok(Some(stored_row("couture-lab", 2024))));

    let directory = ProjectDirectory::new(Some(repo));
    let project = directory.get_by_slug("couture-lab").await.unwrap();

    assert_eq!(project.slug, "couture-lab");
    assert_eq!(project.year, 2024);
}

#[actix_rt::test]
async fn case_drifted_slug_is_found_by_secondary_scan() {
    let mut repo = MockProjectRepo::new();
    repo.expect_fetch_by_slug()
        .with(eq("Couture-Lab"))
        .returning(|_| Ok(None));
    repo.expect_fetch_all()
        .returning(|| Ok(vec![stored_row("data-stories", 2023), stored_row("couture-lab", 2024)]));

    let directory = ProjectDirectory::new(Some(repo));
    let project = directory.get_by_slug("Couture-Lab").await.unwrap();

    assert_eq!(project.slug, "couture-lab");
}

#[actix_rt::test]
async fn separator_drifted_slug_is_found_by_secondary_scan() {
    let mut repo = MockProjectRepo::new();
    repo.expect_fetch_by_slug()
        .with(eq("motion-playground"))
        .returning(|_| Ok(None));
    repo.expect_fetch_all()
        .returning(|| Ok(vec![stored_row("motion_playground", 2022)]));

    let directory = ProjectDirectory::new(Some(repo));
    let project = directory.get_by_slug("motion-playground").await.unwrap();

    assert_eq!(project.slug, "motion_playground");
}

#[actix_rt::test]
async fn lookup_error_falls_back_to_static_list() {
    let mut repo = MockProjectRepo::new();
    repo.expect_fetch_by_slug()
        .returning(|_| Err(AppError::QueryFailed("timeout".into())));

    let directory = ProjectDirectory::new(Some(repo));
    let project = directory.get_by_slug("data-stories").await.unwrap();

    assert_eq!(project.title, "Data Stories");
}

#[actix_rt::test]
async fn exhausted_remote_lookup_falls_back_to_static_list() {
    let mut repo = MockProjectRepo::new();
    repo.expect_fetch_by_slug().returning(|_| Ok(None));
    repo.expect_fetch_all().returning(|| Ok(Vec::new()));

    let directory = ProjectDirectory::new(Some(repo));
    let project = directory.get_by_slug("couture-lab").await.unwrap();

    assert_eq!(project.title, "Couture Lab");
}

#[actix_rt::test]
async fn unknown_slug_everywhere_returns_none() {
    let mut repo = MockProjectRepo::new();
    repo.expect_fetch_by_slug().returning(|_| Ok(None));
    repo.expect_fetch_all().returning(|| Ok(Vec::new()));

    let directory = ProjectDirectory::new(Some(repo));

    assert_eq!(directory.get_by_slug("does-not-exist").await, None);
}

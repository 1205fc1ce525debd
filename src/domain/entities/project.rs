use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::html::extract_img_src;

/// A portfolio entry as served to the site. Every field is present and
/// type-correct whether the record came from the remote source or the
/// embedded fallback list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub year: i32,
    pub role: String,
    pub cover: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A project row as the remote source actually stores it. Data entry has
/// been loose: `tags` arrives as a native array, a JSON-encoded string,
/// or a comma-joined string; `year` as a number or a numeric string;
/// `cover` as a plain URL or a pasted `<img>` fragment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectRow {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<Value>,
    #[serde(default)]
    pub year: Option<Value>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// Maps a loosely-typed stored row onto the fixed `Project` shape.
/// Total over every observed input shape; unrecoverable fields fall back
/// to defaults rather than erroring.
pub fn normalize_project_row(row: &ProjectRow) -> Project {
    Project {
        slug: row.slug.clone().unwrap_or_default(),
        title: row.title.clone().unwrap_or_default(),
        description: row.description.clone().unwrap_or_default(),
        tags: normalize_tags(row.tags.as_ref()),
        year: normalize_year(row.year.as_ref()),
        role: row.role.clone().unwrap_or_default(),
        cover: normalize_cover(row.cover.as_deref()),
        link: row.link.clone().filter(|l| !l.trim().is_empty()),
    }
}

fn normalize_tags(raw: Option<&Value>) -> Vec<String> {
    match raw {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str())
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect(),
        Some(Value::String(s)) => {
            // JSON-encoded arrays first, comma-joined strings second
            if let Ok(parsed) = serde_json::from_str::<Vec<String>>(s) {
                parsed
                    .into_iter()
                    .map(|tag| tag.trim().to_string())
                    .filter(|tag| !tag.is_empty())
                    .collect()
            } else {
                s.split(',')
                    .map(|tag| tag.trim().to_string())
                    .filter(|tag| !tag.is_empty())
                    .collect()
            }
        }
        _ => Vec::new(),
    }
}

fn normalize_year(raw: Option<&Value>) -> i32 {
    let current_year = Utc::now().year();

    match raw {
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|y| i32::try_from(y).ok())
            .unwrap_or(current_year),
        Some(Value::String(s)) => s.trim().parse::<i32>().unwrap_or(current_year),
        _ => current_year,
    }
}

fn normalize_cover(raw: Option<&str>) -> String {
    let cover = raw.unwrap_or_default();
    if cover.contains("<img") {
        extract_img_src(cover).unwrap_or_else(|| cover.to_string())
    } else {
        cover.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row_with_tags(tags: Value) -> ProjectRow {
        ProjectRow {
            slug: Some("couture-lab".into()),
            title: Some("Couture Lab".into()),
            tags: Some(tags),
            ..ProjectRow::default()
        }
    }

    #[test]
    fn tags_from_native_array_are_kept_in_order() {
        let project = normalize_project_row(&row_with_tags(json!(["Nuxt 3", "GSAP", "Three.js"])));
        assert_eq!(project.tags, vec!["Nuxt 3", "GSAP", "Three.js"]);
    }

    #[test]
    fn tags_from_json_encoded_string_are_parsed() {
        let project = normalize_project_row(&row_with_tags(json!(r#"["Vue 3","D3.js"]"#)));
        assert_eq!(project.tags, vec!["Vue 3", "D3.js"]);
    }

    #[test]
    fn tags_from_comma_joined_string_are_split_and_trimmed() {
        let project = normalize_project_row(&row_with_tags(json!("Nuxt 3, GSAP ,WebGL")));
        assert_eq!(project.tags, vec!["Nuxt 3", "GSAP", "WebGL"]);
    }

    #[test]
    fn missing_tags_become_an_empty_list() {
        let project = normalize_project_row(&ProjectRow::default());
        assert!(project.tags.is_empty());
    }

    #[test]
    fn year_from_number_is_kept() {
        let row = ProjectRow { year: Some(json!(2023)), ..ProjectRow::default() };
        assert_eq!(normalize_project_row(&row).year, 2023);
    }

    #[test]
    fn year_from_numeric_string_is_parsed() {
        let row = ProjectRow { year: Some(json!("2024")), ..ProjectRow::default() };
        assert_eq!(normalize_project_row(&row).year, 2024);
    }

    #[test]
    fn unparseable_year_defaults_to_current_calendar_year() {
        let row = ProjectRow { year: Some(json!("soon")), ..ProjectRow::default() };
        assert_eq!(normalize_project_row(&row).year, Utc::now().year());

        let row = ProjectRow::default();
        assert_eq!(normalize_project_row(&row).year, Utc::now().year());
    }

    #[test]
    fn cover_url_is_extracted_from_img_fragment() {
        let row = ProjectRow {
            cover: Some(r#"<p><img class="hero" src="https://cdn.example.com/1.jpg" alt=""></p>"#.into()),
            ..ProjectRow::default()
        };
        assert_eq!(normalize_project_row(&row).cover, "https://cdn.example.com/1.jpg");
    }

    #[test]
    fn plain_cover_url_is_unchanged() {
        let row = ProjectRow {
            cover: Some("https://cdn.example.com/2.jpg".into()),
            ..ProjectRow::default()
        };
        assert_eq!(normalize_project_row(&row).cover, "https://cdn.example.com/2.jpg");
    }

    #[test]
    fn empty_link_becomes_none() {
        let row = ProjectRow { link: Some("  ".into()), ..ProjectRow::default() };
        assert_eq!(normalize_project_row(&row).link, None);

        let row = ProjectRow { link: Some("https://dribbble.com/".into()), ..ProjectRow::default() };
        assert_eq!(normalize_project_row(&row).link.as_deref(), Some("https://dribbble.com/"));
    }
}

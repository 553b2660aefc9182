use crate::models::{default_catalog, Catalog};
use crate::roster::normalize_catalog;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info};

pub fn resolve_seed_path() -> Option<PathBuf> {
    env::var("ACTIVITIES_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

pub async fn load_catalog(path: Option<&Path>) -> Catalog {
    let Some(path) = path else {
        return default_catalog();
    };

    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<Catalog>(&bytes) {
            Ok(mut catalog) => {
                normalize_catalog(&mut catalog);
                info!(path = %path.display(), activities = catalog.len(), "loaded activity seed");
                catalog
            }
            Err(err) => {
                error!("failed to parse activity seed {}: {err}", path.display());
                default_catalog()
            }
        },
        Err(err) => {
            error!("failed to read activity seed {}: {err}", path.display());
            default_catalog()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_seed(name: &str, contents: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("activity_board_{}_{name}.json", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn no_seed_uses_builtin_catalog() {
        let catalog = load_catalog(None).await;
        assert!(catalog.contains_key("Chess Club"));
        assert_eq!(catalog, default_catalog());
    }

    #[tokio::test]
    async fn seed_file_replaces_builtin_catalog() {
        let path = temp_seed(
            "valid",
            r#"{"Robotics": {"description": "Build robots", "schedule": "Mondays", "max_participants": 4, "participants": ["ada@x.org", " pad@x.org ", " "]},
                "Choir": {"max_participants": 30}}"#,
        );
        let catalog = load_catalog(Some(path.as_path())).await;
        let _ = std::fs::remove_file(&path);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog["Robotics"].participants, vec!["ada@x.org", "pad@x.org"]);
        assert!(catalog["Choir"].participants.is_empty());
        assert_eq!(catalog["Choir"].schedule, "");
    }

    #[tokio::test]
    async fn unreadable_seed_falls_back() {
        let path = temp_seed("broken", "{ not json");
        let catalog = load_catalog(Some(path.as_path())).await;
        let _ = std::fs::remove_file(&path);
        assert_eq!(catalog, default_catalog());

        let missing = env::temp_dir().join("activity_board_missing_seed.json");
        assert_eq!(load_catalog(Some(missing.as_path())).await, default_catalog());
    }
}

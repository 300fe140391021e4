use crate::catalog::Shoe;
use crate::db::connection::{init_db, Database};
use chrono::{Duration, NaiveDateTime, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

/// Initialize a fresh test DB using the production schema
pub fn make_db() -> Database {
    let path = std::env::temp_dir().join(format!(
        "sole_catalog_test_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path.to_string_lossy().to_string());

    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    db
}

pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

pub fn days_ago(days: i64) -> NaiveDateTime {
    now() - Duration::days(days)
}

/// A plain full-price shoe released well outside the recency window.
pub fn test_shoe(slug: &str) -> Shoe {
    Shoe {
        slug: slug.to_string(),
        name: format!("Test Shoe {slug}"),
        image_src: format!("/static/shoes/{slug}.jpg"),
        price: 10000,
        sale_price: None,
        release_date: days_ago(400),
        num_of_colors: 1,
    }
}

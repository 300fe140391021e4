use crate::catalog::Shoe;
use crate::db::connection::Database;
use crate::errors::ServerError;
use rusqlite::{params, OptionalExtension};
use std::fs;

/// All shoes, newest first, for the catalog grid.
pub fn get_shoes(db: &Database) -> Result<Vec<Shoe>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(
                r#"
                SELECT slug, name, image_src, price, sale_price, release_date, num_of_colors
                FROM shoes
                ORDER BY release_date DESC, slug
                "#,
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(Shoe {
                    slug: row.get(0)?,
                    name: row.get(1)?,
                    image_src: row.get(2)?,
                    price: row.get(3)?,
                    sale_price: row.get(4)?,
                    release_date: row.get(5)?,
                    num_of_colors: row.get(6)?,
                })
            })
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
        }
        Ok(out)
    })
}

pub fn get_shoe_by_slug(db: &Database, slug: &str) -> Result<Option<Shoe>, ServerError> {
    db.with_conn(|conn| {
        conn.query_row(
            r#"
            SELECT slug, name, image_src, price, sale_price, release_date, num_of_colors
            FROM shoes
            WHERE slug = ?1
            "#,
            params![slug],
            |row| {
                Ok(Shoe {
                    slug: row.get(0)?,
                    name: row.get(1)?,
                    image_src: row.get(2)?,
                    price: row.get(3)?,
                    sale_price: row.get(4)?,
                    release_date: row.get(5)?,
                    num_of_colors: row.get(6)?,
                })
            },
        )
        .optional()
        .map_err(|e| ServerError::DbError(e.to_string()))
    })
}

/// Upsert keyed on slug so re-seeding refreshes rather than duplicates.
pub fn insert_shoe(db: &Database, shoe: &Shoe) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        conn.execute(
            r#"
            INSERT INTO shoes (slug, name, image_src, price, sale_price, release_date, num_of_colors)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT(slug) DO UPDATE SET
                name = excluded.name,
                image_src = excluded.image_src,
                price = excluded.price,
                sale_price = excluded.sale_price,
                release_date = excluded.release_date,
                num_of_colors = excluded.num_of_colors
            "#,
            params![
                shoe.slug,
                shoe.name,
                shoe.image_src,
                shoe.price,
                shoe.sale_price,
                shoe.release_date,
                shoe.num_of_colors,
            ],
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(())
    })
}

pub fn count_shoes(db: &Database) -> Result<i64, ServerError> {
    db.with_conn(|conn| {
        conn.query_row("SELECT COUNT(*) FROM shoes", [], |row| row.get(0))
            .map_err(|e| ServerError::DbError(e.to_string()))
    })
}

/// Load the seed fixture into an empty shoes table. A non-empty table is
/// left alone so local edits survive a restart.
pub fn seed_shoes(db: &Database, seed_path: &str) -> Result<usize, ServerError> {
    if count_shoes(db)? > 0 {
        return Ok(0);
    }

    let raw = fs::read_to_string(seed_path)
        .map_err(|e| ServerError::SeedError(format!("Failed to read {seed_path}: {e}")))?;

    let shoes: Vec<Shoe> = serde_json::from_str(&raw)
        .map_err(|e| ServerError::SeedError(format!("Bad seed JSON in {seed_path}: {e}")))?;

    for shoe in &shoes {
        insert_shoe(db, shoe)?;
    }

    println!("Seeded {} shoes from {seed_path}", shoes.len());
    Ok(shoes.len())
}

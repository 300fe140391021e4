use crate::db::Database;
use crate::db::shoes::{get_shoe_by_slug, get_shoes};
use crate::errors::{ResultResp, ServerError};
use crate::responses::{html_response, static_response};
use crate::templates;
use astra::Request;
use chrono::Utc;

pub fn handle(req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => {
            let shoes = get_shoes(db)?;
            // One timestamp per request so every card on the page agrees
            // on the "just released" cutoff.
            let now = Utc::now().naive_utc();
            html_response(templates::pages::catalog_page(&shoes, now))
        }

        ("GET", p) if p.starts_with("/shoe/") => {
            let slug = &p["/shoe/".len()..];
            if slug.is_empty() {
                return Err(ServerError::BadRequest("Missing shoe slug".into()));
            }
            match get_shoe_by_slug(db, slug)? {
                Some(shoe) => html_response(templates::pages::shoe_page(&shoe)),
                None => Err(ServerError::NotFound),
            }
        }

        ("GET", p) if p.starts_with("/static/") => static_response(p),

        _ => Err(ServerError::NotFound),
    }
}

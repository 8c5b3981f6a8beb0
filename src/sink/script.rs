//! SQL script renderer
//!
//! Renders a cleaned dataset as a self-contained SQL script: clear the
//! three tables (ratings first, respecting referential order), then one
//! single-line INSERT per row, then a count summary. The renderer never
//! touches a database and is deterministic apart from the banner
//! timestamp, which is cosmetic.
//!
//! The clear-then-insert preamble makes the script a full-table replace,
//! not an upsert: running it twice leaves exactly one copy of the data.

use crate::error::Result;
use crate::model::{Dataset, Movie, Rating, User};
use chrono::Local;
use std::fmt::Write as _;
use std::path::Path;

/// Render the dataset as a SQL script with a wall-clock banner
pub fn render_script(data: &Dataset) -> String {
    render_script_at(data, &Local::now().format("%Y-%m-%d %H:%M:%S").to_string())
}

/// Render the dataset with a fixed banner timestamp
pub fn render_script_at(data: &Dataset, generated_at: &str) -> String {
    let mut out = String::new();

    out.push_str("-- movielake - generated ETL script\n");
    let _ = writeln!(out, "-- Generated at: {generated_at}");
    out.push_str("-- Data cleaned and transformed from the data lake CSV files\n\n");

    // Full-table replace: ratings first so foreign references never dangle
    out.push_str("-- Clearing existing data\n");
    out.push_str("DELETE FROM ratings;\n");
    out.push_str("DELETE FROM movies;\n");
    out.push_str("DELETE FROM users;\n\n");

    out.push_str("-- Inserting users\n");
    for user in &data.users {
        out.push_str(&render_user(user));
        out.push('\n');
    }
    out.push('\n');

    out.push_str("-- Inserting movies\n");
    for movie in &data.movies {
        out.push_str(&render_movie(movie));
        out.push('\n');
    }
    out.push('\n');

    out.push_str("-- Inserting ratings\n");
    for rating in &data.ratings {
        out.push_str(&render_rating(rating));
        out.push('\n');
    }

    out.push_str("\n-- Load statistics\n");
    let _ = writeln!(out, "-- Users: {} inserted", data.users.len());
    let _ = writeln!(out, "-- Movies: {} inserted", data.movies.len());
    let _ = writeln!(out, "-- Ratings: {} inserted", data.ratings.len());

    out
}

/// Render the script and write it to a file
pub fn write_script(data: &Dataset, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, render_script(data))?;
    tracing::info!(
        path = %path.display(),
        users = data.users.len(),
        movies = data.movies.len(),
        ratings = data.ratings.len(),
        "wrote SQL script"
    );
    Ok(())
}

fn render_user(u: &User) -> String {
    format!(
        "INSERT INTO users (id, name, email, age, country, created_at) VALUES ({}, {}, {}, {}, {}, {});",
        u.id,
        sql_text(&u.name),
        sql_text(&u.email),
        u.age,
        sql_text(&u.country),
        sql_timestamp(u.created_at.as_deref())
    )
}

fn render_movie(m: &Movie) -> String {
    format!(
        "INSERT INTO movies (id, title, genre, release_year, director, country, duration, created_at) VALUES ({}, {}, {}, {}, {}, {}, {}, {});",
        m.id,
        sql_text(&m.title),
        sql_text(&m.genre),
        m.release_year,
        sql_text(&m.director),
        sql_text(&m.country),
        m.duration,
        sql_timestamp(m.created_at.as_deref())
    )
}

fn render_rating(r: &Rating) -> String {
    format!(
        "INSERT INTO ratings (id, movie_id, user_id, rating, comment, created_at) VALUES ({}, {}, {}, {}, {}, {});",
        r.id,
        r.movie_id,
        r.user_id,
        r.rating,
        sql_text(&r.comment),
        sql_timestamp(r.created_at.as_deref())
    )
}

/// Quote a text value, doubling embedded single quotes
fn sql_text(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Quote a timestamp when present and non-blank, else emit NOW()
fn sql_timestamp(value: Option<&str>) -> String {
    match value {
        Some(t) if !t.trim().is_empty() => sql_text(t),
        _ => "NOW()".to_string(),
    }
}

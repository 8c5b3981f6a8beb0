//! Warehouse loader
//!
//! Loads a cleaned dataset into a DuckDB warehouse inside one
//! transaction: clear the three tables in dependency order, insert all
//! users, movies, and ratings row by row, then commit. Any statement
//! failure aborts the whole load: the transaction is dropped without
//! committing, so none of the destructive DELETEs persist without their
//! inserts. The connection is released on every exit path.
//!
//! The loader assumes the three tables pre-exist with compatible types
//! and performs no migration. After a successful commit it reads back
//! row counts and basic quality metrics purely for reporting.

use crate::error::{Error, Result};
use crate::model::Dataset;
use chrono::Local;
use duckdb::{params, Connection};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

/// Reference schema for the three warehouse tables
///
/// The loader never executes this; it is a convenience for demos and
/// tests that need to provision an empty warehouse. Referential
/// integrity of rating foreign keys is deliberately left to whatever
/// constraints the operator's schema declares.
pub const WAREHOUSE_SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS users (
    id BIGINT PRIMARY KEY,
    name VARCHAR NOT NULL,
    email VARCHAR NOT NULL,
    age INTEGER NOT NULL,
    country VARCHAR NOT NULL,
    created_at TIMESTAMP
);
CREATE TABLE IF NOT EXISTS movies (
    id BIGINT PRIMARY KEY,
    title VARCHAR NOT NULL,
    genre VARCHAR NOT NULL,
    release_year INTEGER NOT NULL,
    director VARCHAR NOT NULL,
    country VARCHAR NOT NULL,
    duration INTEGER NOT NULL,
    created_at TIMESTAMP
);
CREATE TABLE IF NOT EXISTS ratings (
    id BIGINT PRIMARY KEY,
    movie_id BIGINT NOT NULL,
    user_id BIGINT NOT NULL,
    rating INTEGER NOT NULL,
    comment VARCHAR,
    created_at TIMESTAMP
);
";

/// A connection to the warehouse database
pub struct Warehouse {
    conn: Connection,
    location: String,
}

/// Counts and quality metrics read back after a successful load
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadReport {
    /// Users inserted by this load
    pub users_loaded: usize,
    /// Movies inserted by this load
    pub movies_loaded: usize,
    /// Ratings inserted by this load
    pub ratings_loaded: usize,
    /// Final user row count in the warehouse
    pub users_in_warehouse: i64,
    /// Final movie row count in the warehouse
    pub movies_in_warehouse: i64,
    /// Final rating row count in the warehouse
    pub ratings_in_warehouse: i64,
    /// Mean rating score across the warehouse
    pub average_rating: f64,
    /// Distinct users that rated at least one movie
    pub active_users: i64,
    /// Distinct movies with at least one rating
    pub rated_movies: i64,
}

impl LoadReport {
    /// Human-readable multi-line summary for operators
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("Warehouse load report\n");
        let _ = writeln!(
            out,
            "  users:   {} loaded, {} in warehouse",
            self.users_loaded, self.users_in_warehouse
        );
        let _ = writeln!(
            out,
            "  movies:  {} loaded, {} in warehouse",
            self.movies_loaded, self.movies_in_warehouse
        );
        let _ = writeln!(
            out,
            "  ratings: {} loaded, {} in warehouse",
            self.ratings_loaded, self.ratings_in_warehouse
        );
        let _ = writeln!(out, "  average rating: {:.2}", self.average_rating);
        let _ = writeln!(out, "  active users:   {}", self.active_users);
        let _ = writeln!(out, "  rated movies:   {}", self.rated_movies);
        out
    }
}

impl Warehouse {
    /// Open (or create) a file-backed warehouse database
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)
            .map_err(|e| Error::warehouse(format!("failed to open {}: {e}", path.display())))?;
        Ok(Self {
            conn,
            location: path.display().to_string(),
        })
    }

    /// Open an in-memory warehouse (tests and demos)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::warehouse(format!("failed to open in-memory database: {e}")))?;
        Ok(Self {
            conn,
            location: ":memory:".to_string(),
        })
    }

    /// Run arbitrary setup SQL (schema provisioning for demos and tests)
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        self.conn
            .execute_batch(sql)
            .map_err(|e| Error::warehouse(format!("setup failed: {e}")))
    }

    /// Row count of one warehouse table
    pub fn count(&self, table: &str) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {table}");
        Ok(self.conn.query_row(&sql, [], |row| row.get(0))?)
    }

    /// Where this warehouse lives (for logging)
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Replace the warehouse contents with the given dataset
    ///
    /// All-or-nothing: the DELETEs and every INSERT run inside a single
    /// transaction, committed only after the last row lands. On any error
    /// the transaction is dropped unreleased and the previous warehouse
    /// contents remain visible.
    pub fn load(&mut self, data: &Dataset) -> Result<LoadReport> {
        tracing::info!(location = %self.location, "loading warehouse");

        // Absent or blank timestamps load as "now", matching the script
        // renderer's NOW() literal.
        let now = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let tx = self.conn.transaction()?;

        // Dependency order: ratings reference movies and users
        tx.execute("DELETE FROM ratings", [])?;
        tx.execute("DELETE FROM movies", [])?;
        tx.execute("DELETE FROM users", [])?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO users (id, name, email, age, country, created_at) \
                 VALUES (?, ?, ?, ?, ?, ?)",
            )?;
            for u in &data.users {
                stmt.execute(params![
                    u.id,
                    u.name,
                    u.email,
                    u.age,
                    u.country,
                    timestamp_or(&u.created_at, &now)
                ])
                .map_err(|e| Error::warehouse(format!("failed to insert user {}: {e}", u.id)))?;
            }
        }

        {
            let mut stmt = tx.prepare(
                "INSERT INTO movies (id, title, genre, release_year, director, country, duration, created_at) \
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            )?;
            for m in &data.movies {
                stmt.execute(params![
                    m.id,
                    m.title,
                    m.genre,
                    m.release_year,
                    m.director,
                    m.country,
                    m.duration,
                    timestamp_or(&m.created_at, &now)
                ])
                .map_err(|e| Error::warehouse(format!("failed to insert movie {}: {e}", m.id)))?;
            }
        }

        {
            let mut stmt = tx.prepare(
                "INSERT INTO ratings (id, movie_id, user_id, rating, comment, created_at) \
                 VALUES (?, ?, ?, ?, ?, ?)",
            )?;
            for r in &data.ratings {
                stmt.execute(params![
                    r.id,
                    r.movie_id,
                    r.user_id,
                    r.rating,
                    r.comment,
                    timestamp_or(&r.created_at, &now)
                ])
                .map_err(|e| Error::warehouse(format!("failed to insert rating {}: {e}", r.id)))?;
            }
        }

        tx.commit()?;
        tracing::info!(
            users = data.users.len(),
            movies = data.movies.len(),
            ratings = data.ratings.len(),
            "warehouse load committed"
        );

        self.report(data)
    }

    /// Read back counts and quality metrics after a committed load
    fn report(&self, data: &Dataset) -> Result<LoadReport> {
        let average_rating: Option<f64> =
            self.conn
                .query_row("SELECT AVG(rating) FROM ratings", [], |row| row.get(0))?;
        let active_users: i64 =
            self.conn
                .query_row("SELECT COUNT(DISTINCT user_id) FROM ratings", [], |row| {
                    row.get(0)
                })?;
        let rated_movies: i64 =
            self.conn
                .query_row("SELECT COUNT(DISTINCT movie_id) FROM ratings", [], |row| {
                    row.get(0)
                })?;

        Ok(LoadReport {
            users_loaded: data.users.len(),
            movies_loaded: data.movies.len(),
            ratings_loaded: data.ratings.len(),
            users_in_warehouse: self.count("users")?,
            movies_in_warehouse: self.count("movies")?,
            ratings_in_warehouse: self.count("ratings")?,
            average_rating: average_rating.unwrap_or(0.0),
            active_users,
            rated_movies,
        })
    }
}

/// The stored timestamp: the row's own when present and non-blank,
/// otherwise the load-time fallback
fn timestamp_or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    match value.as_deref() {
        Some(t) if !t.trim().is_empty() => t,
        _ => fallback,
    }
}

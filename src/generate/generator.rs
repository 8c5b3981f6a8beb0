//! Synthetic data generation
//!
//! Produces the three raw collections with realistic shape: curated seed
//! titles padded with templated synthetic movies, users drawn from
//! weighted country and age distributions, and ratings biased by user
//! age and movie genre. A handful of defects is injected at fixed
//! positions so the cleaner always has something to do.
//!
//! Generation is driven by a seedable RNG: the same catalog, seed, and
//! sizes reproduce the same dataset.

use super::catalog::Catalog;
use crate::config::GeneratorConfig;
use crate::model::{Dataset, Movie, Rating, User};
use chrono::{Datelike, Duration, Local};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Synthetic dataset generator
pub struct Generator {
    catalog: Catalog,
    rng: StdRng,
}

impl Generator {
    /// Create a generator over the given catalog; `None` seeds from
    /// OS entropy
    pub fn new(catalog: Catalog, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { catalog, rng }
    }

    /// Generate all three collections, with defects injected
    pub fn generate(&mut self, sizes: &GeneratorConfig) -> Dataset {
        let movies = self.generate_movies(sizes.movies);
        let users = self.generate_users(sizes.users);
        let ratings = self.generate_ratings(&movies, &users, sizes.ratings);

        let mut data = Dataset {
            movies,
            users,
            ratings,
        };
        inject_defects(&mut data);

        tracing::info!(
            movies = data.movies.len(),
            users = data.users.len(),
            ratings = data.ratings.len(),
            "generated dataset"
        );
        data
    }

    /// Generate `n` movies: the catalog's seed titles first, synthetic
    /// titles after
    pub fn generate_movies(&mut self, n: usize) -> Vec<Movie> {
        let mut movies = Vec::with_capacity(n);

        let seeds: Vec<_> = self.catalog.seed_movies.iter().take(n).cloned().collect();
        for seed in &seeds {
            let id = movies.len() as i64 + 1;
            let primary = seed.genre.split(',').next().unwrap_or("Drama").trim();
            let duration = self.duration_for(primary);
            movies.push(Movie {
                id,
                title: seed.title.to_string(),
                genre: seed.genre.to_string(),
                release_year: seed.year,
                director: seed.director.to_string(),
                country: seed.country.to_string(),
                duration,
                created_at: Some(self.past_timestamp(365)),
            });
        }

        while movies.len() < n {
            let id = movies.len() as i64 + 1;
            movies.push(self.synthetic_movie(id));
        }

        movies
    }

    /// Generate `n` users from the weighted country and age tables
    pub fn generate_users(&mut self, n: usize) -> Vec<User> {
        let mut users = Vec::with_capacity(n);

        for id in 1..=n as i64 {
            let country = *pick_weighted(&mut self.rng, &self.catalog.user_country_weights);
            let band = {
                let weights: Vec<(usize, u32)> = self
                    .catalog
                    .age_bands
                    .iter()
                    .enumerate()
                    .map(|(i, b)| (i, b.weight))
                    .collect();
                self.catalog.age_bands[*pick_weighted(&mut self.rng, &weights)]
            };
            let age = self.rng.random_range(band.min..=band.max);

            let first = *self
                .catalog
                .first_names_for(country)
                .choose(&mut self.rng)
                .unwrap_or(&"Alex");
            let last = *self
                .catalog
                .last_names_for(country)
                .choose(&mut self.rng)
                .unwrap_or(&"Doe");
            let name = format!("{first} {last}");
            let email = format!("{}@email.com", name.to_lowercase().replace(' ', "."));

            users.push(User {
                id,
                name,
                email,
                age,
                country: country.to_string(),
                created_at: Some(self.past_timestamp(730)),
            });
        }

        users
    }

    /// Generate up to `max` ratings with per-user volume and bias
    pub fn generate_ratings(&mut self, movies: &[Movie], users: &[User], max: usize) -> Vec<Rating> {
        let mut ratings = Vec::new();
        if movies.is_empty() || users.is_empty() || max == 0 {
            return ratings;
        }

        let per_user_cap = (max / users.len()).max(1);
        let mut next_id: i64 = 1;

        'outer: for user in users {
            // Younger viewers rate generously, older ones are stricter
            let bias = if user.age < 25 {
                self.rng.random_range(0.8..1.2)
            } else if user.age > 50 {
                self.rng.random_range(0.7..1.0)
            } else {
                self.rng.random_range(0.9..1.1)
            };

            let count = self.rng.random_range(5..=50).min(per_user_cap);
            for _ in 0..count {
                let Some(movie) = movies.choose(&mut self.rng) else {
                    break 'outer;
                };
                let score = self.score_for(movie, bias);

                let comment = if self.rng.random_bool(0.3) {
                    self.comment_for(score, &movie.title)
                } else {
                    String::new()
                };

                ratings.push(Rating {
                    id: next_id,
                    movie_id: movie.id,
                    user_id: user.id,
                    rating: score,
                    comment,
                    created_at: Some(self.past_timestamp(365)),
                });
                next_id += 1;
                if next_id as usize > max {
                    break 'outer;
                }
            }
        }

        ratings
    }

    fn synthetic_movie(&mut self, id: i64) -> Movie {
        let genre = *pick_weighted(&mut self.rng, &self.catalog.genre_weights);
        let country = *pick_weighted(&mut self.rng, &self.catalog.movie_country_weights);

        let word = *self
            .catalog
            .title_words
            .choose(&mut self.rng)
            .unwrap_or(&"Midnight");
        let title = self
            .catalog
            .title_templates
            .get(genre)
            .and_then(|templates| templates.choose(&mut self.rng))
            .map_or_else(|| format!("The {word}"), |t| t.replace("{}", word));

        let director = self
            .catalog
            .directors_by_country
            .get(country)
            .and_then(|pool| pool.choose(&mut self.rng))
            .copied()
            .unwrap_or("Unknown Director");

        Movie {
            id,
            title,
            genre: genre.to_string(),
            release_year: self.rng.random_range(1960..=2023),
            director: director.to_string(),
            country: country.to_string(),
            duration: self.duration_for(genre),
            created_at: Some(self.past_timestamp(365)),
        }
    }

    fn duration_for(&mut self, primary_genre: &str) -> i32 {
        let (min, max) = self
            .catalog
            .duration_ranges
            .get(primary_genre)
            .copied()
            .unwrap_or((90, 120));
        self.rng.random_range(min..=max)
    }

    /// Score a movie for a biased viewer: genre adjustment, a recency
    /// bump, a classics bump, then noise, clamped into [1, 5]
    fn score_for(&mut self, movie: &Movie, bias: f64) -> i32 {
        let mut base = 3.0;
        base += self
            .catalog
            .genre_score_adjustments
            .get(movie.primary_genre())
            .copied()
            .unwrap_or(0.0);

        let current_year = Local::now().year();
        if movie.release_year > current_year - 10 {
            base += 0.2;
        } else if movie.release_year < current_year - 30 {
            base += 0.3;
        }

        let noisy = base * bias + self.rng.random_range(-0.5..0.5);
        (noisy.round() as i32).clamp(1, 5)
    }

    fn comment_for(&mut self, score: i32, title: &str) -> String {
        let pool = if score >= 4 {
            &self.catalog.positive_comments
        } else if score == 3 {
            &self.catalog.neutral_comments
        } else {
            &self.catalog.negative_comments
        };
        pool.choose(&mut self.rng)
            .map_or_else(String::new, |t| t.replace("{title}", title))
    }

    fn past_timestamp(&mut self, max_days_ago: i64) -> String {
        let days = self.rng.random_range(1..=max_days_ago);
        (Local::now() - Duration::days(days))
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}

/// Inject the defects raw lake data is expected to carry, at fixed
/// positions so downstream demos are reproducible
fn inject_defects(data: &mut Dataset) {
    if let Some(user) = data.users.get_mut(5) {
        user.age = 150;
    }
    if let Some(user) = data.users.get_mut(15) {
        user.email = "email_invalido".to_string();
    }
    if let Some(user) = data.users.get_mut(25) {
        user.country = String::new();
    }
    if let Some(user) = data.users.get_mut(35) {
        user.name = String::new();
    }

    if let Some(movie) = data.movies.get_mut(8) {
        movie.release_year = 2050;
    }
    if let Some(movie) = data.movies.get_mut(18) {
        movie.duration = -120;
    }
    if let Some(movie) = data.movies.get_mut(28) {
        movie.genre = String::new();
    }
    if let Some(movie) = data.movies.get_mut(38) {
        movie.title = String::new();
    }

    if let Some(rating) = data.ratings.get_mut(50) {
        rating.rating = 0;
    }
    if let Some(rating) = data.ratings.get_mut(150) {
        rating.rating = 6;
    }
    if let Some(rating) = data.ratings.get_mut(250) {
        rating.rating = 10;
    }
    // One duplicated (user, movie) pair under a fresh id, so the
    // last-write-wins rule has work to do
    if let Some(rating) = data.ratings.get(350) {
        let max_id = data.ratings.iter().map(|r| r.id).max().unwrap_or(0);
        let mut duplicate = rating.clone();
        duplicate.id = max_id + 1;
        data.ratings.push(duplicate);
    }
}

/// Pick from a weighted table; weights must not all be zero
fn pick_weighted<'a, T>(rng: &mut StdRng, items: &'a [(T, u32)]) -> &'a T {
    let total: u32 = items.iter().map(|(_, w)| w).sum();
    let mut roll = rng.random_range(0..total.max(1));
    for (item, weight) in items {
        if roll < *weight {
            return item;
        }
        roll -= weight;
    }
    &items[items.len() - 1].0
}

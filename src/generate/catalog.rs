//! Generation catalog
//!
//! All the flavor the generator draws from (seed titles, weighted
//! distributions, name pools, templates) lives in an immutable
//! [`Catalog`] value passed explicitly into the generator. Nothing here
//! is a module-level global, so alternative catalogs (or tiny test
//! catalogs) plug in without touching the generation logic.

use std::collections::HashMap;

/// A real movie used to seed the generated collection
#[derive(Debug, Clone)]
pub struct SeedMovie {
    /// Title
    pub title: &'static str,
    /// Release year
    pub year: i32,
    /// Comma-separated genre list
    pub genre: &'static str,
    /// Director
    pub director: &'static str,
    /// Production country
    pub country: &'static str,
}

/// A weighted age band for user generation
#[derive(Debug, Clone, Copy)]
pub struct AgeBand {
    /// Youngest age in the band
    pub min: i32,
    /// Oldest age in the band
    pub max: i32,
    /// Relative weight
    pub weight: u32,
}

/// Immutable lookup tables driving the generator
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Curated real movies emitted first
    pub seed_movies: Vec<SeedMovie>,
    /// Weighted genres for synthetic movies
    pub genre_weights: Vec<(&'static str, u32)>,
    /// Weighted production countries for synthetic movies
    pub movie_country_weights: Vec<(&'static str, u32)>,
    /// Weighted residence countries for users
    pub user_country_weights: Vec<(&'static str, u32)>,
    /// Weighted age bands for users
    pub age_bands: Vec<AgeBand>,
    /// Director pools keyed by country
    pub directors_by_country: HashMap<&'static str, Vec<&'static str>>,
    /// Runtime ranges (minutes) keyed by primary genre
    pub duration_ranges: HashMap<&'static str, (i32, i32)>,
    /// Base-score adjustments keyed by primary genre
    pub genre_score_adjustments: HashMap<&'static str, f64>,
    /// Synthetic title templates keyed by genre ("{}" is the slot)
    pub title_templates: HashMap<&'static str, Vec<&'static str>>,
    /// Words filled into title templates
    pub title_words: Vec<&'static str>,
    /// First-name pools keyed by country
    pub first_names: HashMap<&'static str, Vec<&'static str>>,
    /// Last-name pools keyed by country
    pub last_names: HashMap<&'static str, Vec<&'static str>>,
    /// Comment templates for scores of 4 and 5 ("{title}" is the slot)
    pub positive_comments: Vec<&'static str>,
    /// Comment templates for a score of 3
    pub neutral_comments: Vec<&'static str>,
    /// Comment templates for scores of 1 and 2
    pub negative_comments: Vec<&'static str>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The built-in demo catalog: a mix of Brazilian and international
    /// titles with realistic distributions
    pub fn builtin() -> Self {
        let seed_movies = vec![
            SeedMovie { title: "Cidade de Deus", year: 2002, genre: "Crime, Drama", director: "Fernando Meirelles", country: "Brasil" },
            SeedMovie { title: "Tropa de Elite", year: 2007, genre: "Action, Crime, Drama", director: "José Padilha", country: "Brasil" },
            SeedMovie { title: "Central do Brasil", year: 1998, genre: "Drama", director: "Walter Salles", country: "Brasil" },
            SeedMovie { title: "O Auto da Compadecida", year: 2000, genre: "Adventure, Comedy", director: "Guel Arraes", country: "Brasil" },
            SeedMovie { title: "Lisbela e o Prisioneiro", year: 2003, genre: "Comedy, Romance", director: "Guel Arraes", country: "Brasil" },
            SeedMovie { title: "Carandiru", year: 2003, genre: "Crime, Drama", director: "Hector Babenco", country: "Brasil" },
            SeedMovie { title: "The Godfather", year: 1972, genre: "Crime, Drama", director: "Francis Ford Coppola", country: "EUA" },
            SeedMovie { title: "Pulp Fiction", year: 1994, genre: "Crime, Drama", director: "Quentin Tarantino", country: "EUA" },
            SeedMovie { title: "The Shawshank Redemption", year: 1994, genre: "Drama", director: "Frank Darabont", country: "EUA" },
            SeedMovie { title: "Forrest Gump", year: 1994, genre: "Drama, Romance", director: "Robert Zemeckis", country: "EUA" },
            SeedMovie { title: "The Matrix", year: 1999, genre: "Action, Sci-Fi", director: "Lana Wachowski", country: "EUA" },
            SeedMovie { title: "Inception", year: 2010, genre: "Action, Adventure, Sci-Fi", director: "Christopher Nolan", country: "EUA" },
            SeedMovie { title: "The Dark Knight", year: 2008, genre: "Action, Crime, Drama", director: "Christopher Nolan", country: "EUA" },
            SeedMovie { title: "Goodfellas", year: 1990, genre: "Biography, Crime, Drama", director: "Martin Scorsese", country: "EUA" },
            SeedMovie { title: "Parasite", year: 2019, genre: "Comedy, Drama, Thriller", director: "Bong Joon-ho", country: "Coreia do Sul" },
            SeedMovie { title: "La La Land", year: 2016, genre: "Drama, Music, Romance", director: "Damien Chazelle", country: "EUA" },
            SeedMovie { title: "Get Out", year: 2017, genre: "Horror, Mystery, Thriller", director: "Jordan Peele", country: "EUA" },
            SeedMovie { title: "Titanic", year: 1997, genre: "Drama, Romance", director: "James Cameron", country: "EUA" },
            SeedMovie { title: "Jurassic Park", year: 1993, genre: "Action, Adventure, Sci-Fi", director: "Steven Spielberg", country: "EUA" },
            SeedMovie { title: "The Silence of the Lambs", year: 1991, genre: "Crime, Drama, Thriller", director: "Jonathan Demme", country: "EUA" },
        ];

        let genre_weights = vec![
            ("Drama", 25),
            ("Action", 20),
            ("Comedy", 18),
            ("Sci-Fi", 15),
            ("Crime", 12),
            ("Horror", 10),
        ];

        let movie_country_weights = vec![
            ("EUA", 40),
            ("Brasil", 20),
            ("Reino Unido", 15),
            ("Coreia do Sul", 10),
            ("Japão", 8),
            ("França", 7),
        ];

        let user_country_weights = vec![
            ("Brasil", 65),
            ("Portugal", 15),
            ("EUA", 8),
            ("Espanha", 5),
            ("Argentina", 4),
            ("Chile", 3),
        ];

        let age_bands = vec![
            AgeBand { min: 16, max: 24, weight: 25 },
            AgeBand { min: 25, max: 34, weight: 35 },
            AgeBand { min: 35, max: 44, weight: 20 },
            AgeBand { min: 45, max: 54, weight: 12 },
            AgeBand { min: 55, max: 70, weight: 8 },
        ];

        let directors_by_country = HashMap::from([
            ("Brasil", vec!["Fernando Meirelles", "José Padilha", "Walter Salles", "Guel Arraes"]),
            ("EUA", vec!["Steven Spielberg", "Martin Scorsese", "Christopher Nolan", "Quentin Tarantino"]),
            ("Reino Unido", vec!["Alfred Hitchcock", "Ridley Scott", "Danny Boyle"]),
            ("Coreia do Sul", vec!["Bong Joon-ho", "Park Chan-wook", "Kim Jee-woon"]),
            ("Japão", vec!["Akira Kurosawa", "Hayao Miyazaki", "Takashi Miike"]),
            ("França", vec!["Jean-Luc Godard", "François Truffaut", "Luc Besson"]),
        ]);

        let duration_ranges = HashMap::from([
            ("Action", (90, 150)),
            ("Drama", (100, 180)),
            ("Comedy", (85, 120)),
            ("Crime", (110, 160)),
            ("Sci-Fi", (120, 180)),
            ("Horror", (85, 120)),
        ]);

        let genre_score_adjustments = HashMap::from([
            ("Drama", 0.3),
            ("Comedy", 0.1),
            ("Action", -0.1),
            ("Sci-Fi", 0.2),
            ("Crime", 0.4),
            ("Horror", -0.2),
        ]);

        let title_templates = HashMap::from([
            ("Drama", vec!["The Last {}", "Shadows of {}", "Echoes of {}", "The {} Promise"]),
            ("Action", vec!["{} Rising", "The {} Protocol", "{} Run", "The {} Directive"]),
            ("Comedy", vec!["The {} Adventure", "{} Nights", "The {} Connection", "{} Party"]),
            ("Sci-Fi", vec!["{} Legacy", "The {} Paradox", "Beyond {}", "The {} Effect"]),
            ("Crime", vec!["The {} Syndicate", "{} City", "Street {}"]),
            ("Horror", vec!["The {} Curse", "Whispers of {}", "The {} House", "Dark {}"]),
        ]);

        let title_words = vec![
            "Midnight", "Sun", "Shadow", "Dream", "Echo", "Silent", "Final", "Lost",
        ];

        let first_names = HashMap::from([
            ("Brasil", vec!["João", "Maria", "Pedro", "Ana", "Carlos", "Juliana", "Lucas", "Fernanda"]),
            ("Portugal", vec!["António", "Maria", "João", "Ana", "Francisco", "Isabel", "Miguel", "Sofia"]),
            ("other", vec!["John", "Mary", "Robert", "Jennifer", "Michael", "Linda", "David", "Susan"]),
        ]);

        let last_names = HashMap::from([
            ("Brasil", vec!["Silva", "Santos", "Oliveira", "Souza", "Rodrigues", "Ferreira", "Alves"]),
            ("Portugal", vec!["Silva", "Santos", "Ferreira", "Costa", "Oliveira", "Rodrigues", "Martins"]),
            ("other", vec!["Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller"]),
        ]);

        let positive_comments = vec![
            "Excelente filme! {title} superou minhas expectativas.",
            "Adorei {title}. Atuações incríveis e roteiro envolvente.",
            "{title} é uma obra-prima. Recomendo muito!",
            "Que filme incrível! {title} merece todos os prêmios.",
        ];
        let neutral_comments = vec![
            "{title} é um filme decente. Vale a pena assistir.",
            "Bom filme, mas esperava mais de {title}.",
            "{title} tem momentos bons, mas poderia ser melhor.",
            "Entretenimento razoável. {title} cumpre seu propósito.",
        ];
        let negative_comments = vec![
            "{title} foi uma decepção. Não recomendo.",
            "Que desperdício de tempo! {title} é muito fraco.",
            "{title} tem uma premissa boa, mas a execução é péssima.",
            "Evitem {title}. Péssimo roteiro e atuações.",
        ];

        Self {
            seed_movies,
            genre_weights,
            movie_country_weights,
            user_country_weights,
            age_bands,
            directors_by_country,
            duration_ranges,
            genre_score_adjustments,
            title_templates,
            title_words,
            first_names,
            last_names,
            positive_comments,
            neutral_comments,
            negative_comments,
        }
    }

    /// First-name pool for a country, falling back to the generic pool
    pub fn first_names_for(&self, country: &str) -> &[&'static str] {
        self.first_names
            .get(country)
            .or_else(|| self.first_names.get("other"))
            .map_or(&[], Vec::as_slice)
    }

    /// Last-name pool for a country, falling back to the generic pool
    pub fn last_names_for(&self, country: &str) -> &[&'static str] {
        self.last_names
            .get(country)
            .or_else(|| self.last_names.get("other"))
            .map_or(&[], Vec::as_slice)
    }
}

//! Bipartite actor/movie collaboration graph and shortest-connection search.
//!
//! Actors and movies live in two arenas addressed by [`ActorId`] and
//! [`MovieId`]. Adjacency order is insertion order and is observable: it
//! decides which of several equally short connections a search reports.

use crate::domain::query::{QueryOutcome, resolve_endpoints};
use std::collections::{HashMap, VecDeque};
use std::fmt;
use tracing::debug;

/// Separator between a movie title and its release year in the movie key.
pub const MOVIE_KEY_SEPARATOR: &str = "#@";

/// Index of an actor in the collaboration graph arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(u32);

impl ActorId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index of a movie in the collaboration graph arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MovieId(u32);

impl MovieId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Build the identity of a movie: the same title in another year is another movie.
pub fn movie_key(title: &str, year: i32) -> String {
    format!("{}{}{}", title, MOVIE_KEY_SEPARATOR, year)
}

#[derive(Debug, Clone)]
pub struct Actor {
    pub name: String,
    movies: Vec<MovieId>,
}

impl Actor {
    /// Movies this actor appeared in, in the order the appearances were added.
    pub fn movies(&self) -> &[MovieId] {
        &self.movies
    }
}

#[derive(Debug, Clone)]
pub struct Movie {
    /// `Title#@Year`
    pub key: String,
    cast: Vec<ActorId>,
}

impl Movie {
    /// Actors in this movie, in the order the appearances were added.
    pub fn cast(&self) -> &[ActorId] {
        &self.cast
    }
}

/// One step of an [`ActorPath`]: the movie shared with the previous actor, then the actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathHop {
    pub movie: String,
    pub actor: String,
}

/// A chain of actors linked by shared movies.
///
/// Renders as `(A)--[Title#@Year]-->(B)--[Other#@Year]-->(C)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorPath {
    pub origin: String,
    pub hops: Vec<PathHop>,
}

impl ActorPath {
    /// Number of movies crossed.
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// Actor names from origin to destination.
    pub fn actors(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.origin.as_str()).chain(self.hops.iter().map(|h| h.actor.as_str()))
    }

    pub fn destination(&self) -> &str {
        self.hops.last().map(|h| h.actor.as_str()).unwrap_or(&self.origin)
    }
}

impl fmt::Display for ActorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.origin)?;
        for hop in &self.hops {
            write!(f, "--[{}]-->({})", hop.movie, hop.actor)?;
        }
        Ok(())
    }
}

/// Collaboration Graph - actors linked through the movies they share
#[derive(Debug, Clone, Default)]
pub struct CollaborationGraph {
    actors: Vec<Actor>,
    movies: Vec<Movie>,
    actor_index: HashMap<String, ActorId>,
    movie_index: HashMap<String, MovieId>,
}

impl CollaborationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `actor` appeared in `title` released in `year`.
    ///
    /// Creates the actor and movie on first sight and links them both ways.
    /// Returns false when the link already existed.
    pub fn add_appearance(&mut self, actor: &str, title: &str, year: i32) -> bool {
        let actor_id = self.get_or_create_actor(actor);
        let movie_id = self.get_or_create_movie(title, year);

        if self.movies[movie_id.index()].cast.contains(&actor_id) {
            return false;
        }
        self.actors[actor_id.index()].movies.push(movie_id);
        self.movies[movie_id.index()].cast.push(actor_id);
        true
    }

    fn get_or_create_actor(&mut self, name: &str) -> ActorId {
        if let Some(&id) = self.actor_index.get(name) {
            return id;
        }
        let id = ActorId(self.actors.len() as u32);
        self.actors.push(Actor {
            name: name.to_string(),
            movies: Vec::new(),
        });
        self.actor_index.insert(name.to_string(), id);
        id
    }

    fn get_or_create_movie(&mut self, title: &str, year: i32) -> MovieId {
        let key = movie_key(title, year);
        if let Some(&id) = self.movie_index.get(&key) {
            return id;
        }
        let id = MovieId(self.movies.len() as u32);
        self.movie_index.insert(key.clone(), id);
        self.movies.push(Movie {
            key,
            cast: Vec::new(),
        });
        id
    }

    pub fn get_actor_by_name(&self, name: &str) -> Option<ActorId> {
        self.actor_index.get(name).copied()
    }

    pub fn get_movie_by_key(&self, key: &str) -> Option<MovieId> {
        self.movie_index.get(key).copied()
    }

    pub fn actor(&self, id: ActorId) -> &Actor {
        &self.actors[id.index()]
    }

    pub fn movie(&self, id: MovieId) -> &Movie {
        &self.movies[id.index()]
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Number of actor/movie links.
    pub fn appearance_count(&self) -> usize {
        self.actors.iter().map(|a| a.movies.len()).sum()
    }

    /// Find the shortest chain of shared movies from `from` to `to` (breadth-first).
    ///
    /// Actors are marked visited when enqueued, and each movie is expanded at
    /// most once, so among equally short chains the one reported follows the
    /// stored movie order of each expanded actor, then the cast order of that movie.
    pub fn find_path(&self, from: &str, to: &str) -> QueryOutcome<ActorPath> {
        let (start, goal) = match resolve_endpoints(from, to, |name| self.get_actor_by_name(name)) {
            Ok(endpoints) => endpoints,
            Err(reason) => {
                debug!(from, to, %reason, "actor path query skipped");
                return QueryOutcome::Invalid(reason);
            }
        };

        let mut visited_actors = vec![false; self.actors.len()];
        let mut expanded_movies = vec![false; self.movies.len()];
        let mut came_from: Vec<Option<(ActorId, MovieId)>> = vec![None; self.actors.len()];
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            if current == goal {
                return QueryOutcome::Found(self.reconstruct(start, goal, &came_from));
            }
            visited_actors[current.index()] = true;

            for &movie in &self.actors[current.index()].movies {
                if expanded_movies[movie.index()] {
                    continue;
                }
                expanded_movies[movie.index()] = true;

                for &co_star in &self.movies[movie.index()].cast {
                    if visited_actors[co_star.index()] {
                        continue;
                    }
                    visited_actors[co_star.index()] = true;
                    came_from[co_star.index()] = Some((current, movie));
                    queue.push_back(co_star);
                }
            }
        }

        debug!(from, to, "no actor path");
        QueryOutcome::NoPath
    }

    fn reconstruct(
        &self,
        start: ActorId,
        goal: ActorId,
        came_from: &[Option<(ActorId, MovieId)>],
    ) -> ActorPath {
        let mut hops = Vec::new();
        let mut current = goal;
        while current != start {
            // Every actor reached after the start has a predecessor.
            let Some((previous, movie)) = came_from[current.index()] else {
                break;
            };
            hops.push(PathHop {
                movie: self.movies[movie.index()].key.clone(),
                actor: self.actors[current.index()].name.clone(),
            });
            current = previous;
        }
        hops.reverse();

        ActorPath {
            origin: self.actors[start.index()].name.clone(),
            hops,
        }
    }
}

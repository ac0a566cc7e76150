#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod document;
pub mod entity;
pub mod error;
pub mod history;
pub mod id_generator;
pub mod primes;
pub mod stack;
pub mod sync;
pub mod table;

pub use config::StoreConfig;
pub use document::Document;
pub use entity::{Entity, Shape, ShapeGeometry, ShapeKind, Style};
pub use error::{ConfigError, PrimeError, StackError, StoreError, StoreResult};
pub use history::EntityHistory;
pub use id_generator::EntityId;
pub use primes::{growth_sequence, sieve, PrimeTable, Sieve};
pub use stack::{ArrayStack, EntityStack, LinkedStack};
pub use table::EntityHashTable;

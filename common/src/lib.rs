//! Abnormality Catalog Common Library
//!
//! CLIとWeb(WASM)で共有される型・表示リスト算出・詳細パネル組み立て

pub mod api;
pub mod card;
pub mod detail;
pub mod error;
pub mod favorites;
pub mod identity;
pub mod parser;
pub mod rating;
pub mod state;
pub mod storage;
pub mod types;
pub mod view_model;

pub use card::{format_percent, format_rating, CardView, GridView, NO_RESULTS_TEXT};
pub use detail::{DetailPanel, DetailTab, ObservationSection, ResistanceClass, TabState};
pub use error::{Error, Result};
pub use favorites::{load_favorites, save_favorites, Favorites, FavoritesStore};
pub use identity::ensure_user_id;
pub use parser::{parse_catalog, parse_ratings, validate_catalog};
pub use rating::{RateRequest, RatingValue};
pub use state::{Action, AppState, CatalogStatus, Effect};
pub use storage::{KeyValueStore, MemoryStore};
pub use types::{Entity, RatingAggregate, Ratings, RiskLevel, WorkType};
pub use view_model::{compute, Filter, SortKey, ViewState};

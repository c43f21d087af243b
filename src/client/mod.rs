//! Traffic-Data-Client: Port, Fehlertaxonomie und Live-Implementierung.

pub mod fetch;
pub mod http;

use std::future::Future;
use std::pin::Pin;

use crate::core::{Category, CoordinateParseError, Item, ItemDetail};

pub use fetch::FetchService;
pub use http::HttpTrafficClient;

/// Boxed Future fuer Port-Methoden.
pub type ApiFuture<T> = Pin<Box<dyn Future<Output = Result<T, TrafficError>> + Send>>;

/// Port zur externen Autobahn-API.
///
/// Die Live-Implementierung ist `HttpTrafficClient`; Tests koennen einen
/// Fake einhaengen, da der Controller nur Completion-Intents konsumiert.
pub trait TrafficApi: Send + Sync {
    /// Laedt die Liste aller Autobahn-Kennungen.
    fn fetch_roads(&self) -> ApiFuture<Vec<String>>;
    /// Laedt die Items einer Kategorie fuer einen Autobahn-Abschnitt.
    fn fetch_items(&self, road: String, category: Category) -> ApiFuture<Vec<Item>>;
    /// Laedt den Detail-Datensatz eines Items.
    fn fetch_detail(&self, category: Category, identifier: String) -> ApiFuture<ItemDetail>;
}

/// Fehlertaxonomie der API-Zugriffe.
#[derive(Debug, thiserror::Error)]
pub enum TrafficError {
    /// Request fehlgeschlagen oder Timeout.
    #[error("Netzwerkfehler: {detail}")]
    Network {
        /// Beschreibung des Transportfehlers
        detail: String,
    },

    /// Kein Datensatz unter der angefragten Kennung (HTTP 404).
    #[error("Kein Datensatz fuer '{resource}'")]
    NotFound {
        /// Angefragte Ressource (Road-ID oder Item-Identifier)
        resource: String,
    },

    /// Antwort nicht dekodierbar (JSON, Koordinate oder Feldformat).
    #[error("Antwort nicht parsebar: {detail}")]
    Parse {
        /// Beschreibung des Dekodier-Fehlers
        detail: String,
    },
}

impl From<reqwest::Error> for TrafficError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TrafficError::Parse {
                detail: err.to_string(),
            }
        } else {
            TrafficError::Network {
                detail: err.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for TrafficError {
    fn from(err: serde_json::Error) -> Self {
        TrafficError::Parse {
            detail: err.to_string(),
        }
    }
}

impl From<CoordinateParseError> for TrafficError {
    fn from(err: CoordinateParseError) -> Self {
        TrafficError::Parse {
            detail: err.to_string(),
        }
    }
}

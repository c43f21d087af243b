//! Hintergrund-Dispatch der API-Abrufe.
//!
//! Die UI laeuft single-threaded; alle Netzwerk-I/O wird auf einer eigenen
//! tokio-Runtime ausgefuehrt. Ergebnisse laufen als `AppIntent` ueber einen
//! mpsc-Kanal zurueck in die Event-Schleife und werden dort wie jedes
//! andere UI-Ereignis verarbeitet.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use crate::app::AppIntent;
use crate::core::Category;

use super::TrafficApi;

/// Callback zum Aufwecken der UI nach einer abgeschlossenen Completion.
pub type RepaintNotifier = Arc<dyn Fn() + Send + Sync>;

/// Dispatcht API-Abrufe auf eine tokio-Runtime und liefert Completions als
/// Intents zurueck.
pub struct FetchService {
    api: Arc<dyn TrafficApi>,
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppIntent>,
    notifier: Option<RepaintNotifier>,
}

impl FetchService {
    /// Erstellt den Service mit eigener Runtime.
    pub fn new(api: Arc<dyn TrafficApi>, tx: Sender<AppIntent>) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .thread_name("traffic-fetch")
            .build()?;

        Ok(Self {
            api,
            runtime,
            tx,
            notifier: None,
        })
    }

    /// Setzt einen Notifier, der nach jeder Completion aufgerufen wird
    /// (z.B. `egui::Context::request_repaint`).
    pub fn with_notifier(mut self, notifier: RepaintNotifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    fn deliver(tx: &Sender<AppIntent>, notifier: &Option<RepaintNotifier>, intent: AppIntent) {
        // Send schlaegt nur fehl wenn die UI bereits beendet ist.
        if tx.send(intent).is_err() {
            log::debug!("Completion verworfen: Empfaenger geschlossen");
            return;
        }
        if let Some(notify) = notifier {
            notify();
        }
    }

    /// Laedt die Autobahn-Liste.
    pub fn fetch_roads(&self) {
        let api = self.api.clone();
        let tx = self.tx.clone();
        let notifier = self.notifier.clone();

        self.runtime.spawn(async move {
            let intent = match api.fetch_roads().await {
                Ok(roads) => AppIntent::RoadsLoaded { roads },
                Err(e) => AppIntent::RoadsLoadFailed {
                    error: e.to_string(),
                },
            };
            Self::deliver(&tx, &notifier, intent);
        });
    }

    /// Laedt die Items einer Kategorie unter der angegebenen Epoche.
    pub fn fetch_category(&self, road: String, category: Category, epoch: u64) {
        let api = self.api.clone();
        let tx = self.tx.clone();
        let notifier = self.notifier.clone();

        self.runtime.spawn(async move {
            let intent = match api.fetch_items(road.clone(), category).await {
                Ok(items) => AppIntent::CategoryRowsLoaded {
                    category,
                    road,
                    epoch,
                    items,
                },
                Err(e) => AppIntent::CategoryLoadFailed {
                    category,
                    road,
                    epoch,
                    error: e.to_string(),
                },
            };
            Self::deliver(&tx, &notifier, intent);
        });
    }

    /// Laedt den Detail-Datensatz eines Items unter der angegebenen Epoche.
    pub fn fetch_detail(&self, category: Category, identifier: String, epoch: u64) {
        let api = self.api.clone();
        let tx = self.tx.clone();
        let notifier = self.notifier.clone();

        self.runtime.spawn(async move {
            let intent = match api.fetch_detail(category, identifier.clone()).await {
                Ok(detail) => AppIntent::DetailLoaded {
                    category,
                    identifier,
                    epoch,
                    detail,
                },
                Err(e) => AppIntent::DetailLoadFailed {
                    category,
                    identifier,
                    epoch,
                    error: e.to_string(),
                },
            };
            Self::deliver(&tx, &notifier, intent);
        });
    }
}

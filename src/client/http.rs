//! Live-Client gegen die oeffentliche Autobahn-API (reqwest).
//!
//! Jeder Request laeuft mit explizitem Timeout und begrenztem Retry
//! mit Backoff fuer Netzwerkfehler.

use std::time::Duration;

use serde_json::Value;

use crate::core::{Category, Item, ItemDetail};
use crate::shared::DashboardOptions;

use super::{ApiFuture, TrafficApi, TrafficError};

/// HTTP-Client fuer die Autobahn-API.
#[derive(Clone)]
pub struct HttpTrafficClient {
    client: reqwest::Client,
    base_url: String,
    retry_count: u32,
    retry_backoff: Duration,
}

impl HttpTrafficClient {
    /// Erstellt den Client aus den Laufzeit-Optionen.
    pub fn new(options: &DashboardOptions) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(options.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: options.api_base_url.trim_end_matches('/').to_string(),
            retry_count: options.retry_count,
            retry_backoff: Duration::from_millis(options.retry_backoff_ms),
        })
    }

    /// URL der Roads-Liste.
    pub fn roads_url(&self) -> String {
        self.base_url.clone()
    }

    /// URL des Listen-Endpunkts einer Kategorie.
    pub fn list_url(&self, road: &str, category: Category) -> String {
        format!(
            "{}/{}/services/{}",
            self.base_url,
            road,
            category.service_slug()
        )
    }

    /// URL des Detail-Endpunkts eines Items.
    pub fn detail_url(&self, category: Category, identifier: &str) -> String {
        format!(
            "{}/details/{}/{}",
            self.base_url,
            category.service_slug(),
            identifier
        )
    }

    /// GET mit begrenztem Retry. 404 wird nie wiederholt, alle anderen
    /// Fehler bis zu `retry_count` mal mit Backoff.
    async fn get_json(&self, url: String, resource: String) -> Result<Value, TrafficError> {
        let mut last_error = TrafficError::Network {
            detail: "kein Versuch unternommen".to_string(),
        };

        for attempt in 0..=self.retry_count {
            if attempt > 0 {
                log::debug!("Retry {}/{} fuer {}", attempt, self.retry_count, url);
                tokio::time::sleep(self.retry_backoff).await;
            }

            match self.client.get(&url).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status == reqwest::StatusCode::NOT_FOUND {
                        return Err(TrafficError::NotFound { resource });
                    }
                    if !status.is_success() {
                        last_error = TrafficError::Network {
                            detail: format!("HTTP {} fuer {}", status.as_u16(), url),
                        };
                        continue;
                    }
                    return response.json::<Value>().await.map_err(TrafficError::from);
                }
                Err(e) => {
                    last_error = TrafficError::from(e);
                }
            }
        }

        Err(last_error)
    }
}

/// Extrahiert das Item-Array aus der Listen-Antwort.
///
/// Die API liefert `{ "<list_key>": [...] }`; fehlt der Schluessel, meldet
/// der Endpunkt schlicht keine Eintraege fuer diesen Abschnitt.
fn decode_item_list(value: Value, category: Category) -> Result<Vec<Item>, TrafficError> {
    let mut value = value;
    let is_object = value.is_object();
    match value.get_mut(category.list_key()) {
        Some(items) => Ok(serde_json::from_value(items.take())?),
        None if is_object => Ok(Vec::new()),
        None => Err(TrafficError::Parse {
            detail: format!("Listen-Antwort fuer {:?} ist kein Objekt", category),
        }),
    }
}

/// Extrahiert den Detail-Datensatz aus der Detail-Antwort.
///
/// Toleriert sowohl den Umschlag `{ "<detail_key>": {...} }` als auch das
/// nackte Objekt.
fn decode_detail(value: Value, category: Category) -> Result<ItemDetail, TrafficError> {
    let mut value = value;
    match value.get_mut(category.detail_key()) {
        Some(detail) => Ok(serde_json::from_value(detail.take())?),
        None => Ok(serde_json::from_value(value)?),
    }
}

impl TrafficApi for HttpTrafficClient {
    fn fetch_roads(&self) -> ApiFuture<Vec<String>> {
        let this = self.clone();
        Box::pin(async move {
            let mut value = this
                .get_json(this.roads_url(), "roads".to_string())
                .await?;
            match value.get_mut("roads") {
                Some(roads) => Ok(serde_json::from_value(roads.take())?),
                None => Err(TrafficError::Parse {
                    detail: "Roads-Antwort ohne 'roads'-Schluessel".to_string(),
                }),
            }
        })
    }

    fn fetch_items(&self, road: String, category: Category) -> ApiFuture<Vec<Item>> {
        let this = self.clone();
        Box::pin(async move {
            let url = this.list_url(&road, category);
            let value = this.get_json(url, road).await?;
            decode_item_list(value, category)
        })
    }

    fn fetch_detail(&self, category: Category, identifier: String) -> ApiFuture<ItemDetail> {
        let this = self.clone();
        Box::pin(async move {
            let url = this.detail_url(category, &identifier);
            let value = this.get_json(url, identifier).await?;
            decode_detail(value, category)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> HttpTrafficClient {
        HttpTrafficClient::new(&DashboardOptions::default()).expect("Client sollte baubar sein")
    }

    #[test]
    fn list_url_uses_service_slug() {
        let client = client();
        assert_eq!(
            client.list_url("A1", Category::ChargingStation),
            "https://verkehr.autobahn.de/o/autobahn/A1/services/electric_charging_station"
        );
    }

    #[test]
    fn detail_url_uses_service_slug() {
        let client = client();
        assert_eq!(
            client.detail_url(Category::Webcam, "WC-1"),
            "https://verkehr.autobahn.de/o/autobahn/details/webcam/WC-1"
        );
    }

    #[test]
    fn decode_item_list_reads_category_key() {
        let value = json!({
            "roadworks": [
                { "identifier": "RW-1", "title": "A1", "subtitle": "", "isBlocked": false }
            ]
        });
        let items = decode_item_list(value, Category::Roadwork).expect("Liste dekodierbar");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].identifier, "RW-1");
    }

    #[test]
    fn decode_item_list_treats_missing_key_as_empty() {
        let items = decode_item_list(json!({}), Category::Closure).expect("leere Liste");
        assert!(items.is_empty());
    }

    #[test]
    fn decode_detail_accepts_envelope_and_bare_object() {
        let bare = json!({
            "identifier": "RW-1",
            "coordinate": { "lat": "51.0", "long": "10.0" }
        });
        let wrapped = json!({ "roadworkDetails": bare.clone() });

        let from_bare = decode_detail(bare, Category::Roadwork).expect("nacktes Objekt");
        let from_wrapped = decode_detail(wrapped, Category::Roadwork).expect("Umschlag");
        assert_eq!(from_bare.identifier, from_wrapped.identifier);
    }
}

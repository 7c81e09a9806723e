//! Listing page -> menu selection -> weekly menu page -> today's summary.

use reqwest::Client;
use scraper::Html;
use serde::Serialize;

use crate::{
    config::Source,
    error::{Error, Page},
    fetch::fetch_page,
    parse::{DailyMenu, Listing},
    reference_date::ReferenceDate,
    select::select_menu,
    summary,
};

/// Shown when an error has nothing to say for itself.
const FALLBACK_ERROR: &str = "Napaka pri nalaganju jedilnika.";

/// Today's menu, ready to be shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundMenu {
    pub menu: String,
    pub menu_title: String,
    pub source_url: String,
    pub date_range: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Found(FoundMenu),
    Failed { error: String },
}

/// The JSON body returned to callers. Failures are reported here, never
/// through the HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuResponse {
    success: bool,
    #[serde(flatten)]
    outcome: Outcome,
}

impl MenuResponse {
    pub fn failure(error: &Error) -> Self {
        Self {
            success: false,
            outcome: Outcome::Failed {
                error: message_or_fallback(error.to_string()),
            },
        }
    }

    pub const fn is_success(&self) -> bool {
        self.success
    }

    pub const fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

impl From<crate::Result<FoundMenu>> for MenuResponse {
    fn from(result: crate::Result<FoundMenu>) -> Self {
        match result {
            Ok(found) => Self {
                success: true,
                outcome: Outcome::Found(found),
            },
            Err(e) => Self::failure(&e),
        }
    }
}

fn message_or_fallback(message: String) -> String {
    if message.trim().is_empty() {
        FALLBACK_ERROR.to_owned()
    } else {
        message
    }
}

#[derive(Debug, Clone)]
pub struct Pipeline {
    client: Client,
    source: Source,
}

impl Pipeline {
    pub const fn new(client: Client, source: Source) -> Self {
        Self { client, source }
    }

    pub async fn todays_menu(&self) -> MenuResponse {
        self.menu_for(ReferenceDate::now()).await
    }

    /// Never fails; every error ends up in the response body.
    pub async fn menu_for(&self, today: ReferenceDate) -> MenuResponse {
        let response = MenuResponse::from(self.try_menu_for(today).await);
        if let Outcome::Failed { error } = response.outcome() {
            log::warn!("No menu for {}: {error}", today.date());
        }
        response
    }

    async fn try_menu_for(&self, today: ReferenceDate) -> crate::Result<FoundMenu> {
        let listing_html = fetch_page(&self.client, &self.source.listing, Page::Listing).await?;
        // Html is not Send, so it must not live across an await
        let listing = {
            let document = Html::parse_document(&listing_html);
            Listing::from_html_element(document.root_element(), &self.source.base)
        };
        if listing.is_empty() {
            log::warn!("No menu links on {}", self.source.listing);
        }
        log::debug!(
            "Found {} dated and {} undated menu links",
            listing.entries().len(),
            listing.fallbacks().len()
        );

        let selection = select_menu(&listing, &today).ok_or(Error::NoMenu)?;
        let url = selection.url().clone();
        let title = selection.title().to_owned();
        log::info!("Using {title:?} at {url} for {}", today.date());

        let menu_html = fetch_page(&self.client, &url, Page::WeeklyMenu).await?;
        let daily_menu = {
            let document = Html::parse_document(&menu_html);
            DailyMenu::from_html_element(document.root_element(), today.day_code())?
        };

        Ok(FoundMenu {
            menu: summary::render(&daily_menu, &today, &title),
            date_range: summary::date_range(&title).map(ToOwned::to_owned),
            menu_title: title,
            source_url: url.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;
    use std::fs;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::fetch::{make_client, USER_AGENT};

    fn day(y: i32, m: u32, d: u32) -> ReferenceDate {
        ReferenceDate::from_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn pipeline_for(server: &MockServer) -> Pipeline {
        let base: Url = server.uri().parse().unwrap();
        let listing = base.join("/prehrana/").unwrap();
        Pipeline::new(make_client(USER_AGENT).unwrap(), Source { base, listing })
    }

    async fn serve_html(server: &MockServer, at: &str, status: u16, body: String) {
        Mock::given(method("GET"))
            .and(path(at))
            .respond_with(
                ResponseTemplate::new(status).set_body_raw(body, "text/html; charset=utf-8"),
            )
            .mount(server)
            .await;
    }

    async fn school_site() -> MockServer {
        let server = MockServer::start().await;
        let listing =
            fs::read_to_string("./src/parse/html_examples/listing/prehrana.html").unwrap();
        let weekly =
            fs::read_to_string("./src/parse/html_examples/menu_page/jedilnik.html").unwrap();
        serve_html(&server, "/prehrana/", 200, listing).await;
        serve_html(&server, "/prehrana/jedilnik/jedilnik-431/", 200, weekly.clone()).await;
        serve_html(&server, "/prehrana/jedilnik/jedilnik-432/", 200, weekly).await;
        server
    }

    fn expect_failure(response: &MenuResponse) -> &str {
        match response.outcome() {
            Outcome::Failed { error } => error,
            Outcome::Found(found) => panic!("expected a failure, got {found:?}"),
        }
    }

    #[tokio::test]
    async fn test_friday_menu() {
        let server = school_site().await;
        let response = pipeline_for(&server).menu_for(day(2026, 1, 16)).await;

        assert!(response.is_success());
        let Outcome::Found(found) = response.outcome() else {
            panic!("expected a menu, got {response:?}");
        };
        assert!(found.menu.starts_with("🍽️ Kosilo za petek, 16.01.2026\n"));
        assert!(found.menu.contains("\nPET, 16.01\n"));
        assert!(found
            .menu
            .contains("🥗 MALICA: pirin kruh (G) | topljeni sir (L) | kisla kumarica\n"));
        assert!(found
            .menu
            .contains("🍝 KOSILO: ribji file (R) | krompirjeva solata | sladoled (L, J)\n"));
        assert!(found.menu.contains("🍎 POP. MALICA: mandarina\n"));
        assert_eq!(found.menu_title, "Jedilnik 12.1.–16.1. 2026");
        assert_eq!(
            found.source_url,
            format!("{}/prehrana/jedilnik/jedilnik-431/", server.uri())
        );
        assert_eq!(found.date_range.as_deref(), Some("12.1.–16.1. 2026"));
    }

    #[tokio::test]
    async fn test_json_envelope() {
        let server = school_site().await;
        let response = pipeline_for(&server).menu_for(day(2026, 1, 14)).await;
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], json!(true));
        assert_eq!(value["menu_title"], json!("Jedilnik 12.1.–16.1. 2026"));
        assert_eq!(value["date_range"], json!("12.1.–16.1. 2026"));
        assert!(value["menu"].as_str().unwrap().contains("SRE, 14.01"));
        assert!(value.get("error").is_none());
    }

    #[tokio::test]
    async fn test_no_menu_links() {
        let server = MockServer::start().await;
        serve_html(
            &server,
            "/prehrana/",
            200,
            r#"<html><body><a href="/">Domov</a><p>Prehrana</p></body></html>"#.to_owned(),
        )
        .await;

        let response = pipeline_for(&server).menu_for(day(2026, 1, 14)).await;
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "success": false, "error": "No menu found for this week" })
        );
    }

    #[tokio::test]
    async fn test_listing_unavailable() {
        let server = MockServer::start().await;
        serve_html(&server, "/prehrana/", 500, String::new()).await;

        let response = pipeline_for(&server).menu_for(day(2026, 1, 14)).await;
        assert_eq!(
            expect_failure(&response),
            "Menu list request failed: 500 Internal Server Error"
        );
    }

    #[tokio::test]
    async fn test_weekly_menu_unavailable() {
        let server = MockServer::start().await;
        let listing =
            fs::read_to_string("./src/parse/html_examples/listing/prehrana.html").unwrap();
        serve_html(&server, "/prehrana/", 200, listing).await;

        let response = pipeline_for(&server).menu_for(day(2026, 1, 14)).await;
        assert_eq!(
            expect_failure(&response),
            "Menu page request failed: 404 Not Found"
        );
    }

    #[tokio::test]
    async fn test_weekend_has_no_row() {
        let server = school_site().await;
        // Saturday: the next week's menu is chosen but has no SOB row
        let response = pipeline_for(&server).menu_for(day(2026, 1, 17)).await;
        assert_eq!(expect_failure(&response), "No menu row for weekday SOB");
    }

    #[tokio::test]
    async fn test_unreachable_site() {
        // nothing listens on the discard port
        let base: Url = "http://127.0.0.1:9".parse().unwrap();
        let listing = base.join("/prehrana/").unwrap();
        let pipeline = Pipeline::new(make_client(USER_AGENT).unwrap(), Source { base, listing });

        let response = pipeline.menu_for(day(2026, 1, 14)).await;
        assert!(expect_failure(&response).starts_with("Request error: "));
    }

    #[test]
    fn test_empty_message_gets_fallback() {
        assert_eq!(message_or_fallback(String::new()), FALLBACK_ERROR);
        assert_eq!(message_or_fallback("  ".to_owned()), FALLBACK_ERROR);
        assert_eq!(message_or_fallback("Napaka".to_owned()), "Napaka");
    }
}

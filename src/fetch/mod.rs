use reqwest::Client;
use tracing::{instrument, Level};
use url::Url;

use crate::error::{Error, Page};

/// Desktop Chrome; the school site serves bots a different page.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
(KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub fn make_client(user_agent: &str) -> reqwest::Result<Client> {
    Client::builder().user_agent(user_agent).gzip(true).build()
}

/// GETs `url` once. Anything but a 2xx status is an error.
#[instrument(skip(client, url), fields(url = %url), level = Level::TRACE)]
pub async fn fetch_page(client: &Client, url: &Url, page: Page) -> Result<String, Error> {
    let start = std::time::Instant::now();
    let response = client.get(url.clone()).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status { page, status });
    }
    let text = response.text().await?;
    log::trace!("Got text of {page} in \t {:?}", start.elapsed());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn test_sends_browser_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/prehrana/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(USER_AGENT).unwrap();
        let url: Url = format!("{}/prehrana/", server.uri()).parse().unwrap();
        let body = fetch_page(&client, &url, Page::Listing).await.unwrap();
        assert_eq!(body, "<html></html>");

        let requests = server.received_requests().await.unwrap();
        let user_agent = requests[0].headers.get("user-agent").unwrap();
        assert_eq!(user_agent.to_str().unwrap(), USER_AGENT);
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = make_client(USER_AGENT).unwrap();
        let url: Url = format!("{}/prehrana/jedilnik/x/", server.uri()).parse().unwrap();
        let err = fetch_page(&client, &url, Page::WeeklyMenu).await.unwrap_err();
        assert_eq!(err.to_string(), "Menu page request failed: 404 Not Found");
    }
}

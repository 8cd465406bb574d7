use super::query::request_url;
use crate::{Error, Result};
use reqwest::Response;
use serde_json::Value;
use tracing::info;
use url::Url;

/// Anything that can run an encoded Overpass query and hand back its JSON.
#[allow(async_fn_in_trait)]
pub trait OverpassApi {
    async fn query(&self, encoded_query: &str) -> Result<Value>;
}

pub struct OverpassClient {
    api_url: Url,
    http: reqwest::Client,
}

impl OverpassClient {
    pub fn new(api_url: Url) -> OverpassClient {
        OverpassClient {
            api_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }
}

impl OverpassApi for OverpassClient {
    async fn query(&self, encoded_query: &str) -> Result<Value> {
        let url = request_url(&self.api_url, encoded_query);
        info!(api_url = %self.api_url, "Querying Overpass API, it could take a while...");
        let res = self.http.get(url).send().await?;
        info!(http_status_code = ?res.status(), "Got Overpass API response");
        _query(res).await
    }
}

async fn _query(res: Response) -> Result<Value> {
    if !res.status().is_success() {
        Err(Error::OverpassApi(format!(
            "Unexpected response status: {}",
            res.status(),
        )))?
    }
    let body = res.text().await?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod test {
    use super::OverpassClient;
    use crate::{Error, Result};
    use http::response::Builder;
    use url::Url;

    #[tokio::test]
    async fn query() -> Result<()> {
        let res_json = r#"
        {
            "version": 0.6,
            "generator": "Overpass API 0.7.62.1 084b4234",
            "osm3s": {
                "timestamp_osm_base": "2024-11-20T12:00:00Z",
                "copyright": "The data included in this document is from www.openstreetmap.org. The data is made available under ODbL."
            },
            "elements": [
                {
                    "type": "way",
                    "id": 23385634,
                    "timestamp": "2023-05-12T10:01:11Z",
                    "version": 12,
                    "changeset": 136245870,
                    "user": "mapper",
                    "uid": 1,
                    "nodes": [252426420, 252426421],
                    "tags": {
                        "highway": "residential",
                        "name": "Arbat Street",
                        "surface": "paving_stones"
                    }
                }
            ]
        }
        "#;
        let res = super::_query(Builder::new().status(200).body(res_json)?.into()).await?;
        assert_eq!("way", res["elements"][0]["type"]);
        assert_eq!("Arbat Street", res["elements"][0]["tags"]["name"]);
        Ok(())
    }

    #[tokio::test]
    async fn query_unexpected_res_code() -> Result<()> {
        let res = super::_query(Builder::new().status(429).body("")?.into()).await;
        assert!(matches!(res, Err(Error::OverpassApi(_))));
        let res = super::_query(Builder::new().status(504).body("")?.into()).await;
        assert!(res.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn query_invalid_json() -> Result<()> {
        let res = super::_query(
            Builder::new()
                .status(200)
                .body("<html>runtime error</html>")?
                .into(),
        )
        .await;
        assert!(matches!(res, Err(Error::SerdeJson(_))));
        Ok(())
    }

    #[test]
    fn api_url() -> Result<()> {
        let api_url = Url::parse("https://overpass-api.de/api/interpreter")?;
        let client = OverpassClient::new(api_url.clone());
        assert_eq!(&api_url, client.api_url());
        Ok(())
    }
}

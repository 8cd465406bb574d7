use crate::Result;
use std::{env, path::PathBuf};
use url::Url;

const DEFAULT_OVERPASS_API_URL: &str = "https://maps.mail.ru/osm/tools/overpass/api/interpreter";
// Known to work as well:
// https://overpass.openstreetmap.ru/api/interpreter
// https://z.overpass-api.de/api/interpreter

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Conf {
    pub overpass_api_url: Url,
    pub output_dir: PathBuf,
    pub log_format: LogFormat,
}

impl Conf {
    pub fn from_env() -> Result<Conf> {
        Conf::from_vars(
            env::var("OVERPASS_API_URL").ok(),
            env::var("STREETS_OUTPUT_DIR").ok(),
            env::var("LOG_FORMAT").ok(),
        )
    }

    fn from_vars(
        overpass_api_url: Option<String>,
        output_dir: Option<String>,
        log_format: Option<String>,
    ) -> Result<Conf> {
        let overpass_api_url = overpass_api_url
            .filter(|it| !it.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_OVERPASS_API_URL.into());
        let log_format = match log_format.as_deref() {
            None | Some("") | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => Err(format!("Unsupported LOG_FORMAT: {other}"))?,
        };
        Ok(Conf {
            overpass_api_url: Url::parse(overpass_api_url.trim())?,
            output_dir: output_dir
                .filter(|it| !it.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            log_format,
        })
    }
}

#[cfg(test)]
mod test {
    use super::{Conf, LogFormat, DEFAULT_OVERPASS_API_URL};
    use crate::{Error, Result};
    use std::path::PathBuf;

    #[test]
    fn defaults() -> Result<()> {
        let conf = Conf::from_vars(None, None, None)?;
        assert_eq!(DEFAULT_OVERPASS_API_URL, conf.overpass_api_url.as_str());
        assert_eq!(PathBuf::from("."), conf.output_dir);
        assert_eq!(LogFormat::Text, conf.log_format);
        Ok(())
    }

    #[test]
    fn overrides() -> Result<()> {
        let conf = Conf::from_vars(
            Some("https://z.overpass-api.de/api/interpreter".into()),
            Some("/tmp/streets".into()),
            Some("json".into()),
        )?;
        assert_eq!(
            "https://z.overpass-api.de/api/interpreter",
            conf.overpass_api_url.as_str(),
        );
        assert_eq!(PathBuf::from("/tmp/streets"), conf.output_dir);
        assert_eq!(LogFormat::Json, conf.log_format);
        Ok(())
    }

    #[test]
    fn invalid_url() {
        let res = Conf::from_vars(Some("not a url".into()), None, None);
        assert!(matches!(res, Err(Error::Url(_))));
    }

    #[test]
    fn invalid_log_format() {
        let res = Conf::from_vars(None, None, Some("xml".into()));
        assert!(matches!(res, Err(Error::Generic(_))));
    }
}

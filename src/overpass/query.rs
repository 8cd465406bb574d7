use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

// https://wiki.openstreetmap.org/wiki/Overpass_API/Language_Guide
// Named ways with a surface, minus shops, parks, attractions, car-free ways and tunnels.
// The trailing `<` pulls in relations that contain those ways.
const QUERY_PREFIX: &str = r#"[out:json];(way(poly:""#;
const QUERY_SUFFIX: &str = r#"")["name"]["surface"][!"brand"][!"leisure"][!"tourism"][!"motor_vehicle"][!"tunnel"];<;);out meta;"#;

/// Same set as JavaScript's encodeURIComponent leaves untouched.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Overpass `poly:` filter wants `lat lon` pairs, all of them in a single space-separated string.
pub fn poly_filter(ring_lat_lon: &[[f64; 2]]) -> String {
    ring_lat_lon
        .iter()
        .map(|[lat, lon]| format!("{lat} {lon}"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn query_text(ring_lat_lon: &[[f64; 2]]) -> String {
    format!("{QUERY_PREFIX}{}{QUERY_SUFFIX}", poly_filter(ring_lat_lon))
}

/// Street query for a ring, encoded to be passed as a single query parameter.
pub fn build(ring_lat_lon: &[[f64; 2]]) -> String {
    utf8_percent_encode(&query_text(ring_lat_lon), URI_COMPONENT).to_string()
}

pub fn request_url(api_url: &Url, encoded_query: &str) -> Url {
    let mut url = api_url.clone();
    url.set_query(Some(&format!("data={encoded_query}")));
    url
}

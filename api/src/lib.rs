use gloo_net::http::Response;
use serde::de::DeserializeOwned;

pub mod admin;
pub mod cart;
pub mod catalog;

// all requests are relative to the storefront host; the reverse proxy routes
// this prefix to the backend
pub const API_ROOT: &str = "/api";

// request layer
//
// each endpoint!() invocation generates a single async fn named after the
// request, i.e. endpoint!(query ListCues, get, "/cues") produces
//
//   pub async fn list_cues(req: &ListCuesReq) -> anyhow::Result<ListCuesResp>
//
// the path is a format string whose placeholders are filled, in order, from
// the listed request fields.  "query" requests carry no body, while "body"
// requests serialize the whole request struct as json (fields that are only
// used in the path should be marked skip_serializing)
#[macro_export]
macro_rules! endpoint {
    (query $name:ident, $method:ident, $path:literal $(, $field:ident)*) => {
        paste::paste! {
            #[allow(unused_variables)]
            pub async fn [<$name:snake>](req: &[<$name:camel Req>]) -> anyhow::Result<[<$name:camel Resp>]> {
                let url = format!(concat!("{}", $path), $crate::API_ROOT $(, req.$field)*);

                let resp = gloo_net::http::Request::$method(&url).send().await?;

                $crate::decode_response(resp).await
            }
        }
    };
    (body $name:ident, $method:ident, $path:literal $(, $field:ident)*) => {
        paste::paste! {
            #[allow(unused_variables)]
            pub async fn [<$name:snake>](req: &[<$name:camel Req>]) -> anyhow::Result<[<$name:camel Resp>]> {
                let url = format!(concat!("{}", $path), $crate::API_ROOT $(, req.$field)*);

                let resp = gloo_net::http::Request::$method(&url)
                    .json(req)?
                    .send()
                    .await?;

                $crate::decode_response(resp).await
            }
        }
    };
}

// the backend reports failures as plain text, which we pass along verbatim so
// that the ui can show it in a status line
#[doc(hidden)]
pub async fn decode_response<T: DeserializeOwned>(resp: Response) -> anyhow::Result<T> {
    if resp.ok() {
        Ok(resp.json().await?)
    } else {
        let status = resp.status();
        let text = resp.text().await?;

        tracing::error!(status, url = %resp.url(), "request failed");

        Err(anyhow::Error::msg(text))
    }
}

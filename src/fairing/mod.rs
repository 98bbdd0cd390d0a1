use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::{async_trait, Request, Response};

static ALLOWED_ORIGIN: &str = "*";
static ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
static ALLOWED_HEADERS: &str = "Content-Type";

/// lets browsers on any origin call the api.
///
/// Adds the `Access-Control-Allow-*` headers to every response, including error responses and
/// the preflight responses from [`preflight`](crate::handler::api_handler::preflight)
pub struct Cors;

#[async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Cross-Origin Resource Sharing",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _req: &'r Request<'_>, res: &mut Response<'r>) {
        res.set_header(Header::new("Access-Control-Allow-Origin", ALLOWED_ORIGIN));
        res.set_header(Header::new("Access-Control-Allow-Methods", ALLOWED_METHODS));
        res.set_header(Header::new("Access-Control-Allow-Headers", ALLOWED_HEADERS));
    }
}

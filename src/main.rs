use config::{Config, Environment};
use std::error::Error;

use natk_schedule::scrape;

// Thin stand-in for the HTTP layer: invoke one operation, print its JSON.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = Config::builder()
        .add_source(Environment::with_prefix("NATK"))
        .build()?;
    let index_url = config
        .get_string("index_url")
        .unwrap_or_else(|_| scrape::INDEX_URL.to_string());

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        None | Some("groups") => {
            let groups = scrape::groups::list_groups(&index_url).await;
            println!("{}", serde_json::to_string(&groups)?);
        }
        Some("schedule") => {
            let url = args.next().ok_or("usage: natk-schedule schedule <url>")?;
            let schedule = scrape::schedule::get_schedule(&url).await;
            println!("{}", serde_json::to_string(&schedule)?);
        }
        Some(other) => return Err(format!("unknown command: {other}").into()),
    }

    Ok(())
}

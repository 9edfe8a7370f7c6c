//! Example: Showing zone access status from the portal
//!
//! Prints the availability of every TLD, the ones that could be requested
//! right now, and the most recently updated requests.
//!
//! # Setup
//!
//! 1. Obtain an access token from the ICANN account service.
//!
//! 2. Export it: ```bash export CZDS_ACCESS_TOKEN=... ```
//!
//! 3. Run this example: ```bash cargo run --example czds_status ```

use czds_core::eligible_tlds;
use czds_domain::{FilterQuery, SortDirection, SortField};
use czds_infra::{config, init_tracing, CzdsHttpTransport};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("info");

    let config = config::load()?;
    let services = CzdsHttpTransport::from_config(&config)?.into_services();

    let catalog = services.catalog.list_tld_availability().await?;
    println!("{} TLDs in the catalog\n", catalog.len());
    for entry in &catalog {
        println!("  {:<24} {}", entry.tld, entry.current_status);
    }

    let eligible = eligible_tlds(&catalog);
    println!("\n{} TLD(s) can be requested now: {}", eligible.len(), eligible.join(", "));

    let recent = FilterQuery::new()
        .paged(10, 0)
        .sorted_by(SortField::LastUpdated, SortDirection::Desc);
    let list = services.catalog.list_requests(&recent).await?;
    println!("\nMost recently updated requests ({} total):", list.total_matching);
    for request in &list.items {
        let expiry = match request.expires_at() {
            Some(at) => at.to_rfc3339(),
            None => "never".to_string(),
        };
        println!("  {:<24} {:<10} expires {}", request.tld, request.status, expiry);
    }

    Ok(())
}

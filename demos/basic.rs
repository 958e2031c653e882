//! Basic example demonstrating the Lockstep API client.
//!
//! Run with:
//! ```
//! LOCKSTEP_API_KEY=your-key cargo run --example basic
//! ```

use lockstep_sdk::{
    CompanyModel, ContactModel, FetchResult, LockstepClient, PaymentModel, PrettyPrint,
    QueryOptions,
};

#[tokio::main]
async fn main() -> lockstep_sdk::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating Lockstep client...");
    let client = LockstepClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    // Query first page of customers
    println!("\n--- Querying Customers (first page) ---");
    let options = QueryOptions::new()
        .filter("CompanyType eq 'Customer'")
        .order("CompanyName asc")
        .page(0, 10);
    let companies: FetchResult<CompanyModel> =
        client.companies().query_companies(&options).await?.json()?;
    println!(
        "Found {} companies (total: {:?}, more pages: {})",
        companies.len(),
        companies.total_count,
        companies.has_more()
    );

    for company in &companies {
        println!(
            "  - {} ({})",
            company.display_name(),
            company.company_id.as_deref().unwrap_or("?")
        );
    }

    // Retrieve the first one with its contacts
    let Some(first_id) = companies.records.first().and_then(|c| c.company_id.clone()) else {
        println!("\nNo companies to inspect.");
        return Ok(());
    };

    println!("\n--- Company Details ---");
    let company: CompanyModel = client
        .companies()
        .retrieve_company(&first_id, Some("Contacts"))
        .await?
        .json()?;
    println!("{}", company.pretty_print());

    let contacts: Vec<ContactModel> = company.contacts.unwrap_or_default();
    println!("\n{} contacts:", contacts.len());
    for contact in contacts.iter().take(5) {
        println!(
            "  - {} <{}>",
            contact.contact_name.as_deref().unwrap_or("unnamed"),
            contact.email_address.as_deref().unwrap_or("no email")
        );
    }

    // Open payments for the company
    println!("\n--- Open Payments ---");
    let options = QueryOptions::new()
        .filter(format!("CompanyId eq '{first_id}' and IsOpen eq true"))
        .page(0, 5);
    let payments: FetchResult<PaymentModel> =
        client.payments().query_payments(&options).await?.json()?;

    for payment in &payments {
        println!("{}\n", payment.pretty_print());
    }
    if payments.is_empty() {
        println!("  none");
    }

    println!("\nDone!");
    Ok(())
}

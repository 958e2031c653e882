//! Lockstep Platform CLI binary.
//!
//! A command-line interface for interacting with the Lockstep Platform API.

use clap::Parser;
use lockstep_sdk::cli::{Cli, Command, Entity};
use lockstep_sdk::{
    ApiResponse, ApplicationModel, CompanyModel, ContactModel, FetchResult, InvoiceHistoryModel,
    LockstepClient, PaymentModel, PrettyPrint, QueryOptions, UserAccountModel,
    UserRoleModel,
};
use serde::de::DeserializeOwned;
use std::process::ExitCode;
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match LockstepClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set LOCKSTEP_API_KEY (or LOCKSTEP_BEARER_TOKEN) environment variable");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &LockstepClient, cli: Cli) -> lockstep_sdk::Result<()> {
    match cli.command {
        Command::Retrieve {
            entity,
            id,
            include,
        } => handle_retrieve(client, entity, &id, include.as_deref(), cli.json).await,
        Command::Query {
            entity,
            filter,
            include,
            order,
            page_size,
            page_number,
        } => {
            let options = QueryOptions {
                filter,
                include,
                order,
                page_size,
                page_number,
            };
            handle_query(client, entity, &options, cli.json).await
        }
        Command::Update { entity, id, body } => {
            handle_update(client, entity, &id, &body, cli.json).await
        }
        Command::Delete { entity, id } => handle_delete(client, entity, &id, cli.json).await,
    }
}

async fn handle_retrieve(
    client: &LockstepClient,
    entity: Entity,
    id: &str,
    include: Option<&str>,
    json: bool,
) -> lockstep_sdk::Result<()> {
    match entity {
        Entity::Company => {
            let response = client.companies().retrieve_company(id, include).await?;
            output_single::<CompanyModel>(&response, json)
        }
        Entity::Contact => {
            let response = client.contacts().retrieve_contact(id, include).await?;
            output_single::<ContactModel>(&response, json)
        }
        Entity::Payment => {
            let response = client.payments().retrieve_payment(id, include).await?;
            output_single::<PaymentModel>(&response, json)
        }
        Entity::User => {
            let response = client.user_accounts().retrieve_user(id, include).await?;
            output_single::<UserAccountModel>(&response, json)
        }
        Entity::UserRole => {
            let response = client.user_roles().retrieve_user_role(id, include).await?;
            output_single::<UserRoleModel>(&response, json)
        }
        Entity::Application => {
            let response = client.applications().retrieve_application(id, include).await?;
            output_single::<ApplicationModel>(&response, json)
        }
        Entity::InvoiceHistory => {
            if include.is_some() {
                tracing::warn!("--include is ignored for invoice history");
            }
            let response = client.invoice_history().retrieve_invoice_history(id).await?;
            output_page::<InvoiceHistoryModel, InvoiceHistoryRow>(&response, json)
        }
    }
}

async fn handle_query(
    client: &LockstepClient,
    entity: Entity,
    options: &QueryOptions,
    json: bool,
) -> lockstep_sdk::Result<()> {
    match entity {
        Entity::Company => {
            let response = client.companies().query_companies(options).await?;
            output_page::<CompanyModel, CompanyRow>(&response, json)
        }
        Entity::Contact => {
            let response = client.contacts().query_contacts(options).await?;
            output_page::<ContactModel, ContactRow>(&response, json)
        }
        Entity::Payment => {
            let response = client.payments().query_payments(options).await?;
            output_page::<PaymentModel, PaymentRow>(&response, json)
        }
        Entity::User => {
            let response = client.user_accounts().query_users(options).await?;
            output_page::<UserAccountModel, UserRow>(&response, json)
        }
        Entity::UserRole => {
            let response = client.user_roles().query_user_roles(options).await?;
            output_page::<UserRoleModel, UserRoleRow>(&response, json)
        }
        Entity::Application => {
            let response = client.applications().query_applications(options).await?;
            output_page::<ApplicationModel, ApplicationRow>(&response, json)
        }
        Entity::InvoiceHistory => {
            let response = client.invoice_history().query_invoice_history(options).await?;
            output_page::<InvoiceHistoryModel, InvoiceHistoryRow>(&response, json)
        }
    }
}

async fn handle_update(
    client: &LockstepClient,
    entity: Entity,
    id: &str,
    changes: &serde_json::Value,
    json: bool,
) -> lockstep_sdk::Result<()> {
    match entity {
        Entity::Company => {
            let response = client.companies().update_company(id, changes).await?;
            output_single::<CompanyModel>(&response, json)
        }
        Entity::Contact => {
            let response = client.contacts().update_contact(id, changes).await?;
            output_single::<ContactModel>(&response, json)
        }
        Entity::Payment => {
            let response = client.payments().update_payment(id, changes).await?;
            output_single::<PaymentModel>(&response, json)
        }
        Entity::User => {
            let response = client.user_accounts().update_user(id, changes).await?;
            output_single::<UserAccountModel>(&response, json)
        }
        Entity::Application => {
            let response = client.applications().update_application(id, changes).await?;
            output_single::<ApplicationModel>(&response, json)
        }
        Entity::UserRole | Entity::InvoiceHistory => Err(entity.read_only("update")),
    }
}

async fn handle_delete(
    client: &LockstepClient,
    entity: Entity,
    id: &str,
    json: bool,
) -> lockstep_sdk::Result<()> {
    let response = match entity {
        Entity::Company => client.companies().delete_company(id).await?,
        Entity::Contact => client.contacts().disable_contact(id).await?,
        Entity::Payment => client.payments().delete_payment(id).await?,
        Entity::User => client.user_accounts().disable_user(id).await?,
        Entity::Application => client.applications().delete_application(id).await?,
        Entity::UserRole | Entity::InvoiceHistory => return Err(entity.read_only("delete")),
    };

    if json {
        print_json(&response)
    } else {
        println!("Deleted {} {id}", entity.name());
        Ok(())
    }
}

fn print_json(response: &ApiResponse) -> lockstep_sdk::Result<()> {
    if response.is_empty() {
        return Ok(());
    }
    let value: serde_json::Value = response.json()?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn output_single<T>(response: &ApiResponse, json: bool) -> lockstep_sdk::Result<()>
where
    T: DeserializeOwned + PrettyPrint,
{
    if json {
        return print_json(response);
    }
    let record: T = response.json()?;
    println!("{}", record.pretty_print());
    Ok(())
}

fn output_page<T, R>(response: &ApiResponse, json: bool) -> lockstep_sdk::Result<()>
where
    T: DeserializeOwned,
    R: Tabled + for<'a> From<&'a T>,
{
    if json {
        return print_json(response);
    }

    let page: FetchResult<T> = response.json()?;
    let rows: Vec<R> = page.iter().map(R::from).collect();
    println!("{}", Table::new(rows));

    let number = page.page_number.unwrap_or(0);
    match (page.total_count, page.page_size) {
        (Some(total), Some(size)) if size > 0 => {
            let total_pages = total.div_ceil(u64::from(size));
            println!(
                "\nPage {number} ({} records, {total} total across {total_pages} pages)",
                page.len()
            );
        }
        _ if page.has_more() => println!("\nPage {number} (more available)"),
        _ => println!("\nPage {number} (end)"),
    }
    Ok(())
}

// Table row types for non-JSON output

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn amount(value: Option<f64>) -> String {
    value.map(|a| format!("{a:.2}")).unwrap_or_default()
}

#[derive(Tabled)]
struct CompanyRow {
    id: String,
    name: String,
    #[tabled(rename = "type")]
    company_type: String,
    status: String,
}

impl From<&CompanyModel> for CompanyRow {
    fn from(c: &CompanyModel) -> Self {
        Self {
            id: text(&c.company_id),
            name: text(&c.company_name),
            company_type: text(&c.company_type),
            status: text(&c.company_status),
        }
    }
}

#[derive(Tabled)]
struct ContactRow {
    id: String,
    name: String,
    email: String,
    company: String,
}

impl From<&ContactModel> for ContactRow {
    fn from(c: &ContactModel) -> Self {
        Self {
            id: text(&c.contact_id),
            name: text(&c.contact_name),
            email: text(&c.email_address),
            company: text(&c.company_id),
        }
    }
}

#[derive(Tabled)]
struct PaymentRow {
    id: String,
    date: String,
    amount: String,
    unapplied: String,
    open: String,
}

impl From<&PaymentModel> for PaymentRow {
    fn from(p: &PaymentModel) -> Self {
        Self {
            id: text(&p.payment_id),
            date: p.payment_date.map(|d| d.to_string()).unwrap_or_default(),
            amount: amount(p.payment_amount),
            unapplied: amount(p.unapplied_amount),
            open: p.is_open.map(|o| o.to_string()).unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    status: String,
}

impl From<&UserAccountModel> for UserRow {
    fn from(u: &UserAccountModel) -> Self {
        Self {
            id: text(&u.user_id),
            name: text(&u.user_name),
            email: text(&u.email),
            status: text(&u.status),
        }
    }
}

#[derive(Tabled)]
struct UserRoleRow {
    id: String,
    name: String,
}

impl From<&UserRoleModel> for UserRoleRow {
    fn from(r: &UserRoleModel) -> Self {
        Self {
            id: text(&r.user_role_id),
            name: text(&r.user_role_name),
        }
    }
}

#[derive(Tabled)]
struct ApplicationRow {
    id: String,
    name: String,
    #[tabled(rename = "type")]
    app_type: String,
    active: String,
}

impl From<&ApplicationModel> for ApplicationRow {
    fn from(a: &ApplicationModel) -> Self {
        Self {
            id: text(&a.app_id),
            name: text(&a.name),
            app_type: text(&a.app_type),
            active: a.is_active.map(|v| v.to_string()).unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct InvoiceHistoryRow {
    id: String,
    invoice: String,
    status: String,
    total: String,
    outstanding: String,
    modified: String,
}

impl From<&InvoiceHistoryModel> for InvoiceHistoryRow {
    fn from(h: &InvoiceHistoryModel) -> Self {
        Self {
            id: text(&h.invoice_history_id),
            invoice: text(&h.invoice_id),
            status: text(&h.invoice_status_code),
            total: amount(h.total_amount),
            outstanding: amount(h.outstanding_balance_amount),
            modified: h
                .modified
                .map(|m| m.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        }
    }
}

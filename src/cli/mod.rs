//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the lockstep binary.

use clap::{Parser, Subcommand, ValueEnum};

use crate::LockstepError;

/// Lockstep Platform command-line interface.
#[derive(Parser, Debug)]
#[command(name = "lockstep", about = "Lockstep Platform API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Retrieve a single record by id.
    Retrieve {
        /// The type of record to retrieve.
        entity: Entity,

        /// Platform id of the record.
        id: String,

        /// Nested collections to fetch (e.g. "Contacts,Notes").
        #[arg(long)]
        include: Option<String>,
    },

    /// Query records with filtering, sorting and pagination.
    Query {
        /// The type of record to query.
        entity: Entity,

        /// Searchlight filter expression.
        #[arg(long)]
        filter: Option<String>,

        /// Nested collections to fetch.
        #[arg(long)]
        include: Option<String>,

        /// Searchlight sort order (e.g. "CompanyName asc").
        #[arg(long)]
        order: Option<String>,

        /// Number of records per page (server default 250).
        #[arg(long)]
        page_size: Option<i32>,

        /// Page number (0-indexed).
        #[arg(long)]
        page_number: Option<i32>,
    },

    /// Update fields of a record.
    Update {
        /// The type of record to update.
        entity: Entity,

        /// Platform id of the record.
        id: String,

        /// JSON object of field changes; snake_case or camelCase keys.
        #[arg(long, value_parser = parse_json_object)]
        body: serde_json::Value,
    },

    /// Delete (or disable) a record.
    Delete {
        /// The type of record to delete.
        entity: Entity,

        /// Platform id of the record.
        id: String,
    },
}

/// Record types that can be operated on.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    /// A customer, vendor or group company.
    #[value(alias = "companies")]
    Company,
    /// A person working for a company.
    #[value(alias = "contacts")]
    Contact,
    /// A payment between companies.
    #[value(alias = "payments")]
    Payment,
    /// A user account.
    #[value(alias = "users")]
    User,
    /// A user role.
    #[value(alias = "user-roles")]
    UserRole,
    /// A marketplace application.
    #[value(alias = "applications", alias = "app")]
    Application,
    /// History records of an invoice.
    #[value(alias = "invoice-histories")]
    InvoiceHistory,
}

impl Entity {
    /// Name of the entity as typed on the command line.
    pub fn name(self) -> String {
        self.to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default()
    }

    /// Error returned when `operation` is attempted on a read-only entity.
    pub fn read_only(self, operation: &str) -> LockstepError {
        LockstepError::InvalidArgument(format!(
            "{operation} not supported: {} records are read-only",
            self.name()
        ))
    }
}

/// Parse a command-line argument as a JSON object.
pub fn parse_json_object(raw: &str) -> Result<serde_json::Value, String> {
    match serde_json::from_str(raw) {
        Ok(value @ serde_json::Value::Object(_)) => Ok(value),
        Ok(_) => Err("expected a JSON object".to_string()),
        Err(e) => Err(format!("invalid JSON: {e}")),
    }
}

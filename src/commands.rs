//! Subcommands: profiles, masks, domain-masks, contacts.
//!
//! User-facing output uses writeln! to stdout (this is a CLI binary, not debug output).

use std::io::{self, Write};

use anyhow::{Context, bail};
use serde::Serialize;
use tracing::debug;

use ffrelay_client::{
    Client, CreateDomainAddressRequest, CreateRelayAddressRequest, UpdateDomainAddressRequest,
    UpdateRelayAddressRequest,
};

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Account profile operations.
    Profiles {
        #[command(subcommand)]
        action: ProfilesAction,
    },
    /// Random email masks (relay addresses).
    Masks {
        #[command(subcommand)]
        action: MaskAction,
    },
    /// Masks on your custom subdomain (domain addresses).
    DomainMasks {
        #[command(subcommand)]
        action: DomainMaskAction,
    },
    /// Phone numbers that contacted your Relay number.
    Contacts {
        #[command(subcommand)]
        action: ContactsAction,
    },
}

#[derive(clap::Subcommand, Debug)]
pub enum ProfilesAction {
    /// List user profiles.
    List,
}

#[derive(clap::Subcommand, Debug)]
pub enum ContactsAction {
    /// List inbound contacts.
    List,
}

#[derive(clap::Subcommand, Debug)]
pub enum MaskAction {
    /// List all masks.
    List,
    /// Get a single mask.
    Get {
        /// Mask ID.
        id: u64,
    },
    /// Create a new random mask.
    Create {
        /// Label shown in the dashboard.
        #[arg(short, long)]
        description: Option<String>,
        /// Site the mask is generated for.
        #[arg(short, long)]
        generated_for: Option<String>,
        /// Comma-separated list of sites the mask is used on.
        #[arg(long)]
        used_on: Option<String>,
        /// Forward only non-promotional emails.
        #[arg(long)]
        block_list_emails: bool,
        /// Create the mask disabled.
        #[arg(long)]
        disabled: bool,
    },
    /// Change selected fields of a mask.
    Update {
        /// Mask ID.
        id: u64,
        #[arg(long)]
        enabled: Option<bool>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long)]
        generated_for: Option<String>,
        #[arg(long)]
        used_on: Option<String>,
        #[arg(long)]
        block_list_emails: Option<bool>,
    },
    /// Delete a mask.
    Delete {
        /// Mask ID.
        id: u64,
    },
}

#[derive(clap::Subcommand, Debug)]
pub enum DomainMaskAction {
    /// List all domain masks.
    List,
    /// Get a single domain mask.
    Get {
        /// Domain mask ID.
        id: u64,
    },
    /// Create a named mask on your subdomain.
    Create {
        /// Local part, e.g. "shop" for shop@you.mozmail.com.
        address: String,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(long)]
        used_on: Option<String>,
        #[arg(long)]
        block_list_emails: bool,
        #[arg(long)]
        disabled: bool,
    },
    /// Change selected fields of a domain mask.
    Update {
        /// Domain mask ID.
        id: u64,
        #[arg(long)]
        enabled: Option<bool>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(long)]
        used_on: Option<String>,
        #[arg(long)]
        block_list_emails: Option<bool>,
    },
    /// Delete a domain mask.
    Delete {
        /// Domain mask ID.
        id: u64,
    },
}

pub async fn run(client: &Client, command: Command) -> anyhow::Result<()> {
    debug!(?command, "running command");
    match command {
        Command::Profiles { action } => match action {
            ProfilesAction::List => print_json(&client.list_profiles().await?),
        },
        Command::Contacts { action } => match action {
            ContactsAction::List => print_json(&client.list_inbound_contacts().await?),
        },
        Command::Masks { action } => run_masks(client, action).await,
        Command::DomainMasks { action } => run_domain_masks(client, action).await,
    }
}

async fn run_masks(client: &Client, action: MaskAction) -> anyhow::Result<()> {
    match action {
        MaskAction::List => print_json(&client.list_relay_addresses().await?),
        MaskAction::Get { id } => print_json(&client.get_relay_address(id).await?),
        MaskAction::Create {
            description,
            generated_for,
            used_on,
            block_list_emails,
            disabled,
        } => {
            let request = CreateRelayAddressRequest {
                enabled: !disabled,
                description,
                generated_for,
                used_on,
                block_list_emails,
            };
            print_json(&client.create_relay_address(&request).await?)
        }
        MaskAction::Update {
            id,
            enabled,
            description,
            generated_for,
            used_on,
            block_list_emails,
        } => {
            let request = UpdateRelayAddressRequest {
                enabled,
                description,
                generated_for,
                used_on,
                block_list_emails,
            };
            if request.is_empty() {
                bail!("nothing to update; pass at least one field");
            }
            print_json(&client.update_relay_address(id, &request).await?)
        }
        MaskAction::Delete { id } => {
            client.delete_relay_address(id).await?;
            let mut stdout = io::stdout();
            writeln!(stdout, "Deleted mask {id}")?;
            Ok(())
        }
    }
}

async fn run_domain_masks(client: &Client, action: DomainMaskAction) -> anyhow::Result<()> {
    match action {
        DomainMaskAction::List => print_json(&client.list_domain_addresses().await?),
        DomainMaskAction::Get { id } => print_json(&client.get_domain_address(id).await?),
        DomainMaskAction::Create {
            address,
            description,
            used_on,
            block_list_emails,
            disabled,
        } => {
            let request = CreateDomainAddressRequest {
                address,
                enabled: !disabled,
                description,
                used_on,
                block_list_emails,
            };
            print_json(&client.create_domain_address(&request).await?)
        }
        DomainMaskAction::Update {
            id,
            enabled,
            description,
            used_on,
            block_list_emails,
        } => {
            let request = UpdateDomainAddressRequest {
                enabled,
                description,
                used_on,
                block_list_emails,
            };
            if request.is_empty() {
                bail!("nothing to update; pass at least one field");
            }
            print_json(&client.update_domain_address(id, &request).await?)
        }
        DomainMaskAction::Delete { id } => {
            client.delete_domain_address(id).await?;
            let mut stdout = io::stdout();
            writeln!(stdout, "Deleted domain mask {id}")?;
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let data = serde_json::to_string_pretty(value).context("error formatting output")?;
    let mut stdout = io::stdout();
    writeln!(stdout, "{data}")?;
    Ok(())
}

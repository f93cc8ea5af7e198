use std::collections::BTreeMap;

use anyhow::{anyhow, Context, Result};
use colored::*;
use dialoguer::Confirm;

use crate::catalog::{find_quick_control, find_template, list_templates, quick_controls};
use crate::config;
use crate::db::{CommandProfile, KeyValueStore, ProfileStore};
use crate::exec::{DispatchClient, Outcome};
use crate::utils::params;

use super::args::{Commands, ParamArgs, ServerCommands};

pub async fn handle_command<S: KeyValueStore>(
    command: Commands,
    store: &ProfileStore<S>,
    client: &mut DispatchClient,
) -> Result<()> {
    match command {
        Commands::Add {
            name,
            endpoint,
            method,
            params,
            success_message,
            category,
            dangerous,
        } => {
            let mut profile = CommandProfile::new(name, endpoint.trim(), method);
            profile.parameters = read_params(&params)?;
            if let Some(message) = success_message {
                profile.success_message = message;
            }
            if let Some(category) = category {
                profile.category = category;
            }
            profile.is_dangerous = dangerous;
            profile.validate()?;

            let saved = store.add(profile)?;
            println!("Profile saved with ID: {}", saved.id);
        }
        Commands::Ls { category } => {
            let profiles: Vec<_> = store
                .load_all()?
                .into_iter()
                .filter(|p| category.as_deref().map_or(true, |c| p.category == c))
                .collect();
            print_profiles(&profiles);
        }
        Commands::Show { id } => {
            let profile = find_profile(store, &id)?;
            print_profile_details(&profile);
        }
        Commands::Edit {
            id,
            name,
            endpoint,
            method,
            params,
            clear_params,
            success_message,
            category,
            dangerous,
        } => {
            let mut profile = find_profile(store, &id)?;
            if let Some(name) = name {
                profile.name = name;
            }
            if let Some(endpoint) = endpoint {
                profile.endpoint = endpoint.trim().to_string();
            }
            if let Some(method) = method {
                profile.method = method;
            }
            if clear_params {
                profile.parameters.clear();
            } else if !params.params.is_empty() || params.params_file.is_some() {
                profile.parameters = read_params(&params)?;
            }
            if let Some(message) = success_message {
                profile.success_message = message;
            }
            if let Some(category) = category {
                profile.category = category;
            }
            if let Some(dangerous) = dangerous {
                profile.is_dangerous = dangerous;
            }
            profile.validate()?;

            if store.update(&profile)? {
                println!("Profile {} updated", profile.id);
            } else {
                return Err(anyhow!("Profile not found: {}", id));
            }
        }
        Commands::Rm { id } => {
            if store.delete(&id)? {
                println!("Profile {} deleted", id);
            } else {
                println!("No profile with ID: {}", id);
            }
        }
        Commands::Run { id, yes } => {
            let profile = find_profile(store, &id)?;
            if profile.is_dangerous && !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("'{}' is marked dangerous. Run it?", profile.name))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    println!("Cancelled");
                    return Ok(());
                }
            }
            let outcome = client.execute(&profile).await;
            report_outcome(&outcome, &profile.success_message)?;
        }
        Commands::Send {
            endpoint,
            method,
            params,
        } => {
            let parameters = read_params(&params)?;
            let outcome = client.send(&endpoint, method, &parameters).await;
            report_outcome(&outcome, &outcome.message)?;
        }
        Commands::Templates => {
            print_profiles(list_templates());
        }
        Commands::UseTemplate { template_id, name } => {
            let template = find_template(&template_id)
                .ok_or_else(|| anyhow!("Template not found: {}", template_id))?;
            let mut profile = template.as_new_copy();
            if let Some(name) = name {
                profile.name = name;
            }
            let saved = store.add(profile)?;
            println!("Template '{}' saved as profile {}", template_id, saved.id);
        }
        Commands::Controls => {
            let mut group = "";
            for control in quick_controls() {
                if control.group != group {
                    group = control.group;
                    println!("\n{}", group.blue().bold());
                }
                println!("  {:<16} {:<16} {}", control.key, control.label, control.endpoint.dimmed());
            }
        }
        Commands::Control { key } => {
            let control = find_quick_control(&key)
                .ok_or_else(|| anyhow!("Unknown control: {}", key))?;
            let outcome = client.execute(&control.to_profile()).await;
            report_outcome(&outcome, control.success_message)?;
        }
        Commands::Server { action } => match action {
            ServerCommands::Set { address } => {
                let saved = config::save_server_address(store.backend(), &address)?;
                client.set_base_address(&saved);
                println!("Server address set to {}", saved);
            }
            ServerCommands::Show => {
                println!("{}", client.base_address());
            }
            ServerCommands::Test => {
                let outcome = client.test_connection().await;
                if !outcome.ok {
                    println!("{} {}", "Connection failed:".red().bold(), outcome.message);
                    return Err(anyhow!("Server {} is not reachable", client.base_address()));
                }
                println!("{} {}", "Connected:".green().bold(), client.base_address());
            }
        },
    }
    Ok(())
}

/// Merges `--params-file` with `-p` pairs; pairs given on the command line win.
pub fn read_params(args: &ParamArgs) -> Result<BTreeMap<String, String>> {
    let mut parameters = match &args.params_file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read parameters from {}", path.display()))?;
            params::decode(&text)
        }
        None => BTreeMap::new(),
    };
    parameters.extend(params::collect_pairs(&args.params)?);
    Ok(parameters)
}

fn find_profile<S: KeyValueStore>(store: &ProfileStore<S>, id: &str) -> Result<CommandProfile> {
    store
        .get(id)?
        .ok_or_else(|| anyhow!("Profile not found: {}", id))
}

/// Prints the outcome and turns a failed one into an error, so the process
/// exits non-zero.
fn report_outcome(outcome: &Outcome, success_message: &str) -> Result<()> {
    let text = outcome.user_message(success_message);
    if outcome.ok {
        println!("{}", text.green());
        Ok(())
    } else {
        println!("{}", text.red());
        Err(anyhow!("Command failed: {}", outcome.message))
    }
}

fn print_profiles(profiles: &[CommandProfile]) {
    if profiles.is_empty() {
        println!("No profiles found.");
        return;
    }

    println!("\nFound {} profiles:", profiles.len());
    println!("─────────────────────────────────────────────");

    for profile in profiles {
        let name = if profile.is_dangerous {
            profile.name.red().bold()
        } else {
            profile.name.normal()
        };
        println!("({}) {} [{}]", profile.id, name, profile.category);
        println!("    {} {}", profile.method, profile.endpoint);
        if !profile.parameters.is_empty() {
            let pairs: Vec<_> = profile
                .parameters
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            println!("    Parameters: {}", pairs.join(", "));
        }
        println!("─────────────────────────────────────────────");
    }
}

fn print_profile_details(profile: &CommandProfile) {
    println!("ID:              {}", profile.id);
    println!("Name:            {}", profile.name);
    println!("Request:         {} {}", profile.method, profile.endpoint);
    println!("Category:        {}", profile.category);
    println!("Success message: {}", profile.success_message);
    if profile.is_dangerous {
        println!("Dangerous:       {}", "yes".red().bold());
    }
    if !profile.parameters.is_empty() {
        println!("Parameters:");
        println!("{}", params::encode(&profile.parameters));
    }
}

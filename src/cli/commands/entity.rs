//! Generic CRUD commands, instantiated once per entity type.
//!
//! Every collection screen of the dashboard is the same interaction
//! pattern; here each one is a `handle::<T>` call, not a reimplementation.

use std::path::Path;

use anyhow::Context;
use clap::Subcommand;

use crate::cli::utils::{clear_rejected_session, output_success, summarize};
use crate::cli::OutputFormat;
use crate::client::HttpResourceClient;
use crate::controller::{
    FormController, ListController, ListQuery, LoadState, Signal, SortDirection,
};
use crate::entity::Resource;
use crate::session::SessionStore;

#[derive(Subcommand)]
pub enum EntityCommands {
    #[command(about = "List records")]
    List {
        #[arg(long, help = "Case-insensitive text filter")]
        filter: Option<String>,
        #[arg(long, help = "Field name to sort by")]
        sort: Option<String>,
        #[arg(long, help = "Sort descending")]
        desc: bool,
        #[arg(long, help = "Zero-based page index")]
        page: Option<usize>,
        #[arg(long, help = "Page size")]
        limit: Option<usize>,
    },

    #[command(about = "Create a record")]
    Create {
        #[arg(long = "set", value_parser = parse_key_val, help = "field=value, repeatable")]
        set: Vec<(String, String)>,
        #[arg(long = "attach", value_parser = parse_key_val, help = "field=path, repeatable")]
        attach: Vec<(String, String)>,
    },

    #[command(about = "Update a record")]
    Update {
        #[arg(help = "Record id")]
        id: String,
        #[arg(long = "set", value_parser = parse_key_val, help = "field=value, repeatable")]
        set: Vec<(String, String)>,
        #[arg(long = "attach", value_parser = parse_key_val, help = "field=path, repeatable")]
        attach: Vec<(String, String)>,
    },

    #[command(about = "Delete a record")]
    Delete {
        #[arg(help = "Record id")]
        id: String,
    },
}

pub async fn handle<T: Resource>(
    cmd: EntityCommands,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let mut store = SessionStore::open()?;
    let client = HttpResourceClient::<T>::from_config()?;

    match cmd {
        EntityCommands::List {
            filter,
            sort,
            desc,
            page,
            limit,
        } => {
            let mut controller = ListController::new();
            if controller.load(store.session(), &client).await == Signal::RedirectToLogin {
                anyhow::bail!("not logged in; run `hrdash auth login`");
            }
            if let LoadState::Failed(e) = controller.state() {
                clear_rejected_session(&mut store, e)?;
                anyhow::bail!("{e}");
            }

            let direction = if desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            };
            let query = ListQuery {
                filter,
                sort: sort.map(|field| (field, direction)),
                page,
                page_size: limit,
            };
            let view = controller.view(&query);

            match output_format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&view.items)?);
                }
                OutputFormat::Text => {
                    for item in &view.items {
                        println!("{}", summarize(*item));
                    }
                    println!(
                        "{} of {} record(s), page {} of {}",
                        view.items.len(),
                        view.total,
                        query.page.unwrap_or(0) + 1,
                        view.page_count
                    );
                }
            }
            Ok(())
        }

        EntityCommands::Create { set, attach } => {
            let mut form = FormController::<T>::create();
            apply_edits(&mut form, &set, &attach)?;
            save_and_report(form, &mut store, &client, &output_format).await
        }

        EntityCommands::Update { id, set, attach } => {
            let mut controller = ListController::new();
            if controller.load(store.session(), &client).await == Signal::RedirectToLogin {
                anyhow::bail!("not logged in; run `hrdash auth login`");
            }
            if let LoadState::Failed(e) = controller.state() {
                clear_rejected_session(&mut store, e)?;
                anyhow::bail!("{e}");
            }
            let existing = controller
                .items()
                .iter()
                .find(|e| e.id() == id)
                .ok_or_else(|| anyhow::anyhow!("no {} with id {}", T::LABEL, id))?;

            let mut form = FormController::edit(existing);
            apply_edits(&mut form, &set, &attach)?;
            save_and_report(form, &mut store, &client, &output_format).await
        }

        EntityCommands::Delete { id } => {
            let mut controller = ListController::<T>::new();
            let deleted = controller.delete(store.session(), &client, &id).await;
            if let Err(e) = deleted {
                clear_rejected_session(&mut store, &e)?;
                anyhow::bail!("{e}");
            }
            output_success(
                &output_format,
                &format!("{} {} deleted", T::LABEL, id),
                None,
            )
        }
    }
}

fn apply_edits<T: Resource>(
    form: &mut FormController<T>,
    set: &[(String, String)],
    attach: &[(String, String)],
) -> anyhow::Result<()> {
    for (field, value) in set {
        form.edit_field(field, value)?;
    }
    for (field, path) in attach {
        let bytes = std::fs::read(path).with_context(|| format!("reading {path}"))?;
        let file_name = Path::new(path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("attachment")
            .to_string();
        let content_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        form.attach_file(field, file_name, content_type, bytes)?;
    }
    Ok(())
}

async fn save_and_report<T: Resource>(
    mut form: FormController<T>,
    store: &mut SessionStore,
    client: &HttpResourceClient<T>,
    output_format: &OutputFormat,
) -> anyhow::Result<()> {
    let saved = form.save(store.session(), client).await;
    match saved {
        Ok(Some(saved)) => output_success(
            output_format,
            &format!("{} saved (id {})", T::LABEL, saved.id()),
            Some(serde_json::to_value(&saved)?),
        ),
        Ok(None) => Ok(()),
        Err(e) => {
            clear_rejected_session(store, &e)?;
            anyhow::bail!("{e}")
        }
    }
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected field=value, got '{s}'"))?;
    Ok((key.to_string(), value.to_string()))
}

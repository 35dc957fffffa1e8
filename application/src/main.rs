use std::{fs, io, str::FromStr as _, sync::OnceLock};

use application::{
    args::Action, input::EventForm, print, Args, Config, Service,
};
use service::{
    domain::{contract, Contract},
    infra::JsonFile,
    query::{contracts, receipt},
    render, Command as _, Query as _,
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    _ = start();
}

fn start() -> Result<(), ()> {
    let Args {
        config,
        import,
        action,
    } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config {
        store,
        company,
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let imported = import
        .map(|path| {
            fs::read_to_string(&path).map_err(|e| {
                log::error!("failed to read `{path}` dump: {e}");
            })
        })
        .transpose()?;

    let store = JsonFile::init(&store.path, imported.as_deref()).map_err(
        |e| {
            log::error!("failed to initialize `JsonFile` store: {e}");
        },
    )?;

    let service = Service::new(
        service::Config {
            company: company.clone(),
        },
        store,
    );

    match action {
        Action::Preview { input, html } => {
            let cmd = load_form(&input)?;
            let contract = Contract::new(
                cmd.client,
                cmd.event,
                cmd.headcount,
                cmd.prices,
            );
            let text = render::contract::narrative(&contract, &company);
            let title = format!("Contrato - {}", contract.client.name);
            output(&text, &title, html.as_deref(), &company)
        }
        Action::Save { input } => {
            let cmd = load_form(&input)?;
            let contract = service.execute(cmd).map_err(|e| {
                log::error!("failed to save the contract: {e}");
            })?;
            println!(
                "{}  {}  total {}  entrada {}",
                contract.id,
                contract.client.name,
                contract.totals.total,
                contract.totals.down_payment,
            );
            Ok(())
        }
        Action::List => {
            let all = service.execute(contracts::List::by(())).map_err(
                |e| {
                    log::error!("failed to list the contracts: {e}");
                },
            )?;
            for contract in all {
                println!(
                    "{}  {}  {}  {}",
                    contract.id,
                    contract.event.date,
                    contract.client.name,
                    contract.totals.total,
                );
            }
            Ok(())
        }
        Action::Show { id, html } => {
            let contract = find(&service, &id)?;
            let text = render::contract::narrative(&contract, &company);
            let title = format!("Contrato - {}", contract.client.name);
            output(&text, &title, html.as_deref(), &company)
        }
        Action::Receipt { id, html } => {
            let contract = find(&service, &id)?;
            let number = service
                .execute(receipt::NumberOf(contract.id))
                .map_err(|e| {
                    log::error!("failed to resolve the receipt number: {e}");
                })?
                .ok_or_else(|| {
                    log::error!("contract `{}` has no receipt", contract.id);
                })?;
            let text = render::receipt::slip(&contract, number);
            let title = format!("Recibo - {}", contract.client.name);
            output(&text, &title, html.as_deref(), &company)
        }
    }
}

/// Loads and validates the event form at the provided `path`.
fn load_form(path: &str) -> Result<service::command::SaveContract, ()> {
    let form = EventForm::load(path).map_err(|e| {
        log::error!("failed to load `{path}` event form: {e}");
    })?;
    form.validate().map_err(|e| {
        log::error!("invalid event form: {e}");
    })
}

/// Finds a persisted [`Contract`] by the provided textual ID.
fn find(service: &Service, id: &str) -> Result<Contract, ()> {
    let id = contract::Id::from_str(id).map_err(|e| {
        log::error!("`{id}` is not a valid contract ID: {e}");
    })?;
    service
        .execute(service::query::contract::ById::by(id))
        .map_err(|e| {
            log::error!("failed to query the contract: {e}");
        })?
        .ok_or_else(|| {
            log::error!("no contract with ID `{id}`");
        })
}

/// Prints the rendered document, either as plain text on stdout or as a
/// printable HTML page written to the given path.
fn output(
    text: &str,
    title: &str,
    html: Option<&str>,
    company: &service::Company,
) -> Result<(), ()> {
    if let Some(path) = html {
        let page = print::page(title, text, company);
        fs::write(path, page).map_err(|e| {
            log::error!("failed to write `{path}`: {e}");
        })?;
        log::info!("wrote `{path}`");
    } else {
        println!("{}", text.replace("**", ""));
    }
    Ok(())
}

//! Follow the screens of the X-Server as monitors come and go

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use lwm_randr::{
    cli::Opts,
    config::Config,
    hooks::DefaultHooks,
    lwm_error,
    lwm_fatal,
    lwm_info,
    randr::Randr,
    screen::Screens,
    utils::initialize_logging,
    x::xconnection::XConnection,
};

/// Print every screen, one per line or as a JSON array
fn print_screens(screens: &Screens, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(&screens.iter().collect::<Vec<_>>())?);
    } else {
        for screen in screens.iter() {
            println!("{}", screen);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    let config = opts
        .config
        .as_ref()
        .map_or_else(Config::load_default, Config::load)?;

    let _logger = initialize_logging(&config, &opts)?;
    log::debug!("{}: {:#?}", "Configuration options".bright_blue(), config);

    let conn = match XConnection::connect() {
        Ok(conn) => conn,
        Err(e) => lwm_fatal!("{}", e),
    };

    let randr = Randr::initialize(conn);
    let mut screens = Screens::new();
    let mut hooks = DefaultHooks::new(config.global.padding);

    if randr.supported() {
        if let Err(e) = randr.populate(&mut screens, &mut hooks) {
            lwm_error!("failed to enumerate the outputs: {}", e);
        }
    } else {
        let root = randr.backend().root_size();
        lwm_info!(
            "`randr` is unavailable, using the root window ({}) as the only screen",
            root
        );
        randr.populate_root(&mut screens, root, &mut hooks);
    }

    if screens.is_empty() {
        lwm_info!("no active outputs");
    }
    print_screens(&screens, opts.json)?;

    if opts.list {
        return Ok(());
    }

    loop {
        let event = match randr.backend().next_event() {
            Ok(event) => event,
            Err(e) if e.is_recoverable() => {
                lwm_error!("skipping event: {}", e);
                continue;
            },
            Err(e) => lwm_fatal!("lost the connection to the X-Server: {}", e),
        };

        if randr.dispatch(&event, &mut screens, &mut hooks) && config.global.print_on_change {
            print_screens(&screens, opts.json)?;
        }
    }
}

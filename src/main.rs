//! cosmic-cli - Main entry point

use std::process;
use std::time::Duration;

use clap::Parser;
use log::{debug, info, warn};

use cosmic_cli::cli::{
    AclCommand, AclRuleCommand, CloudOpsCommand, CloudOpsListCommand, InstanceCommand,
    PrivateGatewayCommand, RouteCommand, VpcCommand,
};
use cosmic_cli::cosmic::{
    run_acl_list_command, run_acl_rule_list_command, run_instance_list_command,
    run_ip_lookup_command, run_mac_lookup_command, run_private_gateway_list_command,
    run_route_add_command, run_route_delete_command, run_route_flush_command,
    run_route_list_command, run_vpc_list_command,
};
use cosmic_cli::{
    prune_duplicates, redact, select_profiles, ClientSet, Cli, Command, ProfileStore, Result,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting cosmic-cli v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli).await {
        println!("{}", redact(&e.to_string()));
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Command::Docs = cli.command {
        println!("{}", clap_markdown::help_markdown::<Cli>());
        return Ok(());
    }

    let store = match &cli.config {
        Some(path) => ProfileStore::with_path(path.clone()),
        None => ProfileStore::new(),
    };
    debug!("Loading profiles from {}", store.path().display());

    let mut config = store.load()?;
    for (dropped, kept) in prune_duplicates(&mut config) {
        println!(
            "Duplicate profiles found: \"{}\" is a duplicate of \"{}\"",
            dropped, kept
        );
    }

    let names = select_profiles(&config, &cli.profiles)?;
    if names.is_empty() {
        warn!("No profiles configured in {}", store.path().display());
    }
    debug!("Active profiles: {:?}", names);

    let clients =
        ClientSet::connect(&config, &names)?.with_deadline(cli.timeout.map(Duration::from_secs));
    let batch = cli.batch;

    match &cli.command {
        Command::Instance(InstanceCommand::List(args)) => {
            run_instance_list_command(&clients, args, batch).await
        }
        Command::Vpc(cmd) => match cmd {
            VpcCommand::List(args) => run_vpc_list_command(&clients, args, batch).await,
            VpcCommand::PrivateGateway(PrivateGatewayCommand::List(args)) => {
                run_private_gateway_list_command(&clients, args, batch).await
            }
            VpcCommand::Route(route) => match route {
                RouteCommand::List(args) => run_route_list_command(&clients, args, batch).await,
                RouteCommand::Add(args) => run_route_add_command(&clients, args, batch).await,
                RouteCommand::Delete(args) => run_route_delete_command(&clients, args, batch).await,
                RouteCommand::Flush(args) => run_route_flush_command(&clients, args, batch).await,
            },
        },
        Command::Acl(cmd) => match cmd {
            AclCommand::List(args) => run_acl_list_command(&clients, args, batch).await,
            AclCommand::Rule(AclRuleCommand::List(args)) => {
                run_acl_rule_list_command(&clients, args, batch).await
            }
        },
        Command::Cloudops(CloudOpsCommand::List(list)) => match list {
            CloudOpsListCommand::Ip(args) => run_ip_lookup_command(&clients, args, batch).await,
            CloudOpsListCommand::Mac(args) => run_mac_lookup_command(&clients, args, batch).await,
        },
        Command::Docs => Ok(()),
    }
}

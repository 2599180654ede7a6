//! Static route command handlers

use std::collections::HashSet;
use std::net::IpAddr;

use futures::future::try_join_all;
use log::info;
use regex::Regex;

use crate::cli::{RouteAddArgs, RouteDeleteArgs, RouteFlushArgs, RouteListArgs};
use crate::cosmic::correlate::label_routes;
use crate::cosmic::private_gateways::list_private_gateways;
use crate::cosmic::vpcs::{resolve_vpc, Vpc};
use crate::cosmic::{ClientSet, Selector};
use crate::error::{CosmicError, Result};
use crate::output::print_list;
use crate::ui::{confirm_delete, create_spinner, finish_spinner, println_above};

use super::api::{create_static_route, delete_static_route, list_static_routes};
use super::models::StaticRoute;

const ADD_USAGE: &str = "\"<network> via <nexthop>\"";

/// Parsed `CIDR[,CIDR] via NEXTHOP`
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RouteRequest {
    pub cidrs: Vec<String>,
    pub nexthop: String,
}

/// Check and split the positional arguments of `vpc route add`
pub(crate) fn parse_route_add_args(args: &[String]) -> Result<RouteRequest> {
    let [cidrs, via, nexthop] = args else {
        return Err(CosmicError::Validation(format!(
            "Incorrect number of parameters passed, this command expects {}",
            ADD_USAGE
        )));
    };

    if !via.eq_ignore_ascii_case("via") {
        return Err(CosmicError::Validation(format!(
            "Invalid parameters passed, this command expects {}",
            ADD_USAGE
        )));
    }

    let cidrs: Vec<String> = cidrs.split(',').map(str::to_string).collect();
    if let Some(bad) = cidrs.iter().find(|c| !is_cidr(c)) {
        return Err(CosmicError::Validation(format!(
            "{} is not a valid network CIDR",
            bad
        )));
    }

    if nexthop.parse::<IpAddr>().is_err() {
        return Err(CosmicError::Validation(format!(
            "{} is not a valid IP address",
            nexthop
        )));
    }

    Ok(RouteRequest {
        cidrs,
        nexthop: nexthop.clone(),
    })
}

fn is_cidr(value: &str) -> bool {
    let Some((addr, prefix)) = value.split_once('/') else {
        return false;
    };
    let Ok(prefix) = prefix.parse::<u8>() else {
        return false;
    };
    match addr.parse::<IpAddr>() {
        Ok(IpAddr::V4(_)) => prefix <= 32,
        Ok(IpAddr::V6(_)) => prefix <= 128,
        Err(_) => false,
    }
}

/// Which routes `vpc route delete` removes
#[derive(Debug, Clone)]
pub(crate) enum RouteMatch {
    Cidr(Vec<Regex>),
    NextHop(Vec<Regex>),
}

impl RouteMatch {
    pub fn matches(&self, route: &StaticRoute) -> bool {
        match self {
            RouteMatch::Cidr(patterns) => patterns.iter().any(|p| p.is_match(&route.base.cidr)),
            RouteMatch::NextHop(patterns) => {
                patterns.iter().any(|p| p.is_match(&route.base.nexthop))
            }
        }
    }
}

/// Parse `cidr=A[,B]` or `nexthop=A[,B]`
pub(crate) fn parse_route_delete_args(args: &[String]) -> Result<RouteMatch> {
    let [arg] = args else {
        return Err(CosmicError::Validation(
            "Incorrect number of parameters passed".to_string(),
        ));
    };

    let usage = || {
        CosmicError::Validation(
            "This command expects either \"cidr=CIDR[,CIDR,CIDR]\" or \"nexthop=NEXTHOP[,NEXTHOP,NEXTHOP]\""
                .to_string(),
        )
    };
    let (field, values) = arg.split_once('=').ok_or_else(usage)?;
    let patterns = values
        .split(',')
        .map(Regex::new)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if field.eq_ignore_ascii_case("cidr") {
        Ok(RouteMatch::Cidr(patterns))
    } else if field.eq_ignore_ascii_case("nexthop") {
        Ok(RouteMatch::NextHop(patterns))
    } else {
        Err(usage())
    }
}

/// Split the requested CIDRs into new ones and routes that already exist
pub(crate) fn plan_route_add<'a>(
    cidrs: &'a [String],
    existing: &'a [StaticRoute],
) -> (Vec<&'a str>, Vec<&'a StaticRoute>) {
    let mut new = Vec::new();
    let mut present = Vec::new();
    for cidr in cidrs {
        match existing.iter().find(|r| r.base.cidr == *cidr) {
            Some(route) => present.push(route),
            None => new.push(cidr.as_str()),
        }
    }
    (new, present)
}

/// Routes selected by `matcher`, each once
pub(crate) fn select_routes<'a>(routes: &'a [StaticRoute], matcher: &RouteMatch) -> Vec<&'a StaticRoute> {
    let mut seen = HashSet::new();
    let mut selected = Vec::new();
    for route in routes {
        if matcher.matches(route) && seen.insert(route.base.id.as_str()) {
            selected.push(route);
        }
    }
    selected
}

fn route_line(action: &str, route: &StaticRoute) -> String {
    format!(
        "{} route cidr:{}, nexthop:{} ...",
        action, route.base.cidr, route.base.nexthop
    )
}

async fn resolve_vpc_routes(clients: &ClientSet, selector: &Selector) -> Result<(Vpc, Vec<StaticRoute>)> {
    let vpc = resolve_vpc(clients, selector).await?;
    let routes = list_static_routes(clients, &vpc.base.id).await?;
    Ok((vpc, routes))
}

/// Delete routes concurrently, reporting the first failure
async fn delete_routes(clients: &ClientSet, routes: &[&StaticRoute], batch: bool) -> Result<()> {
    let spinner = create_spinner("Deleting routes...", batch);
    for route in routes {
        println_above(&spinner, &route_line("Deleting", route));
    }
    let result = try_join_all(
        routes
            .iter()
            .map(|r| delete_static_route(clients, &r.base.id)),
    )
    .await;
    finish_spinner(spinner);
    result.map(|_| ())
}

/// Run the vpc route list command
pub async fn run_route_list_command(clients: &ClientSet, args: &RouteListArgs, batch: bool) -> Result<()> {
    let options = args.list.options("cidr")?;
    options.validate::<StaticRoute>()?;
    let selector = args.scope.required()?;

    let spinner = create_spinner("Fetching static routes...", batch);
    let fetched = fetch_labelled_routes(clients, &selector).await;
    finish_spinner(spinner);

    let routes = options.apply(fetched?)?;
    let mut fields = vec!["cidr", "nexthop", "vpcname"];
    if args.show_id {
        fields.push("id");
    }
    print_list(&routes, &fields, args.list.output)
}

async fn fetch_labelled_routes(clients: &ClientSet, selector: &Selector) -> Result<Vec<StaticRoute>> {
    let vpc = resolve_vpc(clients, selector).await?;
    let (mut routes, gateways) = tokio::try_join!(
        list_static_routes(clients, &vpc.base.id),
        list_private_gateways(clients)
    )?;
    label_routes(&mut routes, &gateways);
    Ok(routes)
}

/// Run the vpc route add command
pub async fn run_route_add_command(clients: &ClientSet, args: &RouteAddArgs, batch: bool) -> Result<()> {
    let request = parse_route_add_args(&args.args)?;
    let selector = args.scope.required()?;

    let spinner = create_spinner("Fetching static routes...", batch);
    let fetched = resolve_vpc_routes(clients, &selector).await;
    finish_spinner(spinner);
    let (vpc, existing) = fetched?;

    let (new, present) = plan_route_add(&request.cidrs, &existing);
    for route in present {
        println!(
            "Route already exists cidr:{}, nexthop:{}",
            route.base.cidr, route.base.nexthop
        );
    }
    if new.is_empty() {
        return Ok(());
    }

    let spinner = create_spinner("Creating routes...", batch);
    for cidr in &new {
        println_above(
            &spinner,
            &format!("Creating route cidr:{}, nexthop:{} ...", cidr, request.nexthop),
        );
    }
    let result = try_join_all(
        new.iter()
            .map(|cidr| create_static_route(clients, &vpc.base.id, cidr, &request.nexthop)),
    )
    .await;
    finish_spinner(spinner);

    for profiles in result? {
        info!("Route created in profile(s): {}", profiles.join(", "));
    }
    Ok(())
}

/// Run the vpc route delete command
pub async fn run_route_delete_command(
    clients: &ClientSet,
    args: &RouteDeleteArgs,
    batch: bool,
) -> Result<()> {
    let matcher = parse_route_delete_args(&args.args)?;
    let selector = args.scope.required()?;

    let spinner = create_spinner("Fetching static routes...", batch);
    let fetched = resolve_vpc_routes(clients, &selector).await;
    finish_spinner(spinner);
    let (vpc, routes) = fetched?;

    let selected = select_routes(&routes, &matcher);
    if selected.is_empty() {
        info!("No static routes of VPC {} matched", vpc.base.name);
        return Ok(());
    }
    delete_routes(clients, &selected, batch).await
}

/// Run the vpc route flush command
pub async fn run_route_flush_command(clients: &ClientSet, args: &RouteFlushArgs, batch: bool) -> Result<()> {
    let selector = args.scope.required()?;

    let spinner = create_spinner("Fetching static routes...", batch);
    let fetched = resolve_vpc_routes(clients, &selector).await;
    finish_spinner(spinner);
    let (vpc, routes) = fetched?;

    if routes.is_empty() {
        info!("VPC {} has no static routes", vpc.base.name);
        return Ok(());
    }

    let what = format!("static route(s) from VPC {}", vpc.base.name);
    if !confirm_delete(&what, routes.len(), args.yes, batch)? {
        println!("Aborted");
        return Ok(());
    }

    let all: Vec<&StaticRoute> = routes.iter().collect();
    delete_routes(clients, &all, batch).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::VpcScopeArgs;
    use crate::cosmic::routes::StaticRouteRecord;
    use crate::cosmic::testing::{client_set, mount_async_job, mount_list};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn route(id: &str, cidr: &str, nexthop: &str) -> StaticRoute {
        StaticRoute::new(
            "alpha",
            StaticRouteRecord {
                id: id.to_string(),
                cidr: cidr.to_string(),
                nexthop: nexthop.to_string(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_parse_add_args() {
        let request = parse_route_add_args(&args(&["10.1.0.0/16,10.2.0.0/16", "via", "172.16.0.1"]))
            .unwrap();
        assert_eq!(request.cidrs, vec!["10.1.0.0/16", "10.2.0.0/16"]);
        assert_eq!(request.nexthop, "172.16.0.1");
    }

    #[test]
    fn test_parse_add_args_via_is_case_insensitive() {
        assert!(parse_route_add_args(&args(&["10.1.0.0/16", "VIA", "172.16.0.1"])).is_ok());
    }

    #[test]
    fn test_parse_add_args_wrong_count() {
        for input in [args(&[]), args(&["10.1.0.0/16", "via"])] {
            let err = parse_route_add_args(&input).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Incorrect number of parameters passed, this command expects \"<network> via <nexthop>\""
            );
        }
    }

    #[test]
    fn test_parse_add_args_missing_via() {
        let err = parse_route_add_args(&args(&["10.1.0.0/16", "to", "172.16.0.1"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid parameters passed, this command expects \"<network> via <nexthop>\""
        );
    }

    #[test]
    fn test_parse_add_args_bad_cidr() {
        let err = parse_route_add_args(&args(&["10.1.0.0/16,10.2.0.0/33", "via", "172.16.0.1"]))
            .unwrap_err();
        assert_eq!(err.to_string(), "10.2.0.0/33 is not a valid network CIDR");

        let err = parse_route_add_args(&args(&["10.1.0.0", "via", "172.16.0.1"])).unwrap_err();
        assert_eq!(err.to_string(), "10.1.0.0 is not a valid network CIDR");
    }

    #[test]
    fn test_parse_add_args_bad_nexthop() {
        let err = parse_route_add_args(&args(&["10.1.0.0/16", "via", "172.16.0"])).unwrap_err();
        assert_eq!(err.to_string(), "172.16.0 is not a valid IP address");
    }

    #[test]
    fn test_is_cidr() {
        assert!(is_cidr("0.0.0.0/0"));
        assert!(is_cidr("fd00::/8"));
        assert!(!is_cidr("fd00::/129"));
        assert!(!is_cidr("10.0.0.0/x"));
    }

    #[test]
    fn test_parse_delete_args() {
        let matcher = parse_route_delete_args(&args(&["CIDR=^10\\.1\\.,^10\\.2\\."])).unwrap();
        assert!(matcher.matches(&route("r-1", "10.1.0.0/16", "172.16.0.1")));
        assert!(matcher.matches(&route("r-2", "10.2.0.0/16", "172.16.0.1")));
        assert!(!matcher.matches(&route("r-3", "10.3.0.0/16", "172.16.0.1")));

        let matcher = parse_route_delete_args(&args(&["nexthop=172.16.0.9"])).unwrap();
        assert!(matcher.matches(&route("r-1", "10.1.0.0/16", "172.16.0.9")));
        assert!(!matcher.matches(&route("r-1", "10.1.0.0/16", "172.16.0.1")));
    }

    #[test]
    fn test_parse_delete_args_errors() {
        let err = parse_route_delete_args(&args(&["id=r-1"])).unwrap_err();
        assert!(err.to_string().starts_with("This command expects either"));
        assert!(parse_route_delete_args(&args(&["10.1.0.0/16"])).is_err());
        assert_eq!(
            parse_route_delete_args(&args(&[])).unwrap_err().to_string(),
            "Incorrect number of parameters passed"
        );
        assert!(parse_route_delete_args(&args(&["cidr=(oops"])).is_err());
    }

    #[test]
    fn test_plan_route_add() {
        let existing = vec![route("r-1", "10.1.0.0/16", "172.16.0.2")];
        let cidrs = args(&["10.1.0.0/16", "10.2.0.0/16"]);
        let (new, present) = plan_route_add(&cidrs, &existing);
        assert_eq!(new, vec!["10.2.0.0/16"]);
        assert_eq!(present.len(), 1);
        assert_eq!(present[0].base.nexthop, "172.16.0.2");
    }

    #[test]
    fn test_select_routes_dedupes() {
        let routes = vec![
            route("r-1", "10.1.0.0/16", "172.16.0.1"),
            route("r-2", "10.2.0.0/16", "172.16.0.1"),
        ];
        let matcher = parse_route_delete_args(&args(&["cidr=10\\.1\\.,/16"])).unwrap();
        let selected = select_routes(&routes, &matcher);
        let ids: Vec<&str> = selected.iter().map(|r| r.base.id.as_str()).collect();
        assert_eq!(ids, vec!["r-1", "r-2"]);
    }

    #[test]
    fn test_route_line() {
        assert_eq!(
            route_line("Deleting", &route("r-1", "10.1.0.0/16", "172.16.0.1")),
            "Deleting route cidr:10.1.0.0/16, nexthop:172.16.0.1 ..."
        );
    }

    async fn mount_vpc(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/client/api"))
            .and(query_param("command", "listVPCs"))
            .and(query_param("id", "v-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "listvpcsresponse": {"count": 1, "vpc": [{"id": "v-1", "name": "prod"}]}
            })))
            .mount(server)
            .await;
    }

    fn scope() -> VpcScopeArgs {
        VpcScopeArgs {
            vpc_id: Some("v-1".to_string()),
            vpc_name: None,
        }
    }

    #[tokio::test]
    async fn test_route_list_labels_next_hop_vpc() {
        let alpha = MockServer::start().await;
        mount_vpc(&alpha).await;
        mount_list(
            &alpha,
            "listStaticRoutes",
            "staticroute",
            serde_json::json!([{"id": "r-1", "cidr": "10.9.0.0/16", "nexthop": "172.16.0.1", "vpcid": "v-1"}]),
        )
        .await;
        mount_list(
            &alpha,
            "listPrivateGateways",
            "privategateway",
            serde_json::json!([{"id": "pg-1", "ipaddress": "172.16.0.1", "vpcid": "v-2"}]),
        )
        .await;
        mount_list(
            &alpha,
            "listVPCs",
            "vpc",
            serde_json::json!([{"id": "v-1", "name": "prod"}, {"id": "v-2", "name": "transit"}]),
        )
        .await;

        let clients = client_set(&[("alpha", &alpha)]);
        let routes = fetch_labelled_routes(&clients, &Selector::Id("v-1".to_string()))
            .await
            .unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].vpc_name, "transit");
    }

    #[tokio::test]
    async fn test_route_add_skips_existing_and_creates_new() {
        let alpha = MockServer::start().await;
        mount_vpc(&alpha).await;
        mount_list(
            &alpha,
            "listStaticRoutes",
            "staticroute",
            serde_json::json!([{"id": "r-1", "cidr": "10.1.0.0/16", "nexthop": "172.16.0.1"}]),
        )
        .await;
        mount_async_job(&alpha, "createStaticRoute", "job-1").await;

        let clients = client_set(&[("alpha", &alpha)]);
        let add = RouteAddArgs {
            args: args(&["10.1.0.0/16,10.2.0.0/16", "via", "172.16.0.1"]),
            scope: scope(),
        };
        run_route_add_command(&clients, &add, true).await.unwrap();

        let creates = alpha
            .received_requests()
            .await
            .unwrap()
            .into_iter()
            .filter(|r| r.url.query().unwrap_or("").contains("command=createStaticRoute"))
            .count();
        assert_eq!(creates, 1);
    }

    #[tokio::test]
    async fn test_route_add_requires_scope() {
        let add = RouteAddArgs {
            args: args(&["10.1.0.0/16", "via", "172.16.0.1"]),
            scope: VpcScopeArgs::default(),
        };
        let err = run_route_add_command(&ClientSet::new(), &add, true)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "One of --vpc-id or --vpc-name is required");
    }

    #[tokio::test]
    async fn test_route_flush_deletes_everything_in_batch_mode() {
        let alpha = MockServer::start().await;
        mount_vpc(&alpha).await;
        mount_list(
            &alpha,
            "listStaticRoutes",
            "staticroute",
            serde_json::json!([
                {"id": "r-1", "cidr": "10.1.0.0/16", "nexthop": "172.16.0.1"},
                {"id": "r-2", "cidr": "10.2.0.0/16", "nexthop": "172.16.0.1"}
            ]),
        )
        .await;
        mount_async_job(&alpha, "deleteStaticRoute", "job-9").await;

        let clients = client_set(&[("alpha", &alpha)]);
        let flush = RouteFlushArgs {
            scope: scope(),
            yes: false,
        };
        run_route_flush_command(&clients, &flush, true).await.unwrap();

        let deletes = alpha
            .received_requests()
            .await
            .unwrap()
            .into_iter()
            .filter(|r| r.url.query().unwrap_or("").contains("command=deleteStaticRoute"))
            .count();
        assert_eq!(deletes, 2);
    }
}

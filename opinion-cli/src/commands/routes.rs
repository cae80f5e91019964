//! Route listing, without starting the server

use anyhow::Result;
use clap::Parser;

use opinion_server::http::routes::index::{ApiIndex, Endpoint, ENDPOINTS};

/// Arguments for the routes command
#[derive(Parser, Debug)]
pub struct RoutesArgs {
    /// Print the same JSON document served at `/`
    #[arg(long)]
    pub json: bool,
}

pub fn run_routes(args: RoutesArgs) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&ApiIndex::current())?);
    } else {
        print!("{}", render_table(&ENDPOINTS));
    }
    Ok(())
}

fn render_table(endpoints: &[Endpoint]) -> String {
    let width = endpoints
        .iter()
        .map(|endpoint| endpoint.path.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for endpoint in endpoints {
        let paging = if endpoint.paginated { "skip,limit" } else { "-" };
        out.push_str(&format!(
            "GET {:<width$}  {:<10}  {}\n",
            endpoint.path, paging, endpoint.description
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_one_line_per_route() {
        let table = render_table(&ENDPOINTS);
        assert_eq!(table.lines().count(), ENDPOINTS.len());
        assert!(table.lines().all(|line| line.starts_with("GET /")));
    }

    #[test]
    fn sources_marked_unpaginated() {
        let table = render_table(&ENDPOINTS);
        let sources = table.lines().find(|line| line.contains("/fuentes")).unwrap();
        assert!(!sources.contains("skip,limit"));
    }
}

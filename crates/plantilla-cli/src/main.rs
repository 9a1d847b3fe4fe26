mod display;

use clap::{Parser, Subcommand};
use plantilla_core::{Field, Plantilla};
use plantilla_gateway::GatewayClient;
use tracing_subscriber::EnvFilter;

use display::{TerminalAlert, TerminalPresenter};

#[derive(Parser)]
#[command(name = "plantilla", version, about = "Front-end client for MS Plantilla")]
struct Cli {
    /// API gateway base address.
    #[arg(
        long,
        env = "PLANTILLA_API_GATEWAY",
        default_value = "http://localhost:8001"
    )]
    gateway: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the home message.
    Home,
    /// Show author, email and date.
    About,
    /// List every person with all columns.
    List,
    /// List names and surnames.
    Names,
    /// List names sorted by surname.
    NamesSorted,
    /// Sort by a top-level field, e.g. Mejor_estilo_natacion.
    ByField {
        #[arg(value_parser = parse_top_level)]
        field: Field,
    },
    /// Sort numerically by a field, e.g. Num_participaciones_mundiales_JJOO.
    ByNumber {
        #[arg(value_parser = parse_field)]
        field: Field,
    },
    /// Sort by a nested field ignoring accents, e.g. Direccion localidad.
    ByNested { name: String, subname: String },
    /// Show people with the given first name.
    Search { nombre: String },
    /// Show people matching name, town, stroke and a participation year.
    SearchAll {
        nombre: String,
        localidad: String,
        estilo: String,
        anio: String,
    },
    /// Show people matching any of name, town, stroke or country.
    SearchAny {
        nombre: String,
        localidad: String,
        estilo: String,
        pais: String,
    },
    /// Show one person by id.
    Show { id: String },
}

fn parse_field(s: &str) -> Result<Field, String> {
    s.parse::<Field>().map_err(|e| e.to_string())
}

fn parse_top_level(s: &str) -> Result<Field, String> {
    Field::top_level(s).ok_or_else(|| format!("unknown top-level field: {s}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::info!(gateway = %cli.gateway, "plantilla v{}", env!("CARGO_PKG_VERSION"));

    let front = Plantilla::new(
        GatewayClient::new(cli.gateway),
        TerminalPresenter,
        TerminalAlert,
    );

    match cli.command {
        Command::Home => front.show_home().await,
        Command::About => front.show_about().await,
        Command::List => front.list_all().await,
        Command::Names => front.list_names().await,
        Command::NamesSorted => front.list_sorted_by_surname().await,
        Command::ByField { field } => front.list_by_field(field).await,
        Command::ByNumber { field } => front.list_by_numeric_field(field).await,
        Command::ByNested { name, subname } => {
            let field = Field::nested(&name, &subname)
                .ok_or_else(|| anyhow::anyhow!("unknown nested field: {name}.{subname}"))?;
            front.list_by_nested_field(field).await
        }
        Command::Search { nombre } => front.filter_by_name(&nombre).await,
        Command::SearchAll {
            nombre,
            localidad,
            estilo,
            anio,
        } => front.search_all(&nombre, &localidad, &estilo, &anio).await,
        Command::SearchAny {
            nombre,
            localidad,
            estilo,
            pais,
        } => front.search_any(&nombre, &localidad, &estilo, &pais).await,
        Command::Show { id } => front.get_one(&id).await,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_nested_sort() {
        let cli = Cli::try_parse_from(["plantilla", "by-nested", "Direccion", "localidad"]).unwrap();
        match cli.command {
            Command::ByNested { name, subname } => {
                assert_eq!(Field::nested(&name, &subname), Some(Field::Localidad));
            }
            _ => panic!("expected by-nested"),
        }
    }

    #[test]
    fn rejects_unknown_sort_field() {
        assert!(Cli::try_parse_from(["plantilla", "by-field", "Direccion"]).is_err());
        assert!(Cli::try_parse_from(["plantilla", "by-number", "Edad"]).is_err());
    }

    #[test]
    fn by_number_accepts_dotted_paths() {
        let cli = Cli::try_parse_from(["plantilla", "by-number", "Fecha.año"]).unwrap();
        assert!(matches!(cli.command, Command::ByNumber { field: Field::Anio }));
    }

    #[test]
    fn gateway_flag_overrides_default() {
        let cli =
            Cli::try_parse_from(["plantilla", "--gateway", "http://gw:9000/", "home"]).unwrap();
        assert_eq!(cli.gateway, "http://gw:9000/");
    }
}

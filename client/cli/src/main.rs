use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zosfiles::{rename, Protocol, ZosFilesResponse, ZosmfRestClient};

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "zfiles")]
#[command(about = "z/OSMF data set client", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ConnectionArgs {
    /// z/OSMF host name
    #[arg(long, global = true)]
    host: Option<String>,
    /// z/OSMF port
    #[arg(long, global = true)]
    port: Option<u16>,
    /// http or https
    #[arg(long, global = true)]
    protocol: Option<Protocol>,
    /// User for basic authentication
    #[arg(long, global = true)]
    user: Option<String>,
    /// Path prefix in front of /zosmf, e.g. an API gateway route
    #[arg(long, global = true)]
    base_path: Option<String>,
    /// Verify the server certificate
    #[arg(long, global = true)]
    reject_unauthorized: Option<bool>,
}

impl ConnectionArgs {
    fn apply(self, config: &mut Config) {
        if self.host.is_some() {
            config.host = self.host;
        }
        if self.port.is_some() {
            config.port = self.port;
        }
        if self.protocol.is_some() {
            config.protocol = self.protocol;
        }
        if self.user.is_some() {
            config.user = self.user;
        }
        if self.base_path.is_some() {
            config.base_path = self.base_path;
        }
        if self.reject_unauthorized.is_some() {
            config.reject_unauthorized = self.reject_unauthorized;
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Rename a data set or a data set member
    Rename {
        #[command(subcommand)]
        target: RenameTarget,
    },
}

#[derive(Subcommand)]
enum RenameTarget {
    /// Rename a data set
    DataSet {
        /// Current data set name
        before: String,
        /// New data set name
        after: String,
    },
    /// Rename a member of a partitioned data set
    DataSetMember {
        /// Data set holding the member
        data_set: String,
        /// Current member name
        before: String,
        /// New member name
        after: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zfiles=info,zosfiles=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_env()?;
    cli.connection.apply(&mut config);
    prompt_password(&mut config)?;

    let session = config.to_session()?;
    let client = ZosmfRestClient::new()?;

    let response = match cli.command {
        Commands::Rename { target } => rename_target(&client, &session, target).await?,
    };

    println!("{}", response.command_response);
    Ok(())
}

async fn rename_target(
    client: &ZosmfRestClient,
    session: &zosfiles::Session,
    target: RenameTarget,
) -> anyhow::Result<ZosFilesResponse> {
    let response = match target {
        RenameTarget::DataSet { before, after } => {
            rename::data_set(client, session, before.as_str(), after.as_str()).await?
        }
        RenameTarget::DataSetMember {
            data_set,
            before,
            after,
        } => {
            rename::data_set_member(
                client,
                session,
                data_set.as_str(),
                before.as_str(),
                after.as_str(),
            )
            .await?
        }
    };
    Ok(response)
}

fn prompt_password(config: &mut Config) -> anyhow::Result<()> {
    if let (Some(user), None) = (&config.user, &config.password) {
        let password = rpassword::prompt_password(format!("Password for {}: ", user))?;
        config.password = Some(password);
    }
    Ok(())
}

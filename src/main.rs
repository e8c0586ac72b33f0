use anyhow::{Context as _, bail};
use clap::{Parser, Subcommand};
use ordkit::Config;
use ordkit::primitives::{Outpoint, ScriptEncoding};
use ordkit::wallet;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "1Sat ordinal UTxO discovery and key tools for BSV")]
struct Cli {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the transferable ordinal UTxOs held by an address
    Utxos {
        address: String,

        /// Only outputs belonging to this collection (the collection inscription origin)
        #[arg(long)]
        collection_id: Option<String>,

        /// Script encoding: `hex`, `base64` or `asm`
        #[arg(long, default_value_t = ScriptEncoding::Base64)]
        encoding: ScriptEncoding,
    },
    /// Check whether an address currently holds the ordinal inscribed at an origin
    Owns { address: String, origin: Outpoint },
    /// Generate a new private key in WIF
    Keygen,
    /// Public key of a WIF private key
    Pubkey { wif: String },
    /// P2PKH address of a private or public key
    Address {
        #[arg(long, conflicts_with = "pubkey")]
        wif: Option<String>,

        #[arg(long)]
        pubkey: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // This returns an error if the `.env` file doesn't exist, which is fine
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let Cli { config, command } = Cli::parse();

    match command {
        Command::Utxos {
            address,
            collection_id,
            encoding,
        } => {
            let discovery = config.discovery(config.http_client()?);
            let utxos = discovery
                .nft_utxos(&address, collection_id.as_deref(), encoding)
                .await
                .with_context(|| format!("could not discover ordinals of {address}"))?;
            info!(%address, count = utxos.len(), "Discovered ordinal utxos");
            println!("{}", serde_json::to_string_pretty(&utxos)?);
        }
        Command::Owns { address, origin } => {
            let resolver = config.ownership_resolver(config.http_client()?);
            println!("{}", resolver.holds(&address, &origin).await);
        }
        Command::Keygen => println!("{}", wallet::generate_private_key()),
        Command::Pubkey { wif } => println!("{}", wallet::private_key_to_public_key(&wif)?),
        Command::Address { wif, pubkey } => {
            let address = match (wif, pubkey) {
                (Some(wif), _) => wallet::private_key_to_address(&wif, config.network)?,
                (None, Some(pubkey)) => wallet::public_key_to_address(&pubkey, config.network)?,
                (None, None) => bail!("either --wif or --pubkey is required"),
            };
            println!("{address}");
        }
    }

    Ok(())
}

pub mod deploy;
pub mod read;
pub mod write;

use std::path::PathBuf;

use alloy::network::AnyNetwork;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use color_eyre::eyre::Result;
use tracing::debug;
use untron_rs::{Artifacts, Config, ContractKind, Submitter, UntronCore};

use crate::cli::{Cli, WalletArgs};
use crate::wallet::create_signer;

pub type RpcProvider = DynProvider<AnyNetwork>;

/// Everything a command needs besides its own arguments
pub struct Context {
    pub config: Config,
    pub config_path: PathBuf,
    pub artifacts: Artifacts,
    pub json: bool,
}

impl Context {
    /// Loads the config file and applies command-line overrides
    pub fn load(cli: &Cli) -> Result<Self> {
        let config = Config::load(&cli.config)?.with_rpc_url(cli.rpc_url.clone());
        debug!(
            config = %cli.config.display(),
            artifacts = %cli.artifacts.display(),
            "configuration loaded"
        );
        Ok(Self {
            config,
            config_path: cli.config.clone(),
            artifacts: Artifacts::new(&cli.artifacts),
            json: cli.json,
        })
    }

    pub fn provider(&self) -> Result<RpcProvider> {
        let url = self.config.rpc_url()?.clone();
        Ok(ProviderBuilder::new()
            .network::<AnyNetwork>()
            .connect_http(url)
            .erased())
    }

    /// Builds the signer and reads the chain id from the node
    pub async fn submitter(&self, provider: RpcProvider, wallet: &WalletArgs) -> Result<Submitter<RpcProvider>> {
        let signer = create_signer(wallet, &self.config)?;
        Ok(Submitter::connect(provider, signer).await?)
    }

    /// UntronCore handle checked against its artifact; needs no network access
    pub fn core(&self, provider: RpcProvider) -> Result<UntronCore<RpcProvider>> {
        let artifact = self.artifacts.load(ContractKind::UntronCore)?;
        let address = self.config.core_address()?;
        Ok(UntronCore::new(address, provider).with_artifact(artifact))
    }
}

use std::path::PathBuf;

use anyhow::Result;

use crate::infrastructure::paths::PortalPaths;
use crate::infrastructure::tracing::init_tracing;

pub fn execute(
    port: u16,
    config_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    init_tracing(verbose);

    let paths = PortalPaths::new(config_dir, data_dir);
    run_server(paths, port)
}

#[tokio::main]
async fn run_server(paths: PortalPaths, port: u16) -> Result<()> {
    use crate::portal::Server;

    let server = Server::new(paths, port)?;
    server.run().await
}

//! 命令行广告查询
//! 写入示例目录，列出广告后按 id 查询一条

use std::{io, sync::Arc};

use marketplace::{
    app::ads::{catalog::seed_initial_catalog, cli::run_lookup, AdService, InMemoryAdStore},
    infrastructure::logger::Logger,
};

fn main() -> anyhow::Result<()> {
    Logger::init("warn");

    let service = AdService::new(Arc::new(InMemoryAdStore::new()));
    seed_initial_catalog(&service);

    let stdin = io::stdin();
    run_lookup(&service, stdin.lock(), io::stdout().lock())?;
    Ok(())
}

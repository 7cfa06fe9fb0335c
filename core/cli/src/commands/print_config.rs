use anyhow::Result;
use resolved_pathbuf::ResolvedPathBuf;

use crate::config::CliConfig;

pub fn exec(default: bool, config_path: ResolvedPathBuf) -> Result<()> {
    let config = match default {
        true => CliConfig::default(),
        false => CliConfig::load_or_write(config_path)?,
    };
    println!("{}", config.serialize()?);
    Ok(())
}

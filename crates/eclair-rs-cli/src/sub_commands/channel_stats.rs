use std::io::Write;

use anyhow::Result;
use clap::Args;
use eclair_rs::NodeRpc;

#[derive(Args)]
pub struct ChannelStatsSubcommand {}

pub async fn channel_stats<N, W>(
    _sub_command_args: &ChannelStatsSubcommand,
    node: &N,
    out: &mut W,
) -> Result<u8>
where
    N: NodeRpc,
    W: Write,
{
    let response = node.call("channelstats").await?;

    out.write_all(&response)?;
    out.flush()?;

    Ok(0)
}

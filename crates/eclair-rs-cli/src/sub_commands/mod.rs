pub mod channel_stats;

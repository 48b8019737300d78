use crate::api::Endpoint;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rbxstats")]
#[command(about = "Query the RbxStats API for offsets, exploits, versions and games", long_about = None)]
pub struct Args {
    #[arg(short = 'v', long = "verbose", help = "Log requests to stderr")]
    pub verbose: bool,

    #[arg(
        long = "json",
        help = "Decode the response as JSON and pretty-print it instead of listing flat fields"
    )]
    pub json: bool,

    #[arg(
        long = "api-endpoint",
        help = "Custom API base URL (e.g., http://localhost:8080/api)"
    )]
    pub api_endpoint: Option<String>,

    #[arg(
        long = "config-init",
        help = "Write an example config file to ~/.config/rbxstats/rbxstats.yaml"
    )]
    pub config_init: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Roblox client offsets
    Offsets {
        #[command(subcommand)]
        query: OffsetsQuery,
    },
    /// Exploit listings
    Exploits {
        #[command(subcommand)]
        query: ExploitsQuery,
    },
    /// Roblox client versions
    Versions {
        #[command(subcommand)]
        query: VersionsQuery,
    },
    /// Game details by place id
    Game { id: u64 },
}

#[derive(Subcommand, Debug, Clone)]
pub enum OffsetsQuery {
    /// Every known offset
    All,
    /// Offset with this exact name
    Search { name: String },
    /// Offsets whose names start with a prefix
    Prefix { prefix: String },
    /// Camera offsets
    Camera,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ExploitsQuery {
    /// Every listed exploit
    All,
    /// Exploits that run on Windows
    Windows,
    /// Exploits that run on macOS
    Mac,
    /// Exploits currently undetected
    Undetected,
    /// Exploits currently detected
    Detected,
    /// Free exploits
    Free,
}

#[derive(Subcommand, Debug, Clone)]
pub enum VersionsQuery {
    /// Current live client version
    Latest,
    /// Upcoming client version
    Future,
}

impl Command {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Command::Offsets { query } => match query {
                OffsetsQuery::All => Endpoint::Offsets,
                OffsetsQuery::Search { name } => Endpoint::OffsetByName(name.clone()),
                OffsetsQuery::Prefix { prefix } => Endpoint::OffsetsByPrefix(prefix.clone()),
                OffsetsQuery::Camera => Endpoint::OffsetsCamera,
            },
            Command::Exploits { query } => match query {
                ExploitsQuery::All => Endpoint::Exploits,
                ExploitsQuery::Windows => Endpoint::ExploitsWindows,
                ExploitsQuery::Mac => Endpoint::ExploitsMac,
                ExploitsQuery::Undetected => Endpoint::ExploitsUndetected,
                ExploitsQuery::Detected => Endpoint::ExploitsDetected,
                ExploitsQuery::Free => Endpoint::ExploitsFree,
            },
            Command::Versions { query } => match query {
                VersionsQuery::Latest => Endpoint::VersionsLatest,
                VersionsQuery::Future => Endpoint::VersionsFuture,
            },
            Command::Game { id } => Endpoint::Game(*id),
        }
    }
}

use clap::Parser;

#[derive(Parser)]
#[command(name = "ytex", about = "YouTube transcript extraction microservice", version)]
pub struct Cli {
    /// Port to listen on (binds all interfaces)
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Default caption language for requests that omit one
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Log fallback attempts and outbound fetches
    #[arg(short, long)]
    pub verbose: bool,
}

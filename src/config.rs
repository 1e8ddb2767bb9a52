use clap::Parser;
use std::path::PathBuf;

use inapp_content::input::InputSource;

#[derive(Parser, Debug, Clone)]
#[command(name = "inapp-content")]
#[command(about = "Decode in-app message content payloads")]
pub struct Config {
    /// Payload files to parse ("-" reads stdin; none reads stdin)
    pub inputs: Vec<PathBuf>,

    /// JSON pointer selecting the content payload inside each document
    #[arg(long, env = "INAPP_POINTER")]
    pub pointer: Option<String>,

    /// Pretty-print JSON output (multi-line, no longer one report per line)
    #[arg(long, env = "INAPP_PRETTY")]
    pub pretty: bool,

    /// Exit with a failure status when any payload is rejected
    #[arg(long, env = "INAPP_STRICT")]
    pub strict: bool,

    /// Print Prometheus metrics to stderr when done
    #[arg(long, env = "INAPP_METRICS")]
    pub metrics: bool,
}

impl Config {
    /// Input sources in order; stdin is only read once even if `-` repeats
    pub fn sources(&self) -> Vec<InputSource> {
        if self.inputs.is_empty() {
            return vec![InputSource::Stdin];
        }
        let mut sources = Vec::with_capacity(self.inputs.len());
        for source in self.inputs.iter().map(|path| InputSource::from_path(path)) {
            if source == InputSource::Stdin && sources.contains(&InputSource::Stdin) {
                continue;
            }
            sources.push(source);
        }
        sources
    }

    pub fn pointer(&self) -> Option<&str> {
        self.pointer.as_deref().filter(|p| !p.is_empty())
    }
}

use anyhow::Result;
use clap::Parser;

use mountcheck::component::{self, BUILTIN_NAMES};
use mountcheck::report::{self, TestReport};
use mountcheck::{HarnessConfig, SmokeRunner};

/// Run smoke checks against built-in components
#[derive(Parser, Debug)]
#[command(name = "mountcheck", version, about)]
struct Cli {
    /// Component to check; repeatable (default: every built-in that is
    /// expected to pass)
    #[arg(long = "component", value_name = "NAME")]
    components: Vec<String>,

    /// List built-in component names and exit
    #[arg(long)]
    list: bool,

    /// Emit reports as JSON instead of PASS/FAIL lines
    #[arg(long)]
    json: bool,

    /// Stop at the first failing component
    #[arg(long)]
    stop_on_failure: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.list {
        for name in BUILTIN_NAMES {
            println!("{}", name);
        }
        return Ok(());
    }

    let names: Vec<String> = if cli.components.is_empty() {
        BUILTIN_NAMES
            .iter()
            .copied()
            .filter(|name| *name != "always-fails")
            .map(str::to_string)
            .collect()
    } else {
        cli.components.clone()
    };

    let mut components = Vec::with_capacity(names.len());
    for name in &names {
        match component::builtin(name) {
            Some(c) => components.push(c),
            None => anyhow::bail!("unknown component: {name}"),
        }
    }

    let config = HarnessConfig {
        stop_on_failure: cli.stop_on_failure,
        ..Default::default()
    };
    let runner = SmokeRunner::new(config);
    let reports: Vec<TestReport> = runner
        .run_suite(&components)
        .iter()
        .map(TestReport::from_attempt)
        .collect();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{}", report.summary_line());
        }
    }

    std::process::exit(report::exit_code(&reports));
}

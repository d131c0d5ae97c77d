use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    str::FromStr,
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use cpu_sched_sim::{
    Algorithm, DEFAULT_QUANTUM, ProcessSpec, SimulationReport, SimulationRunner,
    report::{render_comparison, render_events, render_report},
    sim::workload::{bernoulli_workload, parse_process_arg, parse_workload},
};
use tracing_subscriber::EnvFilter;

/// Simulate FCFS, SJF and Round Robin CPU scheduling over a fixed workload.
///
/// Without --workload, --process or --random the processes are read
/// interactively from stdin.
#[derive(Debug, Parser)]
#[command(name = "cpu-sched-sim", version)]
struct Cli {
    /// fcfs, sjf, rr (or 1, 2, 3), or `all` to compare every algorithm
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Round Robin time quantum
    #[arg(short, long, default_value_t = DEFAULT_QUANTUM.get() as i64, allow_negative_numbers = true)]
    quantum: i64,

    /// File with one `arrival burst` pair per line
    #[arg(short, long, conflicts_with_all = ["processes", "random"])]
    workload: Option<PathBuf>,

    /// A process as ARRIVAL:BURST; repeat for more
    #[arg(short = 'p', long = "process", value_parser = parse_process_arg, allow_hyphen_values = true)]
    processes: Vec<ProcessSpec>,

    /// Generate a random workload spanning this many ticks
    #[arg(long, conflicts_with = "processes")]
    random: Option<u64>,

    /// Seed for --random
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Emit reports as JSON
    #[arg(long)]
    json: bool,

    /// Print every scheduling event
    #[arg(long)]
    trace: bool,
}

enum Selection {
    One(Algorithm),
    All,
}

impl FromStr for Selection {
    type Err = cpu_sched_sim::SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::One)
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let (specs, quantum, selection) = if let Some(path) = &cli.workload {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read workload {}", path.display()))?;
        let specs = parse_workload(&text)
            .with_context(|| format!("failed to parse workload {}", path.display()))?;
        (specs, cli.quantum, cli_selection(&cli)?)
    } else if let Some(ticks) = cli.random {
        let specs = bernoulli_workload(ticks, 0.3, 0.3, 2, 6, cli.seed);
        (specs, cli.quantum, cli_selection(&cli)?)
    } else if !cli.processes.is_empty() {
        (cli.processes.clone(), cli.quantum, cli_selection(&cli)?)
    } else {
        prompt_workload(&cli)?
    };

    let runner = SimulationRunner::new(&specs)?;
    let reports = match selection {
        Selection::One(algorithm) => vec![runner.run(algorithm, quantum)?],
        Selection::All => runner.run_all(quantum)?,
    };

    print_reports(&reports, cli.json, cli.trace)
}

fn cli_selection(cli: &Cli) -> Result<Selection> {
    Ok(cli.algorithm.as_deref().unwrap_or("all").parse::<Selection>()?)
}

fn print_reports(reports: &[SimulationReport], json: bool, trace: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        serde_json::to_writer_pretty(&mut out, reports).context("failed to encode reports")?;
        writeln!(out)?;
        return Ok(());
    }

    for report in reports {
        if trace {
            writeln!(out, "{}", render_events(&report.events))?;
        }
        writeln!(out, "{}", render_report(report))?;
    }
    if reports.len() > 1 {
        writeln!(out, "Comparison:\n{}", render_comparison(reports))?;
    }
    Ok(())
}

// Same dialogue as the classic menu program: count, per-process times,
// quantum, then the algorithm choice
fn prompt_workload(cli: &Cli) -> Result<(Vec<ProcessSpec>, i64, Selection)> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut ask = |message: &str| -> Result<String> {
        print!("{message}");
        io::stdout().flush()?;
        match lines.next() {
            Some(line) => Ok(line?.trim().to_owned()),
            None => bail!("unexpected end of input"),
        }
    };

    let count: usize = ask("Enter the number of processes: ")?
        .parse()
        .context("process count must be a non-negative integer")?;

    let mut specs = Vec::with_capacity(count);
    for pid in 1..=count {
        let arrival = ask(&format!("\nEnter arrival time for Process {pid}: "))?
            .parse()
            .with_context(|| format!("arrival time of P{pid} must be an integer"))?;
        let burst = ask(&format!("Enter burst time for Process {pid}: "))?
            .parse()
            .with_context(|| format!("burst time of P{pid} must be an integer"))?;
        specs.push(ProcessSpec::new(arrival, burst));
    }

    let quantum = ask("\nEnter time quantum for Round Robin: ")?
        .parse()
        .context("quantum must be an integer")?;

    let selection = match &cli.algorithm {
        Some(choice) => choice.parse::<Selection>()?,
        None => ask("\nChoose Scheduling Algorithm:\n1. FCFS\n2. SJF\n3. Round Robin\n")?
            .parse::<Algorithm>()
            .map(Selection::One)?,
    };

    Ok((specs, quantum, selection))
}

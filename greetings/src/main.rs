use anyhow::{Context, Result};
use argh::FromArgs;
use greetings::pick::{self, Pick};
use greetings::{Greeter, Template};
use std::io::Write;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs)]
/// Print a greeting for each of the given names.
struct Args {
    #[argh(positional)]
    /// names to greet; one greeting is printed per distinct name.
    names: Vec<String>,

    #[argh(option)]
    /// seed for the template choice, for reproducible output.
    seed: Option<u64>,

    #[argh(switch)]
    /// print which template produced each greeting.
    explain: bool,

    #[argh(switch, short = 'v')]
    /// log debug output to stderr.
    verbose: bool,
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();
    init_tracing(args.verbose);

    let stdout = std::io::stdout();
    match args.seed {
        Some(seed) => run(&args, Greeter::new(pick::seeded(seed)), &mut stdout.lock()),
        None => run(&args, Greeter::default(), &mut stdout.lock()),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}

fn run<P: Pick>(args: &Args, mut greeter: Greeter<P>, stdout: &mut dyn Write) -> Result<()> {
    if args.names.is_empty() {
        anyhow::bail!("greet: at least one name is required");
    }
    let lines = if let [name] = args.names.as_slice() {
        let message = greeter.hello(name).context("greet")?;
        vec![line(None, &message, args.explain)]
    } else {
        let table = greeter.hellos(args.names.as_slice()).context("greet")?;
        let mut entries: Vec<_> = table.into_iter().collect();
        entries.sort();
        entries
            .iter()
            .map(|(name, message)| line(Some(name.as_str()), message, args.explain))
            .collect()
    };

    // nothing reaches stdout unless every name was greeted
    for l in lines {
        writeln!(stdout, "{l}")?;
    }
    Ok(())
}

fn line(name: Option<&str>, message: &str, explain: bool) -> String {
    let mut s = match name {
        Some(name) => format!("{name}: {message}"),
        None => message.to_string(),
    };
    if explain {
        if let Some(template) = Template::matching(message) {
            s.push_str(&format!(" [{template}]"));
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(names: &[&str], explain: bool) -> Args {
        Args {
            names: names.iter().map(|s| s.to_string()).collect(),
            seed: None,
            explain,
            verbose: false,
        }
    }

    fn output(args: &Args, seed: u64) -> Result<String> {
        let mut out = Vec::new();
        run(args, Greeter::new(pick::seeded(seed)), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_single_name_prints_one_line() {
        let s = output(&args(&["Gladys"], false), 3).unwrap();
        assert_eq!(s.lines().count(), 1);
        assert!(Template::matching(s.trim_end()).is_some());
    }

    #[test]
    fn test_many_names_sorted_table() {
        let s = output(&args(&["Bob", "Alice", "Bob"], false), 3).unwrap();
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Alice: "));
        assert!(lines[1].starts_with("Bob: "));
    }

    #[test]
    fn test_explain_appends_template() {
        let s = output(&args(&["Gladys"], true), 3).unwrap();
        let tagged = Template::ALL
            .iter()
            .any(|t| s.trim_end().ends_with(&format!("[{t}]")));
        assert!(tagged, "{s}");
    }

    #[test]
    fn test_same_seed_same_output() {
        let a = args(&["Alice", "Bob", "Carol"], false);
        assert_eq!(output(&a, 99).unwrap(), output(&a, 99).unwrap());
    }

    #[test]
    fn test_flags_after_names_are_parsed() {
        let args = Args::from_args(&["greet"], &["Alice", "--explain", "-v"]).unwrap();
        assert_eq!(args.names, vec!["Alice".to_string()]);
        assert!(args.explain);
        assert!(args.verbose);

        let s = output(&args, 3).unwrap();
        assert_eq!(s.lines().count(), 1);
        assert!(!s.contains("--explain"));
    }

    #[test]
    fn test_seed_before_names_is_parsed() {
        let args = Args::from_args(&["greet"], &["--seed", "7", "Alice", "Bob"]).unwrap();
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.names, vec!["Alice".to_string(), "Bob".to_string()]);
        assert!(!args.explain);
    }

    #[test]
    fn test_double_dash_allows_dashed_names() {
        let args = Args::from_args(&["greet"], &["--", "-x-"]).unwrap();
        assert_eq!(args.names, vec!["-x-".to_string()]);
    }

    #[test]
    fn test_no_names_is_an_error() {
        let args = Args::from_args(&["greet"], &["--explain"]).unwrap();
        let mut out = Vec::new();
        let err = run(&args, Greeter::new(pick::seeded(1)), &mut out).unwrap_err();
        assert!(out.is_empty());
        assert_eq!(err.to_string(), "greet: at least one name is required");
    }

    #[test]
    fn test_empty_name_prints_nothing() {
        let mut out = Vec::new();
        let err = run(
            &args(&["Alice", ""], false),
            Greeter::new(pick::seeded(1)),
            &mut out,
        )
        .unwrap_err();
        assert!(out.is_empty());
        assert_eq!(err.root_cause().to_string(), "empty name");
    }
}

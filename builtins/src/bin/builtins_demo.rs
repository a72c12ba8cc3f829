//! Built-ins demo: standard library vs. reimplementation, side by side
//!
//! Run with: cargo run --bin builtins-demo -- --section all

use std::fmt::Debug;

use anyhow::{Context, Result};
use builtins::array;
use builtins::object::{self, Record};
use builtins::range;
use builtins::BuiltinsError;
use builtins_common::{Chain, list};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const ARRAY: [usize; 4] = [1, 2, 3, 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Section {
    All,
    Array,
    Object,
    Range,
    Chain,
}

#[derive(Debug, Parser)]
#[command(
    name = "builtins-demo",
    about = "Compare standard collection operations with their reimplementations"
)]
struct DemoArgs {
    /// Which group of demonstrations to run
    #[arg(long, value_enum, default_value_t = Section::All)]
    section: Section,

    /// Log filter directive, e.g. `debug` or `builtins=trace`
    #[arg(long, env = "BUILTINS_LOG", default_value = "warn")]
    log_level: String,
}

impl DemoArgs {
    fn wants(&self, section: Section) -> bool {
        self.section == Section::All || self.section == section
    }
}

fn main() -> Result<()> {
    let args = DemoArgs::parse();
    init_tracing(&args.log_level)?;
    info!(section = ?args.section, "running demonstrations");

    println!("=== Built-ins: standard library vs. reimplementation ===");

    if args.wants(Section::Array) {
        demo_array();
    }
    if args.wants(Section::Object) {
        demo_object();
    }
    if args.wants(Section::Range) {
        demo_range().context("range demonstration failed")?;
    }
    if args.wants(Section::Chain) {
        demo_chain().context("chain demonstration failed")?;
    }

    Ok(())
}

fn init_tracing(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("invalid log filter: {directive}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
    Ok(())
}

fn heading(title: &str) {
    println!("\n{title}");
    println!("{}", "=".repeat(60));
}

fn compare<T: Debug + PartialEq>(label: &str, native: T, custom: T) {
    let matched = native == custom;
    println!("{label}");
    println!("  native: {native:?}");
    println!("  custom: {custom:?}");
    println!("  match:  {matched}");
    debug!(label, matched, "compared results");
}

fn demo_array() {
    heading(&format!("Array utilities on {ARRAY:?}"));

    // forEach: print value + length + index
    let mut native = Vec::new();
    ARRAY
        .iter()
        .enumerate()
        .for_each(|(index, x)| native.push(x + ARRAY.len() + index));
    let mut custom = Vec::new();
    array::for_each(&ARRAY, |x, index, items| custom.push(x + items.len() + index));
    compare("for_each (x + len + index)", native, custom);

    compare(
        "map (x * 2)",
        ARRAY.iter().map(|x| x * 2).collect::<Vec<_>>(),
        array::map(&ARRAY, |x, _, _| x * 2),
    );
    compare(
        "filter (even)",
        ARRAY.iter().copied().filter(|x| x % 2 == 0).collect::<Vec<_>>(),
        array::filter(&ARRAY, |x, _, _| x % 2 == 0),
    );
    compare(
        "some (> 3)",
        ARRAY.iter().any(|x| *x > 3),
        array::some(&ARRAY, |x, _, _| *x > 3),
    );
    compare(
        "every (> 0)",
        ARRAY.iter().all(|x| *x > 0),
        array::every(&ARRAY, |x, _, _| *x > 0),
    );
    compare(
        "find (> 2)",
        ARRAY.iter().find(|x| **x > 2),
        array::find(&ARRAY, |x, _, _| *x > 2),
    );
    compare(
        "includes (3)",
        ARRAY.contains(&3),
        array::includes(&ARRAY, &3),
    );
    compare(
        "index_of (4)",
        ARRAY.iter().position(|x| *x == 4),
        array::index_of(&ARRAY, &4),
    );
    compare(
        "reduce (sum from 0)",
        ARRAY.iter().sum::<usize>(),
        array::reduce(&ARRAY, |acc, x, _, _| acc + x, 0usize),
    );
    compare(
        "reduce without initial value (product)",
        ARRAY.iter().copied().reduce(|acc, x| acc * x),
        array::reduce_first(&ARRAY, |acc, x, _, _| acc * x).ok(),
    );
    compare(
        "reduce without initial value on []",
        None::<usize>,
        array::reduce_first::<usize, _>(&[], |acc, x, _, _| acc + x).ok(),
    );
    compare(
        "reverse",
        ARRAY.iter().rev().copied().collect::<Vec<_>>(),
        array::reverse(&ARRAY),
    );
}

fn demo_object() {
    let pairs = [("name", "Ada"), ("language", "Rust"), ("born", "1815")];
    heading(&format!("Object helpers on {pairs:?}"));

    let native: std::collections::BTreeMap<String, &str> = pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), *value))
        .collect();
    let record: Record<&str> = object::from_entries(pairs);

    compare(
        "keys",
        native.keys().cloned().collect::<Vec<_>>(),
        object::keys(&record),
    );
    compare(
        "values",
        native.values().copied().collect::<Vec<_>>(),
        object::values(&record),
    );

    let updated = record.insert("language", "Scheme");
    println!("insert keeps the original record");
    println!("  original: {:?}", record.get("language"));
    println!("  updated:  {:?}", updated.get("language"));
}

fn demo_range() -> Result<(), BuiltinsError> {
    heading("Range and sum");

    compare(
        "range(1, 10)",
        (1..=10).collect::<Vec<i64>>(),
        range::range(1, 10),
    );
    compare(
        "range_step(5, 2, -1)",
        (2..=5).rev().collect::<Vec<i64>>(),
        range::range_step(5, 2, -1)?,
    );
    compare(
        "sum(range(1, 10))",
        (1..=10).sum::<i64>(),
        range::sum(&range::range(1, 10)),
    );
    println!("range_step(1, 5, 0)");
    println!("  custom: {:?}", range::range_step(1, 5, 0));
    Ok(())
}

fn demo_chain() -> Result<(), BuiltinsError> {
    heading("Persistent chain");

    let chain = list::from_sequence(&[10, 20, 30]);
    println!("from_sequence([10, 20, 30]) = {chain}");
    compare(
        "to_sequence round trip",
        vec![10, 20, 30],
        list::to_sequence(&chain),
    );

    let built = list::prepend(10, &list::prepend(20, &Chain::new()));
    compare(
        "prepend(10, prepend(20, empty))",
        list::from_sequence(&[10, 20]),
        built,
    );

    let extended = list::prepend(0, &chain);
    println!("prepend(0, chain) = {extended}, chain is still {chain}");
    println!(
        "  shares tail: {}",
        extended.rest().is_some_and(|rest| rest.ptr_eq(&chain))
    );

    compare("nth(chain, 1)", 20, *chain.nth(1)?);
    println!("nth(chain, 5)");
    match list::nth(&chain, 5) {
        Ok(value) => println!("  value: {value}"),
        Err(err) => println!("  error: {err}"),
    }

    let from_range = range::range_chain(1, 9, 2)?;
    println!("range_chain(1, 9, 2) = {from_range}, last = {}", from_range.nth(4)?);
    Ok(())
}

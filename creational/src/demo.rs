//! Walkthroughs behind the demo binaries.
//!
//! Each function writes its demonstration to a caller-supplied writer so
//! the binaries print to stdout and the tests capture into a buffer.

use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{ensure, Result};
use clap::ValueEnum;

use cp_builder::{Builder, ConcreteBuilder, Director};
use cp_prototype::{PrototypeFactory, PrototypeKind};
use cp_singleton::probe::probe_holder;
use cp_singleton::{EagerHolder, InstanceHolder, LockedHolder, RacyHolder, Singleton};

/// Printed when both accessor calls returned the same instance.
pub const SINGLETON_WORKS: &str = "Singleton works, both variables contain the same instance.";

/// Printed when the accessor returned two different instances.
pub const SINGLETON_FAILED: &str = "Singleton failed, variables contain different instances.";

// ─── Singleton ───────────────────────────────────────────────────────────────

/// Call the accessor twice and report whether the results are identical.
pub fn singleton_verdict() -> &'static str {
    let s1 = Singleton::get_instance();
    let s2 = Singleton::get_instance();
    s1.some_business_logic();

    if std::ptr::eq(s1, s2) {
        SINGLETON_WORKS
    } else {
        SINGLETON_FAILED
    }
}

/// Holder strategy exercised by the probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Atomic initialise-once.
    Once,
    /// Mutex across check-and-create.
    Locked,
    /// Built before any caller runs.
    Eager,
    /// Unsynchronised check-then-act (defective).
    Racy,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Once => "once",
            Strategy::Locked => "locked",
            Strategy::Eager => "eager",
            Strategy::Racy => "racy",
        };
        f.write_str(name)
    }
}

/// Aggregate of all trials run for one strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeSummary {
    /// Strategy probed.
    pub strategy: Strategy,
    /// Number of trials, each on a fresh holder.
    pub trials: usize,
    /// Concurrent callers per trial.
    pub callers: usize,
    /// Trials in which more than one instance was observed.
    pub defective_trials: usize,
    /// Largest number of distinct instances seen in a single trial.
    pub max_distinct: usize,
    /// Total constructor runs across all trials.
    pub constructions: usize,
}

impl ProbeSummary {
    /// `true` when every trial observed exactly one instance.
    pub fn passed(&self) -> bool {
        self.defective_trials == 0
    }
}

impl fmt::Display for ProbeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<6} trials={} callers={} constructions={} defective_trials={} max_distinct={} => {}",
            self.strategy,
            self.trials,
            self.callers,
            self.constructions,
            self.defective_trials,
            self.max_distinct,
            if self.passed() { "ok" } else { "DEFECT" }
        )
    }
}

static PROBE_BUILT: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
struct ProbeTarget {
    _serial: usize,
}

fn build_probe_target() -> ProbeTarget {
    ProbeTarget {
        _serial: PROBE_BUILT.fetch_add(1, Ordering::SeqCst),
    }
}

/// Run `trials` probes of `callers` threads against fresh holders of the
/// given strategy.
///
/// Zero trials is rejected: a summary without a single run proves nothing.
pub fn run_probe(strategy: Strategy, callers: usize, trials: usize) -> Result<ProbeSummary> {
    ensure!(trials > 0, "at least one trial is required");
    let start = PROBE_BUILT.load(Ordering::SeqCst);
    let mut summary = ProbeSummary {
        strategy,
        trials,
        callers,
        defective_trials: 0,
        max_distinct: 0,
        constructions: 0,
    };

    for trial in 0..trials {
        let report = match strategy {
            Strategy::Once => probe_holder(&InstanceHolder::new(build_probe_target), callers)?,
            Strategy::Locked => probe_holder(&LockedHolder::new(build_probe_target), callers)?,
            Strategy::Eager => probe_holder(&EagerHolder::new(build_probe_target()), callers)?,
            Strategy::Racy => probe_holder(&RacyHolder::new(build_probe_target), callers)?,
        };
        if !report.is_singleton() {
            tracing::warn!(%strategy, trial, distinct = report.distinct_instances, "duplicate instances observed");
            summary.defective_trials += 1;
        }
        summary.max_distinct = summary.max_distinct.max(report.distinct_instances);
    }

    summary.constructions = PROBE_BUILT.load(Ordering::SeqCst) - start;
    Ok(summary)
}

// ─── Builder ─────────────────────────────────────────────────────────────────

/// Build a minimal, a full and a custom product and list their parts.
pub fn builder_walkthrough(out: &mut impl Write) -> Result<()> {
    let director = Director::new();
    let mut builder = ConcreteBuilder::new();

    writeln!(out, "Standard basic product:")?;
    director.build_minimal_viable_product(&mut builder);
    writeln!(out, "{}\n", builder.product())?;

    writeln!(out, "Standard full featured product:")?;
    director.build_full_featured_product(&mut builder);
    writeln!(out, "{}\n", builder.product())?;

    // the director is optional
    writeln!(out, "Custom product:")?;
    builder.produce_part_a();
    builder.produce_part_c();
    writeln!(out, "{}\n", builder.product())?;
    Ok(())
}

// ─── Prototype ───────────────────────────────────────────────────────────────

/// Clone both registered prototypes and call their method.
pub fn prototype_walkthrough(factory: &PrototypeFactory, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Let's create a Prototype 1")?;
    let mut prototype = factory.create(PrototypeKind::Prototype1)?;
    writeln!(out, "{}", prototype.method(90.0))?;

    writeln!(out)?;

    writeln!(out, "Let's create a Prototype 2")?;
    let mut prototype = factory.create(PrototypeKind::Prototype2)?;
    writeln!(out, "{}", prototype.method(10.0))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singleton_verdict_reports_same_instance() {
        assert_eq!(singleton_verdict(), SINGLETON_WORKS);
    }

    #[test]
    fn race_free_strategies_pass_the_probe() {
        for strategy in [Strategy::Once, Strategy::Locked, Strategy::Eager] {
            let summary = run_probe(strategy, 16, 5).unwrap();
            assert!(summary.passed(), "{summary}");
            assert_eq!(summary.max_distinct, 1);
        }
    }

    #[test]
    fn zero_trials_is_an_error() {
        let err = run_probe(Strategy::Once, 4, 0).unwrap_err();
        assert_eq!(err.to_string(), "at least one trial is required");
    }

    #[test]
    fn summary_line_names_the_outcome() {
        let summary = ProbeSummary {
            strategy: Strategy::Racy,
            trials: 3,
            callers: 100,
            defective_trials: 1,
            max_distinct: 2,
            constructions: 4,
        };
        let line = summary.to_string();
        assert!(line.starts_with("racy"));
        assert!(line.ends_with("=> DEFECT"));
    }

    #[test]
    fn builder_walkthrough_lists_three_products() {
        let mut out = Vec::new();
        builder_walkthrough(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Standard basic product:\nProduct parts: PartA1\n"));
        assert!(text.contains("Product parts: PartA1, PartB1, PartC1"));
        assert!(text.contains("Custom product:\nProduct parts: PartA1, PartC1\n"));
    }

    #[test]
    fn prototype_walkthrough_fails_on_missing_kind() {
        let mut factory = PrototypeFactory::new();
        factory.unregister(PrototypeKind::Prototype2);
        let mut out = Vec::new();
        let err = prototype_walkthrough(&factory, &mut out).unwrap_err();
        assert!(err.to_string().contains("PROTOTYPE_2"));
    }
}

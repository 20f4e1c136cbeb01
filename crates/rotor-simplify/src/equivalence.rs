//! Equivalence checking by equality saturation.
//!
//! Both expressions are added to one e-graph and the rewrite rules are run
//! until their classes merge or a limit is hit. A merge is a proof of
//! equivalence under the rules; hitting a limit proves nothing.

use std::time::Duration;

use egg::{AstSize, Extractor, Rewrite, Runner};
use tracing::debug;

use rotor_core::{Symbol, SymbolError};

use crate::language::{from_rec_expr, to_rec_expr, RotorLang};
use crate::rules;

/// Limits for one saturation run.
#[derive(Clone, Debug)]
pub struct EquivalenceConfig {
    /// Maximum number of iterations.
    pub iter_limit: usize,
    /// Maximum number of nodes in the e-graph.
    pub node_limit: usize,
    /// Time limit in seconds.
    pub time_limit_secs: u64,
}

impl Default for EquivalenceConfig {
    fn default() -> Self {
        Self {
            iter_limit: 30,
            node_limit: 10_000,
            time_limit_secs: 5,
        }
    }
}

/// An equality-saturation engine over [`RotorLang`].
#[derive(Clone)]
pub struct EqualitySaturation {
    config: EquivalenceConfig,
    rules: Vec<Rewrite<RotorLang, ()>>,
}

impl Default for EqualitySaturation {
    fn default() -> Self {
        Self::new()
    }
}

impl EqualitySaturation {
    /// Creates an engine with the default rules and limits.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EquivalenceConfig::default())
    }

    /// Creates an engine with custom limits.
    #[must_use]
    pub fn with_config(config: EquivalenceConfig) -> Self {
        Self {
            config,
            rules: rules::all_rules(),
        }
    }

    /// Adds rules to the existing set.
    pub fn add_rules(&mut self, rules: impl IntoIterator<Item = Rewrite<RotorLang, ()>>) {
        self.rules.extend(rules);
    }

    fn runner(&self) -> Runner<RotorLang, ()> {
        Runner::default()
            .with_iter_limit(self.config.iter_limit)
            .with_node_limit(self.config.node_limit)
            .with_time_limit(Duration::from_secs(self.config.time_limit_secs))
    }

    /// Returns true if the rules prove `lhs` and `rhs` equal.
    ///
    /// A `false` answer means no proof was found within the limits, not that
    /// the expressions differ.
    #[must_use]
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn equivalent(&self, lhs: &Symbol, rhs: &Symbol) -> bool {
        let runner = self
            .runner()
            .with_expr(&to_rec_expr(lhs))
            .with_expr(&to_rec_expr(rhs))
            .with_hook(|runner| {
                if runner.egraph.find(runner.roots[0]) == runner.egraph.find(runner.roots[1]) {
                    Err("proved equivalent".to_string())
                } else {
                    Ok(())
                }
            })
            .run(&self.rules);

        let proved = runner.egraph.find(runner.roots[0]) == runner.egraph.find(runner.roots[1]);
        debug!(
            proved,
            iterations = runner.iterations.len(),
            nodes = runner.egraph.total_number_of_nodes(),
            stop_reason = ?runner.stop_reason,
            "saturation finished"
        );
        proved
    }

    /// Returns the smallest expression the rules find equal to `expr`.
    ///
    /// # Errors
    ///
    /// Returns an error if the extracted expression divides by a literal
    /// zero.
    pub fn smallest(&self, expr: &Symbol) -> Result<Symbol, SymbolError> {
        let runner = self.runner().with_expr(&to_rec_expr(expr)).run(&self.rules);
        let extractor = Extractor::new(&runner.egraph, AstSize);
        let (cost, best) = extractor.find_best(runner.roots[0]);
        debug!(cost, stop_reason = ?runner.stop_reason, "extracted smallest form");
        from_rec_expr(&best)
    }
}

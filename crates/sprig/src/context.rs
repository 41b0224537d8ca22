//! Evaluation context configuration

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::form::Form;

/// Configuration and state for evaluation.
///
/// This is passed through all evaluation calls and controls
/// behavior like nesting limits, interruption and tracing.
#[derive(Debug, Clone)]
pub struct EvalContext {
    /// Maximum evaluation depth (stack overflow protection)
    pub max_call_depth: usize,

    /// Interrupt flag - set to true to abort evaluation
    pub interrupt: Arc<AtomicBool>,

    /// Whether to trace evaluation to stderr (for debugging)
    pub trace: bool,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            max_call_depth: 1000,
            interrupt: Arc::new(AtomicBool::new(false)),
            trace: false,
        }
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom depth limit.
    pub fn with_max_call_depth(max_depth: usize) -> Self {
        Self {
            max_call_depth: max_depth,
            ..Default::default()
        }
    }

    /// Create a context that traces every evaluation step.
    pub fn tracing() -> Self {
        Self {
            trace: true,
            ..Default::default()
        }
    }

    /// Check if evaluation has been interrupted.
    pub fn is_interrupted(&self) -> bool {
        self.interrupt.load(Ordering::Relaxed)
    }

    /// Request interruption of evaluation.
    pub fn interrupt(&self) {
        self.interrupt.store(true, Ordering::Relaxed);
    }

    /// Reset the interrupt flag.
    pub fn reset_interrupt(&self) {
        self.interrupt.store(false, Ordering::Relaxed);
    }

    /// Report that `form` is about to be evaluated at `depth`.
    pub(crate) fn trace_enter(&self, depth: usize, form: &Form) {
        if self.trace {
            eprintln!("{:indent$}eval: {:?}", "", form, indent = depth * 2);
        }
    }

    /// Report the result of evaluating a form at `depth`.
    pub(crate) fn trace_exit(&self, depth: usize, result: &Form) {
        if self.trace {
            eprintln!("{:indent$}  => {:?}", "", result, indent = depth * 2);
        }
    }
}

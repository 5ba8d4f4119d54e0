//! Probe table and response body rendering.
//!
//! The body is a single line, no trailing newline:
//!
//! ```text
//! BUILD_VALUE=<v1>, TEMPLATE_VALUE=<v2>, SECRET_VALUE=<v3>, HELM_VALUE=<v4>
//! ```
//!
//! `SECRET_VALUE` is printed under a different label than the variable it is read
//! from (`TEST_SECRET`).

use std::fmt;

use crate::env::EnvSource;

/// One rendered field: the label printed in the body and the variable it reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeVar {
    pub label: &'static str,
    pub env_key: &'static str,
}

/// Rendered fields, in body order.
pub const PROBE_VARS: [ProbeVar; 4] = [
    ProbeVar {
        label: "BUILD_VALUE",
        env_key: "BUILD_VALUE",
    },
    ProbeVar {
        label: "TEMPLATE_VALUE",
        env_key: "TEMPLATE_VALUE",
    },
    ProbeVar {
        label: "SECRET_VALUE",
        env_key: "TEST_SECRET",
    },
    ProbeVar {
        label: "HELM_VALUE",
        env_key: "HELM_VALUE",
    },
];

/// Snapshot of the probe variables. Unset variables are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeValues {
    values: [String; 4],
}

impl ProbeValues {
    /// Read every probe variable from `source`.
    pub fn capture(source: &dyn EnvSource) -> Self {
        Self {
            values: PROBE_VARS.map(|v| source.var(v.env_key).unwrap_or_default()),
        }
    }

    /// Response body.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ProbeValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (var, value)) in PROBE_VARS.iter().zip(&self.values).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", var.label, value)?;
        }
        Ok(())
    }
}

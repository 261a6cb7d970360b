//! Kernel configuration

/// Settings that tune how strictly payloads are validated and how
/// unexpected failures are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelConfig {
    /// Require `"jsonrpc"` to equal `"2.0"` instead of only being present
    pub strict_version: bool,
    /// Carry the original message of wrapped internal failures to the caller
    pub expose_internal_errors: bool,
    /// Convert panics in middleware, resolution or handlers into internal-error responses
    pub catch_panics: bool,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            strict_version: false,
            expose_internal_errors: true,
            catch_panics: true,
        }
    }
}

impl KernelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict_version(mut self, strict: bool) -> Self {
        self.strict_version = strict;
        self
    }

    pub fn expose_internal_errors(mut self, expose: bool) -> Self {
        self.expose_internal_errors = expose;
        self
    }

    pub fn catch_panics(mut self, catch: bool) -> Self {
        self.catch_panics = catch;
        self
    }
}

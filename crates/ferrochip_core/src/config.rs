use typed_builder::TypedBuilder;

/// Interpreter options.
///
/// ```
/// use ferrochip_core::VmConfig;
///
/// let config = VmConfig::builder().checked_stack(true).build();
/// assert!(config.checked_stack);
/// assert_eq!(config.cycles_per_frame, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, TypedBuilder)]
pub struct VmConfig {
    /// Report call-stack overflow and underflow as errors.
    ///
    /// Off by default: an unchecked call beyond 16 frames overwrites the
    /// oldest return address, and a return on an empty stack reads whatever
    /// slot the wrapped stack pointer lands on.
    #[builder(default = false)]
    pub checked_stack: bool,
    /// Instructions executed per presented frame by [`crate::EmulatorApp`].
    #[builder(default = 1)]
    pub cycles_per_frame: u32,
}

impl Default for VmConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

// crates/usecase/src/options.rs
use derive_builder::Builder;
use wildsweep_ports::progress::WalkStrategy;

#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct RunOptions {
    #[builder(default)]
    pub strategy: WalkStrategy,
    /// Abort on the first file that cannot be removed instead of reporting and continuing.
    #[builder(default)]
    pub strict: bool,
}

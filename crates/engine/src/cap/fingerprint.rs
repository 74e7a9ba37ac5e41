/// Detectable engine traits, one probe method per trait.
///
/// Vendor adapters override the traits their engine exhibits; everything
/// defaults to `false`. The bootstrap's classification cascade consults these
/// instead of inspecting concrete type names, and its precedence rules decide
/// when one trait outranks another.
pub trait EngineFingerprint {
    /// The engine ships bundled with the language runtime.
    fn runtime_bundled(&self) -> bool {
        false
    }

    /// A vendor-optimized engine, identifiable only once a context exists.
    fn vendor_optimized(&self) -> bool {
        false
    }

    /// The explicitly configured alternate engine.
    fn alternate(&self) -> bool {
        false
    }
}

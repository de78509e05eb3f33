//! Dimension marker trait.

/// Marker trait for **dimensions** (storage, length, mass, time, velocity).
///
/// A *dimension* is the category that distinguishes a byte from a metre. Each dimension is an empty enum, and every
/// unit names exactly one:
///
/// ```rust
/// use unitconv_core::Dimension;
/// #[derive(Debug)]
/// pub enum Volume {}
/// impl Dimension for Volume {
///     const NAME: &'static str = "volume";
/// }
/// ```
pub trait Dimension {
    /// Lower-case dimension name, used in log lines and registry metadata.
    const NAME: &'static str;
}

//! Adapter: fit an existing type to the interface its callers expect.

/// The interface today's call sites are written against.
pub trait Printer {
    fn print(&self, text: &str) -> String;
}

/// The legacy device. Its API is fixed and does not match [`Printer`].
pub struct LegacyPrinter;

impl LegacyPrinter {
    pub fn print_text(&self, text: &str) -> String {
        format!("Printing from LegacyPrinter: {text}")
    }
}

/// Owns a legacy device and exposes it through [`Printer`].
pub struct PrinterAdapter {
    legacy: LegacyPrinter,
}

impl PrinterAdapter {
    pub fn new(legacy: LegacyPrinter) -> Self { Self { legacy } }
}

impl Printer for PrinterAdapter {
    fn print(&self, text: &str) -> String { self.legacy.print_text(text) }
}

//! Excel I/O: one read of the artist sheet, one write of the two-view workbook.

mod exporter;
mod importer;

pub use exporter::WorkbookExporter;
pub use importer::SheetImporter;

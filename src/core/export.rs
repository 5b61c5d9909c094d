use crate::core::preview::Preview;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

pub const DEFAULT_EXPORT_NAME: &str = "عرض-سعر";

/// File name for an exported quotation, derived from the quote number.
pub fn export_file_name(quote_no: &str) -> String {
    let base: String = quote_no
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect();

    let base = base.trim_matches(|c: char| c == '.' || c.is_whitespace());
    if base.is_empty() {
        format!("{}.txt", DEFAULT_EXPORT_NAME)
    } else {
        format!("{}.txt", base)
    }
}

/// Writes the printable document through the storage port and returns where
/// it landed.
pub async fn export_document<S: Storage>(
    storage: &S,
    quote_no: &str,
    preview: &Preview,
) -> Result<String> {
    let file_name = export_file_name(quote_no);
    let document = preview.to_document();

    tracing::debug!("Exporting quotation ({} bytes) as {}", document.len(), file_name);
    let location = storage.write_file(&file_name, document.as_bytes()).await?;
    tracing::info!("Quotation exported to {}", location);

    Ok(location)
}
